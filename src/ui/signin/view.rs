//! Flags and messages a renderer derives from the sign-in state.
//!
//! Everything here is a function of the state tag alone, so any view
//! (terminal, web, test) shows the same thing for the same state.

use serde::Serialize;

use super::state::{EmailErr, PasswordErr, SignInState};

pub const MSG_EMAIL_BAD_FORMAT: &str = "email format doesn't look right";
pub const MSG_EMAIL_NO_ACCOUNT: &str = "no account linked with this email";
pub const MSG_PASSWORD_TOO_SHORT: &str = "password too short";
pub const MSG_PASSWORD_INCORRECT: &str = "incorrect password";
pub const MSG_SERVICE_ERROR: &str = "problem contacting server";

/// Render-ready view of a sign-in state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub email_disabled: bool,
    pub password_disabled: bool,
    pub submit_disabled: bool,
    pub heading_faded: bool,
    pub loading: bool,
    pub authenticated: bool,
    pub email_error: Option<&'static str>,
    pub password_error: Option<&'static str>,
    pub service_error: Option<&'static str>,
    pub submit_label: &'static str,
}

impl FormView {
    pub fn from_state(state: &SignInState) -> Self {
        let email_err = state.matches("emailErr");
        let password_err = state.matches("passwordErr");
        let awaiting = state.matches("awaitingResponse");
        let service_err = state.matches("serviceErr");

        let email_error = match state {
            SignInState::EmailErr(EmailErr::BadFormat) => Some(MSG_EMAIL_BAD_FORMAT),
            SignInState::EmailErr(EmailErr::NoAccount) => Some(MSG_EMAIL_NO_ACCOUNT),
            _ => None,
        };
        let password_error = match state {
            SignInState::PasswordErr(PasswordErr::TooShort) => Some(MSG_PASSWORD_TOO_SHORT),
            SignInState::PasswordErr(PasswordErr::Incorrect) => Some(MSG_PASSWORD_INCORRECT),
            _ => None,
        };
        let submit_label = if awaiting {
            "loading"
        } else if service_err {
            "retry"
        } else {
            "sign in"
        };

        Self {
            email_disabled: password_err || awaiting || service_err,
            password_disabled: email_err || awaiting || service_err,
            submit_disabled: email_err || password_err || awaiting,
            heading_faded: email_err || password_err || awaiting || service_err,
            loading: awaiting,
            authenticated: state.matches("signedIn"),
            email_error,
            password_error,
            service_error: service_err.then_some(MSG_SERVICE_ERROR),
            submit_label,
        }
    }
}
