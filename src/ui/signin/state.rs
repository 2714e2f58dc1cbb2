//! State for the sign-in form.

use std::fmt;

use serde::Serialize;

use crate::ui::mvi::UiState;

/// Why the email field is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EmailErr {
    /// Failed the local format check.
    BadFormat,
    /// The service has no account for this email.
    NoAccount,
}

/// Why the password field is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PasswordErr {
    /// Shorter than the minimum length.
    TooShort,
    /// Rejected by the service.
    Incorrect,
}

/// State value of the sign-in machine. Exactly one is active.
///
/// Serializes the way hierarchical state values are usually printed:
/// `"idle"`, `{"emailErr":"badFormat"}`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SignInState {
    /// Editing, no error shown. Also the entry state.
    #[default]
    Idle,
    EmailErr(EmailErr),
    PasswordErr(PasswordErr),
    /// Authentication request in flight.
    AwaitingResponse,
    /// The service failed for a reason unrelated to the credentials.
    ServiceErr,
    /// Terminal.
    SignedIn,
}

impl SignInState {
    /// Name of the top-level state.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::EmailErr(_) => "emailErr",
            Self::PasswordErr(_) => "passwordErr",
            Self::AwaitingResponse => "awaitingResponse",
            Self::ServiceErr => "serviceErr",
            Self::SignedIn => "signedIn",
        }
    }

    /// Name of the active sub-state, for compound states.
    pub fn sub_state(&self) -> Option<&'static str> {
        match self {
            Self::EmailErr(EmailErr::BadFormat) => Some("badFormat"),
            Self::EmailErr(EmailErr::NoAccount) => Some("noAccount"),
            Self::PasswordErr(PasswordErr::TooShort) => Some("tooShort"),
            Self::PasswordErr(PasswordErr::Incorrect) => Some("incorrect"),
            _ => None,
        }
    }

    /// Match against a dotted state path.
    ///
    /// `"emailErr"` matches both email errors, `"emailErr.noAccount"` only one.
    pub fn matches(&self, path: &str) -> bool {
        let mut segments = path.split('.');
        if segments.next() != Some(self.name()) {
            return false;
        }
        match (segments.next(), segments.next()) {
            (None, _) => true,
            (Some(child), None) => self.sub_state() == Some(child),
            (Some(_), Some(_)) => false,
        }
    }

    /// The email control is enabled and forwards edits and blurs.
    pub fn accepts_email_input(&self) -> bool {
        matches!(self, Self::Idle | Self::EmailErr(_))
    }

    /// The password control is enabled and forwards edits and blurs.
    pub fn accepts_password_input(&self) -> bool {
        matches!(self, Self::Idle | Self::PasswordErr(_))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::SignedIn)
    }
}

impl fmt::Display for SignInState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub_state() {
            Some(child) => write!(f, "{}.{}", self.name(), child),
            None => f.write_str(self.name()),
        }
    }
}

/// Data carried alongside the state. Never cleared.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SignInContext {
    pub email: String,
    pub password: String,
}

/// What the view reads: the state value plus the context.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SignInSnapshot {
    pub state: SignInState,
    pub context: SignInContext,
}

impl UiState for SignInSnapshot {}

impl SignInSnapshot {
    pub fn new(state: SignInState, context: SignInContext) -> Self {
        Self { state, context }
    }
}
