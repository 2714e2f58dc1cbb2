//! Intents for the sign-in form.

use crate::ui::mvi::Intent;

/// Events the sign-in machine reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInIntent {
    /// Email field changed.
    EnterEmail { value: String },

    /// Email field lost focus.
    EmailBlur,

    /// Password field changed.
    EnterPassword { value: String },

    /// Password field lost focus.
    PasswordBlur,

    /// Submit control activated (sign in, or retry after a service error).
    Submit,

    /// The authentication service accepted the credentials.
    AuthSucceeded,

    /// The authentication service rejected the request.
    AuthFailed {
        /// 1 = no account, 2 = incorrect password, 3 = service error.
        code: u32,
    },
}

impl Intent for SignInIntent {}

impl SignInIntent {
    /// Outcome events are produced by the authentication call, never by the user.
    pub fn is_auth_outcome(&self) -> bool {
        matches!(self, Self::AuthSucceeded | Self::AuthFailed { .. })
    }
}
