//! Side effects requested by sign-in transitions.

/// A form control that can receive focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusField {
    Email,
    Password,
    Submit,
}

impl FocusField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Submit => "submit",
        }
    }
}

/// Work the runtime performs after a transition has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInEffect {
    /// Move keyboard focus to a control.
    Focus(FocusField),

    /// Start the authentication call with the current credentials.
    RequestSignIn { email: String, password: String },

    /// The user is signed in.
    NotifyAuthenticated,
}
