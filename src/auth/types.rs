use thiserror::Error;

use crate::ui::signin::guards::{CODE_INCORRECT_PASSWORD, CODE_NO_ACCOUNT, CODE_SERVICE_ERROR};

/// Failure payload of an authentication call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("authentication rejected with code {code}")]
pub struct AuthRejection {
    pub code: u32,
}

impl AuthRejection {
    pub fn new(code: u32) -> Self {
        Self { code }
    }

    pub fn no_account() -> Self {
        Self::new(CODE_NO_ACCOUNT)
    }

    pub fn incorrect_password() -> Self {
        Self::new(CODE_INCORRECT_PASSWORD)
    }

    pub fn service_error() -> Self {
        Self::new(CODE_SERVICE_ERROR)
    }
}
