//! Authentication backends the sign-in flow can talk to.

mod simulated;
mod types;

pub use simulated::SimulatedAuthService;
pub use types::AuthRejection;

use async_trait::async_trait;

/// Trait for the service that checks a set of credentials.
///
/// Implementations must resolve exactly once per call. Every failure,
/// including transport trouble, is reported as an [`AuthRejection`] code.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Returns the name of this backend for logging.
    fn name(&self) -> &'static str;

    /// Check `email` / `password`.
    ///
    /// # Returns
    /// * `Ok(())` - The credentials are accepted
    /// * `Err(AuthRejection)` - Rejected; see the code constants in
    ///   [`crate::ui::signin::guards`]
    async fn request_sign_in(&self, email: &str, password: &str) -> Result<(), AuthRejection>;
}
