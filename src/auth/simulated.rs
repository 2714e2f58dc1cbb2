//! In-process stand-in for the remote authentication service.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::AuthConfig;

use super::types::AuthRejection;
use super::AuthService;

/// Answers from a fixed account list after a configurable delay.
///
/// Unknown email → code 1, wrong password → code 2, outage → code 3.
#[derive(Debug, Clone)]
pub struct SimulatedAuthService {
    accounts: HashMap<String, String>,
    latency: Duration,
    outage: bool,
}

impl SimulatedAuthService {
    pub fn new(latency: Duration) -> Self {
        Self {
            accounts: HashMap::new(),
            latency,
            outage: false,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        let mut service = Self::new(Duration::from_millis(config.latency_ms));
        for account in &config.accounts {
            service = service.with_account(&account.email, &account.password);
        }
        service.with_outage(config.outage)
    }

    /// Register an account. Emails are matched case-insensitively.
    pub fn with_account(mut self, email: &str, password: &str) -> Self {
        self.accounts
            .insert(email.to_lowercase(), password.to_string());
        self
    }

    /// While set, every request fails with a service error.
    pub fn with_outage(mut self, outage: bool) -> Self {
        self.outage = outage;
        self
    }
}

#[async_trait]
impl AuthService for SimulatedAuthService {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn request_sign_in(&self, email: &str, password: &str) -> Result<(), AuthRejection> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.outage {
            tracing::warn!(backend = self.name(), "Auth service unavailable (outage)");
            return Err(AuthRejection::service_error());
        }

        match self.accounts.get(&email.to_lowercase()) {
            None => Err(AuthRejection::no_account()),
            Some(expected) if expected != password => Err(AuthRejection::incorrect_password()),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SimulatedAuthService {
        SimulatedAuthService::new(Duration::ZERO).with_account("Charlie@Gmail.com", "Passw0rd!")
    }

    #[tokio::test]
    async fn accepts_matching_credentials() {
        let result = service()
            .request_sign_in("charlie@gmail.com", "Passw0rd!")
            .await;
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn unknown_email_is_no_account() {
        let result = service().request_sign_in("nobody@gmail.com", "Passw0rd!").await;
        assert_eq!(result, Err(AuthRejection::no_account()));
    }

    #[tokio::test]
    async fn wrong_password_is_incorrect() {
        let result = service().request_sign_in("charlie@gmail.com", "password").await;
        assert_eq!(result, Err(AuthRejection::incorrect_password()));
    }

    #[tokio::test]
    async fn outage_is_service_error() {
        let result = service()
            .with_outage(true)
            .request_sign_in("charlie@gmail.com", "Passw0rd!")
            .await;
        assert_eq!(result, Err(AuthRejection::service_error()));
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_latency() {
        let service = SimulatedAuthService::new(Duration::from_millis(1500))
            .with_account("a@b.com", "abcdef");
        let started = tokio::time::Instant::now();
        service.request_sign_in("a@b.com", "abcdef").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }
}
