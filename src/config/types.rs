use serde::{Deserialize, Serialize};

/// Upper bound for the simulated service latency.
pub const MAX_LATENCY_MS: u64 = 60_000;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Settings for the simulated authentication service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Delay before the service answers, in milliseconds (default: 1500).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Answer every request with a service error (default: false).
    #[serde(default)]
    pub outage: bool,
    /// Known accounts.
    #[serde(default = "default_accounts")]
    pub accounts: Vec<Account>,
}

/// One email/password pair the service accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    pub password: String,
}

fn default_latency_ms() -> u64 {
    1500
}

fn default_accounts() -> Vec<Account> {
    vec![Account {
        email: "charlie@gmail.com".to_string(),
        password: "Passw0rd!".to_string(),
    }]
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            outage: false,
            accounts: default_accounts(),
        }
    }
}
