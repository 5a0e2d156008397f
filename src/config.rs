use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const TIMEOUT_ENV: &str = "UKBC_TIMEOUT_SECS";
pub const USER_AGENT_ENV: &str = "UKBC_USER_AGENT";

/// Settings for the single GET a collection run makes.
///
/// There are no retries: a failed request fails the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Total request timeout, connect through body
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

pub fn default_user_agent() -> String {
    format!("uk-bin-collection/{}", env!("CARGO_PKG_VERSION"))
}

impl FetchConfig {
    /// Defaults, overridden by `UKBC_TIMEOUT_SECS` and `UKBC_USER_AGENT` when set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match parse_timeout_secs(&raw) {
                Some(timeout) => config.timeout = timeout,
                None => tracing::warn!("Ignoring invalid {TIMEOUT_ENV}={raw:?}"),
            }
        }

        if let Some(ua) = lookup(USER_AGENT_ENV).filter(|ua| !ua.trim().is_empty()) {
            config.user_agent = ua;
        }

        config
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Whole seconds, must be non-zero
pub fn parse_timeout_secs(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
    }
}
