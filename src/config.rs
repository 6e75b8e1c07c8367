// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Service configuration

use std::env;
use std::time::Duration;

/// Default cache TTL in whole minutes
pub const DEFAULT_CACHE_TTL_MINS: i64 = 15;
/// Default post-navigation settle delay
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1000;
/// Default navigation timeout
pub const DEFAULT_NAVIGATION_TIMEOUT_MS: u64 = 30_000;
/// Default HTTP listen port
pub const DEFAULT_PORT: u16 = 3001;

/// Audit service configuration
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Cache TTL in whole minutes
    pub cache_ttl_mins: i64,
    /// Fixed delay after page load, lets deferred/async resource
    /// injection finish before the DOM is inspected
    pub settle_delay: Duration,
    /// Upper bound on a single page navigation
    pub navigation_timeout: Duration,
    /// HTTP listen port
    pub port: u16,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            cache_ttl_mins: DEFAULT_CACHE_TTL_MINS,
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            navigation_timeout: Duration::from_millis(DEFAULT_NAVIGATION_TIMEOUT_MS),
            port: DEFAULT_PORT,
        }
    }
}

impl AuditConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from the environment
    ///
    /// Recognized variables: `AUDIT_CACHE_TIME_IN_MINS`,
    /// `WAIT_AFTER_PAGE_LOAD_IN_MS`, `NAVIGATION_TIMEOUT_IN_MS`, `PORT`.
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            cache_ttl_mins: env_parse("AUDIT_CACHE_TIME_IN_MINS", DEFAULT_CACHE_TTL_MINS),
            settle_delay: Duration::from_millis(env_parse(
                "WAIT_AFTER_PAGE_LOAD_IN_MS",
                DEFAULT_SETTLE_DELAY_MS,
            )),
            navigation_timeout: Duration::from_millis(env_parse(
                "NAVIGATION_TIMEOUT_IN_MS",
                DEFAULT_NAVIGATION_TIMEOUT_MS,
            )),
            port: env_parse("PORT", DEFAULT_PORT),
        }
    }

    /// Set cache TTL in minutes
    pub fn cache_ttl_mins(mut self, mins: i64) -> Self {
        self.cache_ttl_mins = mins;
        self
    }

    /// Set the post-load settle delay
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Set the navigation timeout
    pub fn navigation_timeout(mut self, timeout: Duration) -> Self {
        self.navigation_timeout = timeout;
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuditConfig::default();

        assert_eq!(config.cache_ttl_mins, 15);
        assert_eq!(config.settle_delay, Duration::from_millis(1000));
        assert_eq!(config.navigation_timeout, Duration::from_millis(30_000));
        assert_eq!(config.port, 3001);
    }

    #[test]
    fn test_builder() {
        let config = AuditConfig::new()
            .cache_ttl_mins(5)
            .settle_delay(Duration::from_millis(250))
            .port(8080);

        assert_eq!(config.cache_ttl_mins, 5);
        assert_eq!(config.settle_delay, Duration::from_millis(250));
        assert_eq!(config.port, 8080);
    }
}
