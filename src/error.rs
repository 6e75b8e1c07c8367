// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the Remora audit service
//!
//! Request-level errors (invalid host, unparsable domain, navigation
//! failures) are rendered as JSON error bodies at the HTTP boundary;
//! `Launch` is fatal at startup.

use thiserror::Error;

/// Result type alias for Remora operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Remora audit service
#[derive(Error, Debug)]
pub enum Error {
    /// Browser session used before it reached the ready state
    #[error("browser not yet initialized")]
    NotReady,

    /// Host missing an accepted scheme prefix
    #[error("no protocol on host: {host}")]
    InvalidHost { host: String },

    /// Host could not be split into a registrable domain and suffix
    #[error("cannot resolve root domain for host: {host}")]
    DomainParse { host: String },

    /// Page navigation failed
    #[error("navigation failed for {url}: {reason}")]
    Navigation { url: String, reason: String },

    /// Page navigation exceeded the configured timeout
    #[error("navigation to {url} timed out after {duration_ms}ms")]
    NavigationTimeout { url: String, duration_ms: u64 },

    /// Browser process failed to start
    #[error("browser launch failed: {0}")]
    Launch(String),

    /// CDP protocol error
    #[error("CDP error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid-host error
    pub fn invalid_host(host: impl Into<String>) -> Self {
        Error::InvalidHost { host: host.into() }
    }

    /// Create a domain-parse error
    pub fn domain_parse(host: impl Into<String>) -> Self {
        Error::DomainParse { host: host.into() }
    }

    /// Create a navigation error
    pub fn navigation(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Navigation {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a navigation-timeout error
    pub fn navigation_timeout(url: impl Into<String>, duration_ms: u64) -> Self {
        Error::NavigationTimeout {
            url: url.into(),
            duration_ms,
        }
    }

    /// Create a launch error
    pub fn launch(reason: impl Into<String>) -> Self {
        Error::Launch(reason.into())
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::NavigationTimeout { .. })
    }

    /// Check if this error is fatal for the whole process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Launch(_))
    }

    /// Get the URL this error relates to, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Navigation { url, .. } => Some(url),
            Error::NavigationTimeout { url, .. } => Some(url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_timeout() {
        let err = Error::navigation_timeout("https://example.com", 30_000);

        assert!(err.is_timeout());
        assert!(!err.is_fatal());
        assert_eq!(err.url(), Some("https://example.com"));
    }

    #[test]
    fn test_launch_is_fatal() {
        let err = Error::launch("chromium binary not found");

        assert!(err.is_fatal());
        assert!(err.url().is_none());
    }

    #[test]
    fn test_invalid_host_message() {
        let err = Error::invalid_host("example.com");

        assert_eq!(err.to_string(), "no protocol on host: example.com");
    }
}
