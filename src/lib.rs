// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Remora - SRI Audit Service
//!
//! Audits a web page's third-party resources for missing Subresource
//! Integrity attributes. The page is rendered in a real headless
//! Chromium; the rendered DOM is inspected for cross-origin `<script>`
//! and `<link>` elements lacking an `integrity` attribute, which could
//! be tampered with undetected.
//!
//! ## Features
//!
//! - One shared, lazily-initialized browser session per process
//! - Root-domain classification of first- vs third-party resources
//!   via the public suffix list
//! - Per-host result cache with whole-minute TTL and explicit
//!   invalidation through the `clear` query parameter
//! - Configurable post-load settle delay and navigation timeout
//! - Single `GET /sri-audit` endpoint; every response is HTTP 200,
//!   failures carry an `error` field
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use remora::{AuditCache, AuditConfig, Auditor, BrowserSession, CdpLauncher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Arc::new(BrowserSession::new(Box::new(CdpLauncher::new())));
//!     session.init().await?;
//!
//!     let auditor = Auditor::new(
//!         session,
//!         Arc::new(AuditCache::new()),
//!         AuditConfig::from_env(),
//!     );
//!
//!     let result = auditor.audit("https://example.com", false).await?;
//!     for script in &result.scripts {
//!         println!("missing integrity: {}", script.url);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod error;
pub mod server;
pub mod session;

// Re-exports for convenience

// Audit core
pub use audit::{is_fresh, AuditCache, AuditResult, Auditor, ResourceDescriptor};

// Configuration
pub use config::AuditConfig;

// Engine seam
pub use engine::{BrowserHandle, BrowserLauncher, CdpLauncher, PageHandle, RawResource, ResourceKind};

// Errors
pub use error::{Error, Result};

// HTTP surface
pub use server::{build_router, AppState};

// Session
pub use session::{BrowserSession, SessionState};

/// Remora version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
