// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! SRI audit core
//!
//! Root domain resolution, integrity filtering, the per-host result
//! cache, and the orchestrator tying them to the browser session.

mod auditor;
mod cache;
mod domain;
mod filter;

pub use auditor::Auditor;
pub use cache::{is_fresh, AuditCache, AuditResult};
pub use domain::resolve as resolve_root_domain;
pub use filter::{without_integrity, ResourceDescriptor};
