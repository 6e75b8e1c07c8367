// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Per-host audit result cache
//!
//! Keyed by the raw host string, exact match. Entries are never expired
//! in the background; staleness is evaluated lazily on the next read
//! for the same key.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use super::filter::ResourceDescriptor;

/// Audit outcome for one host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResult {
    /// Third-party scripts missing integrity
    pub scripts: Vec<ResourceDescriptor>,
    /// Third-party link elements missing integrity
    pub links: Vec<ResourceDescriptor>,
    /// Creation instant, serialized as epoch milliseconds
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl AuditResult {
    /// Build a result stamped with the current time
    pub fn new(scripts: Vec<ResourceDescriptor>, links: Vec<ResourceDescriptor>) -> Self {
        Self {
            scripts,
            links,
            timestamp: Utc::now(),
        }
    }
}

/// In-memory audit result cache
#[derive(Debug, Default)]
pub struct AuditCache {
    entries: DashMap<String, AuditResult>,
}

impl AuditCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent result for a host, fresh or not
    pub fn get(&self, host: &str) -> Option<AuditResult> {
        self.entries.get(host).map(|e| e.clone())
    }

    /// Store the result for a host, replacing any previous entry
    pub fn put(&self, host: &str, result: AuditResult) {
        self.entries.insert(host.to_string(), result);
    }

    /// Drop any entry for a host
    pub fn invalidate(&self, host: &str) {
        self.entries.remove(host);
    }

    /// Number of cached hosts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether an entry is still fresh under the TTL at `now`
///
/// The elapsed time is truncated to whole minutes before comparison:
/// reads within the same truncated minute are always fresh, and an
/// entry is stale once exactly `ttl_mins` whole minutes have elapsed.
pub fn is_fresh(entry: &AuditResult, ttl_mins: i64, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(entry.timestamp).num_minutes() < ttl_mins
}
