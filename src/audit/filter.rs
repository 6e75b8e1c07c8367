// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Integrity filtering of extracted resources

use serde::{Deserialize, Serialize};

use crate::engine::RawResource;

/// One audited `<script>`/`<link>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Resolved absolute URL, from `src`/`href`
    pub url: String,
    /// Value of the `integrity` attribute, empty when absent
    #[serde(default)]
    pub integrity: String,
    /// Value of the `crossorigin` attribute, informational only
    #[serde(default, rename = "crossorigin")]
    pub cross_origin: String,
}

impl From<RawResource> for ResourceDescriptor {
    fn from(raw: RawResource) -> Self {
        Self {
            url: raw.url,
            integrity: raw.integrity,
            cross_origin: raw.cross_origin,
        }
    }
}

/// Keep only third-party resources lacking an integrity attribute
///
/// Order-preserving. A resource is dropped when it has no URL (inline
/// elements), when its URL is root-relative, when its URL contains the
/// root domain anywhere, or when it already carries integrity.
///
/// Substring containment against the root domain is deliberate: it also
/// catches first-party subdomains and brand-named CDN aliases, trading
/// a possible miss of a third-party URL that happens to embed the root
/// domain for fewer false positives on legitimate first-party hosts.
pub fn without_integrity(resources: Vec<RawResource>, root: &str) -> Vec<ResourceDescriptor> {
    resources
        .into_iter()
        .filter(|r| !r.url.is_empty())
        .filter(|r| !r.url.starts_with('/'))
        .filter(|r| !r.url.contains(root))
        .filter(|r| r.integrity.is_empty())
        .map(ResourceDescriptor::from)
        .collect()
}
