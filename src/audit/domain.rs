// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Root domain resolution
//!
//! The root domain classifies page resources as first- or third-party:
//! any resource URL containing this string is treated as first-party.

use crate::error::{Error, Result};

/// Resolve the registrable root domain of a host
///
/// The caller has already stripped the scheme; anything after the first
/// path, query, fragment or port separator is ignored. The result is
/// `"{domain}.{public-suffix}"` per the public suffix list, e.g.
/// `"mysite.co.uk"` for `"www.mysite.co.uk/about"`.
pub fn resolve(host: &str) -> Result<String> {
    let bare = host
        .split(['/', '?', '#', ':'])
        .next()
        .unwrap_or(host);

    psl::domain_str(bare)
        .map(str::to_owned)
        .ok_or_else(|| Error::domain_parse(host))
}
