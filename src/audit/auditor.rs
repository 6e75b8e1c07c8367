// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Audit orchestration
//!
//! Validates the host, resolves the root domain, consults the cache and
//! drives a page load + settle + extraction on a cache miss. Same-host
//! audits are serialized through a per-host in-flight guard; distinct
//! hosts never contend.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use lazy_static::lazy_static;
use regex::Regex;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::cache::{self, AuditCache, AuditResult};
use super::domain;
use super::filter::{self, ResourceDescriptor};
use crate::config::AuditConfig;
use crate::engine::{PageHandle, ResourceKind};
use crate::error::{Error, Result};
use crate::session::{BrowserSession, SessionState};

lazy_static! {
    // Known-loose validator kept for compatibility: accepts http://,
    // https://, and the malformed literal "http?s://". Do not tighten
    // to a strict scheme grammar, it changes accept/reject behavior.
    static ref SCHEME_RE: Regex = Regex::new(r"^(https?|http\?s)://").unwrap();
}

/// Drives SRI audits against the shared browser session
pub struct Auditor {
    session: Arc<BrowserSession>,
    cache: Arc<AuditCache>,
    config: AuditConfig,
    inflight: DashMap<String, Arc<Mutex<()>>>,
}

impl Auditor {
    /// Create an auditor over a session and cache
    pub fn new(session: Arc<BrowserSession>, cache: Arc<AuditCache>, config: AuditConfig) -> Self {
        Self {
            session,
            cache,
            config,
            inflight: DashMap::new(),
        }
    }

    /// Audit one host for third-party resources missing integrity
    ///
    /// Returns the cached result when one exists and is fresh under the
    /// TTL; `clear` drops any cached entry first and therefore always
    /// forces a fresh page load. The cache is only written after fully
    /// successful extraction, a failed audit leaves no partial entry.
    pub async fn audit(&self, host: &str, clear: bool) -> Result<AuditResult> {
        if self.session.state() != SessionState::Ready {
            return Err(Error::NotReady);
        }

        let stripped = match SCHEME_RE.find(host) {
            Some(m) => &host[m.end()..],
            None => return Err(Error::invalid_host(host)),
        };
        let root = domain::resolve(stripped)?;

        let guard = self.inflight_guard(host);
        let _held = guard.lock().await;

        if clear {
            self.cache.invalidate(host);
        }
        if let Some(entry) = self.cache.get(host) {
            if cache::is_fresh(&entry, self.config.cache_ttl_mins, Utc::now()) {
                debug!("cache hit for {host}");
                return Ok(entry);
            }
        }

        let page = self.session.new_page().await?;
        let outcome = self.load_and_extract(page.as_ref(), host, &root).await;
        if let Err(e) = page.close().await {
            warn!("page close for {host}: {e}");
        }
        let (scripts, links) = outcome?;

        let result = AuditResult::new(scripts, links);
        self.cache.put(host, result.clone());
        Ok(result)
    }

    /// Shared audit result cache
    pub fn cache(&self) -> &AuditCache {
        &self.cache
    }

    async fn load_and_extract(
        &self,
        page: &dyn PageHandle,
        host: &str,
        root: &str,
    ) -> Result<(Vec<ResourceDescriptor>, Vec<ResourceDescriptor>)> {
        let timeout = self.config.navigation_timeout;
        tokio::time::timeout(timeout, page.goto(host))
            .await
            .map_err(|_| Error::navigation_timeout(host, timeout.as_millis() as u64))??;

        tokio::time::sleep(self.config.settle_delay).await;

        let (scripts, links) = tokio::try_join!(
            page.resources(ResourceKind::Scripts),
            page.resources(ResourceKind::Links),
        )?;

        Ok((
            filter::without_integrity(scripts, root),
            filter::without_integrity(links, root),
        ))
    }

    fn inflight_guard(&self, host: &str) -> Arc<Mutex<()>> {
        self.inflight
            .entry(host.to_string())
            .or_default()
            .clone()
    }
}
