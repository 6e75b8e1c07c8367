// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Browser engine seam
//!
//! The audit core never talks to Chromium directly; it drives these
//! traits. `cdp::CdpLauncher` is the production implementation, tests
//! inject stubs.

mod cdp;

pub use cdp::CdpLauncher;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;

/// Which DOM resource elements to extract from a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// `<script>` elements, URL taken from `src`
    Scripts,
    /// `<link>` elements, URL taken from `href`
    Links,
}

impl ResourceKind {
    /// CSS selector for this kind
    pub fn selector(&self) -> &'static str {
        match self {
            ResourceKind::Scripts => "script",
            ResourceKind::Links => "link",
        }
    }
}

/// One `<script>`/`<link>` element as rendered, attributes already
/// resolved by the DOM (`url` is absolute for sourced elements, empty
/// for inline ones)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResource {
    pub url: String,
    #[serde(default)]
    pub integrity: String,
    #[serde(default)]
    pub cross_origin: String,
}

/// Launches the underlying browser process
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    /// Start the browser; called exactly once per process lifetime
    async fn launch(&self) -> Result<Box<dyn BrowserHandle>>;
}

/// A running browser process
#[async_trait]
pub trait BrowserHandle: Send + Sync {
    /// Open a fresh page
    async fn new_page(&self) -> Result<Box<dyn PageHandle>>;

    /// Shut the browser down
    async fn close(&mut self) -> Result<()>;
}

/// A single open page
#[async_trait]
pub trait PageHandle: Send + Sync {
    /// Navigate to a URL and wait for the load event
    async fn goto(&self, url: &str) -> Result<()>;

    /// Extract all resource elements of one kind from the rendered DOM
    async fn resources(&self, kind: ResourceKind) -> Result<Vec<RawResource>>;

    /// Close the page
    async fn close(self: Box<Self>) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod stub {
    //! In-memory engine doubles for session/auditor/server tests

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::{BrowserHandle, BrowserLauncher, PageHandle, RawResource, ResourceKind};
    use crate::error::{Error, Result};

    /// Canned page content plus counters shared across the stub stack
    #[derive(Default)]
    pub struct StubState {
        pub scripts: parking_lot::RwLock<Vec<RawResource>>,
        pub links: parking_lot::RwLock<Vec<RawResource>>,
        pub navigations: AtomicUsize,
        pub pages_opened: AtomicUsize,
        pub pages_closed: AtomicUsize,
        /// Fail every `goto` with a navigation error
        pub fail_navigation: parking_lot::RwLock<bool>,
        /// Make `goto` sleep this long before returning
        pub navigation_delay: parking_lot::RwLock<Duration>,
    }

    impl StubState {
        pub fn navigations(&self) -> usize {
            self.navigations.load(Ordering::SeqCst)
        }

        pub fn pages_opened(&self) -> usize {
            self.pages_opened.load(Ordering::SeqCst)
        }

        pub fn pages_closed(&self) -> usize {
            self.pages_closed.load(Ordering::SeqCst)
        }
    }

    pub struct StubLauncher {
        pub state: Arc<StubState>,
        pub fail_launch: bool,
    }

    impl StubLauncher {
        pub fn new(state: Arc<StubState>) -> Self {
            Self {
                state,
                fail_launch: false,
            }
        }

        pub fn failing(state: Arc<StubState>) -> Self {
            Self {
                state,
                fail_launch: true,
            }
        }
    }

    #[async_trait]
    impl BrowserLauncher for StubLauncher {
        async fn launch(&self) -> Result<Box<dyn BrowserHandle>> {
            if self.fail_launch {
                return Err(Error::launch("stub launch failure"));
            }
            Ok(Box::new(StubBrowser {
                state: self.state.clone(),
            }))
        }
    }

    pub struct StubBrowser {
        state: Arc<StubState>,
    }

    #[async_trait]
    impl BrowserHandle for StubBrowser {
        async fn new_page(&self) -> Result<Box<dyn PageHandle>> {
            self.state.pages_opened.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(StubPage {
                state: self.state.clone(),
            }))
        }

        async fn close(&mut self) -> Result<()> {
            Ok(())
        }
    }

    pub struct StubPage {
        state: Arc<StubState>,
    }

    #[async_trait]
    impl PageHandle for StubPage {
        async fn goto(&self, url: &str) -> Result<()> {
            let delay = *self.state.navigation_delay.read();
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            if *self.state.fail_navigation.read() {
                return Err(Error::navigation(url, "stub navigation failure"));
            }
            self.state.navigations.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn resources(&self, kind: ResourceKind) -> Result<Vec<RawResource>> {
            let resources = match kind {
                ResourceKind::Scripts => self.state.scripts.read().clone(),
                ResourceKind::Links => self.state.links.read().clone(),
            };
            Ok(resources)
        }

        async fn close(self: Box<Self>) -> Result<()> {
            self.state.pages_closed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Shorthand for a sourced resource without integrity
    pub fn resource(url: &str) -> RawResource {
        RawResource {
            url: url.to_string(),
            ..Default::default()
        }
    }

    /// Shorthand for a resource carrying an integrity attribute
    pub fn resource_with_integrity(url: &str, integrity: &str) -> RawResource {
        RawResource {
            url: url.to_string(),
            integrity: integrity.to_string(),
            ..Default::default()
        }
    }
}
