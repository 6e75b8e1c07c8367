// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Chromium engine over CDP
//!
//! One headless Chromium process per service lifetime. The CDP event
//! handler runs on a detached task for as long as the browser lives.

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::{BrowserHandle, BrowserLauncher, PageHandle, RawResource, ResourceKind};
use crate::error::{Error, Result};

/// Launches a headless Chromium via chromiumoxide
#[derive(Debug, Default)]
pub struct CdpLauncher;

impl CdpLauncher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BrowserLauncher for CdpLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserHandle>> {
        let config = BrowserConfig::builder()
            .build()
            .map_err(Error::launch)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| Error::launch(e.to_string()))?;

        // Drives CDP messages until the browser goes away
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("CDP handler: {e}");
                }
            }
        });

        Ok(Box::new(CdpBrowser {
            browser,
            handler_task,
        }))
    }
}

/// A running Chromium process
pub struct CdpBrowser {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

#[async_trait]
impl BrowserHandle for CdpBrowser {
    async fn new_page(&self) -> Result<Box<dyn PageHandle>> {
        let page = self.browser.new_page("about:blank").await?;
        Ok(Box::new(CdpPage { page }))
    }

    async fn close(&mut self) -> Result<()> {
        if let Err(e) = self.browser.close().await {
            warn!("browser close: {e}");
        }
        self.handler_task.abort();
        Ok(())
    }
}

/// One open Chromium tab
pub struct CdpPage {
    page: Page,
}

#[async_trait]
impl PageHandle for CdpPage {
    async fn goto(&self, url: &str) -> Result<()> {
        self.page
            .goto(url)
            .await
            .map_err(|e| Error::navigation(url, e.to_string()))?;
        Ok(())
    }

    async fn resources(&self, kind: ResourceKind) -> Result<Vec<RawResource>> {
        // The DOM resolves src/href to absolute URLs; inline elements
        // come back with an empty url and are dropped by the filter.
        let expr = format!(
            r#"Array.from(document.querySelectorAll('{selector}')).map(e => ({{
                url: e.{attr} || '',
                integrity: e.integrity || '',
                cross_origin: e.crossOrigin || ''
            }}))"#,
            selector = kind.selector(),
            attr = match kind {
                ResourceKind::Scripts => "src",
                ResourceKind::Links => "href",
            },
        );

        let resources = self.page.evaluate(expr).await?.into_value()?;
        Ok(resources)
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.page.close().await?;
        Ok(())
    }
}
