// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Shared browser session lifecycle
//!
//! One browser process for the whole service. The state machine only
//! moves forward: `Uninitialized -> Initializing -> Ready`. A failed
//! launch leaves the session parked in `Initializing` for the rest of
//! the process lifetime and later `init` calls are silent no-ops; the
//! caller is expected to treat the launch error as fatal.

use parking_lot::RwLock;
use tracing::info;

use crate::engine::{BrowserHandle, BrowserLauncher, PageHandle};
use crate::error::{Error, Result};

/// Browser session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No launch attempted yet
    Uninitialized,
    /// Launch in progress, or permanently stuck after a failed launch
    Initializing,
    /// Browser is up, pages can be opened
    Ready,
}

/// Long-lived shared browser session
pub struct BrowserSession {
    launcher: Box<dyn BrowserLauncher>,
    state: RwLock<SessionState>,
    browser: tokio::sync::RwLock<Option<Box<dyn BrowserHandle>>>,
}

impl BrowserSession {
    /// Create an uninitialized session over a launcher
    pub fn new(launcher: Box<dyn BrowserLauncher>) -> Self {
        Self {
            launcher,
            state: RwLock::new(SessionState::Uninitialized),
            browser: tokio::sync::RwLock::new(None),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        *self.state.read()
    }

    /// Launch the browser, once
    ///
    /// Idempotent: returns Ok immediately unless the state is
    /// `Uninitialized`. On launch failure the error propagates and the
    /// state stays `Initializing`; it is never rolled back.
    pub async fn init(&self) -> Result<()> {
        {
            let mut state = self.state.write();
            if *state != SessionState::Uninitialized {
                return Ok(());
            }
            *state = SessionState::Initializing;
        }

        let browser = self.launcher.launch().await?;
        *self.browser.write().await = Some(browser);
        *self.state.write() = SessionState::Ready;
        info!("browser session ready");
        Ok(())
    }

    /// Open a fresh page on the shared browser
    pub async fn new_page(&self) -> Result<Box<dyn PageHandle>> {
        if self.state() != SessionState::Ready {
            return Err(Error::NotReady);
        }
        let guard = self.browser.read().await;
        let browser = guard.as_ref().ok_or(Error::NotReady)?;
        browser.new_page().await
    }

    /// Release the browser process if one was ever created
    pub async fn close(&self) -> Result<()> {
        if let Some(mut browser) = self.browser.write().await.take() {
            browser.close().await?;
        }
        Ok(())
    }
}
