// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Remora service binary
//!
//! Launches the shared browser session and serves the audit endpoint.
//! A failed browser launch is fatal: the process exits non-zero.

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use remora::{build_router, AuditCache, AuditConfig, Auditor, BrowserSession, CdpLauncher};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("remora=info".parse().unwrap()),
        )
        .init();

    let config = AuditConfig::from_env();

    let session = Arc::new(BrowserSession::new(Box::new(CdpLauncher::new())));
    if let Err(e) = session.init().await {
        error!("fatal: {e}");
        return ExitCode::from(1);
    }

    let port = config.port;
    let auditor = Arc::new(Auditor::new(session.clone(), Arc::new(AuditCache::new()), config));
    let router = build_router(auditor);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("fatal: cannot bind {addr}: {e}");
            return ExitCode::from(1);
        }
    };

    info!("listening on port {port}");
    if let Err(e) = axum::serve(listener, router).await {
        error!("server error: {e}");
        let _ = session.close().await;
        return ExitCode::from(1);
    }

    let _ = session.close().await;
    ExitCode::SUCCESS
}
