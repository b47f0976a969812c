//! API server implementation

use std::future::Future;

use solarlead_core::ServiceState;
use solarlead_core::config::ServerConfig;
use tokio::net::TcpListener;

use crate::Result;
use crate::routes::router;
use crate::state::AppState;

/// Solarlead HTTP server.
pub struct Server {
    config: ServerConfig,
    state: AppState,
}

impl Server {
    /// Create a new server instance.
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Binds the configured address and serves until Ctrl-C or SIGTERM.
    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener = match TcpListener::bind(&addr).await {
            Ok(listener) => listener,
            Err(e) => {
                self.state
                    .service
                    .set_state(ServiceState::Failed(format!("bind {addr}: {e}")));
                return Err(e.into());
            }
        };
        self.serve(listener, shutdown_signal()).await
    }

    /// Serves on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let service = self.state.service.clone();
        service.set_state(ServiceState::Starting);
        let app = router(self.state);

        let local = listener.local_addr()?;
        tracing::info!(service = service.name(), addr = %local, "listening");
        service.set_state(ServiceState::Ready);

        let stopping = service.clone();
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown.await;
                stopping.set_state(ServiceState::Stopping);
            })
            .await;

        match result {
            Ok(()) => {
                service.set_state(ServiceState::Stopped);
                Ok(())
            }
            Err(e) => {
                service.set_state(ServiceState::Failed(e.to_string()));
                Err(e.into())
            }
        }
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
