//! Service lifecycle tracking.
//!
//! The HTTP server owns one [`ServiceHandle`] and moves it through
//! Stopped → Starting → Ready → Stopping. The health endpoint reads it;
//! anything that must wait for startup subscribes to changes.
//!
//! ```rust
//! use solarlead_core::service::{ServiceHandle, ServiceState};
//!
//! let handle = ServiceHandle::new("solarlead");
//! assert_eq!(handle.state(), ServiceState::Stopped);
//!
//! handle.set_state(ServiceState::Ready);
//! assert!(handle.state().is_available());
//! ```

use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;

use crate::{Error, Result};

// ============================================================================
// ServiceState
// ============================================================================

/// State of the service in its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServiceState {
    /// Not started.
    Stopped,
    /// Connecting to the store, applying migrations.
    Starting,
    /// Serving requests.
    Ready,
    /// Draining in-flight requests before exit.
    Stopping,
    /// Startup failed.
    Failed(String),
}

impl ServiceState {
    /// Returns `true` if requests can be served.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stopped => write!(f, "stopped"),
            Self::Starting => write!(f, "starting"),
            Self::Ready => write!(f, "ready"),
            Self::Stopping => write!(f, "stopping"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

// ============================================================================
// ServiceHandle
// ============================================================================

/// Shared, cheaply cloned view of the service state.
///
/// State lives in a `watch` channel: readers take the latest value and
/// subscribers are woken on every transition.
#[derive(Clone)]
pub struct ServiceHandle {
    inner: Arc<Inner>,
}

struct Inner {
    name: String,
    tx: watch::Sender<ServiceState>,
    started_at: Instant,
}

impl ServiceHandle {
    /// Creates a handle in the [`ServiceState::Stopped`] state.
    pub fn new(name: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(ServiceState::Stopped);
        Self {
            inner: Arc::new(Inner {
                name: name.into(),
                tx,
                started_at: Instant::now(),
            }),
        }
    }

    /// Service name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Current state.
    pub fn state(&self) -> ServiceState {
        self.inner.tx.borrow().clone()
    }

    /// Moves to `state`, notifying subscribers.
    pub fn set_state(&self, state: ServiceState) {
        tracing::info!(service = %self.inner.name, %state, "service state changed");
        self.inner.tx.send_replace(state);
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<ServiceState> {
        self.inner.tx.subscribe()
    }

    /// Waits until the service is Ready.
    ///
    /// Fails as soon as the service reports Failed, or when `timeout`
    /// elapses first.
    pub async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let mut rx = self.subscribe();
        let waited = tokio::time::timeout(
            timeout,
            rx.wait_for(|s| matches!(s, ServiceState::Ready | ServiceState::Failed(_))),
        )
        .await;

        let reason = match waited {
            Ok(Ok(state)) => match &*state {
                ServiceState::Failed(reason) => reason.clone(),
                _ => return Ok(()),
            },
            // Unreachable while `self` holds the sender.
            Ok(Err(_)) => "state channel closed".to_string(),
            Err(_) => format!("still {} after {timeout:?}", self.state()),
        };
        Err(Error::NotReady {
            service: self.inner.name.clone(),
            reason,
        })
    }

    /// Time since the handle was created.
    pub fn uptime(&self) -> Duration {
        self.inner.started_at.elapsed()
    }

    /// Point-in-time health report.
    pub fn report(&self, version: &str) -> HealthReport {
        let state = self.state();
        HealthReport {
            status: state.to_string(),
            available: state.is_available(),
            service: self.inner.name.clone(),
            version: version.to_string(),
            uptime_secs: self.uptime().as_secs(),
        }
    }
}

impl fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceHandle")
            .field("name", &self.inner.name)
            .field("state", &self.state())
            .finish()
    }
}

/// Body of the health endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct HealthReport {
    /// Lifecycle state, e.g. `ready`.
    pub status: String,
    /// Whether requests are being served.
    #[serde(skip)]
    pub available: bool,
    /// Service name.
    pub service: String,
    /// Crate version.
    pub version: String,
    /// Seconds since startup.
    pub uptime_secs: u64,
}
