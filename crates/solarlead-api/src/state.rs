//! Shared application state handed to every handler.

use std::sync::Arc;

use solarlead_core::config::{CsrfConfig, SiteConfig};
use solarlead_core::{ServiceHandle, SolarleadConfig};
use solarlead_store::Store;

use crate::Result;
use crate::render::PageRenderer;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "solarlead";

/// Dependencies injected into handlers through axum state.
#[derive(Clone)]
pub struct AppState {
    /// Record store.
    pub store: Arc<dyn Store>,
    /// Page templates.
    pub pages: Arc<PageRenderer>,
    /// Business contact details shown on the page.
    pub site: Arc<SiteConfig>,
    /// CSRF settings.
    pub csrf: Arc<CsrfConfig>,
    /// Lifecycle state for the health endpoint.
    pub service: ServiceHandle,
}

impl AppState {
    /// Builds state around an already constructed store.
    pub fn new(store: Arc<dyn Store>, config: &SolarleadConfig) -> Result<Self> {
        Ok(Self {
            store,
            pages: Arc::new(PageRenderer::new()?),
            site: Arc::new(config.site.clone()),
            csrf: Arc::new(config.csrf.clone()),
            service: ServiceHandle::new(SERVICE_NAME),
        })
    }
}
