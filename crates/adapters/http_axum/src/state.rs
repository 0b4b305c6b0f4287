//! Shared application state for axum handlers.

use std::sync::Arc;

use tradfri_app::ports::Gateway;

/// Application state shared across all axum handlers.
///
/// Generic over the gateway implementation to avoid dynamic dispatch.
/// `Clone` is implemented manually so `G` itself does not need to be `Clone`.
pub struct AppState<G> {
    pub gateway: Arc<G>,
}

impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G> AppState<G>
where
    G: Gateway + 'static,
{
    pub fn new(gateway: G) -> Self {
        Self::from_arc(Arc::new(gateway))
    }

    /// Share a gateway that other adapters (gRPC) also hold.
    pub fn from_arc(gateway: Arc<G>) -> Self {
        Self { gateway }
    }
}
