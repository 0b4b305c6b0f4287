//! Exchange observer port — a hook notified of every gateway exchange.

use tradfri_domain::message::{Request, Response};

/// Receives notifications about requests and responses.
///
/// All methods default to doing nothing, so implementors only override what
/// they care about.
pub trait ExchangeObserver: Send + Sync {
    /// A request is about to be written.
    fn on_request(&self, request: &Request) {
        let _ = request;
    }

    /// The matching response for `request` arrived.
    fn on_response(&self, request: &Request, response: &Response) {
        let _ = (request, response);
    }

    /// A datagram with another message id arrived while waiting for `request`
    /// and was dropped.
    fn on_discarded(&self, request: &Request, response: &Response) {
        let _ = (request, response);
    }
}
