//! Default exchange observer emitting `tracing` events.

use tradfri_domain::message::{Request, Response};

use crate::ports::ExchangeObserver;

/// Logs every exchange at `debug` and dropped datagrams at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ExchangeObserver for TracingObserver {
    fn on_request(&self, request: &Request) {
        tracing::debug!(
            code = %request.code,
            path = %request.path,
            message_id = request.message_id,
            payload = %String::from_utf8_lossy(&request.payload),
            "sending request"
        );
    }

    fn on_response(&self, request: &Request, response: &Response) {
        tracing::debug!(
            path = %request.path,
            message_id = response.message_id,
            code = %response.code,
            payload = %response.payload_text(),
            "received response"
        );
    }

    fn on_discarded(&self, request: &Request, response: &Response) {
        tracing::warn!(
            path = %request.path,
            expected = request.message_id,
            received = response.message_id,
            "discarding response with unexpected message id"
        );
    }
}
