//! Established DTLS session.

use std::future::Future;

use tradfri_app::ports::SecureChannel;
use tradfri_domain::error::TradfriError;
use webrtc_dtls::conn::DTLSConn;
use webrtc_util::Conn;

use crate::error::DtlsError;

/// Largest datagram the gateway sends.
const RECEIVE_BUFFER_LEN: usize = 4096;

/// A DTLS client connection to the gateway, one record per datagram.
pub struct DtlsChannel {
    conn: DTLSConn,
    buffer: Vec<u8>,
}

impl DtlsChannel {
    pub(crate) fn new(conn: DTLSConn) -> Self {
        Self {
            conn,
            buffer: vec![0; RECEIVE_BUFFER_LEN],
        }
    }

    /// Send a close notify and release the socket.
    ///
    /// # Errors
    ///
    /// Returns [`DtlsError::Io`] when the alert cannot be sent.
    pub async fn close(self) -> Result<(), DtlsError> {
        Conn::close(&self.conn).await.map_err(DtlsError::Io)
    }
}

impl SecureChannel for DtlsChannel {
    fn send(&mut self, datagram: &[u8]) -> impl Future<Output = Result<(), TradfriError>> + Send {
        async move {
            let written = self.conn.send(datagram).await.map_err(DtlsError::Io)?;
            tracing::trace!(bytes = written, "datagram sent");
            Ok(())
        }
    }

    fn recv(&mut self) -> impl Future<Output = Result<Vec<u8>, TradfriError>> + Send {
        async move {
            let read = self
                .conn
                .recv(&mut self.buffer)
                .await
                .map_err(DtlsError::Io)?;
            tracing::trace!(bytes = read, "datagram received");
            Ok(self.buffer[..read].to_vec())
        }
    }
}
