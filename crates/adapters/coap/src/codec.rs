//! CoAP framing on top of [`coap_lite::Packet`].

use coap_lite::{CoapOption, ContentFormat, MessageClass, Packet};
use tradfri_app::ports::MessageCodec;
use tradfri_domain::error::TradfriError;
use tradfri_domain::message::{Code, MessageType, Request, Response};

use crate::error::CoapError;

const VERSION: u8 = 1;
const MAX_TOKEN_LEN: usize = 8;

/// `application/json` content format.
pub const CONTENT_FORMAT_JSON: u8 = 50;

/// [`MessageCodec`] speaking CoAP.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoapCodec;

impl CoapCodec {
    /// Frame a request. Every non-empty path segment becomes one `Uri-Path`
    /// option; a non-empty payload adds `Content-Format: application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`CoapError::TokenTooLong`] for tokens over 8 bytes and
    /// [`CoapError::Malformed`] when the packet cannot be serialised.
    pub fn encode_request(request: &Request) -> Result<Vec<u8>, CoapError> {
        if request.token.len() > MAX_TOKEN_LEN {
            return Err(CoapError::TokenTooLong(request.token.len()));
        }

        let mut packet = Packet::new();
        packet.header.set_version(VERSION);
        packet.header.set_type(to_lite(request.kind));
        packet.header.code = MessageClass::from(request.code.as_u8());
        packet.header.message_id = request.message_id;
        packet.set_token(request.token.clone());

        for segment in request.path_segments() {
            packet.add_option(CoapOption::UriPath, segment.as_bytes().to_vec());
        }
        if !request.payload.is_empty() {
            packet.set_content_format(ContentFormat::ApplicationJSON);
            packet.payload.clone_from(&request.payload);
        }
        Ok(packet.to_bytes()?)
    }

    /// Parse a datagram into a response. Options are validated and dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CoapError::UnsupportedVersion`] for anything but version 1
    /// and [`CoapError::Malformed`] for datagrams the parser refuses.
    pub fn decode_response(datagram: &[u8]) -> Result<Response, CoapError> {
        let packet = Packet::from_bytes(datagram)?;

        let version = packet.header.get_version();
        if version != VERSION {
            return Err(CoapError::UnsupportedVersion(version));
        }

        Ok(Response {
            kind: from_lite(packet.header.get_type()),
            code: Code::from_u8(u8::from(packet.header.code)),
            message_id: packet.header.message_id,
            token: packet.get_token().to_vec(),
            payload: packet.payload,
        })
    }
}

fn to_lite(kind: MessageType) -> coap_lite::MessageType {
    match kind {
        MessageType::Confirmable => coap_lite::MessageType::Confirmable,
        MessageType::NonConfirmable => coap_lite::MessageType::NonConfirmable,
        MessageType::Acknowledgement => coap_lite::MessageType::Acknowledgement,
        MessageType::Reset => coap_lite::MessageType::Reset,
    }
}

fn from_lite(kind: coap_lite::MessageType) -> MessageType {
    match kind {
        coap_lite::MessageType::Confirmable => MessageType::Confirmable,
        coap_lite::MessageType::NonConfirmable => MessageType::NonConfirmable,
        coap_lite::MessageType::Acknowledgement => MessageType::Acknowledgement,
        coap_lite::MessageType::Reset => MessageType::Reset,
    }
}

impl MessageCodec for CoapCodec {
    fn encode(&self, request: &Request) -> Result<Vec<u8>, TradfriError> {
        Ok(Self::encode_request(request)?)
    }

    fn decode(&self, datagram: &[u8]) -> Result<Response, TradfriError> {
        let response = Self::decode_response(datagram)?;
        tracing::trace!(
            message_id = response.message_id,
            code = %response.code,
            len = datagram.len(),
            "decoded CoAP response"
        );
        Ok(response)
    }
}
