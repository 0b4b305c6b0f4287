//! Message envelope exchanged with the gateway.
//!
//! These are the structured request/response values that the message codec
//! turns into datagrams and back. They carry only what the gateway client
//! needs: type, code, message id, token, path and payload.

use std::fmt;

/// Reliability class of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    Confirmable,
    NonConfirmable,
    Acknowledgement,
    Reset,
}

impl MessageType {
    /// Two-bit wire value.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Confirmable => 0,
            Self::NonConfirmable => 1,
            Self::Acknowledgement => 2,
            Self::Reset => 3,
        }
    }

    /// Decode the two-bit wire value; higher bits are ignored.
    #[must_use]
    pub const fn from_u8(raw: u8) -> Self {
        match raw & 0b11 {
            0 => Self::Confirmable,
            1 => Self::NonConfirmable,
            2 => Self::Acknowledgement,
            _ => Self::Reset,
        }
    }
}

/// Method or response code, stored as its raw `class.detail` byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(u8);

impl Code {
    pub const EMPTY: Self = Self::new(0, 0);

    pub const GET: Self = Self::new(0, 1);
    pub const POST: Self = Self::new(0, 2);
    pub const PUT: Self = Self::new(0, 3);
    pub const DELETE: Self = Self::new(0, 4);

    pub const CREATED: Self = Self::new(2, 1);
    pub const DELETED: Self = Self::new(2, 2);
    pub const VALID: Self = Self::new(2, 3);
    pub const CHANGED: Self = Self::new(2, 4);
    pub const CONTENT: Self = Self::new(2, 5);

    pub const BAD_REQUEST: Self = Self::new(4, 0);
    pub const UNAUTHORIZED: Self = Self::new(4, 1);
    pub const BAD_OPTION: Self = Self::new(4, 2);
    pub const FORBIDDEN: Self = Self::new(4, 3);
    pub const NOT_FOUND: Self = Self::new(4, 4);
    pub const METHOD_NOT_ALLOWED: Self = Self::new(4, 5);
    pub const NOT_ACCEPTABLE: Self = Self::new(4, 6);
    pub const PRECONDITION_FAILED: Self = Self::new(4, 12);
    pub const REQUEST_ENTITY_TOO_LARGE: Self = Self::new(4, 13);
    pub const UNSUPPORTED_CONTENT_FORMAT: Self = Self::new(4, 15);

    pub const INTERNAL_SERVER_ERROR: Self = Self::new(5, 0);
    pub const NOT_IMPLEMENTED: Self = Self::new(5, 1);
    pub const BAD_GATEWAY: Self = Self::new(5, 2);
    pub const SERVICE_UNAVAILABLE: Self = Self::new(5, 3);
    pub const GATEWAY_TIMEOUT: Self = Self::new(5, 4);
    pub const PROXYING_NOT_SUPPORTED: Self = Self::new(5, 5);

    /// Build from class (3 bits) and detail (5 bits).
    #[must_use]
    pub const fn new(class: u8, detail: u8) -> Self {
        Self(((class & 0b111) << 5) | (detail & 0b1_1111))
    }

    #[must_use]
    pub const fn from_u8(raw: u8) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn class(self) -> u8 {
        self.0 >> 5
    }

    #[must_use]
    pub const fn detail(self) -> u8 {
        self.0 & 0b1_1111
    }

    /// `2.xx` response codes.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.class() == 2
    }

    fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::EMPTY => "Empty",
            Self::GET => "GET",
            Self::POST => "POST",
            Self::PUT => "PUT",
            Self::DELETE => "DELETE",
            Self::CREATED => "Created",
            Self::DELETED => "Deleted",
            Self::VALID => "Valid",
            Self::CHANGED => "Changed",
            Self::CONTENT => "Content",
            Self::BAD_REQUEST => "BadRequest",
            Self::UNAUTHORIZED => "Unauthorized",
            Self::BAD_OPTION => "BadOption",
            Self::FORBIDDEN => "Forbidden",
            Self::NOT_FOUND => "NotFound",
            Self::METHOD_NOT_ALLOWED => "MethodNotAllowed",
            Self::NOT_ACCEPTABLE => "NotAcceptable",
            Self::PRECONDITION_FAILED => "PreconditionFailed",
            Self::REQUEST_ENTITY_TOO_LARGE => "RequestEntityTooLarge",
            Self::UNSUPPORTED_CONTENT_FORMAT => "UnsupportedMediaType",
            Self::INTERNAL_SERVER_ERROR => "InternalServerError",
            Self::NOT_IMPLEMENTED => "NotImplemented",
            Self::BAD_GATEWAY => "BadGateway",
            Self::SERVICE_UNAVAILABLE => "ServiceUnavailable",
            Self::GATEWAY_TIMEOUT => "GatewayTimeout",
            Self::PROXYING_NOT_SUPPORTED => "ProxyingNotSupported",
            _ => return None,
        };
        Some(name)
    }
}

/// Human-readable name (`Changed`, `NotFound`, …) or `c.dd` for codes
/// without one.
impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}.{:02}", self.class(), self.detail()),
        }
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({}.{:02})", self.class(), self.detail())
    }
}

/// Outgoing request to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub kind: MessageType,
    pub code: Code,
    pub message_id: u16,
    pub token: Vec<u8>,
    /// Resource path such as `/15001/65537`.
    pub path: String,
    pub payload: Vec<u8>,
}

impl Request {
    /// Non-empty path segments, in order.
    pub fn path_segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|segment| !segment.is_empty())
    }
}

/// Decoded response from the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub kind: MessageType,
    pub code: Code,
    pub message_id: u16,
    pub token: Vec<u8>,
    pub payload: Vec<u8>,
}

impl Response {
    /// Payload as UTF-8 text, lossily.
    #[must_use]
    pub fn payload_text(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_code_into_class_and_detail() {
        assert_eq!(Code::NOT_FOUND.class(), 4);
        assert_eq!(Code::NOT_FOUND.detail(), 4);
        assert_eq!(Code::CHANGED.as_u8(), 0x44);
        assert_eq!(Code::GET.as_u8(), 0x01);
    }

    #[test]
    fn should_display_named_codes() {
        assert_eq!(Code::CHANGED.to_string(), "Changed");
        assert_eq!(Code::CONTENT.to_string(), "Content");
        assert_eq!(Code::UNAUTHORIZED.to_string(), "Unauthorized");
    }

    #[test]
    fn should_display_unnamed_codes_numerically() {
        assert_eq!(Code::new(2, 31).to_string(), "2.31");
    }

    #[test]
    fn should_only_flag_2xx_as_success() {
        assert!(Code::CREATED.is_success());
        assert!(Code::CONTENT.is_success());
        assert!(!Code::NOT_FOUND.is_success());
        assert!(!Code::EMPTY.is_success());
    }

    #[test]
    fn should_roundtrip_message_type_bits() {
        for kind in [
            MessageType::Confirmable,
            MessageType::NonConfirmable,
            MessageType::Acknowledgement,
            MessageType::Reset,
        ] {
            assert_eq!(MessageType::from_u8(kind.as_u8()), kind);
        }
    }

    #[test]
    fn should_skip_empty_path_segments() {
        let request = Request {
            kind: MessageType::Confirmable,
            code: Code::GET,
            message_id: 1,
            token: Vec::new(),
            path: "/15001//65537/".to_string(),
            payload: Vec::new(),
        };
        let segments: Vec<_> = request.path_segments().collect();
        assert_eq!(segments, ["15001", "65537"]);
    }
}
