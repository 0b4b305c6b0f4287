//! In-memory port doubles shared by the unit tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

use tradfri_domain::error::{ConnectionError, TradfriError};
use tradfri_domain::message::{Code, MessageType, Request, Response};

use crate::ports::{Connector, MessageCodec, SecureChannel, SessionParams};

/// Frames requests as `[code, id_hi, id_lo, path_len, path.., payload..]` and
/// parses responses as `[code, id_hi, id_lo, payload..]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TestCodec;

impl MessageCodec for TestCodec {
    fn encode(&self, request: &Request) -> Result<Vec<u8>, TradfriError> {
        let path = request.path.as_bytes();
        let mut bytes = vec![request.code.as_u8()];
        bytes.extend_from_slice(&request.message_id.to_be_bytes());
        bytes.push(u8::try_from(path.len()).map_err(|err| TradfriError::Codec(Box::new(err)))?);
        bytes.extend_from_slice(path);
        bytes.extend_from_slice(&request.payload);
        Ok(bytes)
    }

    fn decode(&self, datagram: &[u8]) -> Result<Response, TradfriError> {
        let [code, hi, lo, payload @ ..] = datagram else {
            return Err(TradfriError::Codec("datagram too short".into()));
        };
        Ok(Response {
            kind: MessageType::Acknowledgement,
            code: Code::from_u8(*code),
            message_id: u16::from_be_bytes([*hi, *lo]),
            token: Vec::new(),
            payload: payload.to_vec(),
        })
    }
}

/// A request as seen by the scripted channel.
#[derive(Debug, Clone, PartialEq)]
pub struct SentRequest {
    pub code: Code,
    pub message_id: u16,
    pub path: String,
    pub payload: Option<serde_json::Value>,
}

impl SentRequest {
    fn parse(bytes: &[u8]) -> Self {
        let path_len = usize::from(bytes[3]);
        let payload = &bytes[4 + path_len..];
        Self {
            code: Code::from_u8(bytes[0]),
            message_id: u16::from_be_bytes([bytes[1], bytes[2]]),
            path: String::from_utf8(bytes[4..4 + path_len].to_vec()).unwrap(),
            payload: (!payload.is_empty()).then(|| serde_json::from_slice(payload).unwrap()),
        }
    }
}

enum Reply {
    /// Answer the last request with its own message id.
    Echo(Code, Vec<u8>),
    /// Answer with an explicit message id.
    WithId(u16, Code, Vec<u8>),
}

#[derive(Default)]
struct Script {
    replies: VecDeque<Reply>,
    sent: Vec<Vec<u8>>,
}

/// Channel answering from a scripted queue; once the queue is empty it never
/// answers again.
#[derive(Clone, Default)]
pub struct ScriptedChannel {
    script: Arc<Mutex<Script>>,
}

impl ScriptedChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply echoing the message id of the latest request.
    pub fn reply(self, code: Code, payload: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .replies
            .push_back(Reply::Echo(code, payload.as_bytes().to_vec()));
        self
    }

    /// Queue a reply carrying a fixed message id.
    pub fn reply_with_id(self, message_id: u16, code: Code, payload: &str) -> Self {
        self.script.lock().unwrap().replies.push_back(Reply::WithId(
            message_id,
            code,
            payload.as_bytes().to_vec(),
        ));
        self
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.script
            .lock()
            .unwrap()
            .sent
            .iter()
            .map(|bytes| SentRequest::parse(bytes))
            .collect()
    }
}

impl SecureChannel for ScriptedChannel {
    fn send(&mut self, datagram: &[u8]) -> impl Future<Output = Result<(), TradfriError>> + Send {
        self.script.lock().unwrap().sent.push(datagram.to_vec());
        async { Ok(()) }
    }

    fn recv(&mut self) -> impl Future<Output = Result<Vec<u8>, TradfriError>> + Send {
        let script = Arc::clone(&self.script);
        async move {
            // Let other callers run before the reply is picked, as a real
            // network would.
            tokio::task::yield_now().await;
            let next = script.lock().unwrap().next_reply();
            match next {
                Some(bytes) => Ok(bytes),
                None => std::future::pending().await,
            }
        }
    }
}

impl Script {
    fn next_reply(&mut self) -> Option<Vec<u8>> {
        let last_id = self
            .sent
            .last()
            .map_or(0, |bytes| u16::from_be_bytes([bytes[1], bytes[2]]));
        self.replies.pop_front().map(|reply| {
            let (id, code, payload) = match reply {
                Reply::Echo(code, payload) => (last_id, code, payload),
                Reply::WithId(id, code, payload) => (id, code, payload),
            };
            let mut bytes = vec![code.as_u8()];
            bytes.extend_from_slice(&id.to_be_bytes());
            bytes.extend_from_slice(&payload);
            bytes
        })
    }
}

/// How the test connector behaves on `connect`.
#[derive(Clone)]
pub enum ConnectBehavior {
    Succeed(ScriptedChannel),
    Fail,
    Hang,
}

/// Connector recording the session parameters it was asked to open.
#[derive(Clone)]
pub struct TestConnector {
    behavior: ConnectBehavior,
    sessions: Arc<Mutex<Vec<SessionParams>>>,
}

impl TestConnector {
    pub fn new(behavior: ConnectBehavior) -> Self {
        Self {
            behavior,
            sessions: Arc::default(),
        }
    }

    pub fn sessions(&self) -> Vec<SessionParams> {
        self.sessions.lock().unwrap().clone()
    }
}

impl Connector for TestConnector {
    type Channel = ScriptedChannel;

    fn connect(
        &self,
        params: &SessionParams,
    ) -> impl Future<Output = Result<Self::Channel, TradfriError>> + Send {
        self.sessions.lock().unwrap().push(params.clone());
        let behavior = self.behavior.clone();
        let address = params.address.clone();
        async move {
            match behavior {
                ConnectBehavior::Succeed(channel) => Ok(channel),
                ConnectBehavior::Fail => Err(ConnectionError {
                    address,
                    source: "handshake failed".into(),
                }
                .into()),
                ConnectBehavior::Hang => std::future::pending().await,
            }
        }
    }
}
