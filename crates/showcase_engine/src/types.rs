use thiserror::Error;

pub type RequestId = u64;

/// Speaker of one conversation turn, as the wire format names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Model,
}

/// One prior turn of the conversation sent along with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ReplyCompleted {
        request_id: RequestId,
        result: Result<String, ReplyError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyError {
    pub kind: FailureKind,
    pub message: String,
}

impl ReplyError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error")]
    Network,
    #[error("malformed response")]
    MalformedResponse,
}
