use crate::state::{ChatMessage, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the remote assistant for a reply to `text`. `history` is the
    /// conversation before the just-appended user message.
    RequestReply {
        request_id: RequestId,
        history: Vec<ChatMessage>,
        text: String,
    },
    /// The transcript grew; the frontend should reveal the newest message.
    ScrollChatToLatest,
}
