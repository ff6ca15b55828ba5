use crate::filter::CategoryFilter;
use crate::state::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a category chip (or "All").
    CategorySelected(CategoryFilter),
    /// User edited the gallery search box.
    SearchChanged(String),
    /// User edited the chat input box.
    ChatInputChanged(String),
    /// User submitted the current chat input.
    ChatSubmitted,
    /// The outbound assistant request finished.
    ReplyArrived {
        request_id: RequestId,
        reply: ReplyKind,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Outcome of one assistant request, as seen by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyKind {
    /// The assistant answered; the text may be blank.
    Text(String),
    /// The request failed. The cause is logged at the boundary that
    /// produced this value and never surfaces past the fallback line.
    Failed,
}
