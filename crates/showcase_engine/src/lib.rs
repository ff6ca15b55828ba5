//! Showcase engine: remote assistant capability and request execution.
mod assistant;
mod engine;
mod types;

pub use assistant::{Assistant, AssistantSettings, GeminiAssistant, DEFAULT_MODEL};
pub use engine::EngineHandle;
pub use types::{ChatTurn, EngineEvent, FailureKind, ReplyError, RequestId, TurnRole};
