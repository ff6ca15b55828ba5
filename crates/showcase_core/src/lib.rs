//! Showcase core: pure state machine and view-model helpers.
mod effect;
mod filter;
mod msg;
mod project;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{visible_projects, CategoryFilter, FilterState};
pub use msg::{Msg, ReplyKind};
pub use project::{Category, Creator, Project, ProjectStats};
pub use state::{
    AppState, ChatMessage, ChatRole, ChatState, RequestId, EMPTY_REPLY_FALLBACK, GREETING,
    OFFLINE_FALLBACK,
};
pub use update::update;
pub use view_model::{AppViewModel, ChatViewModel};
