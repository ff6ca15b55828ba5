use crate::filter::{visible_projects, CategoryFilter, FilterState};
use crate::msg::ReplyKind;
use crate::project::Project;
use crate::view_model::{AppViewModel, ChatViewModel};

pub type RequestId = u64;

/// Lifecycle of the chat session's single outbound request slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    #[default]
    Idle,
    Sending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Opening line the assistant widget shows before any submission.
pub const GREETING: &str = "Hi! I'm the ProjectFlow AI. I can tell you more about the tech \
     stacks used or help you brainstorm your next big project idea. How can I help?";

/// Shown when the assistant answered but the reply carried no text.
pub const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I couldn't process that.";

/// Shown when the request to the assistant failed outright.
pub const OFFLINE_FALLBACK: &str = "The AI is currently resting. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    projects: Vec<Project>,
    filter: FilterState,
    chat_input: String,
    messages: Vec<ChatMessage>,
    chat: ChatState,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    /// New session over a fixed project catalog, seeded with the greeting.
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            filter: FilterState::default(),
            chat_input: String::new(),
            messages: vec![ChatMessage {
                role: ChatRole::Model,
                text: GREETING.to_string(),
            }],
            chat: ChatState::Idle,
            in_flight: None,
            next_request_id: 0,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            visible_projects: visible_projects(&self.projects, &self.filter)
                .into_iter()
                .cloned()
                .collect(),
            selected_category: self.filter.selected_category,
            search_query: self.filter.search_query.clone(),
            chat: ChatViewModel {
                messages: self.messages.clone(),
                sending: self.chat == ChatState::Sending,
            },
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it; frontends re-render when true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn chat_state(&self) -> ChatState {
        self.chat
    }

    pub fn chat_input(&self) -> &str {
        &self.chat_input
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub(crate) fn select_category(&mut self, selected: CategoryFilter) {
        if self.filter.selected_category != selected {
            self.filter.selected_category = selected;
            self.dirty = true;
        }
    }

    pub(crate) fn set_search_query(&mut self, query: String) {
        if self.filter.search_query != query {
            self.filter.search_query = query;
            self.dirty = true;
        }
    }

    pub(crate) fn set_chat_input(&mut self, text: String) {
        self.chat_input = text;
    }

    /// Appends the user message, moves to Sending, and hands out the id for
    /// the outbound request. Callers must have validated `text` already.
    pub(crate) fn begin_request(&mut self, text: String) -> RequestId {
        self.chat_input.clear();
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text,
        });
        self.next_request_id += 1;
        self.in_flight = Some(self.next_request_id);
        self.chat = ChatState::Sending;
        self.dirty = true;
        self.next_request_id
    }

    /// Resolves the in-flight request, appending exactly one model message.
    ///
    /// The session returns to Idle on every outcome; a failed or blank reply
    /// degrades to a fixed fallback line rather than an error. Completions
    /// for any other request id are ignored and leave the state untouched.
    pub(crate) fn finish_request(&mut self, request_id: RequestId, reply: ReplyKind) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        let text = match reply {
            ReplyKind::Text(text) if !text.trim().is_empty() => text,
            ReplyKind::Text(_) => EMPTY_REPLY_FALLBACK.to_string(),
            ReplyKind::Failed => OFFLINE_FALLBACK.to_string(),
        };
        self.messages.push(ChatMessage {
            role: ChatRole::Model,
            text,
        });
        self.in_flight = None;
        self.chat = ChatState::Idle;
        self.dirty = true;
        true
    }
}
