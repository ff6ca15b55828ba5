use crate::filter::CategoryFilter;
use crate::project::Project;
use crate::state::ChatMessage;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub visible_projects: Vec<Project>,
    pub selected_category: CategoryFilter,
    pub search_query: String,
    pub chat: ChatViewModel,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatViewModel {
    pub messages: Vec<ChatMessage>,
    pub sending: bool,
}
