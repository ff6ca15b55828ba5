use crate::{AppState, ChatState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::CategorySelected(selected) => {
            state.select_category(selected);
            Vec::new()
        }
        Msg::SearchChanged(query) => {
            state.set_search_query(query);
            Vec::new()
        }
        Msg::ChatInputChanged(text) => {
            state.set_chat_input(text);
            Vec::new()
        }
        Msg::ChatSubmitted => {
            let text = state.chat_input().trim().to_string();
            // Re-entrancy guard: one outbound request at a time. Blank
            // submissions and submissions while Sending are silent no-ops.
            if text.is_empty() || state.chat_state() == ChatState::Sending {
                return (state, Vec::new());
            }
            let history = state.messages().to_vec();
            let request_id = state.begin_request(text.clone());
            vec![
                Effect::RequestReply {
                    request_id,
                    history,
                    text,
                },
                Effect::ScrollChatToLatest,
            ]
        }
        Msg::ReplyArrived { request_id, reply } => {
            if state.finish_request(request_id, reply) {
                vec![Effect::ScrollChatToLatest]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
