use std::sync::mpsc;
use std::thread;

use showcase_core::{ChatMessage, ChatRole, Effect, Msg, ReplyKind};
use showcase_engine::{AssistantSettings, ChatTurn, EngineEvent, EngineHandle, TurnRole};
use site_logging::{site_info, site_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: AssistantSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let (engine, event_rx) = EngineHandle::new(settings);
        spawn_event_loop(event_rx, msg_tx);
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RequestReply {
                    request_id,
                    history,
                    text,
                } => {
                    site_info!(
                        "RequestReply id={} history_len={} text_len={}",
                        request_id,
                        history.len(),
                        text.len()
                    );
                    self.engine.request(request_id, map_history(&history), text);
                }
                Effect::ScrollChatToLatest => {
                    // view effect; the app loop reveals the transcript tail
                }
            }
        }
    }
}

fn spawn_event_loop(event_rx: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            match event {
                EngineEvent::ReplyCompleted { request_id, result } => {
                    let reply = match result {
                        Ok(text) => ReplyKind::Text(text),
                        Err(err) => {
                            site_warn!("Request {} failed: {}", request_id, err.kind);
                            ReplyKind::Failed
                        }
                    };
                    let _ = msg_tx.send(Msg::ReplyArrived { request_id, reply });
                }
            }
        }
    });
}

fn map_history(history: &[ChatMessage]) -> Vec<ChatTurn> {
    history
        .iter()
        .map(|message| ChatTurn {
            role: match message.role {
                ChatRole::User => TurnRole::User,
                ChatRole::Model => TurnRole::Model,
            },
            text: message.text.clone(),
        })
        .collect()
}
