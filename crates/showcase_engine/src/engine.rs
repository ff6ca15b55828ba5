use std::sync::{mpsc, Arc};
use std::thread;

use site_logging::site_warn;

use crate::assistant::{Assistant, AssistantSettings, GeminiAssistant};
use crate::{ChatTurn, EngineEvent, RequestId};

enum EngineCommand {
    Request {
        request_id: RequestId,
        history: Vec<ChatTurn>,
        text: String,
    },
}

/// Fire-and-forget handle to the assistant request loop. Completions arrive
/// on the event receiver returned by the constructor.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: AssistantSettings) -> (Self, mpsc::Receiver<EngineEvent>) {
        Self::with_assistant(Arc::new(GeminiAssistant::new(settings)))
    }

    /// Runs the request loop over any `Assistant` implementation.
    pub fn with_assistant(assistant: Arc<dyn Assistant>) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let assistant = assistant.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(assistant.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn request(
        &self,
        request_id: RequestId,
        history: Vec<ChatTurn>,
        text: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::Request {
            request_id,
            history,
            text: text.into(),
        });
    }
}

async fn handle_command(
    assistant: &dyn Assistant,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Request {
            request_id,
            history,
            text,
        } => {
            let result = assistant.reply(&history, &text).await;
            if let Err(err) = &result {
                site_warn!(
                    "assistant request {} failed: {} ({})",
                    request_id,
                    err.kind,
                    err.message
                );
            }
            let _ = event_tx.send(EngineEvent::ReplyCompleted { request_id, result });
        }
    }
}
