use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use showcase_core::{update, AppState, Effect, Msg};
use showcase_engine::AssistantSettings;
use site_logging::{site_info, site_warn};

use super::effects::EffectRunner;
use super::input::{self, Command};
use super::logging::{self, LogDestination};
use super::render;
use crate::catalog;

pub fn run_app() {
    logging::initialize(LogDestination::File);

    let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        site_warn!("GEMINI_API_KEY is not set; assistant requests will fall back");
    }

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(AssistantSettings::new(api_key), msg_tx);

    let mut state = AppState::new(catalog::initial_projects());
    site_info!("Loaded {} projects", state.view().visible_projects.len());

    print_lines(&render::render_gallery(&state.view()));
    print_lines(&render::render_chat(&state.view().chat));
    print_lines(input::HELP);

    let line_rx = spawn_stdin_reader();

    loop {
        // Drain engine completions first so replies appear promptly.
        while let Ok(msg) = msg_rx.try_recv() {
            state = dispatch(state, msg, &runner);
        }

        match line_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(line) => match input::parse_line(&line) {
                Command::Quit => break,
                Command::Help => print_lines(input::HELP),
                Command::ShowProjects => print_lines(&render::render_gallery(&state.view())),
                Command::ShowChat => print_lines(&render::render_chat(&state.view().chat)),
                Command::Dispatch(msgs) => {
                    for msg in msgs {
                        state = dispatch(state, msg, &runner);
                    }
                }
            },
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (mut state, effects) = update(state, msg);
    let reveal_chat = effects
        .iter()
        .any(|effect| matches!(effect, Effect::ScrollChatToLatest));
    runner.enqueue(effects);

    let was_dirty = state.consume_dirty();
    if reveal_chat {
        // The terminal analogue of scroll-to-latest: show the newest entry.
        print_lines(&render::chat_tail(&state.view().chat));
    } else if was_dirty {
        print_lines(&render::render_gallery(&state.view()));
    }
    state
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (line_tx, line_rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    line_rx
}

fn print_lines<S: AsRef<str>>(lines: &[S]) {
    for line in lines {
        println!("{}", line.as_ref());
    }
}
