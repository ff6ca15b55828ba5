mod app;
mod effects;
mod input;
mod logging;
mod render;

pub use app::run_app;
