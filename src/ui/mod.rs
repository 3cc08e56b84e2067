pub mod app;
pub mod components;
pub mod state;
pub mod views;

pub use app::{handle_event, handle_key_event, render, run_tui};
pub use state::{AppState, FeedFactory, Page};
