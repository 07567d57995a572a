pub mod app;
pub mod calendar;
pub mod completions;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod navigation;
pub mod state;
pub mod stats;
pub mod view;

pub use app::router;
pub use config::resolve_addr;
pub use state::{AppState, Tracker};
