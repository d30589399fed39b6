pub mod config;
pub mod error;
pub mod tui;

pub use config::ProxyConfig;
pub use error::ApplyError;
pub use tui::{render_to_buffer, view, Action, App, ApplyDone, Effect, Provider};
