pub mod api;
pub mod draw;
pub mod events;
pub mod providers;
pub mod state;

pub use api::{apply_config, spawn_apply, ConfigRequest};
pub use draw::{render_to_buffer, view};
pub use events::{event_loop, run};
pub use providers::Provider;
pub use state::{Action, App, ApplyDone, ApplyRequest, Effect};
