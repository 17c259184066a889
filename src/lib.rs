pub mod app;
pub mod errors;
pub mod handlers;
pub mod medications;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
