pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod renderer;
pub mod services;
pub mod state;

// Convenient re-exports (so call sites can do `lantern::Session`, etc.)
pub use commands::{Flow, process_command};
pub use services::snapshot::{SnapshotFormat, SnapshotStore};
pub use state::session::Session;
