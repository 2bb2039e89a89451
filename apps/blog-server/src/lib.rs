//! # Blog Server
//!
//! Actix-web REST API over the blog post store.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use server::{RunningServer, StartupError, configure_app, start, start_with_state};
pub use state::{AppState, StorageKind};
