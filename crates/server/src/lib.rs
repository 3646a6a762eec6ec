//! Server crate for the StudyAI recommendation service.
//!
//! This crate contains the engine that produces every payload and the
//! axum HTTP layer that exposes it.

pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod responses;
pub mod server;

pub use config::ServerConfig;
pub use engine::{EngineConfig, RandomSource, StudyEngine};
pub use error::{ApiError, ApiResult};
pub use handlers::{create_router, with_layers, AppState};
pub use server::StudyServer;
