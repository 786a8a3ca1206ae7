mod auth;
mod engine;
mod state;

pub use auth::{IdentityHandle, IdentityReceiver};
pub use engine::SyncEngine;
pub use state::{DashboardState, EngineStats};
