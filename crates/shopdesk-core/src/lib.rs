pub mod config;
pub mod error;
pub mod status;
pub mod types;

pub use config::{AppConfig, SyncConfig, UploadConfig};
pub use error::{Result, ShopError};
