use crate::error::{Result, ShopError};
use std::env;

/// Sync-related configuration
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Delay before re-opening a dropped order subscription (default: 1000)
    pub retry_delay_ms: u64,
    /// Interval between status log lines (default: 30)
    pub status_interval_secs: u64,
}

impl SyncConfig {
    pub fn from_env() -> Self {
        let retry_delay_ms = env::var("SYNC_RETRY_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1000);

        let status_interval_secs = env::var("STATUS_INTERVAL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Self {
            retry_delay_ms,
            status_interval_secs,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Image-upload endpoint configuration
///
/// The uploader is an unsigned upload endpoint identified by a cloud
/// name and an upload preset. Enabled by default when both are set.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub enabled: bool,
    pub cloud_name: Option<String>,
    pub upload_preset: Option<String>,
}

impl UploadConfig {
    pub fn from_env() -> Self {
        let cloud_name = env::var("UPLOAD_CLOUD_NAME").ok();
        let upload_preset = env::var("UPLOAD_PRESET").ok();
        let enabled = env::var("UPLOAD_ENABLED")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(cloud_name.is_some() && upload_preset.is_some());

        Self {
            enabled,
            cloud_name,
            upload_preset,
        }
    }

    /// Check if image upload is fully configured and enabled
    pub fn is_configured(&self) -> bool {
        self.enabled && self.cloud_name.is_some() && self.upload_preset.is_some()
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Complete dashboard configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shop identity the dashboard aggregates for (auth provider uid)
    pub shop_id: String,
    /// Optional JSON file with initial collection documents
    pub seed_file: Option<String>,
    pub sync: SyncConfig,
    pub upload: UploadConfig,
}

impl AppConfig {
    /// Load complete configuration from environment variables
    pub fn load() -> Result<Self> {
        let shop_id = env::var("SHOP_ID")
            .map_err(|_| ShopError::MissingEnvVar("SHOP_ID".to_string()))?
            .trim()
            .to_string();

        if shop_id.is_empty() {
            return Err(ShopError::MissingEnvVar("SHOP_ID (empty)".to_string()));
        }

        let seed_file = env::var("SEED_FILE").ok();

        Ok(Self {
            shop_id,
            seed_file,
            sync: SyncConfig::default(),
            upload: UploadConfig::default(),
        })
    }
}
