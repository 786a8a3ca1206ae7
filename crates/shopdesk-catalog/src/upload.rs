//! Image upload client
//!
//! Talks to an unsigned upload endpoint: multipart POST of the image
//! bytes plus the upload preset, returning a publicly fetchable URL.
//! Callers pair failures with `ProductForm::record_upload`, which
//! reverts the image reference without touching the rest of the form.

use reqwest::multipart;
use reqwest::Client;
use serde::Deserialize;
use shopdesk_core::{Result, ShopError, UploadConfig};
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct UploadErrorBody {
    error: Option<UploadErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct UploadErrorMessage {
    message: String,
}

pub struct ImageUploader {
    client: Client,
    config: UploadConfig,
}

impl ImageUploader {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Upload image bytes and return the hosted URL
    pub async fn upload(&self, bytes: Vec<u8>, filename: &str) -> Result<String> {
        let (Some(cloud_name), Some(preset)) =
            (&self.config.cloud_name, &self.config.upload_preset)
        else {
            return Err(ShopError::Upload(
                "image upload is not configured".to_string(),
            ));
        };
        if !self.config.enabled {
            return Err(ShopError::Upload("image upload is disabled".to_string()));
        }

        let url = format!("https://api.cloudinary.com/v1_1/{cloud_name}/image/upload");
        let part = multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("image/jpeg")
            .map_err(|e| ShopError::Upload(e.to_string()))?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("upload_preset", preset.clone());

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ShopError::Upload(e.to_string()))?;

        if response.status().is_success() {
            let body: UploadResponse = response
                .json()
                .await
                .map_err(|e| ShopError::Upload(e.to_string()))?;
            debug!(url = %body.secure_url, "Image uploaded");
            Ok(body.secure_url)
        } else {
            let status = response.status();
            let message = response
                .json::<UploadErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .map(|e| e.message)
                .unwrap_or_else(|| "Upload failed".to_string());
            warn!(status = %status, message = %message, "Image upload rejected");
            Err(ShopError::Upload(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_uploader_errors_without_request() {
        let uploader = ImageUploader::new(UploadConfig {
            enabled: false,
            cloud_name: None,
            upload_preset: None,
        });
        let err = uploader.upload(vec![0xFF, 0xD8], "img.jpg").await.unwrap_err();
        assert!(matches!(err, ShopError::Upload(_)));
    }

    #[tokio::test]
    async fn test_disabled_uploader_errors() {
        let uploader = ImageUploader::new(UploadConfig {
            enabled: false,
            cloud_name: Some("demo".to_string()),
            upload_preset: Some("unsigned".to_string()),
        });
        let err = uploader.upload(vec![0xFF, 0xD8], "img.jpg").await.unwrap_err();
        assert!(matches!(err, ShopError::Upload(_)));
    }
}
