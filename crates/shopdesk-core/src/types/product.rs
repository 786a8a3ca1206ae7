use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_active() -> bool {
    true
}

/// Product document from the `products` collection
///
/// Fully owned by the catalog component: created by the shop owner,
/// overwritten in place on edit, never versioned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned document id
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    /// Owning shop (auth uid)
    #[serde(default)]
    pub shop_id: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn from_fields(id: &str, fields: Value) -> crate::error::Result<Self> {
        let mut product: Product = serde_json::from_value(fields).map_err(|e| {
            crate::error::ShopError::DocumentDecode {
                collection: "products".to_string(),
                message: e.to_string(),
            }
        })?;
        product.id = id.to_string();
        Ok(product)
    }
}
