use crate::form::ProductForm;
use chrono::Utc;
use serde_json::json;
use shopdesk_core::types::Product;
use shopdesk_core::Result;
use shopdesk_docstore::{DocumentStore, Products, PRODUCTS};
use std::sync::Arc;
use tracing::info;

/// Catalog management for one shop's products.
///
/// Plain CRUD against the `products` collection: create stamps the
/// owning shop and creation time, edits overwrite in place, deletes
/// remove the document. Remote failures surface to the caller and
/// leave no partial local state behind.
pub struct CatalogService {
    store: Arc<dyn DocumentStore>,
    shop_id: String,
}

impl CatalogService {
    pub fn new(store: Arc<dyn DocumentStore>, shop_id: impl Into<String>) -> Self {
        Self {
            store,
            shop_id: shop_id.into(),
        }
    }

    /// Create a product from a validated form, returning its id
    pub async fn create_product(&self, form: &ProductForm) -> Result<String> {
        let product = form.validate_new()?;
        let fields = json!({
            "name": product.name,
            "description": product.description,
            "price": product.price,
            "category": product.category,
            "stock": product.stock,
            "imageUrl": product.image_url,
            "shopId": self.shop_id,
            "createdAt": Utc::now().to_rfc3339(),
            "isActive": true,
        });

        let id = self.store.create_document(PRODUCTS, fields).await?;
        info!(product_id = %id, name = %product.name, "Product created");
        Ok(id)
    }

    /// Overwrite a product's editable fields in place
    pub async fn update_product(&self, product_id: &str, form: &ProductForm) -> Result<()> {
        let update = form.validate_update()?;
        let partial = json!({
            "name": update.name,
            "description": update.description,
            "price": update.price,
            "stock": update.stock,
            "imageUrl": update.image_url,
        });

        self.store
            .update_document(PRODUCTS, product_id, partial)
            .await?;
        info!(product_id, "Product updated");
        Ok(())
    }

    pub async fn delete_product(&self, product_id: &str) -> Result<()> {
        self.store.delete_document(PRODUCTS, product_id).await?;
        info!(product_id, "Product deleted");
        Ok(())
    }

    pub async fn get_product(&self, product_id: &str) -> Result<Option<Product>> {
        Products::get(&*self.store, product_id).await
    }

    /// This shop's products only
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        Products::for_shop(&*self.store, &self.shop_id).await
    }

    /// Case-insensitive substring search over name and description
    pub fn search<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return products.iter().collect();
        }
        products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
