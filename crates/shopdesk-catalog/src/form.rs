use shopdesk_core::{Result, ShopError};
use tracing::warn;

/// Product form fields as entered by the shop owner (all text)
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub stock: String,
    pub image_url: String,
}

/// Validated payload for creating a product
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub image_url: String,
}

/// Validated payload for an in-place edit
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub image_url: String,
}

fn parse_price(raw: &str) -> Result<f64> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ShopError::Validation(format!("price is not a number: {raw:?}")))?;
    if !price.is_finite() || price < 0.0 {
        return Err(ShopError::Validation(format!(
            "price must be non-negative: {raw:?}"
        )));
    }
    Ok(price)
}

fn parse_stock(raw: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .map_err(|_| ShopError::Validation(format!("stock is not a whole number: {raw:?}")))
}

impl ProductForm {
    /// Validate a creation form. Every field except the image is
    /// required; submission is blocked locally so no partial write
    /// can happen.
    pub fn validate_new(&self) -> Result<NewProduct> {
        if self.name.trim().is_empty()
            || self.description.trim().is_empty()
            || self.price.trim().is_empty()
            || self.category.trim().is_empty()
            || self.stock.trim().is_empty()
        {
            return Err(ShopError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }

        Ok(NewProduct {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: parse_price(&self.price)?,
            category: self.category.trim().to_string(),
            stock: parse_stock(&self.stock)?,
            image_url: self.image_url.clone(),
        })
    }

    /// Validate an edit form. Name, price and stock are required;
    /// description and image default to empty.
    pub fn validate_update(&self) -> Result<ProductUpdate> {
        if self.name.trim().is_empty()
            || self.price.trim().is_empty()
            || self.stock.trim().is_empty()
        {
            return Err(ShopError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }

        Ok(ProductUpdate {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: parse_price(&self.price)?,
            stock: parse_stock(&self.stock)?,
            image_url: self.image_url.clone(),
        })
    }

    /// Record the outcome of an image upload. A failed upload reverts
    /// the image reference to empty; the rest of the form is untouched.
    pub fn record_upload(&mut self, outcome: Result<String>) {
        match outcome {
            Ok(url) => self.image_url = url,
            Err(e) => {
                warn!(error = %e, "Image upload failed, clearing image reference");
                self.image_url.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProductForm {
        ProductForm {
            name: "Basmati Rice 5kg".to_string(),
            description: "Long grain".to_string(),
            price: "520".to_string(),
            category: "groceries".to_string(),
            stock: "12".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_validate_new_parses_numbers() {
        let product = filled_form().validate_new().unwrap();
        assert_eq!(product.price, 520.0);
        assert_eq!(product.stock, 12);
    }

    #[test]
    fn test_missing_required_field_blocks_submission() {
        let mut form = filled_form();
        form.category.clear();
        assert!(matches!(
            form.validate_new(),
            Err(ShopError::Validation(_))
        ));

        // Edit form does not require a category
        assert!(form.validate_update().is_ok());
        form.stock = "  ".to_string();
        assert!(form.validate_update().is_err());
    }

    #[test]
    fn test_bad_numbers_rejected() {
        let mut form = filled_form();
        form.price = "free".to_string();
        assert!(form.validate_new().is_err());

        let mut form = filled_form();
        form.price = "-5".to_string();
        assert!(form.validate_new().is_err());

        let mut form = filled_form();
        form.stock = "3.5".to_string();
        assert!(form.validate_new().is_err());
    }

    #[test]
    fn test_record_upload_reverts_image_on_failure() {
        let mut form = filled_form();
        form.record_upload(Ok("https://img.example.com/rice.jpg".to_string()));
        assert_eq!(form.image_url, "https://img.example.com/rice.jpg");

        form.record_upload(Err(ShopError::Upload("connection reset".to_string())));
        assert_eq!(form.image_url, "");
        assert_eq!(form.name, "Basmati Rice 5kg");
    }
}
