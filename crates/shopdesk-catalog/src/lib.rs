mod form;
mod service;
mod upload;

pub use form::{NewProduct, ProductForm, ProductUpdate};
pub use service::CatalogService;
pub use upload::ImageUploader;
