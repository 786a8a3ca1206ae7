use crate::types::OrderStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Failed to decode document in '{collection}': {message}")]
    DocumentDecode { collection: String, message: String },

    #[error("Document not found: {collection}/{id}")]
    DocumentNotFound { collection: String, id: String },

    #[error("Order is already {0}")]
    SameStatus(OrderStatus),

    #[error("Order is {0}; no further status changes are allowed")]
    TerminalStatus(OrderStatus),

    #[error("Order is {0}; only placed or confirmed orders can be cancelled")]
    NotCancellable(OrderStatus),

    #[error("Entered amount {entered} does not match the order total {expected}")]
    PaymentMismatch { expected: f64, entered: f64 },

    #[error("Invalid cash amount: {0:?}")]
    InvalidAmount(String),

    #[error("Cash confirmation is not available for this order")]
    PaymentNotDue,

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Backend failure reported by a remote `DocumentStore` client
    #[error("Store error: {0}")]
    Store(String),

    #[error("Image upload error: {0}")]
    Upload(String),
}

pub type Result<T> = std::result::Result<T, ShopError>;
