mod payment;
mod service;

pub use payment::cash_payment_due;
pub use service::OrderService;
