mod address;
mod filter;
mod share;

pub use address::{format_delivery_address, ADDRESS_UNAVAILABLE};
pub use filter::{OrderFilter, StatusFilter};
pub use share::{share_message, share_url};
