mod client;
mod collections;
mod document;
mod memory;

pub use client::{DocumentStore, Subscription};
pub use collections::{Orders, Products, Shops, Users, ORDERS, PRODUCTS, SHOPS, USERS};
pub use document::{Direction, Document, Filter, Query, Snapshot};
pub use memory::MemoryStore;
