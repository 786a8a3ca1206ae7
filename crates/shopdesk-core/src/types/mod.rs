mod customer;
mod order;
mod product;
mod shop;

pub use customer::{CustomerProfile, UNKNOWN_CUSTOMER};
pub use order::{
    DeliveryAddress, Order, OrderItem, OrderStatus, PaymentMethod, PaymentStatus,
};
pub use product::Product;
pub use shop::ShopProfile;
