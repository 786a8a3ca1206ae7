use chrono::{DateTime, Utc};
use shopdesk_core::types::{
    DeliveryAddress, OrderItem, OrderStatus, PaymentMethod, PaymentStatus,
};

/// Shop-scoped view of a customer order.
///
/// A single customer order may span several shops; this view restricts
/// it to one shop's line items, with the totals recomputed over exactly
/// those items and the customer display identity denormalized in.
#[derive(Debug, Clone)]
pub struct ShopOrder {
    /// Store-assigned document id
    pub id: String,
    pub order_id: String,
    pub user_id: String,
    pub user_email: String,
    pub customer_name: String,
    pub customer_phone: String,
    /// Only this shop's line items
    pub items: Vec<OrderItem>,
    /// Sum of price x quantity over `items`; supersedes the store-wide total
    pub total: f64,
    pub total_amount: f64,
    pub delivery_address: Option<DeliveryAddress>,
    pub delivery_fee: f64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub customer_notes: String,
}
