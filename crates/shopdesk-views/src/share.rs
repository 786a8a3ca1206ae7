use crate::address::format_delivery_address;
use shopdesk_aggregator::ShopOrder;
use tracing::debug;
use url::Url;

const SHARE_BASE_URL: &str = "https://wa.me/";

/// Pre-filled order summary for the share hand-off.
///
/// The hand-off itself is fire-and-forget: the message is composed
/// here and passed to an external share target, no response handled.
pub fn share_message(order: &ShopOrder) -> String {
    let items = order
        .items
        .iter()
        .map(|item| format!("- {} (₹{} x {})", item.name, item.price, item.quantity))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Order Details:\n\nOrder ID: {}\nCustomer: {}\nPhone: {}\nAddress: {}\n\nItems:\n{}\n\nTotal: ₹{}",
        order.order_id,
        order.customer_name,
        order.customer_phone,
        format_delivery_address(order.delivery_address.as_ref()),
        items,
        order.total,
    )
}

/// Share link with the message URL-encoded into the `text` parameter
pub fn share_url(order: &ShopOrder) -> String {
    let message = share_message(order);
    match Url::parse_with_params(SHARE_BASE_URL, &[("text", message.as_str())]) {
        Ok(url) => {
            debug!(order_id = %order.order_id, "Composed share link");
            url.into()
        }
        // The base URL is a constant, so this arm is unreachable in practice
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopdesk_core::types::{OrderItem, OrderStatus, PaymentMethod, PaymentStatus};

    fn order() -> ShopOrder {
        ShopOrder {
            id: "doc-1".to_string(),
            order_id: "ORD-42".to_string(),
            user_id: "u1".to_string(),
            user_email: "rahul@example.com".to_string(),
            customer_name: "Rahul Sharma".to_string(),
            customer_phone: "9876543210".to_string(),
            items: vec![
                OrderItem {
                    product_id: String::new(),
                    name: "Milk".to_string(),
                    price: 30.0,
                    quantity: 2,
                    image_url: String::new(),
                    shop_id: "shop-1".to_string(),
                },
                OrderItem {
                    product_id: String::new(),
                    name: "Bread".to_string(),
                    price: 40.0,
                    quantity: 1,
                    image_url: String::new(),
                    shop_id: "shop-1".to_string(),
                },
            ],
            total: 100.0,
            total_amount: 100.0,
            delivery_address: None,
            delivery_fee: 0.0,
            status: OrderStatus::Placed,
            payment_method: PaymentMethod::Cash,
            payment_status: PaymentStatus::Pending,
            created_at: None,
            updated_at: None,
            cancelled_at: None,
            customer_notes: String::new(),
        }
    }

    #[test]
    fn test_message_lists_every_item_and_total() {
        let message = share_message(&order());
        assert!(message.contains("Order ID: ORD-42"));
        assert!(message.contains("Customer: Rahul Sharma"));
        assert!(message.contains("- Milk (₹30 x 2)"));
        assert!(message.contains("- Bread (₹40 x 1)"));
        assert!(message.contains("Total: ₹100"));
        assert!(message.contains("Delivery address not available"));
    }

    #[test]
    fn test_share_url_is_encoded() {
        let url = share_url(&order());
        assert!(url.starts_with("https://wa.me/?text="));
        // Newlines and the order id survive encoding
        assert!(url.contains("ORD-42"));
        assert!(!url.contains('\n'));
    }
}
