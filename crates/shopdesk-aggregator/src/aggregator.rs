use crate::customer_cache::CustomerCache;
use crate::view::ShopOrder;
use shopdesk_core::types::{Order, OrderItem};
use shopdesk_core::Result;
use shopdesk_docstore::{Document, DocumentStore};
use std::sync::Arc;
use tracing::{debug, warn};

/// Produces shop-scoped order views from raw order documents.
///
/// Applied independently to every order in a snapshot: a document that
/// fails to decode, or a customer lookup that fails, never prevents
/// the other orders from being produced.
pub struct OrderAggregator {
    shop_id: String,
    customers: CustomerCache,
}

impl OrderAggregator {
    pub fn new(store: Arc<dyn DocumentStore>, shop_id: impl Into<String>) -> Self {
        Self {
            shop_id: shop_id.into(),
            customers: CustomerCache::new(store),
        }
    }

    pub fn shop_id(&self) -> &str {
        &self.shop_id
    }

    pub fn customer_cache(&self) -> &CustomerCache {
        &self.customers
    }

    /// Aggregate a full snapshot, preserving its order
    pub async fn aggregate_snapshot(&self, snapshot: &[Document]) -> Vec<ShopOrder> {
        let mut views = Vec::with_capacity(snapshot.len());
        for document in snapshot {
            match self.aggregate_document(document).await {
                Ok(Some(view)) => views.push(view),
                // No line item belongs to this shop
                Ok(None) => {}
                Err(e) => {
                    warn!(doc_id = %document.id, error = %e, "Skipping undecodable order document");
                }
            }
        }
        debug!(
            shop_id = %self.shop_id,
            raw = snapshot.len(),
            aggregated = views.len(),
            "Snapshot aggregated"
        );
        views
    }

    /// Decode one raw document and scope it to this shop
    pub async fn aggregate_document(&self, document: &Document) -> Result<Option<ShopOrder>> {
        let order = Order::from_fields(&document.id, document.fields.clone())?;
        Ok(self.aggregate_order(order).await)
    }

    /// Scope a decoded order to this shop.
    ///
    /// Returns `None` when no line item belongs to the shop. Otherwise
    /// the items are filtered down, the totals are recomputed over the
    /// kept items only, and the customer identity is resolved.
    pub async fn aggregate_order(&self, order: Order) -> Option<ShopOrder> {
        if !order.involves_shop(&self.shop_id) {
            return None;
        }

        let items: Vec<OrderItem> = order
            .items
            .iter()
            .filter(|item| item.shop_id == self.shop_id)
            .cloned()
            .collect();
        let total: f64 = items.iter().map(OrderItem::line_total).sum();

        let customer = self.customers.resolve(&order.user_id).await;

        Some(ShopOrder {
            id: order.id,
            order_id: order.order_id,
            user_id: order.user_id,
            user_email: order.user_email,
            customer_name: customer.name,
            customer_phone: customer.phone,
            items,
            total,
            total_amount: total,
            delivery_address: order.delivery_address,
            delivery_fee: order.delivery_fee,
            status: order.status,
            payment_method: order.payment_method,
            payment_status: order.payment_status,
            created_at: order.created_at,
            updated_at: order.updated_at,
            cancelled_at: order.cancelled_at,
            customer_notes: order.customer_notes,
        })
    }
}
