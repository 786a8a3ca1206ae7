use chrono::Utc;
use serde_json::json;
use shopdesk_aggregator::ShopOrder;
use shopdesk_core::status::{next_status, validate_transition};
use shopdesk_core::types::{Order, OrderStatus};
use shopdesk_core::{Result, ShopError};
use shopdesk_docstore::{DocumentStore, Orders};
use std::sync::Arc;
use tracing::info;

/// Applies order status transitions and persists them.
///
/// Every write is a partial update touching only `status`,
/// `updatedAt` and (on cancellation) `cancelledAt`, never items or
/// totals. Nothing is mutated locally on success: the live
/// subscription is the source of truth for the rendered list, so the
/// change becomes visible when the next snapshot arrives.
pub struct OrderService {
    store: Arc<dyn DocumentStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub(crate) fn store(&self) -> &dyn DocumentStore {
        &*self.store
    }

    /// Move an order to `new_status` (shop side)
    pub async fn update_status(&self, order: &ShopOrder, new_status: OrderStatus) -> Result<()> {
        self.apply(&order.id, &order.order_id, order.status, new_status)
            .await
    }

    /// Move an order one step along the happy path
    pub async fn advance(&self, order: &ShopOrder) -> Result<OrderStatus> {
        let next = next_status(order.status).ok_or(ShopError::TerminalStatus(order.status))?;
        self.apply(&order.id, &order.order_id, order.status, next)
            .await?;
        Ok(next)
    }

    /// Cancel an order from the shop dashboard
    pub async fn cancel(&self, order: &ShopOrder) -> Result<()> {
        self.apply(
            &order.id,
            &order.order_id,
            order.status,
            OrderStatus::Cancelled,
        )
        .await
    }

    /// Cancel an order from the customer's own orders view
    pub async fn cancel_order(&self, order: &Order) -> Result<()> {
        self.apply(
            &order.id,
            &order.order_id,
            order.status,
            OrderStatus::Cancelled,
        )
        .await
    }

    async fn apply(
        &self,
        doc_id: &str,
        order_id: &str,
        current: OrderStatus,
        new_status: OrderStatus,
    ) -> Result<()> {
        validate_transition(current, new_status)?;

        let now = Utc::now().to_rfc3339();
        let partial = if new_status == OrderStatus::Cancelled {
            json!({
                "status": new_status,
                "updatedAt": now,
                "cancelledAt": now,
            })
        } else {
            json!({
                "status": new_status,
                "updatedAt": now,
            })
        };

        Orders::update(&*self.store, doc_id, partial).await?;

        info!(
            order_id,
            from = %current,
            to = %new_status,
            "Order status updated"
        );
        Ok(())
    }
}
