use crate::service::OrderService;
use chrono::Utc;
use serde_json::json;
use shopdesk_core::types::{Order, OrderStatus, PaymentMethod, PaymentStatus};
use shopdesk_core::{Result, ShopError};
use shopdesk_docstore::Orders;
use tracing::info;

/// Whether the cash-confirmation action applies to an order: cash
/// orders with payment still pending, once the order is delivered.
pub fn cash_payment_due(order: &Order) -> bool {
    order.payment_method == PaymentMethod::Cash
        && order.payment_status == PaymentStatus::Pending
        && order.status == OrderStatus::Delivered
}

impl OrderService {
    /// Confirm a cash payment against the entered amount.
    ///
    /// The entered amount must equal the order total exactly; any
    /// mismatch is rejected locally before a write happens. On success
    /// only `paymentStatus` and `updatedAt` are written.
    pub async fn confirm_cash_payment(&self, order: &Order, entered: &str) -> Result<()> {
        if !cash_payment_due(order) {
            return Err(ShopError::PaymentNotDue);
        }

        let entered = entered.trim();
        let amount: f64 = entered
            .parse()
            .map_err(|_| ShopError::InvalidAmount(entered.to_string()))?;
        if amount != order.total {
            return Err(ShopError::PaymentMismatch {
                expected: order.total,
                entered: amount,
            });
        }

        let partial = json!({
            "paymentStatus": PaymentStatus::Paid,
            "updatedAt": Utc::now().to_rfc3339(),
        });
        Orders::update(self.store(), &order.id, partial).await?;

        info!(order_id = %order.order_id, amount, "Cash payment confirmed");
        Ok(())
    }
}
