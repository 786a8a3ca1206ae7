//! Order status machine
//!
//! Happy path is the linear chain placed -> confirmed -> preparing ->
//! out_for_delivery -> delivered. Cancellation is reachable from
//! placed or confirmed only. Delivered and cancelled are terminal.

use crate::error::{Result, ShopError};
use crate::types::{Order, OrderStatus};

/// Successor in the happy-path chain, or `None` from a terminal state.
pub const fn next_status(current: OrderStatus) -> Option<OrderStatus> {
    match current {
        OrderStatus::Placed => Some(OrderStatus::Confirmed),
        OrderStatus::Confirmed => Some(OrderStatus::Preparing),
        OrderStatus::Preparing => Some(OrderStatus::OutForDelivery),
        OrderStatus::OutForDelivery => Some(OrderStatus::Delivered),
        OrderStatus::Delivered | OrderStatus::Cancelled => None,
    }
}

/// Whether any status change is still permitted
pub fn can_advance(order: &Order) -> bool {
    !order.status.is_terminal()
}

/// Whether the order can still be cancelled
pub fn can_cancel(order: &Order) -> bool {
    matches!(order.status, OrderStatus::Placed | OrderStatus::Confirmed)
}

/// Validate a requested transition without applying it.
///
/// Rejects a transition to the current status, any transition out of a
/// terminal state, and cancellation from anywhere past confirmed.
pub fn validate_transition(current: OrderStatus, requested: OrderStatus) -> Result<()> {
    if requested == current {
        return Err(ShopError::SameStatus(current));
    }
    if current.is_terminal() {
        return Err(ShopError::TerminalStatus(current));
    }
    if requested == OrderStatus::Cancelled
        && !matches!(current, OrderStatus::Placed | OrderStatus::Confirmed)
    {
        return Err(ShopError::NotCancellable(current));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_with_status(status: OrderStatus) -> Order {
        Order::from_fields("doc-1", json!({ "status": status.as_str() })).unwrap()
    }

    #[test]
    fn test_next_status_chain() {
        assert_eq!(
            next_status(OrderStatus::Placed),
            Some(OrderStatus::Confirmed)
        );
        assert_eq!(
            next_status(OrderStatus::Confirmed),
            Some(OrderStatus::Preparing)
        );
        assert_eq!(
            next_status(OrderStatus::Preparing),
            Some(OrderStatus::OutForDelivery)
        );
        assert_eq!(
            next_status(OrderStatus::OutForDelivery),
            Some(OrderStatus::Delivered)
        );
        assert_eq!(next_status(OrderStatus::Delivered), None);
        assert_eq!(next_status(OrderStatus::Cancelled), None);
    }

    #[test]
    fn test_can_advance_and_cancel() {
        assert!(can_advance(&order_with_status(OrderStatus::Placed)));
        assert!(can_advance(&order_with_status(OrderStatus::OutForDelivery)));
        assert!(!can_advance(&order_with_status(OrderStatus::Delivered)));
        assert!(!can_advance(&order_with_status(OrderStatus::Cancelled)));

        assert!(can_cancel(&order_with_status(OrderStatus::Placed)));
        assert!(can_cancel(&order_with_status(OrderStatus::Confirmed)));
        assert!(!can_cancel(&order_with_status(OrderStatus::Preparing)));
        assert!(!can_cancel(&order_with_status(OrderStatus::Delivered)));
    }

    #[test]
    fn test_same_status_is_rejected() {
        for status in OrderStatus::all() {
            assert!(matches!(
                validate_transition(*status, *status),
                Err(ShopError::SameStatus(_))
            ));
        }
    }

    #[test]
    fn test_terminal_states_reject_all_transitions() {
        assert!(matches!(
            validate_transition(OrderStatus::Delivered, OrderStatus::Placed),
            Err(ShopError::TerminalStatus(OrderStatus::Delivered))
        ));
        assert!(matches!(
            validate_transition(OrderStatus::Cancelled, OrderStatus::Confirmed),
            Err(ShopError::TerminalStatus(OrderStatus::Cancelled))
        ));
    }

    #[test]
    fn test_cancellation_window() {
        assert!(validate_transition(OrderStatus::Placed, OrderStatus::Cancelled).is_ok());
        assert!(validate_transition(OrderStatus::Confirmed, OrderStatus::Cancelled).is_ok());
        assert!(matches!(
            validate_transition(OrderStatus::Preparing, OrderStatus::Cancelled),
            Err(ShopError::NotCancellable(OrderStatus::Preparing))
        ));
        assert!(matches!(
            validate_transition(OrderStatus::OutForDelivery, OrderStatus::Cancelled),
            Err(ShopError::NotCancellable(OrderStatus::OutForDelivery))
        ));
    }

    #[test]
    fn test_forward_jumps_allowed_from_non_terminal() {
        // The dashboard lets the owner move an order to any non-current
        // status while it is live, not just the immediate successor.
        assert!(validate_transition(OrderStatus::Placed, OrderStatus::Delivered).is_ok());
        assert!(validate_transition(OrderStatus::Preparing, OrderStatus::Confirmed).is_ok());
    }
}
