use chrono::{DateTime, Local};
use shopdesk_aggregator::ShopOrder;
use shopdesk_core::types::OrderStatus;

/// Headline numbers for the dashboard.
///
/// Always derived from the full shop-scoped order set; the status
/// filter and search box never feed into these. Pure recomputation,
/// no persistence.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardStats {
    /// Orders created on the current local calendar day
    pub today_orders: u64,
    /// Shop-scoped revenue of today's orders, cancelled excluded
    pub today_revenue: f64,
    /// Orders still needing work (placed, confirmed, preparing), any day
    pub pending_orders: u64,
}

impl DashboardStats {
    /// Compute with "today" anchored to the local calendar day of `now`
    pub fn compute_at(orders: &[ShopOrder], now: DateTime<Local>) -> Self {
        let today = now.date_naive();
        let mut stats = Self::default();

        for order in orders {
            let is_today = order
                .created_at
                .map(|t| t.with_timezone(&Local).date_naive() >= today)
                .unwrap_or(false);

            if is_today {
                stats.today_orders += 1;
                if order.status != OrderStatus::Cancelled {
                    stats.today_revenue += order.total;
                }
            }
            if order.status.is_pending() {
                stats.pending_orders += 1;
            }
        }

        stats
    }

    /// Compute against the current wall clock
    pub fn compute(orders: &[ShopOrder]) -> Self {
        Self::compute_at(orders, Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn order(status: OrderStatus, total: f64, created_at: Option<DateTime<Local>>) -> ShopOrder {
        ShopOrder {
            id: "doc".to_string(),
            order_id: "ORD".to_string(),
            user_id: String::new(),
            user_email: String::new(),
            customer_name: String::new(),
            customer_phone: String::new(),
            items: Vec::new(),
            total,
            total_amount: total,
            delivery_address: None,
            delivery_fee: 0.0,
            status,
            payment_method: shopdesk_core::types::PaymentMethod::Cash,
            payment_status: shopdesk_core::types::PaymentStatus::Pending,
            created_at: created_at.map(|t| t.with_timezone(&Utc)),
            updated_at: None,
            cancelled_at: None,
            customer_notes: String::new(),
        }
    }

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 8, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_today_revenue_excludes_cancelled_but_counts_the_order() {
        let now = noon();
        let orders = vec![
            order(OrderStatus::Delivered, 100.0, Some(now - Duration::hours(2))),
            order(OrderStatus::Cancelled, 50.0, Some(now - Duration::hours(1))),
        ];

        let stats = DashboardStats::compute_at(&orders, now);
        assert_eq!(stats.today_orders, 2);
        assert_eq!(stats.today_revenue, 100.0);
    }

    #[test]
    fn test_yesterday_is_not_today() {
        let now = noon();
        let orders = vec![
            order(OrderStatus::Delivered, 100.0, Some(now - Duration::days(1))),
            order(OrderStatus::Delivered, 80.0, Some(now - Duration::hours(11))),
        ];

        let stats = DashboardStats::compute_at(&orders, now);
        assert_eq!(stats.today_orders, 1);
        assert_eq!(stats.today_revenue, 80.0);
    }

    #[test]
    fn test_local_midnight_boundary() {
        let now = noon();
        let start_of_today = Local.with_ymd_and_hms(2026, 8, 8, 0, 0, 0).unwrap();
        let just_before = start_of_today - Duration::seconds(1);

        let orders = vec![
            order(OrderStatus::Placed, 10.0, Some(start_of_today)),
            order(OrderStatus::Placed, 20.0, Some(just_before)),
        ];

        let stats = DashboardStats::compute_at(&orders, now);
        assert_eq!(stats.today_orders, 1);
        assert_eq!(stats.today_revenue, 10.0);
    }

    #[test]
    fn test_pending_counts_any_day() {
        let now = noon();
        let orders = vec![
            order(OrderStatus::Placed, 10.0, Some(now - Duration::days(3))),
            order(OrderStatus::Confirmed, 10.0, Some(now - Duration::days(2))),
            order(OrderStatus::Preparing, 10.0, Some(now)),
            order(OrderStatus::OutForDelivery, 10.0, Some(now)),
            order(OrderStatus::Delivered, 10.0, Some(now - Duration::days(1))),
            order(OrderStatus::Cancelled, 10.0, None),
        ];

        let stats = DashboardStats::compute_at(&orders, now);
        assert_eq!(stats.pending_orders, 3);
    }

    #[test]
    fn test_missing_created_at_never_counts_as_today() {
        let now = noon();
        let orders = vec![order(OrderStatus::Placed, 10.0, None)];
        let stats = DashboardStats::compute_at(&orders, now);
        assert_eq!(stats.today_orders, 0);
        assert_eq!(stats.today_revenue, 0.0);
        assert_eq!(stats.pending_orders, 1);
    }
}
