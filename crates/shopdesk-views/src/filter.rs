use shopdesk_aggregator::ShopOrder;
use shopdesk_core::types::OrderStatus;

/// Status filter with the catch-all sentinel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Parse the UI filter key; `"all"` is the pass-through sentinel
    pub fn parse(key: &str) -> Option<Self> {
        if key == "all" {
            return Some(StatusFilter::All);
        }
        key.parse::<OrderStatus>().ok().map(StatusFilter::Only)
    }

    pub fn matches(&self, order: &ShopOrder) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => order.status == *status,
        }
    }
}

/// View filter over the aggregated order set: status filter first,
/// then free-text search, composed as a logical AND.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: StatusFilter,
    pub search: String,
}

impl OrderFilter {
    pub fn new(status: StatusFilter, search: impl Into<String>) -> Self {
        Self {
            status,
            search: search.into(),
        }
    }

    /// Apply to the aggregated set, preserving order.
    ///
    /// A blank (empty or whitespace-only) search passes everything
    /// that survived the status filter.
    pub fn apply<'a>(&self, orders: &'a [ShopOrder]) -> Vec<&'a ShopOrder> {
        let by_status = orders.iter().filter(|order| self.status.matches(order));

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return by_status.collect();
        }
        by_status
            .filter(|order| matches_search(order, &needle))
            .collect()
    }
}

/// Case-insensitive substring match over order id, customer name,
/// email, phone and item names; any one field matching is enough.
fn matches_search(order: &ShopOrder, needle: &str) -> bool {
    order.order_id.to_lowercase().contains(needle)
        || order.customer_name.to_lowercase().contains(needle)
        || order.user_email.to_lowercase().contains(needle)
        || order.customer_phone.to_lowercase().contains(needle)
        || order
            .items
            .iter()
            .any(|item| item.name.to_lowercase().contains(needle))
}
