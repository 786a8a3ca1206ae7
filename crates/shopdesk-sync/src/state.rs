use chrono::{DateTime, Utc};
use shopdesk_aggregator::ShopOrder;
use shopdesk_stats::DashboardStats;
use tokio::sync::RwLock;

/// Engine counters
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineStats {
    pub snapshots_processed: u64,
    pub orders_aggregated: u64,
    pub last_snapshot_at: Option<DateTime<Utc>>,
}

/// Live dashboard state.
///
/// Replaced wholesale on every snapshot; readers only ever observe a
/// complete aggregation, never a partially applied one.
#[derive(Default)]
pub struct DashboardState {
    orders: RwLock<Vec<ShopOrder>>,
    stats: RwLock<DashboardStats>,
    engine: RwLock<EngineStats>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly aggregated order set and its stats
    pub async fn replace(&self, orders: Vec<ShopOrder>, stats: DashboardStats) {
        let aggregated = orders.len() as u64;
        *self.orders.write().await = orders;
        *self.stats.write().await = stats;

        let mut engine = self.engine.write().await;
        engine.snapshots_processed += 1;
        engine.orders_aggregated = aggregated;
        engine.last_snapshot_at = Some(Utc::now());
    }

    /// Drop everything (sign-out)
    pub async fn clear(&self) {
        self.orders.write().await.clear();
        *self.stats.write().await = DashboardStats::default();
        *self.engine.write().await = EngineStats::default();
    }

    pub async fn orders(&self) -> Vec<ShopOrder> {
        self.orders.read().await.clone()
    }

    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn stats(&self) -> DashboardStats {
        *self.stats.read().await
    }

    pub async fn engine_stats(&self) -> EngineStats {
        *self.engine.read().await
    }
}
