use crate::auth::IdentityReceiver;
use crate::state::DashboardState;
use shopdesk_aggregator::OrderAggregator;
use shopdesk_core::{AppConfig, Result};
use shopdesk_docstore::{DocumentStore, Orders, Snapshot};
use shopdesk_stats::DashboardStats;
use std::sync::Arc;
use std::time::Duration;
use tokio::select;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Subscription engine driving the dashboard.
///
/// One session per signed-in identity: subscribe to the orders feed,
/// re-run aggregation and stats wholesale on every snapshot, publish
/// the result into the shared `DashboardState`. An identity change
/// tears the session down and starts a fresh one (with an empty
/// customer cache); sign-out clears the state.
pub struct SyncEngine {
    config: AppConfig,
    store: Arc<dyn DocumentStore>,
    state: Arc<DashboardState>,
}

enum SessionEnd {
    Shutdown,
    IdentityChanged,
    FeedClosed,
}

impl SyncEngine {
    pub fn new(config: AppConfig, store: Arc<dyn DocumentStore>, state: Arc<DashboardState>) -> Self {
        Self {
            config,
            store,
            state,
        }
    }

    pub fn state(&self) -> &Arc<DashboardState> {
        &self.state
    }

    /// Run until shutdown, following the identity feed
    pub async fn run(
        &mut self,
        mut identity: IdentityReceiver,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<()> {
        loop {
            let current = identity.borrow_and_update().clone();
            match current {
                Some(shop_id) => {
                    info!(shop_id = %shop_id, "Starting dashboard session");
                    match self
                        .run_session(&shop_id, &mut identity, &mut shutdown)
                        .await?
                    {
                        SessionEnd::Shutdown => return Ok(()),
                        SessionEnd::IdentityChanged => continue,
                        SessionEnd::FeedClosed => {
                            warn!(
                                retry_delay_ms = self.config.sync.retry_delay_ms,
                                "Order feed closed, re-subscribing"
                            );
                            tokio::time::sleep(Duration::from_millis(
                                self.config.sync.retry_delay_ms,
                            ))
                            .await;
                        }
                    }
                }
                None => {
                    self.state.clear().await;
                    info!("Signed out, dashboard cleared");
                    select! {
                        _ = shutdown.recv() => return Ok(()),
                        changed = identity.changed() => {
                            if changed.is_err() {
                                // Identity feed dropped while signed out
                                return Ok(());
                            }
                        }
                    }
                }
            }
        }
    }

    async fn run_session(
        &self,
        shop_id: &str,
        identity: &mut IdentityReceiver,
        shutdown: &mut broadcast::Receiver<()>,
    ) -> Result<SessionEnd> {
        let aggregator = OrderAggregator::new(self.store.clone(), shop_id);
        let mut subscription = self.store.subscribe(Orders::watch_all()).await?;
        let mut identity_alive = true;

        loop {
            select! {
                _ = shutdown.recv() => {
                    info!("Shutdown signal received");
                    return Ok(SessionEnd::Shutdown);
                }
                changed = identity.changed(), if identity_alive => {
                    if changed.is_err() {
                        // Sender gone; keep serving the current identity
                        // until shutdown
                        identity_alive = false;
                        continue;
                    }
                    return Ok(SessionEnd::IdentityChanged);
                }
                maybe_snapshot = subscription.recv() => {
                    match maybe_snapshot {
                        Some(snapshot) => self.process_snapshot(&aggregator, snapshot).await,
                        None => return Ok(SessionEnd::FeedClosed),
                    }
                }
            }
        }
    }

    async fn process_snapshot(&self, aggregator: &OrderAggregator, snapshot: Snapshot) {
        let views = aggregator.aggregate_snapshot(&snapshot).await;
        let stats = DashboardStats::compute(&views);
        let aggregated = views.len();
        self.state.replace(views, stats).await;

        debug!(
            raw = snapshot.len(),
            aggregated,
            today_orders = stats.today_orders,
            pending = stats.pending_orders,
            "Snapshot applied"
        );
    }
}
