use shopdesk_core::AppConfig;
use shopdesk_docstore::{DocumentStore, MemoryStore, Shops};
use shopdesk_sync::{DashboardState, IdentityHandle, SyncEngine};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (ignore if not found)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("shopdesk_sync=info".parse()?)
                .add_directive("shopdesk_aggregator=info".parse()?),
        )
        .init();

    info!("Shopdesk dashboard starting...");

    // Load configuration (validates env vars)
    let config = match AppConfig::load() {
        Ok(config) => {
            info!(shop_id = %config.shop_id, "Configuration loaded");
            config
        }
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    // In-memory document store; a remote client plugs into the same
    // trait without touching the rest of the wiring
    let store = Arc::new(MemoryStore::new());

    // Optional seed data (initial collection documents)
    if let Some(seed_file) = config.seed_file.as_deref() {
        match load_seed(&store, seed_file) {
            Ok(count) => info!(seed_file, documents = count, "Seed data loaded"),
            Err(e) => {
                error!(seed_file, error = %e, "Failed to load seed data");
                std::process::exit(1);
            }
        }
    } else {
        warn!("SEED_FILE not set, starting with empty collections");
    }

    // Greet with the shop's display name
    match Shops::profile(&*store, &config.shop_id).await {
        Ok(Some(profile)) => info!(shop = %profile.resolved_name(), "Dashboard ready"),
        Ok(None) => info!("No shop profile found, using defaults"),
        Err(e) => warn!(error = %e, "Failed to load shop profile"),
    }

    // Shared dashboard state and the engine that feeds it
    let state = Arc::new(DashboardState::new());
    let mut engine = SyncEngine::new(
        config.clone(),
        store.clone() as Arc<dyn DocumentStore>,
        state.clone(),
    );

    // Fixed identity for a headless run; a real auth provider would
    // drive this handle instead
    let (identity_handle, identity) = IdentityHandle::new(Some(config.shop_id.clone()));

    // Setup shutdown signal
    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);

    // Handle Ctrl+C
    let shutdown_tx_clone = shutdown_tx.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Shutdown signal received (Ctrl+C)");
        shutdown_tx_clone.send(()).ok();
    });

    // Spawn status printer
    let state_clone = state.clone();
    let status_interval = config.sync.status_interval_secs;
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(status_interval));
        loop {
            interval.tick().await;
            let stats = state_clone.stats().await;
            let engine_stats = state_clone.engine_stats().await;
            let orders = state_clone.order_count().await;
            info!(
                orders = orders,
                today_orders = stats.today_orders,
                today_revenue = stats.today_revenue,
                pending = stats.pending_orders,
                snapshots = engine_stats.snapshots_processed,
                "Status"
            );
        }
    });

    // Run the engine until shutdown
    if let Err(e) = engine.run(identity, shutdown_rx).await {
        error!(error = %e, "Sync engine error");
        std::process::exit(1);
    }

    drop(identity_handle);
    info!("Shopdesk dashboard shutdown complete");
    Ok(())
}

/// Load initial documents from a JSON file shaped as
/// `{ "collection": [ { "id": "...", ...fields }, ... ], ... }`.
/// The `id` key is optional; absent ids are assigned.
fn load_seed(store: &MemoryStore, path: impl AsRef<Path>) -> anyhow::Result<usize> {
    let content = std::fs::read_to_string(path)?;
    let data: serde_json::Value = serde_json::from_str(&content)?;
    let serde_json::Value::Object(collections) = data else {
        anyhow::bail!("seed file must be a JSON object keyed by collection");
    };

    let mut count = 0;
    for (collection, documents) in collections {
        let serde_json::Value::Array(documents) = documents else {
            anyhow::bail!("collection {collection:?} must be an array of documents");
        };
        for mut fields in documents {
            let Some(map) = fields.as_object_mut() else {
                anyhow::bail!("documents in {collection:?} must be objects");
            };
            let id = match map.remove("id") {
                Some(serde_json::Value::String(id)) => id,
                _ => Uuid::new_v4().to_string(),
            };
            store.seed(&collection, &id, fields);
            count += 1;
        }
    }
    Ok(count)
}
