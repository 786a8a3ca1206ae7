use dashmap::DashMap;
use shopdesk_core::types::UNKNOWN_CUSTOMER;
use shopdesk_docstore::{DocumentStore, Users};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::warn;

/// Resolved customer display identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerIdentity {
    pub name: String,
    pub phone: String,
}

impl CustomerIdentity {
    /// Identity used when the lookup fails or the document is missing
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN_CUSTOMER.to_string(),
            phone: String::new(),
        }
    }
}

/// Lookup cache for customer identities, keyed by user id.
///
/// Snapshots re-run aggregation wholesale, which would otherwise
/// re-fetch every customer document on every tick. Only successful
/// lookups are cached: a missing or failed lookup degrades to the
/// fallback identity for this tick and is retried on the next one,
/// keeping observable behavior identical to the uncached path.
pub struct CustomerCache {
    store: Arc<dyn DocumentStore>,
    entries: DashMap<String, CustomerIdentity>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CustomerCache {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            entries: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Resolve a customer's display identity, degrading on any failure
    pub async fn resolve(&self, user_id: &str) -> CustomerIdentity {
        if user_id.is_empty() {
            return CustomerIdentity::unknown();
        }

        if let Some(hit) = self.entries.get(user_id) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return hit.clone();
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        match Users::profile(&*self.store, user_id).await {
            Ok(Some(profile)) => {
                let identity = CustomerIdentity {
                    name: profile.resolved_name(),
                    phone: profile.resolved_phone(),
                };
                self.entries.insert(user_id.to_string(), identity.clone());
                identity
            }
            Ok(None) => CustomerIdentity::unknown(),
            Err(e) => {
                warn!(user_id, error = %e, "Customer lookup failed, using fallback identity");
                CustomerIdentity::unknown()
            }
        }
    }

    /// (hits, misses) since construction
    pub fn stats(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
