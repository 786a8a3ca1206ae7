use crate::client::{DocumentStore, Subscription};
use crate::document::{Document, Query, Snapshot};
use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use serde_json::Value;
use shopdesk_core::{Result, ShopError};
use tokio::sync::mpsc;
use tracing::warn;
use uuid::Uuid;

const SNAPSHOT_CHANNEL_CAPACITY: usize = 32;

struct Watcher {
    query: Query,
    sender: mpsc::Sender<Snapshot>,
}

/// In-memory document store with live query subscriptions.
///
/// Backs tests and local runs; production deployments plug a remote
/// client into the same `DocumentStore` trait. Every mutation
/// re-evaluates the registered queries and pushes a full snapshot to
/// their subscribers.
#[derive(Default)]
pub struct MemoryStore {
    collections: DashMap<String, DashMap<String, Value>>,
    watchers: Mutex<Vec<Watcher>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document under a caller-chosen id (seed/restore path)
    pub fn seed(&self, collection: &str, id: &str, fields: Value) {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);
        self.notify(collection);
    }

    /// Total document count across all collections
    pub fn count(&self) -> usize {
        self.collections.iter().map(|c| c.value().len()).sum()
    }

    fn run_query(&self, query: &Query) -> Snapshot {
        let mut results: Snapshot = match self.collections.get(&query.collection) {
            Some(collection) => collection
                .iter()
                .map(|entry| Document::new(entry.key().clone(), entry.value().clone()))
                .filter(|doc| query.matches(doc))
                .collect(),
            None => Vec::new(),
        };
        query.sort(&mut results);
        results
    }

    /// Push fresh snapshots to every watcher of a collection.
    ///
    /// Closed receivers are pruned here; a full channel means the
    /// subscriber is lagging and will catch up on the next change.
    fn notify(&self, collection: &str) {
        let mut watchers = self.watchers.lock();
        watchers.retain(|watcher| {
            if watcher.query.collection != collection {
                return true;
            }
            let snapshot = self.run_query(&watcher.query);
            match watcher.sender.try_send(snapshot) {
                Ok(()) => true,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    warn!(collection, "Subscriber lagging, snapshot dropped");
                    true
                }
                Err(mpsc::error::TrySendError::Closed(_)) => false,
            }
        });
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|c| c.get(id).map(|v| Document::new(id, v.clone()))))
    }

    async fn create_document(&self, collection: &str, fields: Value) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);
        self.notify(collection);
        Ok(id)
    }

    async fn update_document(&self, collection: &str, id: &str, partial: Value) -> Result<()> {
        let Some(documents) = self.collections.get(collection) else {
            return Err(ShopError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        };
        {
            let Some(mut existing) = documents.get_mut(id) else {
                return Err(ShopError::DocumentNotFound {
                    collection: collection.to_string(),
                    id: id.to_string(),
                });
            };
            match partial {
                Value::Object(updates) => {
                    if let Value::Object(fields) = existing.value_mut() {
                        for (key, value) in updates {
                            fields.insert(key, value);
                        }
                    } else {
                        *existing.value_mut() = Value::Object(updates);
                    }
                }
                other => *existing.value_mut() = other,
            }
        }
        drop(documents);
        self.notify(collection);
        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<()> {
        let removed = self
            .collections
            .get(collection)
            .and_then(|c| c.remove(id))
            .is_some();
        if !removed {
            return Err(ShopError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        self.notify(collection);
        Ok(())
    }

    async fn query(&self, query: &Query) -> Result<Snapshot> {
        Ok(self.run_query(query))
    }

    async fn subscribe(&self, query: Query) -> Result<Subscription> {
        let (sender, receiver) = mpsc::channel(SNAPSHOT_CHANNEL_CAPACITY);
        // Initial snapshot before any change arrives
        let initial = self.run_query(&query);
        let _ = sender.try_send(initial);
        self.watchers.lock().push(Watcher { query, sender });
        Ok(Subscription::new(receiver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_get_delete_round_trip() {
        let store = MemoryStore::new();
        let id = store
            .create_document("products", json!({ "name": "Milk" }))
            .await
            .unwrap();

        let doc = store.get_document("products", &id).await.unwrap().unwrap();
        assert_eq!(doc.field("name"), &json!("Milk"));

        store.delete_document("products", &id).await.unwrap();
        assert!(store.get_document("products", &id).await.unwrap().is_none());
        assert!(store.delete_document("products", &id).await.is_err());
    }

    #[tokio::test]
    async fn test_update_merges_partial_fields() {
        let store = MemoryStore::new();
        store.seed(
            "orders",
            "o1",
            json!({ "status": "placed", "total": 250.0, "items": [{ "name": "Milk" }] }),
        );

        store
            .update_document("orders", "o1", json!({ "status": "confirmed" }))
            .await
            .unwrap();

        let doc = store.get_document("orders", "o1").await.unwrap().unwrap();
        assert_eq!(doc.field("status"), &json!("confirmed"));
        assert_eq!(doc.field("total"), &json!(250.0));
        assert_eq!(doc.field("items"), &json!([{ "name": "Milk" }]));
    }

    #[tokio::test]
    async fn test_update_missing_document_errors() {
        let store = MemoryStore::new();
        let err = store
            .update_document("orders", "nope", json!({ "status": "confirmed" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::DocumentNotFound { .. }));
    }

    #[tokio::test]
    async fn test_query_filters_and_orders() {
        let store = MemoryStore::new();
        store.seed("orders", "o1", json!({ "userId": "u1", "createdAt": "2026-08-07T10:00:00Z" }));
        store.seed("orders", "o2", json!({ "userId": "u2", "createdAt": "2026-08-08T10:00:00Z" }));
        store.seed("orders", "o3", json!({ "userId": "u1", "createdAt": "2026-08-08T11:00:00Z" }));

        let snapshot = store
            .query(
                &Query::collection("orders")
                    .where_eq("userId", "u1")
                    .order_by_desc("createdAt"),
            )
            .await
            .unwrap();
        let ids: Vec<&str> = snapshot.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["o3", "o1"]);
    }

    #[tokio::test]
    async fn test_subscription_receives_initial_and_change_snapshots() {
        let store = MemoryStore::new();
        store.seed("orders", "o1", json!({ "status": "placed" }));

        let mut subscription = store
            .subscribe(Query::collection("orders"))
            .await
            .unwrap();

        let initial = subscription.recv().await.unwrap();
        assert_eq!(initial.len(), 1);

        // Seed fired before the subscription; a later update must push
        // a fresh snapshot.
        store
            .update_document("orders", "o1", json!({ "status": "confirmed" }))
            .await
            .unwrap();
        let next = subscription.recv().await.unwrap();
        assert_eq!(next[0].field("status"), &json!("confirmed"));

        // Changes in other collections do not wake this subscription
        store
            .create_document("products", json!({ "name": "Milk" }))
            .await
            .unwrap();
        store
            .create_document("orders", json!({ "status": "placed" }))
            .await
            .unwrap();
        let after = subscription.recv().await.unwrap();
        assert_eq!(after.len(), 2);
    }
}
