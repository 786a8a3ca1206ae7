use crate::document::{Document, Query, Snapshot};
use async_trait::async_trait;
use serde_json::Value;
use shopdesk_core::Result;
use tokio::sync::mpsc;

/// Live feed of full query snapshots.
///
/// A new snapshot is delivered on every relevant change, plus one
/// immediately after subscribing. Dropping the subscription
/// unsubscribes.
pub struct Subscription {
    receiver: mpsc::Receiver<Snapshot>,
}

impl Subscription {
    pub fn new(receiver: mpsc::Receiver<Snapshot>) -> Self {
        Self { receiver }
    }

    /// Next snapshot, or `None` once the feed is closed
    pub async fn recv(&mut self) -> Option<Snapshot> {
        self.receiver.recv().await
    }
}

/// Interface to the remote document store.
///
/// Collections hold schemaless JSON documents addressed by
/// store-assigned ids. Updates are partial: only the supplied fields
/// are overwritten. All typed decoding happens on the consumer side.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Create a document and return its assigned id
    async fn create_document(&self, collection: &str, fields: Value) -> Result<String>;

    /// Merge `partial` fields into an existing document
    async fn update_document(&self, collection: &str, id: &str, partial: Value) -> Result<()>;

    async fn delete_document(&self, collection: &str, id: &str) -> Result<()>;

    async fn query(&self, query: &Query) -> Result<Snapshot>;

    /// Open a live subscription for a query
    async fn subscribe(&self, query: Query) -> Result<Subscription>;
}
