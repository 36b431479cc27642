use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::storage::feed::Subscription;

/// Collections the application persists
///
/// One collection per entity type, plus a `config` collection holding
/// singleton records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Reports,
    Announcements,
    Config,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Reports => "reports",
            Collection::Announcements => "announcements",
            Collection::Config => "config",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored record with its store-assigned identity and write ordering
///
/// `revision` increases with every write to the same key. It is assigned by
/// the store, never by the caller, and is the authoritative last-write-wins
/// ordering consumed by `sync::LiveList`.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: String,
    pub revision: i64,
    pub value: Value,
}

/// What happened to a record, as pushed to subscribers
#[derive(Clone, Debug)]
pub enum ChangeKind {
    Upserted(Document),
    Removed { id: String },
}

/// A change notification for one collection
#[derive(Clone, Debug)]
pub struct ChangeEvent {
    pub collection: Collection,
    pub kind: ChangeKind,
}

/// Store operation failures
///
/// These surface to the user as a recoverable notification; callers keep
/// their last-known-good state. Corrupt local blobs are handled inside the
/// local backend and never reach this type.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store operation {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("store I/O failed on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize collection {collection}: {source}")]
    Serialize {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> Self {
        StoreError::Database {
            operation: operation.to_string(),
            source,
        }
    }
}

/// Uniform persistence contract over the local and remote backends
///
/// `create` assigns the record key (timestamp-based in local mode, UUID in
/// remote mode) and, for object payloads, writes it back into the payload's
/// `id` field so stored records carry their own identity. `put` upserts
/// verbatim, `remove` is idempotent, and `subscribe` returns a push channel
/// that detaches when dropped.
#[async_trait]
pub trait StoreAdapter: Send + Sync {
    async fn get_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;

    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>, StoreError>;

    async fn create(&self, collection: Collection, value: Value) -> Result<Document, StoreError>;

    async fn put(
        &self,
        collection: Collection,
        id: &str,
        value: Value,
    ) -> Result<Document, StoreError>;

    async fn remove(&self, collection: Collection, id: &str) -> Result<(), StoreError>;

    fn subscribe(&self, collection: Collection) -> Subscription;
}

/// Write an adapter-assigned id into an object payload
pub(crate) fn embed_id(value: &mut Value, id: &str) {
    if let Value::Object(map) = value {
        map.insert("id".to_string(), Value::String(id.to_string()));
    }
}
