use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use chrono::Utc;
use serde_json::Value;

use crate::storage::adapter::{
    embed_id, ChangeEvent, ChangeKind, Collection, Document, StoreAdapter, StoreError,
};
use crate::storage::feed::{ChangeFeed, Subscription};

/// Whole-collection blob store
///
/// Each collection is one serialized JSON array in
/// `<dir>/<collection>.json`, rewritten in full on every mutation. Record
/// ids are timestamp-based strings. A corrupt blob is logged and treated
/// as an empty collection rather than an error.
///
/// All I/O is synchronous and happens under one mutex; revisions exist only
/// in memory and restart from zero per process, which is enough for the
/// single-client ordering this backend serves.
pub struct LocalStore {
    dir: Option<PathBuf>,
    collections: Mutex<HashMap<Collection, Vec<Document>>>,
    next_revision: AtomicI64,
    feed: ChangeFeed,
}

impl LocalStore {
    /// Open a directory-backed store, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::Io {
            path: dir.display().to_string(),
            source: e,
        })?;
        Ok(Self {
            dir: Some(dir),
            collections: Mutex::new(HashMap::new()),
            next_revision: AtomicI64::new(1),
            feed: ChangeFeed::new(),
        })
    }

    /// Purely in-memory store, used by tests and ephemeral runs
    pub fn in_memory() -> Self {
        Self {
            dir: None,
            collections: Mutex::new(HashMap::new()),
            next_revision: AtomicI64::new(1),
            feed: ChangeFeed::new(),
        }
    }

    fn blob_path(&self, collection: Collection) -> Option<PathBuf> {
        self.dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.json", collection.as_str())))
    }

    fn next_revision(&self) -> i64 {
        self.next_revision.fetch_add(1, Ordering::Relaxed)
    }

    /// Read a collection blob from disk, tolerating absence and corruption
    fn load_blob(&self, collection: Collection) -> Vec<Document> {
        let Some(path) = self.blob_path(collection) else {
            return Vec::new();
        };
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read collection blob");
                return Vec::new();
            }
        };
        let values: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(
                    collection = %collection,
                    error = %e,
                    "corrupt collection blob, treating as empty"
                );
                return Vec::new();
            }
        };
        values
            .into_iter()
            .filter_map(|value| {
                let id = value.get("id").and_then(Value::as_str).map(str::to_string);
                match id {
                    Some(id) => Some(Document {
                        id,
                        revision: self.next_revision(),
                        value,
                    }),
                    None => {
                        tracing::warn!(collection = %collection, "dropping record without id");
                        None
                    }
                }
            })
            .collect()
    }

    fn flush(&self, collection: Collection, docs: &[Document]) -> Result<(), StoreError> {
        let Some(path) = self.blob_path(collection) else {
            return Ok(());
        };
        let values: Vec<&Value> = docs.iter().map(|d| &d.value).collect();
        let raw = serde_json::to_string(&values).map_err(|e| StoreError::Serialize {
            collection,
            source: e,
        })?;
        fs::write(&path, raw).map_err(|e| StoreError::Io {
            path: path.display().to_string(),
            source: e,
        })
    }

    fn with_collection<T>(
        &self,
        collection: Collection,
        f: impl FnOnce(&mut Vec<Document>) -> T,
    ) -> T {
        let mut map = self.collections.lock().expect("local store lock poisoned");
        let docs = map
            .entry(collection)
            .or_insert_with(|| self.load_blob(collection));
        f(docs)
    }

    /// Millisecond-timestamp id, bumped past collisions
    fn assign_id(existing: &[Document]) -> String {
        let mut candidate = Utc::now().timestamp_millis();
        loop {
            let id = candidate.to_string();
            if !existing.iter().any(|d| d.id == id) {
                return id;
            }
            candidate += 1;
        }
    }
}

#[async_trait::async_trait]
impl StoreAdapter for LocalStore {
    async fn get_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        Ok(self.with_collection(collection, |docs| docs.clone()))
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>, StoreError> {
        Ok(self.with_collection(collection, |docs| {
            docs.iter().find(|d| d.id == id).cloned()
        }))
    }

    async fn create(&self, collection: Collection, mut value: Value) -> Result<Document, StoreError> {
        let (doc, result) = self.with_collection(collection, |docs| {
            let id = Self::assign_id(docs);
            embed_id(&mut value, &id);
            let doc = Document {
                id,
                revision: self.next_revision(),
                value,
            };
            docs.push(doc.clone());
            let result = self.flush(collection, docs);
            (doc, result)
        });
        result?;
        self.feed.publish(ChangeEvent {
            collection,
            kind: ChangeKind::Upserted(doc.clone()),
        });
        Ok(doc)
    }

    async fn put(
        &self,
        collection: Collection,
        id: &str,
        value: Value,
    ) -> Result<Document, StoreError> {
        let (doc, result) = self.with_collection(collection, |docs| {
            let doc = Document {
                id: id.to_string(),
                revision: self.next_revision(),
                value,
            };
            match docs.iter_mut().find(|d| d.id == id) {
                Some(slot) => *slot = doc.clone(),
                None => docs.push(doc.clone()),
            }
            let result = self.flush(collection, docs);
            (doc, result)
        });
        result?;
        self.feed.publish(ChangeEvent {
            collection,
            kind: ChangeKind::Upserted(doc.clone()),
        });
        Ok(doc)
    }

    async fn remove(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        let (removed, result) = self.with_collection(collection, |docs| {
            let before = docs.len();
            docs.retain(|d| d.id != id);
            let removed = docs.len() != before;
            let result = if removed {
                self.flush(collection, docs)
            } else {
                Ok(())
            };
            (removed, result)
        });
        result?;
        if removed {
            self.feed.publish(ChangeEvent {
                collection,
                kind: ChangeKind::Removed { id: id.to_string() },
            });
        }
        Ok(())
    }

    fn subscribe(&self, collection: Collection) -> Subscription {
        self.feed.subscribe(collection)
    }
}
