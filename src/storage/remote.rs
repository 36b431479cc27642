use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde_json::Value;
use uuid::Uuid;

use crate::storage::adapter::{
    embed_id, ChangeEvent, ChangeKind, Collection, Document, StoreAdapter, StoreError,
};
use crate::storage::feed::{ChangeFeed, Subscription};
use crate::types::db::document::{self, ActiveModel, Entity as Documents};

/// Database-backed document store
///
/// Per-record operations over the shared `documents` table, with a push
/// feed notifying subscribers of every committed write. Failures surface as
/// `StoreError` and never disturb caller-side state.
pub struct RemoteStore {
    db: DatabaseConnection,
    feed: ChangeFeed,
}

impl RemoteStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            feed: ChangeFeed::new(),
        }
    }

    fn decode_row(row: document::Model) -> Option<Document> {
        match serde_json::from_str(&row.payload) {
            Ok(value) => Some(Document {
                id: row.doc_id,
                revision: row.revision,
                value,
            }),
            Err(e) => {
                tracing::warn!(
                    collection = %row.collection,
                    doc_id = %row.doc_id,
                    error = %e,
                    "skipping undecodable document payload"
                );
                None
            }
        }
    }

    fn encode(collection: Collection, value: &Value) -> Result<String, StoreError> {
        serde_json::to_string(value).map_err(|e| StoreError::Serialize {
            collection,
            source: e,
        })
    }
}

#[async_trait::async_trait]
impl StoreAdapter for RemoteStore {
    async fn get_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let rows = Documents::find()
            .filter(document::Column::Collection.eq(collection.as_str()))
            .all(&self.db)
            .await
            .map_err(|e| StoreError::database("get_all", e))?;

        Ok(rows.into_iter().filter_map(Self::decode_row).collect())
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>, StoreError> {
        let row = Documents::find_by_id((collection.as_str().to_string(), id.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| StoreError::database("get", e))?;

        Ok(row.and_then(Self::decode_row))
    }

    async fn create(&self, collection: Collection, mut value: Value) -> Result<Document, StoreError> {
        let id = Uuid::new_v4().to_string();
        embed_id(&mut value, &id);
        let payload = Self::encode(collection, &value)?;

        let row = ActiveModel {
            collection: Set(collection.as_str().to_string()),
            doc_id: Set(id.clone()),
            payload: Set(payload),
            revision: Set(1),
            updated_at: Set(Utc::now().timestamp_millis()),
        };
        row.insert(&self.db)
            .await
            .map_err(|e| StoreError::database("create", e))?;

        let doc = Document {
            id,
            revision: 1,
            value,
        };
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
        let payload = Self::encode(collection, &value)?;
        let existing = Documents::find_by_id((collection.as_str().to_string(), id.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| StoreError::database("put", e))?;

        let revision = match existing {
            Some(row) => {
                let revision = row.revision + 1;
                let mut active: ActiveModel = row.into();
                active.payload = Set(payload);
                active.revision = Set(revision);
                active.updated_at = Set(Utc::now().timestamp_millis());
                active
                    .update(&self.db)
                    .await
                    .map_err(|e| StoreError::database("put", e))?;
                revision
            }
            None => {
                let row = ActiveModel {
                    collection: Set(collection.as_str().to_string()),
                    doc_id: Set(id.to_string()),
                    payload: Set(payload),
                    revision: Set(1),
                    updated_at: Set(Utc::now().timestamp_millis()),
                };
                row.insert(&self.db)
                    .await
                    .map_err(|e| StoreError::database("put", e))?;
                1
            }
        };

        let doc = Document {
            id: id.to_string(),
            revision,
            value,
        };
        self.feed.publish(ChangeEvent {
            collection,
            kind: ChangeKind::Upserted(doc.clone()),
        });
        Ok(doc)
    }

    async fn remove(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        let result = Documents::delete_by_id((collection.as_str().to_string(), id.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| StoreError::database("remove", e))?;

        // Unknown ids delete zero rows and that is fine
        if result.rows_affected > 0 {
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
