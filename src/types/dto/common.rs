use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::storage::{ChangeEvent, ChangeKind};

/// Generic acknowledgement with a human-readable message
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// One change pushed over a watch stream
///
/// `payload` carries the serialized record for upserts and is absent for
/// removals; `revision` is the store's own write ordering, which the
/// receiving list applies last-write-wins.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEventDto {
    pub collection: String,
    /// "upserted" or "removed"
    pub kind: String,
    pub id: String,
    pub revision: Option<i64>,
    pub payload: Option<String>,
}

impl From<ChangeEvent> for ChangeEventDto {
    fn from(event: ChangeEvent) -> Self {
        let collection = event.collection.as_str().to_string();
        match event.kind {
            ChangeKind::Upserted(doc) => ChangeEventDto {
                collection,
                kind: "upserted".to_string(),
                id: doc.id,
                revision: Some(doc.revision),
                payload: Some(doc.value.to_string()),
            },
            ChangeKind::Removed { id } => ChangeEventDto {
                collection,
                kind: "removed".to_string(),
                id,
                revision: None,
                payload: None,
            },
        }
    }
}
