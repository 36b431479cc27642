use serde_json::Value;

use crate::storage::{ChangeEvent, ChangeKind, Document};

/// A list view kept consistent with the store by pushed changes
///
/// Writes made locally land as optimistic upserts; the authoritative push
/// for the same key reconciles them in place. The store-assigned revision
/// settles races: an event older than what the list already holds for that
/// key is dropped. Entries update in place rather than being removed and
/// re-inserted, so a reconciliation never reorders the visible list.
#[derive(Clone, Debug, Default)]
pub struct LiveList {
    items: Vec<Document>,
}

impl LiveList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Document] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.items.iter().find(|d| d.id == id)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.items.iter().map(|d| &d.value)
    }

    /// Replace the whole list from a fetch
    ///
    /// A failed fetch must not go through this: callers keep the
    /// last-known-good list by simply not calling it (`refresh` wraps that
    /// rule).
    pub fn hydrate(&mut self, items: Vec<Document>) {
        self.items = items;
    }

    /// Apply a fetch result, preserving the current list on failure
    ///
    /// Returns whether the list was replaced.
    pub fn refresh<E>(&mut self, fetched: Result<Vec<Document>, E>) -> bool {
        match fetched {
            Ok(items) => {
                self.items = items;
                true
            }
            Err(_) => false,
        }
    }

    /// Upsert a locally written document before the push arrives
    pub fn apply_local(&mut self, doc: Document) {
        self.upsert(doc);
    }

    /// Apply a pushed change from the store
    pub fn apply(&mut self, event: ChangeEvent) {
        match event.kind {
            ChangeKind::Upserted(doc) => self.upsert(doc),
            ChangeKind::Removed { id } => self.items.retain(|d| d.id != id),
        }
    }

    fn upsert(&mut self, doc: Document) {
        match self.items.iter_mut().find(|d| d.id == doc.id) {
            Some(slot) => {
                // Last-write-wins by the store's own ordering; a stale push
                // (optimistic echo racing a newer write) is dropped.
                if doc.revision >= slot.revision {
                    *slot = doc;
                }
            }
            None => self.items.insert(0, doc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Collection;
    use serde_json::json;

    fn doc(id: &str, revision: i64, title: &str) -> Document {
        Document {
            id: id.to_string(),
            revision,
            value: json!({ "id": id, "title": title }),
        }
    }

    fn upserted(d: Document) -> ChangeEvent {
        ChangeEvent {
            collection: Collection::Announcements,
            kind: ChangeKind::Upserted(d),
        }
    }

    fn removed(id: &str) -> ChangeEvent {
        ChangeEvent {
            collection: Collection::Announcements,
            kind: ChangeKind::Removed { id: id.to_string() },
        }
    }

    #[test]
    fn pushed_create_lands_at_the_front() {
        let mut list = LiveList::new();
        list.hydrate(vec![doc("a", 1, "lama")]);
        list.apply(upserted(doc("b", 1, "baru")));
        assert_eq!(list.items()[0].id, "b");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn reconciliation_updates_in_place_without_reordering() {
        let mut list = LiveList::new();
        list.hydrate(vec![doc("a", 1, "satu"), doc("b", 1, "dua")]);
        list.apply(upserted(doc("b", 2, "dua!")));
        assert_eq!(list.items()[1].id, "b");
        assert_eq!(list.items()[1].value["title"], "dua!");
    }

    #[test]
    fn optimistic_write_is_overwritten_by_newer_push_only() {
        let mut list = LiveList::new();
        list.apply_local(doc("a", 5, "lokal"));

        // The echo of the same write reconciles idempotently
        list.apply(upserted(doc("a", 5, "lokal")));
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].value["title"], "lokal");

        // A stale push from before the local write is dropped
        list.apply(upserted(doc("a", 4, "basi")));
        assert_eq!(list.items()[0].value["title"], "lokal");

        // Another client's newer write wins
        list.apply(upserted(doc("a", 6, "terbaru")));
        assert_eq!(list.items()[0].value["title"], "terbaru");
    }

    #[test]
    fn removal_deletes_by_id_and_is_idempotent() {
        let mut list = LiveList::new();
        list.hydrate(vec![doc("a", 1, "satu")]);
        list.apply(removed("a"));
        list.apply(removed("a"));
        assert!(list.is_empty());
    }

    #[test]
    fn failed_refresh_keeps_last_known_good_list() {
        let mut list = LiveList::new();
        list.hydrate(vec![doc("a", 1, "satu")]);
        let replaced = list.refresh::<&str>(Err("store unavailable"));
        assert!(!replaced);
        assert_eq!(list.len(), 1);
    }
}
