// Adapter contract tests run against both backends: the repositories must
// not be able to tell them apart.

mod common;

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::time::timeout;

use rtrw_kinerja_backend::storage::{ChangeKind, Collection, LocalStore, StoreAdapter};

async fn adapters() -> Vec<Arc<dyn StoreAdapter>> {
    vec![common::local_adapter(), common::remote_adapter().await]
}

#[tokio::test]
async fn create_assigns_and_embeds_an_id() {
    for adapter in adapters().await {
        let doc = adapter
            .create(Collection::Announcements, json!({ "title": "Halo" }))
            .await
            .unwrap();

        assert!(!doc.id.is_empty());
        assert_eq!(doc.value["id"], json!(doc.id.clone()));

        let fetched = adapter
            .get(Collection::Announcements, &doc.id)
            .await
            .unwrap()
            .expect("created document should be readable");
        assert_eq!(fetched.value["title"], "Halo");
    }
}

#[tokio::test]
async fn put_upserts_and_bumps_the_revision() {
    for adapter in adapters().await {
        let created = adapter
            .create(Collection::Announcements, json!({ "title": "v1" }))
            .await
            .unwrap();

        let updated = adapter
            .put(
                Collection::Announcements,
                &created.id,
                json!({ "id": created.id.clone(), "title": "v2" }),
            )
            .await
            .unwrap();

        assert!(updated.revision > created.revision);
        let fetched = adapter
            .get(Collection::Announcements, &created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.value["title"], "v2");

        // put on an unknown id creates the record
        let fresh = adapter
            .put(Collection::Announcements, "fresh-id", json!({ "id": "fresh-id" }))
            .await
            .unwrap();
        assert_eq!(fresh.id, "fresh-id");
    }
}

#[tokio::test]
async fn remove_is_idempotent() {
    for adapter in adapters().await {
        let doc = adapter
            .create(Collection::Users, json!({ "username": "budi" }))
            .await
            .unwrap();

        adapter.remove(Collection::Users, &doc.id).await.unwrap();
        assert!(adapter
            .get(Collection::Users, &doc.id)
            .await
            .unwrap()
            .is_none());

        // Deleting again, or deleting something that never existed, is a no-op
        adapter.remove(Collection::Users, &doc.id).await.unwrap();
        adapter
            .remove(Collection::Users, "never-existed")
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn collections_are_isolated() {
    for adapter in adapters().await {
        adapter
            .create(Collection::Users, json!({ "username": "budi" }))
            .await
            .unwrap();

        assert!(adapter.get_all(Collection::Reports).await.unwrap().is_empty());
        assert_eq!(adapter.get_all(Collection::Users).await.unwrap().len(), 1);
    }
}

#[tokio::test]
async fn every_subscriber_sees_every_write() {
    for adapter in adapters().await {
        // Two clients hold the same list; a third client's write reaches both
        let mut tab_a = adapter.subscribe(Collection::Announcements);
        let mut tab_b = adapter.subscribe(Collection::Announcements);

        let doc = adapter
            .create(Collection::Announcements, json!({ "title": "Baru" }))
            .await
            .unwrap();

        for sub in [&mut tab_a, &mut tab_b] {
            let event = timeout(Duration::from_secs(1), sub.recv())
                .await
                .expect("push should arrive without a refresh")
                .expect("feed should be open");
            match event.kind {
                ChangeKind::Upserted(pushed) => assert_eq!(pushed.id, doc.id),
                other => panic!("unexpected event: {other:?}"),
            }
        }

        adapter
            .remove(Collection::Announcements, &doc.id)
            .await
            .unwrap();
        let event = timeout(Duration::from_secs(1), tab_a.recv())
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(event.kind, ChangeKind::Removed { id } if id == doc.id));
    }
}

#[tokio::test]
async fn subscriptions_are_scoped_to_their_collection() {
    for adapter in adapters().await {
        let mut announcements = adapter.subscribe(Collection::Announcements);

        adapter
            .create(Collection::Users, json!({ "username": "budi" }))
            .await
            .unwrap();
        adapter
            .create(Collection::Announcements, json!({ "title": "Halo" }))
            .await
            .unwrap();

        // The user write is skipped; the first event seen is the announcement
        let event = timeout(Duration::from_secs(1), announcements.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event.collection, Collection::Announcements);
    }
}

#[tokio::test]
async fn corrupt_local_blob_reads_as_empty() {
    let dir = std::env::temp_dir().join(format!("rtrw-kinerja-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("users.json"), "{ not valid json").unwrap();

    let store = LocalStore::open(&dir).unwrap();
    let docs = store.get_all(Collection::Users).await.unwrap();
    assert!(docs.is_empty());

    // The store stays usable: the next write replaces the corrupt blob
    let doc = store
        .create(Collection::Users, json!({ "username": "budi" }))
        .await
        .unwrap();
    assert_eq!(store.get_all(Collection::Users).await.unwrap().len(), 1);

    let reopened = LocalStore::open(&dir).unwrap();
    let docs = reopened.get_all(Collection::Users).await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, doc.id);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn local_blobs_survive_a_reopen() {
    let dir = std::env::temp_dir().join(format!("rtrw-kinerja-test-{}", uuid::Uuid::new_v4()));

    {
        let store = LocalStore::open(&dir).unwrap();
        store
            .create(Collection::Announcements, json!({ "title": "Tahan lama" }))
            .await
            .unwrap();
    }

    let reopened = LocalStore::open(&dir).unwrap();
    let docs = reopened.get_all(Collection::Announcements).await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].value["title"], "Tahan lama");

    let _ = std::fs::remove_dir_all(&dir);
}
