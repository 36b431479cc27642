// Announcement tests: round-trip fidelity, edit semantics, and the push
// propagation that keeps a second client's list current.

mod common;

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use rtrw_kinerja_backend::storage::{ChangeKind, StoreAdapter};
use rtrw_kinerja_backend::stores::AnnouncementStore;
use rtrw_kinerja_backend::sync::LiveList;
use rtrw_kinerja_backend::types::dto::announcements::AnnouncementForm;
use rtrw_kinerja_backend::validation::validate_announcement;

fn form(title: &str, content: &str) -> AnnouncementForm {
    AnnouncementForm {
        title: title.to_string(),
        content: content.to_string(),
    }
}

fn store(adapter: Arc<dyn StoreAdapter>) -> AnnouncementStore {
    AnnouncementStore::new(adapter)
}

#[tokio::test]
async fn create_then_read_round_trips_exactly() {
    for adapter in [common::local_adapter(), common::remote_adapter().await] {
        let store = store(adapter);
        let validated = validate_announcement(&form(
            "Kerja Bakti Minggu",
            "Kerja bakti dimulai pukul 07.00 di balai RW.",
        ))
        .unwrap();

        let created = store.create(validated).await.unwrap();
        let fetched = store.get(&created.id).await.unwrap().unwrap();

        assert_eq!(fetched.title, "Kerja Bakti Minggu");
        assert_eq!(fetched.content, "Kerja bakti dimulai pukul 07.00 di balai RW.");
        assert_eq!(fetched.created_at, created.created_at);
    }
}

#[tokio::test]
async fn edits_keep_the_publication_date() {
    let adapter = common::remote_adapter().await;
    let store = store(adapter);

    let created = store
        .create(validate_announcement(&form("Judul awal", "Konten yang pertama.")).unwrap())
        .await
        .unwrap();

    let updated = store
        .update(
            &created.id,
            validate_announcement(&form("Judul baru", "Konten yang diperbarui.")).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Judul baru");
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn list_is_newest_first() {
    let adapter = common::local_adapter();
    let store = store(adapter);

    for i in 1..=3 {
        store
            .create(
                validate_announcement(&form(
                    &format!("Pengumuman {i}"),
                    "Isi pengumuman untuk warga.",
                ))
                .unwrap(),
            )
            .await
            .unwrap();
    }

    let list = store.list().await.unwrap();
    assert_eq!(list.len(), 3);
    assert!(list[0].created_at >= list[1].created_at);
    assert!(list[1].created_at >= list[2].created_at);
}

#[tokio::test]
async fn a_second_client_sees_the_publication_through_the_push() {
    let adapter = common::remote_adapter().await;

    // Tab B holds an idle list fed by the subscription
    let mut tab_b_list = LiveList::new();
    let mut tab_b = adapter.subscribe(rtrw_kinerja_backend::storage::Collection::Announcements);

    // Tab A publishes
    let store_a = store(adapter.clone());
    let created = store_a
        .create(validate_announcement(&form("Rapat warga", "Rapat warga hari Sabtu.")).unwrap())
        .await
        .unwrap();

    let event = timeout(Duration::from_secs(1), tab_b.recv())
        .await
        .expect("the push must arrive without a manual refresh")
        .unwrap();
    tab_b_list.apply(event);

    assert_eq!(tab_b_list.len(), 1);
    assert_eq!(tab_b_list.items()[0].id, created.id);
    assert_eq!(tab_b_list.items()[0].value["title"], "Rapat warga");
}

#[tokio::test]
async fn deletion_reaches_subscribed_lists() {
    let adapter = common::local_adapter();
    let store_handle = store(adapter.clone());

    let created = store_handle
        .create(validate_announcement(&form("Akan dihapus", "Konten yang akan dihapus.")).unwrap())
        .await
        .unwrap();

    let mut list = LiveList::new();
    list.hydrate(
        adapter
            .get_all(rtrw_kinerja_backend::storage::Collection::Announcements)
            .await
            .unwrap(),
    );
    assert_eq!(list.len(), 1);

    let mut sub = adapter.subscribe(rtrw_kinerja_backend::storage::Collection::Announcements);
    store_handle.delete(&created.id).await.unwrap();

    let event = timeout(Duration::from_secs(1), sub.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(event.kind, ChangeKind::Removed { .. }));
    list.apply(event);
    assert!(list.is_empty());
}
