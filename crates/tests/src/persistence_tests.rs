use crate::common::{default_pinned_key, SidebarSession};
use pretty_assertions::assert_eq;
use shared_types::{
    group_expanded_key, MemoryStorage, PersistedFlag, PinnedPreference, SidebarPhase,
};

#[tokio::test]
async fn pin_survives_a_reload() {
    let storage = MemoryStorage::new();
    let mut first = SidebarSession::mount(&storage).await;
    first.click_pin_toggle().await;
    drop(first);

    let second = SidebarSession::mount(&storage).await;
    assert_eq!(second.phase(), SidebarPhase::PinnedExpanded);
}

#[tokio::test]
async fn unpin_survives_a_reload() {
    let storage = MemoryStorage::new().with_entry(default_pinned_key(), "true");
    let mut first = SidebarSession::mount(&storage).await;
    first.click_pin_toggle().await;

    let second = SidebarSession::mount(&storage).await;
    assert_eq!(second.phase(), SidebarPhase::Collapsed);
}

#[tokio::test]
async fn unavailable_storage_falls_back_to_unpinned() {
    let storage = MemoryStorage::unavailable();
    let mut session = SidebarSession::mount(&storage).await;
    assert_eq!(session.phase(), SidebarPhase::Collapsed);

    // Writes fail silently; the in-memory state stays authoritative.
    session.click_pin_toggle().await;
    assert_eq!(session.phase(), SidebarPhase::PinnedExpanded);
    assert_eq!(storage.write_count(), 0);
}

#[tokio::test]
async fn read_only_storage_still_applies_stored_pin() {
    let storage = MemoryStorage::new()
        .with_entry(default_pinned_key(), "true")
        .read_only();
    let mut session = SidebarSession::mount(&storage).await;
    assert_eq!(session.phase(), SidebarPhase::PinnedExpanded);

    session.click_pin_toggle().await;
    assert_eq!(session.phase(), SidebarPhase::Collapsed);
    assert_eq!(storage.get(&default_pinned_key()).as_deref(), Some("true"));
}

#[tokio::test]
async fn unrecognised_stored_value_reads_as_unpinned() {
    let storage = MemoryStorage::new().with_entry(default_pinned_key(), "yes");
    let session = SidebarSession::mount(&storage).await;
    assert_eq!(session.phase(), SidebarPhase::Collapsed);
}

#[tokio::test]
async fn loaded_value_is_not_written_back() {
    let storage = MemoryStorage::new().with_entry(default_pinned_key(), "true");
    let preference = PinnedPreference::pinned(storage.clone(), "usacoguide");

    assert_eq!(preference.load().await, Some(true));
    assert!(!preference.save(true).await);
    assert_eq!(storage.write_count(), 0);

    assert!(preference.save(false).await);
    assert_eq!(storage.write_count(), 1);
}

#[tokio::test]
async fn group_preferences_are_keyed_by_label() {
    let storage = MemoryStorage::new();
    let graphs = PersistedFlag::group_expanded(storage.clone(), "Graphs");
    let dp = PersistedFlag::group_expanded(storage.clone(), "Dynamic Programming");

    graphs.save(false).await;
    assert_eq!(storage.get(&group_expanded_key("Graphs")).as_deref(), Some("false"));
    assert_eq!(dp.load().await, None);
    assert_eq!(graphs.key(), "guide:sidebarnav:isexpanded:Graphs");
}
