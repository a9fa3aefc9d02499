use crate::common::{default_pinned_key, SidebarSession};
use pretty_assertions::assert_eq;
use shared_types::{MemoryStorage, SidebarPhase};

#[tokio::test]
async fn fresh_session_hover_pin_and_unpin() {
    let storage = MemoryStorage::new();
    let mut session = SidebarSession::mount(&storage).await;
    assert_eq!(session.phase(), SidebarPhase::Collapsed);

    session.hover();
    assert_eq!(session.phase(), SidebarPhase::HoverExpanded);

    session.click_pin_toggle().await;
    assert_eq!(session.phase(), SidebarPhase::PinnedExpanded);
    assert_eq!(storage.get(&default_pinned_key()).as_deref(), Some("true"));

    session.click_outside();
    assert_eq!(session.phase(), SidebarPhase::PinnedExpanded);

    session.click_pin_toggle().await;
    assert_eq!(session.phase(), SidebarPhase::Collapsed);
    assert_eq!(storage.get(&default_pinned_key()).as_deref(), Some("false"));
}

#[tokio::test]
async fn pressing_the_toggle_keeps_it_under_the_pointer() {
    let storage = MemoryStorage::new();
    let mut session = SidebarSession::mount(&storage).await;
    session.hover();

    let at_hover = session.toggle_left_px();
    session.press_pin_toggle();
    assert_eq!(session.toggle_left_px(), at_hover);
    assert_eq!(session.phase(), SidebarPhase::HoverExpanded);

    session.release_pin_toggle().await;
    assert_eq!(session.toggle_left_px(), at_hover);
    assert_eq!(session.phase(), SidebarPhase::PinnedExpanded);
}

#[tokio::test]
async fn unpin_while_still_over_the_toggle_collapses() {
    let storage = MemoryStorage::new();
    let mut session = SidebarSession::mount(&storage).await;
    session.hover();
    session.click_pin_toggle().await;

    // Pointer never left the region; pinning dropped the hover flag.
    session.click_pin_toggle().await;
    assert_eq!(session.phase(), SidebarPhase::Collapsed);
}

#[tokio::test]
async fn hover_then_outside_click_collapses() {
    let storage = MemoryStorage::new();
    let mut session = SidebarSession::mount(&storage).await;

    session.hover();
    session.click_inside();
    assert_eq!(session.phase(), SidebarPhase::HoverExpanded);

    session.click_outside();
    assert_eq!(session.phase(), SidebarPhase::Collapsed);
    assert_eq!(storage.write_count(), 0);
}

#[tokio::test]
async fn hover_leave_round_trip_never_touches_storage() {
    let storage = MemoryStorage::new();
    let mut session = SidebarSession::mount(&storage).await;

    for _ in 0..3 {
        session.hover();
        assert_eq!(session.phase(), SidebarPhase::HoverExpanded);
        session.leave();
        assert_eq!(session.phase(), SidebarPhase::Collapsed);
    }
    assert_eq!(storage.write_count(), 0);
    assert_eq!(storage.get(&default_pinned_key()), None);
}

#[tokio::test]
async fn hover_is_ignored_while_pinned() {
    let storage = MemoryStorage::new().with_entry(default_pinned_key(), "true");
    let mut session = SidebarSession::mount(&storage).await;

    session.hover();
    assert!(!session.visibility.hovering());
    session.leave();
    assert_eq!(session.phase(), SidebarPhase::PinnedExpanded);
}

#[tokio::test]
async fn unpinning_with_pointer_away_collapses() {
    let storage = MemoryStorage::new().with_entry(default_pinned_key(), "true");
    let mut session = SidebarSession::mount(&storage).await;

    session.click_pin_toggle().await;
    assert_eq!(session.phase(), SidebarPhase::Collapsed);
    assert!(!session.visibility.hovering());
}

#[tokio::test]
async fn first_render_is_collapsed_before_hydration() {
    let storage = MemoryStorage::new().with_entry(default_pinned_key(), "true");
    let mut session = SidebarSession::render(&storage);
    assert_eq!(session.phase(), SidebarPhase::Collapsed);
    assert!(!session.hydrated);

    session.hydrate().await;
    assert_eq!(session.phase(), SidebarPhase::PinnedExpanded);
    assert!(session.hydrated);
}

#[tokio::test]
async fn collapsed_matches_phase_through_every_step() {
    let storage = MemoryStorage::new();
    let mut session = SidebarSession::mount(&storage).await;

    let check = |session: &SidebarSession| {
        let v = session.visibility;
        assert_eq!(v.collapsed(), !v.pinned() && !v.hovering());
        assert_eq!(v.collapsed(), session.phase() == SidebarPhase::Collapsed);
    };

    check(&session);
    session.hover();
    check(&session);
    session.click_pin_toggle().await;
    check(&session);
    session.hover();
    check(&session);
    session.click_outside();
    check(&session);
    session.click_pin_toggle().await;
    check(&session);
}
