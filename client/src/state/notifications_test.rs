use super::*;

// =============================================================
// Counts and tabs
// =============================================================

#[test]
fn fixture_counts() {
    let s = NotificationsState::default();
    assert_eq!(s.unread_count(), 2);
    assert_eq!(s.action_required_count(), 1);
    assert_eq!(s.today_count(), 3);
}

#[test]
fn tabs_filter_by_kind() {
    let s = NotificationsState::default();
    assert_eq!(filter_by_tab(&s.items, NotificationTab::All).len(), 3);
    assert_eq!(filter_by_tab(&s.items, NotificationTab::Appointments).len(), 2);
    assert_eq!(filter_by_tab(&s.items, NotificationTab::Reviews).len(), 1);
    assert!(filter_by_tab(&s.items, NotificationTab::Settings).is_empty());
}

#[test]
fn select_tab_changes_visible() {
    let mut s = NotificationsState::default();
    s.apply(NotificationsAction::SelectTab(NotificationTab::Reviews)).unwrap();
    assert_eq!(s.visible().len(), 1);
    assert_eq!(s.visible()[0].title, "New Review Received");
}

// =============================================================
// Read / delete
// =============================================================

#[test]
fn mark_read_is_idempotent() {
    let mut s = NotificationsState::default();
    s.apply(NotificationsAction::MarkRead("1".into())).unwrap();
    s.apply(NotificationsAction::MarkRead("1".into())).unwrap();
    assert_eq!(s.unread_count(), 1);
}

#[test]
fn mark_all_read_clears_badge() {
    let mut s = NotificationsState::default();
    s.apply(NotificationsAction::MarkAllRead).unwrap();
    assert_eq!(s.unread_count(), 0);
    assert_eq!(s.items.len(), 3);
}

#[test]
fn delete_removes_one() {
    let mut s = NotificationsState::default();
    s.apply(NotificationsAction::Delete("3".into())).unwrap();
    assert_eq!(s.items.len(), 2);
    assert!(s.items.iter().all(|n| n.id != "3"));
}

#[test]
fn delete_keeps_the_rest_untouched() {
    let before = NotificationsState::default();
    let mut after = before.clone();
    after.apply(NotificationsAction::Delete("2".into())).unwrap();

    let expected: Vec<Notification> = before.items.iter().filter(|n| n.id != "2").cloned().collect();
    assert_eq!(after.items, expected);
    assert_eq!(after.preferences, before.preferences);
    assert_eq!(after.active_tab, before.active_tab);
}

#[test]
fn all_tab_label_follows_deletes() {
    let mut s = NotificationsState::default();
    assert_eq!(s.tab_label(NotificationTab::All), "All (3)");
    assert_eq!(s.tab_label(NotificationTab::Reviews), NotificationTab::Reviews.label());
    s.apply(NotificationsAction::Delete("1".into())).unwrap();
    assert_eq!(s.tab_label(NotificationTab::All), "All (2)");
}

#[test]
fn delete_unknown_is_rejected() {
    let mut s = NotificationsState::default();
    assert_eq!(s.apply(NotificationsAction::Delete("7".into())), Err(ActionError::UnknownId("7".into())));
    assert_eq!(s.items.len(), 3);
}

// =============================================================
// Preferences
// =============================================================

#[test]
fn preference_defaults_and_toggle() {
    let mut s = NotificationsState::default();
    assert!(!s.preferences.enabled(NotificationTopic::Payment));
    s.apply(NotificationsAction::TogglePreference(NotificationTopic::Payment)).unwrap();
    assert!(s.preferences.enabled(NotificationTopic::Payment));
    assert!(s.preferences.enabled(NotificationTopic::Email));
}

#[test]
fn frequency_set_and_clear() {
    let mut s = NotificationsState::default();
    s.apply(NotificationsAction::SetFrequency(Frequency::from_label("Daily"))).unwrap();
    assert_eq!(s.preferences.frequency, Some(Frequency::Daily));
    s.apply(NotificationsAction::SetFrequency(None)).unwrap();
    assert_eq!(s.preferences.frequency, None);
}
