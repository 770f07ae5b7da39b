use super::*;

fn state() -> AppointmentsState {
    AppointmentsState::default()
}

// =============================================================
// Defaults and filtering
// =============================================================

#[test]
fn default_tab_is_request() {
    assert_eq!(state().active_tab, AppointmentStatus::Request);
    assert!(state().search.is_empty());
}

#[test]
fn each_fixture_tab_holds_one_appointment() {
    let s = state();
    for status in AppointmentStatus::ALL {
        assert_eq!(s.tab_count(status), 1, "{}", status.label());
    }
}

#[test]
fn filter_by_status_keeps_list_order() {
    let s = state();
    let upcoming = filter_by_status(&s.items, AppointmentStatus::Upcoming);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].pet_name, "Buddy");
}

#[test]
fn canceled_fixture_carries_reason() {
    let s = state();
    let canceled = filter_by_status(&s.items, AppointmentStatus::Canceled);
    assert_eq!(canceled[0].cancel_reason.as_deref(), Some("Owner canceled due to schedule change"));
}

#[test]
fn visible_matches_pet_or_owner_ignoring_case() {
    let mut s = state();
    s.apply(AppointmentsAction::SelectTab(AppointmentStatus::Request)).unwrap();
    s.apply(AppointmentsAction::SetSearch("john".into())).unwrap();
    assert_eq!(s.visible().len(), 1);

    s.apply(AppointmentsAction::SetSearch("MILO".into())).unwrap();
    assert_eq!(s.visible().len(), 1);

    s.apply(AppointmentsAction::SetSearch("rex".into())).unwrap();
    assert!(s.visible().is_empty());
}

#[test]
fn blank_search_shows_whole_tab() {
    let mut s = state();
    s.apply(AppointmentsAction::SetSearch("   ".into())).unwrap();
    assert_eq!(s.visible().len(), 1);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn accept_moves_request_to_upcoming() {
    let mut s = state();
    s.apply(AppointmentsAction::Accept(2)).unwrap();
    assert_eq!(s.tab_count(AppointmentStatus::Request), 0);
    assert_eq!(s.tab_count(AppointmentStatus::Upcoming), 2);
}

#[test]
fn decline_cancels_with_provider_reason() {
    let mut s = state();
    s.apply(AppointmentsAction::Decline(2)).unwrap();
    let milo = s.items.iter().find(|a| a.id == 2).unwrap();
    assert_eq!(milo.status, AppointmentStatus::Canceled);
    assert_eq!(milo.cancel_reason.as_deref(), Some(DECLINE_REASON));
}

#[test]
fn complete_moves_upcoming_to_past() {
    let mut s = state();
    s.apply(AppointmentsAction::Complete(1)).unwrap();
    assert_eq!(s.tab_count(AppointmentStatus::Past), 2);
}

#[test]
fn accept_outside_request_is_rejected_and_state_unchanged() {
    let mut s = state();
    let before = s.clone();
    let err = s.apply(AppointmentsAction::Accept(3)).unwrap_err();
    assert_eq!(err, ActionError::InvalidTransition { action: "accept", status: "Past" });
    assert_eq!(s, before);
}

#[test]
fn complete_on_request_is_rejected() {
    let mut s = state();
    assert!(s.apply(AppointmentsAction::Complete(2)).is_err());
}

#[test]
fn unknown_id_is_rejected() {
    let mut s = state();
    assert_eq!(s.apply(AppointmentsAction::Decline(99)), Err(ActionError::UnknownId("99".into())));
}

#[test]
fn list_keys_change_with_status() {
    use std::collections::HashSet;

    let mut s = AppointmentsState::default();
    let key = |s: &AppointmentsState| s.items.iter().map(|a| (a.id, a.status)).collect::<HashSet<_>>();
    let before = key(&s);
    let id = s.items.iter().find(|a| a.status == AppointmentStatus::Request).map(|a| a.id).unwrap();
    s.apply(AppointmentsAction::Accept(id)).unwrap();
    let after = key(&s);
    assert_eq!(before.len(), s.items.len());
    assert_eq!(before.symmetric_difference(&after).count(), 2);
}
