use super::*;
use crate::state::appointments::{AppointmentStatus, AppointmentsAction, AppointmentsState};
use crate::state::reviews::{ReviewsAction, ReviewsState};

#[test]
fn apply_logged_applies_accepted_action() {
    let mut state = AppointmentsState::default();
    apply_logged(&mut state, AppointmentsAction::Accept(2)).unwrap();
    assert_eq!(state.tab_count(AppointmentStatus::Upcoming), 2);
}

#[test]
fn apply_logged_passes_rejection_through() {
    let mut state = ReviewsState::default();
    let before = state.clone();
    let result = apply_logged(
        &mut state,
        ReviewsAction::SendReply { id: "1".into(), text: "again".into(), today: "2025-09-20".into() },
    );
    assert_eq!(result, Err(ActionError::AlreadyReplied("1".into())));
    assert_eq!(state, before);
}

#[test]
fn dispatch_updates_signal() {
    Owner::new().with(|| {
        let signal = RwSignal::new(AppointmentsState::default());
        assert!(dispatch(signal, AppointmentsAction::SelectTab(AppointmentStatus::Past)));
        assert_eq!(signal.get_untracked().active_tab, AppointmentStatus::Past);
        assert!(!dispatch(signal, AppointmentsAction::Complete(3)));
    });
}
