use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_enable_all_switches() {
    let s = AvailabilityState::default();
    assert!(s.is_available);
    assert!(s.auto_block);
    assert!(s.allow_urgent);
    assert_eq!(s.emergency_start, "06:00 PM");
    assert_eq!(s.emergency_end, "10:00 PM");
}

#[test]
fn fixture_week_runs_monday_to_sunday() {
    let s = AvailabilityState::default();
    let days: Vec<Weekday> = s.week.iter().map(|d| d.day).collect();
    assert_eq!(days, Weekday::ALL.to_vec());
    assert_eq!(s.week[1].status, DayStatus::PartiallyBooked);
    assert_eq!(s.week[6].status, DayStatus::Unavailable);
}

#[test]
fn today_slot_counts() {
    let s = AvailabilityState::default();
    assert_eq!(s.slot_count(), 9);
    assert_eq!(s.count_with_status(SlotStatus::Available), 5);
    assert_eq!(s.count_with_status(SlotStatus::Booked), 2);
    assert_eq!(s.count_with_status(SlotStatus::Unavailable), 2);
}

#[test]
fn weekday_value_round_trips_through_select() {
    assert_eq!(Weekday::from_value("friday"), Some(Weekday::Friday));
    assert_eq!(Weekday::from_value("Funday"), None);
}

// =============================================================
// Actions
// =============================================================

#[test]
fn toggles_flip_independently() {
    let mut s = AvailabilityState::default();
    s.apply(AvailabilityAction::ToggleAvailable).unwrap();
    assert!(!s.is_available);
    assert!(s.auto_block);
    s.apply(AvailabilityAction::ToggleAutoBlock).unwrap();
    s.apply(AvailabilityAction::ToggleAllowUrgent).unwrap();
    assert!(!s.auto_block);
    assert!(!s.allow_urgent);
}

#[test]
fn add_slot_requires_a_day() {
    let mut s = AvailabilityState::default();
    assert_eq!(
        s.apply(AvailabilityAction::AddSlot(SlotDraft::default())),
        Err(ActionError::MissingField("day"))
    );
    assert!(s.added_slots.is_empty());
}

#[test]
fn add_slot_records_for_day() {
    let mut s = AvailabilityState::default();
    let draft = SlotDraft { day: Some(Weekday::Tuesday), ..SlotDraft::default() };
    s.apply(AvailabilityAction::AddSlot(draft)).unwrap();
    assert_eq!(s.added_for(Weekday::Tuesday), 1);
    assert_eq!(s.added_slots[0].start, DEFAULT_SLOT_START);
    assert!(s.added_slots[0].available);
}

#[test]
fn block_date_skips_duplicates() {
    let mut s = AvailabilityState::default();
    s.apply(AvailabilityAction::BlockDate("Dec 31".into())).unwrap();
    s.apply(AvailabilityAction::BlockDate("Dec 31".into())).unwrap();
    assert_eq!(s.blocked_dates.len(), 4);
}

#[test]
fn unblock_removes_and_rejects_unknown() {
    let mut s = AvailabilityState::default();
    s.apply(AvailabilityAction::UnblockDate("Dec 26".into())).unwrap();
    assert_eq!(s.blocked_dates, vec!["Dec 15".to_owned(), "Dec 28".to_owned()]);
    assert!(s.apply(AvailabilityAction::UnblockDate("Dec 26".into())).is_err());
}
