use super::*;

fn draft() -> ServiceDraft {
    ServiceDraft {
        name: " Nail Trim ".into(),
        description: "Quick nail clipping".into(),
        price: "20".into(),
        duration: "10".into(),
        emergency_available: true,
        category: "Grooming".into(),
    }
}

// =============================================================
// Stats
// =============================================================

#[test]
fn fixture_stats() {
    let s = ServicesState::default();
    assert_eq!(s.total(), 6);
    // (75 + 45 + 120 + 150 + 200 + 60) / 6 = 108.33
    assert_eq!(s.average_price(), 108);
    assert_eq!(s.emergency_count(), 3);
}

#[test]
fn average_price_of_empty_catalogue_is_zero() {
    let s = ServicesState { items: Vec::new() };
    assert_eq!(s.average_price(), 0);
}

#[test]
fn average_price_rounds_half_up() {
    let mut s = ServicesState::default();
    s.items.truncate(2);
    s.items[0].price = 10;
    s.items[1].price = 11;
    assert_eq!(s.average_price(), 11);
}

// =============================================================
// Actions
// =============================================================

#[test]
fn toggle_emergency_flips_only_that_service() {
    let mut s = ServicesState::default();
    s.apply(ServicesAction::ToggleEmergency("2".into())).unwrap();
    assert!(s.items[1].emergency_available);
    assert_eq!(s.emergency_count(), 4);
    s.apply(ServicesAction::ToggleEmergency("2".into())).unwrap();
    assert!(!s.items[1].emergency_available);
}

#[test]
fn add_appends_with_next_id_and_trimmed_name() {
    let mut s = ServicesState::default();
    s.apply(ServicesAction::Add(draft())).unwrap();
    let added = s.items.last().unwrap();
    assert_eq!(added.id, "7");
    assert_eq!(added.name, "Nail Trim");
    assert_eq!(added.price, 20);
    assert_eq!(added.duration, 10);
    assert!(added.emergency_available);
    assert!(!added.is_emergency);
}

#[test]
fn add_after_removal_does_not_reuse_ids() {
    let mut s = ServicesState::default();
    s.items.remove(0);
    s.apply(ServicesAction::Add(draft())).unwrap();
    assert_eq!(s.items.last().unwrap().id, "7");
}

#[test]
fn add_with_blank_name_is_rejected() {
    let mut s = ServicesState::default();
    let before = s.clone();
    let bad = ServiceDraft { name: "  ".into(), ..draft() };
    assert_eq!(s.apply(ServicesAction::Add(bad)), Err(ActionError::MissingField("name")));
    assert_eq!(s, before);
}

#[test]
fn add_with_non_numeric_price_is_rejected() {
    let bad = ServiceDraft { price: "twenty".into(), ..draft() };
    assert!(matches!(build_service("9".into(), &bad), Err(ActionError::InvalidNumber { field: "price", .. })));
}

#[test]
fn default_draft_uses_first_category() {
    assert_eq!(ServiceDraft::default().category, "Consultation");
}

#[test]
fn toggle_unknown_service_is_rejected() {
    let mut s = ServicesState::default();
    assert!(s.apply(ServicesAction::ToggleEmergency("42".into())).is_err());
}
