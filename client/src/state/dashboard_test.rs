use super::*;

#[test]
fn dashboard_defaults_to_fixture_practice() {
    let s = DashboardState::default();
    assert_eq!(s.practitioner, "Dr. Sarah");
    assert_eq!(s.metrics.len(), 4);
    assert_eq!(s.schedule.len(), 4);
    assert_eq!(s.recent_reviews.len(), 2);
}

#[test]
fn one_emergency_on_todays_schedule() {
    let s = DashboardState::default();
    assert_eq!(s.emergency_count(), 1);
    assert!(s.schedule.iter().any(|e| e.emergency && e.pet_name == "Bella"));
}

#[test]
fn rating_metric_is_neutral_with_badge() {
    let s = DashboardState::default();
    let rating = s.metrics.iter().find(|m| m.title == "Average Rating").unwrap();
    assert_eq!(rating.trend, Trend::Neutral);
    assert!(rating.badge.is_some());
}
