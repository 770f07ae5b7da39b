use super::*;

#[test]
fn neutral_has_no_modifier() {
    assert_eq!(BadgeTone::default().class(), "badge");
}

#[test]
fn appointment_statuses_map_to_distinct_tones() {
    let tones = AppointmentStatus::ALL.map(BadgeTone::from);
    assert_eq!(tones, [BadgeTone::Warning, BadgeTone::Info, BadgeTone::Success, BadgeTone::Danger]);
}

#[test]
fn unpaid_invoice_is_a_warning() {
    assert_eq!(BadgeTone::from(InvoiceStatus::Unpaid).class(), "badge badge--warning");
}
