use super::*;

const EPS: f64 = 1e-9;

// =============================================================
// compute_totals
// =============================================================

#[test]
fn default_discount_and_tax_on_one_item() {
    let t = compute_totals(&[75.0], 75.0, 6.0);
    assert!((t.subtotal - 75.0).abs() < EPS);
    assert!((t.discounted - 18.75).abs() < EPS);
    assert!((t.tax_amount - 1.125).abs() < EPS);
    assert!((t.total - 19.875).abs() < EPS);
}

#[test]
fn no_items_totals_zero() {
    let t = compute_totals(&[], 75.0, 6.0);
    assert_eq!(t.total, 0.0);
}

#[test]
fn discount_is_clamped() {
    assert!((compute_totals(&[100.0], 150.0, 10.0).total).abs() < EPS);
    assert!((compute_totals(&[100.0], -20.0, 0.0).total - 100.0).abs() < EPS);
}

#[test]
fn negative_tax_counts_as_zero() {
    assert!((compute_totals(&[40.0, 60.0], 0.0, -5.0).total - 100.0).abs() < EPS);
}

// =============================================================
// Generator state
// =============================================================

#[test]
fn starts_with_one_blank_item() {
    let s = InvoiceGeneratorState::default();
    assert_eq!(s.items.len(), 1);
    assert_eq!(s.invoice_number, "INV-001");
    assert_eq!(s.discount, "75");
    assert_eq!(s.tax_rate, "6");
    assert!(s.send_via_email);
}

#[test]
fn preview_reads_half_typed_prices_as_zero() {
    let mut s = InvoiceGeneratorState::default();
    let first = s.items[0].id.clone();
    s.apply(InvoiceGeneratorAction::UpdateItem { id: first, field: LineItemField::Price, value: "75".into() })
        .unwrap();
    s.apply(InvoiceGeneratorAction::AddItem).unwrap();
    let second = s.items[1].id.clone();
    s.apply(InvoiceGeneratorAction::UpdateItem { id: second, field: LineItemField::Price, value: "1x".into() })
        .unwrap();
    assert_eq!(s.prices(), vec![75.0, 0.0]);
    assert!((s.totals().total - 19.875).abs() < EPS);
}

#[test]
fn added_items_get_distinct_ids() {
    let mut s = InvoiceGeneratorState::default();
    s.apply(InvoiceGeneratorAction::AddItem).unwrap();
    assert_ne!(s.items[0].id, s.items[1].id);
}

#[test]
fn last_item_cannot_be_removed() {
    let mut s = InvoiceGeneratorState::default();
    let only = s.items[0].id.clone();
    assert_eq!(s.apply(InvoiceGeneratorAction::RemoveItem(only)), Err(ActionError::LastLineItem));
    assert_eq!(s.items.len(), 1);
}

#[test]
fn remove_item_by_id() {
    let mut s = InvoiceGeneratorState::default();
    s.apply(InvoiceGeneratorAction::AddItem).unwrap();
    let first = s.items[0].id.clone();
    let second = s.items[1].id.clone();
    s.apply(InvoiceGeneratorAction::RemoveItem(first)).unwrap();
    assert_eq!(s.items.len(), 1);
    assert_eq!(s.items[0].id, second);
}

#[test]
fn update_unknown_item_is_rejected() {
    let mut s = InvoiceGeneratorState::default();
    let result = s.apply(InvoiceGeneratorAction::UpdateItem {
        id: "missing".into(),
        field: LineItemField::Description,
        value: "x".into(),
    });
    assert_eq!(result, Err(ActionError::UnknownId("missing".into())));
}

#[test]
fn generate_requires_client_and_pet() {
    let mut s = InvoiceGeneratorState::default();
    assert_eq!(s.generate().unwrap_err(), ActionError::MissingField("client_name"));
    s.apply(InvoiceGeneratorAction::SetHeader(HeaderField::ClientName, "Emily Davis".into())).unwrap();
    assert_eq!(s.generate().unwrap_err(), ActionError::MissingField("pet_name"));
    s.apply(InvoiceGeneratorAction::SetHeader(HeaderField::PetName, "Luna".into())).unwrap();
    let generated = s.generate().unwrap();
    assert_eq!(generated.client_name, "Emily Davis");
    assert_eq!(generated.items.len(), 1);
}

#[test]
fn reset_restores_defaults() {
    let mut s = InvoiceGeneratorState::default();
    s.apply(InvoiceGeneratorAction::SetDiscount("10".into())).unwrap();
    s.apply(InvoiceGeneratorAction::ToggleSendViaEmail).unwrap();
    s.apply(InvoiceGeneratorAction::AddItem).unwrap();
    s.apply(InvoiceGeneratorAction::Reset).unwrap();
    assert_eq!(s.discount, "75");
    assert!(s.send_via_email);
    assert_eq!(s.items.len(), 1);
}
