use super::*;

fn draft(amount: &str) -> InvoiceDraft {
    InvoiceDraft {
        pet: "Luna".into(),
        owner: "Emily Davis".into(),
        service: "Vaccination".into(),
        amount: amount.into(),
        payment: PaymentMethod::Cash,
    }
}

// =============================================================
// Summary
// =============================================================

#[test]
fn fixture_summary() {
    let s = BillingState::default();
    assert_eq!(s.total_revenue(), 240.0);
    assert_eq!(s.paid_count(), 3);
    assert_eq!(s.pending_amount(), 80.0);
}

#[test]
fn invoice_ids_are_zero_padded() {
    assert_eq!(invoice_id(1), "INV-001");
    assert_eq!(invoice_id(42), "INV-042");
    assert_eq!(invoice_id(1234), "INV-1234");
}

// =============================================================
// Actions
// =============================================================

#[test]
fn mark_paid_moves_amount_into_revenue() {
    let mut s = BillingState::default();
    s.apply(BillingAction::MarkPaid("INV-002".into())).unwrap();
    assert_eq!(s.total_revenue(), 320.0);
    assert_eq!(s.pending_amount(), 0.0);
}

#[test]
fn mark_paid_flips_only_that_status() {
    let before = BillingState::default();
    let mut after = before.clone();
    after.apply(BillingAction::MarkPaid("INV-002".into())).unwrap();

    assert_eq!(after.invoices.len(), before.invoices.len());
    for (old, new) in before.invoices.iter().zip(&after.invoices) {
        if old.id == "INV-002" {
            assert_eq!(*new, Invoice { status: InvoiceStatus::Paid, ..old.clone() });
        } else {
            assert_eq!(new, old);
        }
    }
    assert_eq!(after.fees, before.fees);
    assert_eq!(after.channels, before.channels);
}

#[test]
fn mark_paid_unknown_invoice_is_rejected() {
    let mut s = BillingState::default();
    assert_eq!(s.apply(BillingAction::MarkPaid("INV-999".into())), Err(ActionError::UnknownId("INV-999".into())));
}

#[test]
fn create_applies_configured_tax_rate() {
    let mut s = BillingState::default();
    s.apply(BillingAction::Create { draft: draft("50"), today: "2025-09-10".into() }).unwrap();
    let created = s.invoices.last().unwrap();
    assert_eq!(created.id, "INV-005");
    assert_eq!(created.date, "2025-09-10");
    assert!((created.tax - 3.0).abs() < 1e-9);
    assert!((created.total - 53.0).abs() < 1e-9);
    assert_eq!(created.status, InvoiceStatus::Unpaid);
    assert_eq!(created.payment, PaymentMethod::Cash);
}

#[test]
fn create_rejects_bad_amount_without_change() {
    let mut s = BillingState::default();
    let before = s.clone();
    assert!(s.apply(BillingAction::Create { draft: draft("-10"), today: "2025-09-10".into() }).is_err());
    assert!(s.apply(BillingAction::Create { draft: draft(""), today: "2025-09-10".into() }).is_err());
    assert_eq!(s, before);
}

#[test]
fn toggle_payment_channel() {
    let mut s = BillingState::default();
    assert!(!s.channels.enabled(PaymentChannel::DigitalWallet));
    s.apply(BillingAction::TogglePaymentChannel(PaymentChannel::DigitalWallet)).unwrap();
    assert!(s.channels.enabled(PaymentChannel::DigitalWallet));
    assert!(s.channels.enabled(PaymentChannel::Card));
}

#[test]
fn save_fees_caps_discount() {
    let mut s = BillingState::default();
    let fees = FeeDraft { consultation_fee: "80".into(), tax_rate: "8.5".into(), default_discount: "150".into() };
    s.apply(BillingAction::SaveFees(fees)).unwrap();
    assert_eq!(s.fees, FeeSettings { consultation_fee: 80.0, tax_rate: 8.5, default_discount: 100.0 });
}

#[test]
fn save_fees_rejects_text() {
    let mut s = BillingState::default();
    let fees = FeeDraft { tax_rate: "six".into(), ..FeeDraft::from(FeeSettings::default()) };
    assert!(s.apply(BillingAction::SaveFees(fees)).is_err());
    assert_eq!(s.fees, FeeSettings::default());
}

#[test]
fn fee_draft_prefills_from_settings() {
    let draft = FeeDraft::from(FeeSettings::default());
    assert_eq!(draft.consultation_fee, "75");
    assert_eq!(draft.tax_rate, "6");
}

#[test]
fn payment_method_labels_round_trip() {
    for method in PaymentMethod::ALL {
        assert_eq!(PaymentMethod::from_label(method.label()), Some(method));
    }
}

#[test]
fn list_keys_change_with_status() {
    use std::collections::HashSet;

    let mut s = BillingState::default();
    let key = |s: &BillingState| s.invoices.iter().map(|i| (i.id.clone(), i.status)).collect::<HashSet<_>>();
    let before = key(&s);
    s.apply(BillingAction::MarkPaid("INV-002".into())).unwrap();
    let after = key(&s);
    assert_eq!(before.len(), 4);
    assert_eq!(before.symmetric_difference(&after).count(), 2);
}
