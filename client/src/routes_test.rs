use super::*;

#[test]
fn trailing_slash_and_query_are_ignored() {
    assert!(is_active(AppRoute::Reviews, "/reviews/"));
    assert!(is_active(AppRoute::Billing, "/billing?tab=settings"));
    assert_eq!(page_title("/documents#top"), "Documents");
}

#[test]
fn paths_are_unique_and_absolute() {
    for (i, a) in AppRoute::ALL.iter().enumerate() {
        assert!(a.path().starts_with('/'));
        assert!(AppRoute::ALL[i + 1..].iter().all(|b| a.path() != b.path()));
    }
}

#[test]
fn invoice_generator_highlights_billing() {
    assert_eq!(active_nav("/billing/invoice"), Some(AppRoute::Billing));
    assert_eq!(page_title("/billing/invoice"), "Billing");
}

#[test]
fn prefix_match_respects_segment_boundary() {
    assert!(!is_active(AppRoute::Billing, "/billingx"));
    assert!(is_active(AppRoute::Billing, "/billing"));
}

#[test]
fn title_defaults_to_dashboard() {
    assert_eq!(page_title("/nowhere"), "Dashboard");
    assert_eq!(page_title("/settings"), "Settings");
    assert_eq!(page_title("/services"), "My Services");
}

#[test]
fn nav_links_are_unique_and_skip_generator() {
    assert_eq!(NAV_LINKS.len(), 9);
    assert!(!NAV_LINKS.contains(&AppRoute::GenerateInvoice));
    for (i, a) in NAV_LINKS.iter().enumerate() {
        assert!(NAV_LINKS[i + 1..].iter().all(|b| a != b));
    }
}
