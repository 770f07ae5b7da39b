use super::*;

// =============================================================
// Filtering
// =============================================================

#[test]
fn default_filter_shows_everything() {
    let s = DocumentsState::default();
    assert_eq!(s.type_filter, TypeFilter::All);
    assert_eq!(s.visible().len(), 6);
}

#[test]
fn type_filter_narrows_by_kind() {
    let mut s = DocumentsState::default();
    s.apply(DocumentsAction::SetTypeFilter(TypeFilter::Image)).unwrap();
    assert_eq!(s.visible().len(), 2);
    s.apply(DocumentsAction::SetTypeFilter(TypeFilter::Pdf)).unwrap();
    assert_eq!(s.visible().len(), 4);
}

#[test]
fn search_matches_name_or_owner() {
    let mut s = DocumentsState::default();
    s.apply(DocumentsAction::SetSearch(".jpg".into())).unwrap();
    assert_eq!(s.visible().len(), 2);
    s.apply(DocumentsAction::SetSearch("JOHN".into())).unwrap();
    assert_eq!(s.visible().len(), 6);
    s.apply(DocumentsAction::SetSearch("xray".into())).unwrap();
    assert!(s.visible().is_empty());
}

#[test]
fn stats_count_images_and_month() {
    let s = DocumentsState::default();
    assert_eq!(s.total(), 6);
    assert_eq!(s.image_count(), 2);
    assert_eq!(s.uploaded_in("2024-01"), 6);
    assert_eq!(s.uploaded_in("2024-02"), 0);
}

#[test]
fn type_filter_labels_round_trip() {
    for filter in TypeFilter::ALL {
        assert_eq!(TypeFilter::from_label(filter.label()), Some(filter));
    }
}

// =============================================================
// Upload form
// =============================================================

#[test]
fn kind_from_file_name() {
    assert_eq!(DocumentKind::from_file_name("scan.PDF"), Some(DocumentKind::Pdf));
    assert_eq!(DocumentKind::from_file_name("photo.jpeg"), Some(DocumentKind::Image));
    assert_eq!(DocumentKind::from_file_name("notes.txt"), None);
    assert_eq!(DocumentKind::from_file_name("README"), None);
}

#[test]
fn upload_requires_a_file() {
    let draft = UploadDraft { pet_name: "Max".into(), owner_name: "John".into(), ..UploadDraft::default() };
    assert_eq!(validate_upload(&draft), Err(ActionError::MissingField("file")));
}

#[test]
fn upload_requires_names() {
    let draft = UploadDraft { file_name: Some("a.pdf".into()), ..UploadDraft::default() };
    assert_eq!(validate_upload(&draft), Err(ActionError::MissingField("pet_name")));
}

#[test]
fn valid_upload_reports_kind() {
    let draft = UploadDraft {
        pet_name: "Max".into(),
        owner_name: "John Smith".into(),
        file_name: Some("xray.png".into()),
        ..UploadDraft::default()
    };
    let request = validate_upload(&draft).unwrap();
    assert_eq!(request.kind, Some(DocumentKind::Image));
    assert_eq!(request.category, "Medical Records");
}
