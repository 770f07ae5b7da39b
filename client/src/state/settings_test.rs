use super::*;

fn form(current: &str, new: &str, confirm: &str) -> PasswordForm {
    PasswordForm { current: current.into(), new: new.into(), confirm: confirm.into() }
}

// =============================================================
// Password
// =============================================================

#[test]
fn password_change_accepts_matching_new_password() {
    assert_eq!(validate_password_change(&form("old-pass", "new-pass", "new-pass")), Ok(()));
}

#[test]
fn password_change_requires_every_field() {
    assert_eq!(validate_password_change(&form("", "a", "a")), Err(ActionError::MissingField("current_password")));
    assert_eq!(validate_password_change(&form("x", "", "a")), Err(ActionError::MissingField("new_password")));
    assert_eq!(validate_password_change(&form("x", "a", " ")), Err(ActionError::MissingField("confirm_password")));
}

#[test]
fn password_change_rejects_mismatch_and_reuse() {
    assert_eq!(validate_password_change(&form("x", "a", "b")), Err(ActionError::PasswordMismatch));
    assert_eq!(validate_password_change(&form("same", "same", "same")), Err(ActionError::PasswordUnchanged));
}

// =============================================================
// Toggles and locale
// =============================================================

#[test]
fn toggle_defaults() {
    let s = SettingsState::default();
    let on: Vec<bool> = SettingsToggle::CONTACT.iter().map(|t| s.enabled(*t)).collect();
    assert_eq!(on, vec![true, true, true, false]);
    let privacy: Vec<bool> = SettingsToggle::PRIVACY.iter().map(|t| s.enabled(*t)).collect();
    assert_eq!(privacy, vec![true, true, true, false]);
}

#[test]
fn toggle_flips_single_setting() {
    let mut s = SettingsState::default();
    s.apply(SettingsAction::Toggle(SettingsToggle::MarketingEmails)).unwrap();
    assert!(s.enabled(SettingsToggle::MarketingEmails));
    assert!(s.enabled(SettingsToggle::EmailNotifications));
}

#[test]
fn language_accepts_known_option() {
    let mut s = SettingsState::default();
    s.apply(SettingsAction::SetLanguage(LanguageField::Timezone, Some("pst".into()))).unwrap();
    assert_eq!(s.language_value(LanguageField::Timezone), Some("pst"));
    s.apply(SettingsAction::SetLanguage(LanguageField::Timezone, None)).unwrap();
    assert_eq!(s.language_value(LanguageField::Timezone), None);
}

#[test]
fn language_rejects_unknown_option() {
    let mut s = SettingsState::default();
    assert_eq!(
        s.apply(SettingsAction::SetLanguage(LanguageField::Language, Some("klingon".into()))),
        Err(ActionError::UnknownId("klingon".into()))
    );
    assert_eq!(s.language_value(LanguageField::Language), None);
}

#[test]
fn select_tab() {
    let mut s = SettingsState::default();
    assert_eq!(s.active_tab, SettingsTab::Password);
    s.apply(SettingsAction::SelectTab(SettingsTab::Privacy)).unwrap();
    assert_eq!(s.active_tab, SettingsTab::Privacy);
}
