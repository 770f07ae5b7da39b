//! Account settings: password form, contact preferences, locale, and privacy.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

use super::notifications::Frequency;
use super::{ActionError, Reducer, required};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsTab {
    #[default]
    Password,
    Notifications,
    Language,
    Privacy,
}

impl SettingsTab {
    pub const ALL: [Self; 4] = [Self::Password, Self::Notifications, Self::Language, Self::Privacy];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Password => "Password",
            Self::Notifications => "Notifications",
            Self::Language => "Language",
            Self::Privacy => "Privacy",
        }
    }
}

/// A `<select>` option: stored value and display label.
pub type SelectOption = (&'static str, &'static str);

pub const LANGUAGES: [SelectOption; 4] = [("en", "English"), ("es", "Spanish"), ("fr", "French"), ("de", "German")];
pub const TIMEZONES: [SelectOption; 4] =
    [("utc", "UTC"), ("est", "Eastern Time"), ("pst", "Pacific Time"), ("cst", "Central Time")];
pub const DATE_FORMATS: [SelectOption; 3] =
    [("mm/dd/yyyy", "MM/DD/YYYY"), ("dd/mm/yyyy", "DD/MM/YYYY"), ("yyyy-mm-dd", "YYYY-MM-DD")];
pub const TIME_FORMATS: [SelectOption; 2] = [("12h", "12 Hour"), ("24h", "24 Hour")];

/// Boolean settings, each flipped by one switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsToggle {
    EmailNotifications,
    SmsNotifications,
    PushNotifications,
    MarketingEmails,
    ProfileVisibility,
    ShowContactInfo,
    OnlineStatus,
    DataAnalytics,
}

impl SettingsToggle {
    pub const CONTACT: [Self; 4] =
        [Self::EmailNotifications, Self::SmsNotifications, Self::PushNotifications, Self::MarketingEmails];
    pub const PRIVACY: [Self; 4] =
        [Self::ProfileVisibility, Self::ShowContactInfo, Self::OnlineStatus, Self::DataAnalytics];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::EmailNotifications => "Email Notifications",
            Self::SmsNotifications => "SMS Notifications",
            Self::PushNotifications => "Push Notifications",
            Self::MarketingEmails => "Marketing Emails",
            Self::ProfileVisibility => "Profile Visibility",
            Self::ShowContactInfo => "Show Contact Information",
            Self::OnlineStatus => "Online Status",
            Self::DataAnalytics => "Data Analytics",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::EmailNotifications => "Receive notifications via email",
            Self::SmsNotifications => "Receive notification via SMS",
            Self::PushNotifications => "Receive browser notifications",
            Self::MarketingEmails => "Receive updates about new features",
            Self::ProfileVisibility => "Allow clients to view profile",
            Self::ShowContactInfo => "Display your contact details to client",
            Self::OnlineStatus => "Show when you're online",
            Self::DataAnalytics => "Allow usage data collection for improvements",
        }
    }
}

/// Locale selections; `None` means "not chosen yet".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSettings {
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub date_format: Option<String>,
    pub time_format: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageField {
    Language,
    Timezone,
    DateFormat,
    TimeFormat,
}

impl LanguageField {
    #[must_use]
    pub fn options(self) -> &'static [SelectOption] {
        match self {
            Self::Language => &LANGUAGES,
            Self::Timezone => &TIMEZONES,
            Self::DateFormat => &DATE_FORMATS,
            Self::TimeFormat => &TIME_FORMATS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsState {
    pub active_tab: SettingsTab,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub push_notifications: bool,
    pub marketing_emails: bool,
    pub frequency: Option<Frequency>,
    pub language: LanguageSettings,
    pub profile_visibility: bool,
    pub show_contact_info: bool,
    pub online_status: bool,
    pub data_analytics: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            active_tab: SettingsTab::Password,
            email_notifications: true,
            sms_notifications: true,
            push_notifications: true,
            marketing_emails: false,
            frequency: None,
            language: LanguageSettings::default(),
            profile_visibility: true,
            show_contact_info: true,
            online_status: true,
            data_analytics: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsAction {
    SelectTab(SettingsTab),
    Toggle(SettingsToggle),
    SetFrequency(Option<Frequency>),
    SetLanguage(LanguageField, Option<String>),
}

impl SettingsState {
    #[must_use]
    pub fn enabled(&self, toggle: SettingsToggle) -> bool {
        match toggle {
            SettingsToggle::EmailNotifications => self.email_notifications,
            SettingsToggle::SmsNotifications => self.sms_notifications,
            SettingsToggle::PushNotifications => self.push_notifications,
            SettingsToggle::MarketingEmails => self.marketing_emails,
            SettingsToggle::ProfileVisibility => self.profile_visibility,
            SettingsToggle::ShowContactInfo => self.show_contact_info,
            SettingsToggle::OnlineStatus => self.online_status,
            SettingsToggle::DataAnalytics => self.data_analytics,
        }
    }

    #[must_use]
    pub fn language_value(&self, field: LanguageField) -> Option<&str> {
        match field {
            LanguageField::Language => self.language.language.as_deref(),
            LanguageField::Timezone => self.language.timezone.as_deref(),
            LanguageField::DateFormat => self.language.date_format.as_deref(),
            LanguageField::TimeFormat => self.language.time_format.as_deref(),
        }
    }
}

/// Raw password form values. Never serialized into logs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

/// Check the password change form.
///
/// # Errors
///
/// Returns `MissingField` for any blank field, `PasswordMismatch` when the
/// confirmation differs, and `PasswordUnchanged` when the new password equals
/// the current one.
pub fn validate_password_change(form: &PasswordForm) -> Result<(), ActionError> {
    required("current_password", &form.current)?;
    required("new_password", &form.new)?;
    required("confirm_password", &form.confirm)?;
    if form.new != form.confirm {
        return Err(ActionError::PasswordMismatch);
    }
    if form.new == form.current {
        return Err(ActionError::PasswordUnchanged);
    }
    Ok(())
}

impl Reducer for SettingsState {
    type Action = SettingsAction;
    const NAME: &'static str = "settings";

    fn apply(&mut self, action: SettingsAction) -> Result<(), ActionError> {
        match action {
            SettingsAction::SelectTab(tab) => self.active_tab = tab,
            SettingsAction::Toggle(toggle) => {
                let flag = match toggle {
                    SettingsToggle::EmailNotifications => &mut self.email_notifications,
                    SettingsToggle::SmsNotifications => &mut self.sms_notifications,
                    SettingsToggle::PushNotifications => &mut self.push_notifications,
                    SettingsToggle::MarketingEmails => &mut self.marketing_emails,
                    SettingsToggle::ProfileVisibility => &mut self.profile_visibility,
                    SettingsToggle::ShowContactInfo => &mut self.show_contact_info,
                    SettingsToggle::OnlineStatus => &mut self.online_status,
                    SettingsToggle::DataAnalytics => &mut self.data_analytics,
                };
                *flag = !*flag;
            }
            SettingsAction::SetFrequency(frequency) => self.frequency = frequency,
            SettingsAction::SetLanguage(field, value) => {
                if let Some(v) = &value {
                    if !field.options().iter().any(|(option, _)| *option == v.as_str()) {
                        return Err(ActionError::UnknownId(v.clone()));
                    }
                }
                let slot = match field {
                    LanguageField::Language => &mut self.language.language,
                    LanguageField::Timezone => &mut self.language.timezone,
                    LanguageField::DateFormat => &mut self.language.date_format,
                    LanguageField::TimeFormat => &mut self.language.time_format,
                };
                *slot = value;
            }
        }
        Ok(())
    }
}
