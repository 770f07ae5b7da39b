//! Notification feed, type tabs, read/delete actions, and delivery preferences.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use serde::{Deserialize, Serialize};

use super::{ActionError, Reducer, fixtures};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Appointment,
    Review,
    Setting,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationTab {
    #[default]
    All,
    Appointments,
    Reviews,
    Settings,
}

impl NotificationTab {
    pub const ALL: [Self; 4] = [Self::All, Self::Appointments, Self::Reviews, Self::Settings];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Appointments => "Appointments",
            Self::Reviews => "Reviews",
            Self::Settings => "Settings",
        }
    }

    #[must_use]
    pub fn matches(self, kind: NotificationKind) -> bool {
        match self {
            Self::All => true,
            Self::Appointments => kind == NotificationKind::Appointment,
            Self::Reviews => kind == NotificationKind::Review,
            Self::Settings => kind == NotificationKind::Setting,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    /// Relative age such as `5 min` or `2 hours`.
    pub timestamp: String,
    pub is_read: bool,
    pub requires_action: bool,
    pub category: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Immediately,
    Hourly,
    Daily,
    Weekly,
}

impl Frequency {
    pub const ALL: [Self; 4] = [Self::Immediately, Self::Hourly, Self::Daily, Self::Weekly];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Immediately => "Immediately",
            Self::Hourly => "Hourly",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }
}

/// Which events produce a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationTopic {
    Email,
    Review,
    Appointment,
    Payment,
}

impl NotificationTopic {
    pub const ALL: [Self; 4] = [Self::Email, Self::Review, Self::Appointment, Self::Payment];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Email => "Email Notifications",
            Self::Review => "Review Notifications",
            Self::Appointment => "Appointment Notifications",
            Self::Payment => "Payment Notification",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Email => "Receive notifications via email",
            Self::Review => "New review and ratings",
            Self::Appointment => "New booking and schedule changes",
            Self::Payment => "Payment confirmation and overdue alerts",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub review: bool,
    pub appointment: bool,
    pub payment: bool,
    pub frequency: Option<Frequency>,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self { email: true, review: true, appointment: true, payment: false, frequency: None }
    }
}

impl NotificationPreferences {
    #[must_use]
    pub fn enabled(&self, topic: NotificationTopic) -> bool {
        match topic {
            NotificationTopic::Email => self.email,
            NotificationTopic::Review => self.review,
            NotificationTopic::Appointment => self.appointment,
            NotificationTopic::Payment => self.payment,
        }
    }

    fn toggle(&mut self, topic: NotificationTopic) {
        let flag = match topic {
            NotificationTopic::Email => &mut self.email,
            NotificationTopic::Review => &mut self.review,
            NotificationTopic::Appointment => &mut self.appointment,
            NotificationTopic::Payment => &mut self.payment,
        };
        *flag = !*flag;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub active_tab: NotificationTab,
    pub preferences: NotificationPreferences,
}

impl Default for NotificationsState {
    fn default() -> Self {
        Self {
            items: fixtures::notifications(),
            active_tab: NotificationTab::All,
            preferences: NotificationPreferences::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationsAction {
    SelectTab(NotificationTab),
    MarkRead(String),
    Delete(String),
    MarkAllRead,
    TogglePreference(NotificationTopic),
    SetFrequency(Option<Frequency>),
}

/// Notifications shown on `tab`, in feed order.
#[must_use]
pub fn filter_by_tab(items: &[Notification], tab: NotificationTab) -> Vec<&Notification> {
    items.iter().filter(|n| tab.matches(n.kind)).collect()
}

impl NotificationsState {
    #[must_use]
    pub fn visible(&self) -> Vec<&Notification> {
        filter_by_tab(&self.items, self.active_tab)
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    #[must_use]
    pub fn action_required_count(&self) -> usize {
        self.items.iter().filter(|n| n.requires_action).count()
    }

    /// Tab caption; the All tab carries the current total.
    #[must_use]
    pub fn tab_label(&self, tab: NotificationTab) -> String {
        if tab == NotificationTab::All {
            format!("{} ({})", tab.label(), self.items.len())
        } else {
            tab.label().to_owned()
        }
    }

    /// Notifications whose relative timestamp is in minutes or hours.
    #[must_use]
    pub fn today_count(&self) -> usize {
        self.items
            .iter()
            .filter(|n| n.timestamp.contains("min") || n.timestamp.contains("hours"))
            .count()
    }
}

impl Reducer for NotificationsState {
    type Action = NotificationsAction;
    const NAME: &'static str = "notifications";

    fn apply(&mut self, action: NotificationsAction) -> Result<(), ActionError> {
        match action {
            NotificationsAction::SelectTab(tab) => self.active_tab = tab,
            NotificationsAction::MarkRead(id) => {
                let notification = self
                    .items
                    .iter_mut()
                    .find(|n| n.id == id)
                    .ok_or(ActionError::UnknownId(id))?;
                notification.is_read = true;
            }
            NotificationsAction::Delete(id) => {
                let index = self
                    .items
                    .iter()
                    .position(|n| n.id == id)
                    .ok_or(ActionError::UnknownId(id))?;
                self.items.remove(index);
            }
            NotificationsAction::MarkAllRead => {
                for notification in &mut self.items {
                    notification.is_read = true;
                }
            }
            NotificationsAction::TogglePreference(topic) => self.preferences.toggle(topic),
            NotificationsAction::SetFrequency(frequency) => self.preferences.frequency = frequency,
        }
        Ok(())
    }
}
