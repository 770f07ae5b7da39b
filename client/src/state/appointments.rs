//! Appointment list, status tabs, and request/upcoming/past transitions.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use serde::{Deserialize, Serialize};

use super::{ActionError, Reducer, contains_ignore_case, fixtures};

/// Reason recorded when the provider declines a request.
pub const DECLINE_REASON: &str = "Declined by provider";

/// Lifecycle status of an appointment. Also names the list tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Request,
    Upcoming,
    Past,
    Canceled,
}

impl AppointmentStatus {
    /// Tab order on the appointments page.
    pub const ALL: [Self; 4] = [Self::Request, Self::Upcoming, Self::Past, Self::Canceled];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Request => "Request",
            Self::Upcoming => "Upcoming",
            Self::Past => "Past",
            Self::Canceled => "Canceled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub pet_name: String,
    pub breed: String,
    pub owner_name: String,
    pub date: String,
    pub time: String,
    pub emergency: bool,
    pub status: AppointmentStatus,
    pub cancel_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentsState {
    pub items: Vec<Appointment>,
    pub active_tab: AppointmentStatus,
    pub search: String,
}

impl Default for AppointmentsState {
    fn default() -> Self {
        Self { items: fixtures::appointments(), active_tab: AppointmentStatus::Request, search: String::new() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentsAction {
    SelectTab(AppointmentStatus),
    SetSearch(String),
    Accept(u32),
    Decline(u32),
    Complete(u32),
}

/// Appointments with `status`, in list order.
#[must_use]
pub fn filter_by_status(items: &[Appointment], status: AppointmentStatus) -> Vec<&Appointment> {
    items.iter().filter(|a| a.status == status).collect()
}

impl AppointmentsState {
    /// Number of appointments shown on the tab for `status`.
    #[must_use]
    pub fn tab_count(&self, status: AppointmentStatus) -> usize {
        self.items.iter().filter(|a| a.status == status).count()
    }

    /// Active tab's appointments narrowed by the pet/owner search box.
    #[must_use]
    pub fn visible(&self) -> Vec<&Appointment> {
        filter_by_status(&self.items, self.active_tab)
            .into_iter()
            .filter(|a| {
                self.search.trim().is_empty()
                    || contains_ignore_case(&a.pet_name, &self.search)
                    || contains_ignore_case(&a.owner_name, &self.search)
            })
            .collect()
    }

    fn transition(
        &mut self,
        id: u32,
        action: &'static str,
        from: AppointmentStatus,
        to: AppointmentStatus,
        reason: Option<&str>,
    ) -> Result<(), ActionError> {
        let appointment = self
            .items
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| ActionError::UnknownId(id.to_string()))?;
        if appointment.status != from {
            return Err(ActionError::InvalidTransition { action, status: appointment.status.label() });
        }
        appointment.status = to;
        if let Some(reason) = reason {
            appointment.cancel_reason = Some(reason.to_owned());
        }
        Ok(())
    }
}

impl Reducer for AppointmentsState {
    type Action = AppointmentsAction;
    const NAME: &'static str = "appointments";

    fn apply(&mut self, action: AppointmentsAction) -> Result<(), ActionError> {
        match action {
            AppointmentsAction::SelectTab(tab) => self.active_tab = tab,
            AppointmentsAction::SetSearch(text) => self.search = text,
            AppointmentsAction::Accept(id) => {
                self.transition(id, "accept", AppointmentStatus::Request, AppointmentStatus::Upcoming, None)?;
            }
            AppointmentsAction::Decline(id) => self.transition(
                id,
                "decline",
                AppointmentStatus::Request,
                AppointmentStatus::Canceled,
                Some(DECLINE_REASON),
            )?,
            AppointmentsAction::Complete(id) => {
                self.transition(id, "complete", AppointmentStatus::Upcoming, AppointmentStatus::Past, None)?;
            }
        }
        Ok(())
    }
}
