//! Small status pill.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use leptos::prelude::*;

use crate::state::appointments::AppointmentStatus;
use crate::state::availability::{DayStatus, SlotStatus};
use crate::state::billing::InvoiceStatus;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Neutral => "badge",
            Self::Success => "badge badge--success",
            Self::Warning => "badge badge--warning",
            Self::Danger => "badge badge--danger",
            Self::Info => "badge badge--info",
        }
    }
}

impl From<AppointmentStatus> for BadgeTone {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Request => Self::Warning,
            AppointmentStatus::Upcoming => Self::Info,
            AppointmentStatus::Past => Self::Success,
            AppointmentStatus::Canceled => Self::Danger,
        }
    }
}

impl From<InvoiceStatus> for BadgeTone {
    fn from(status: InvoiceStatus) -> Self {
        match status {
            InvoiceStatus::Paid => Self::Success,
            InvoiceStatus::Unpaid => Self::Warning,
        }
    }
}

impl From<SlotStatus> for BadgeTone {
    fn from(status: SlotStatus) -> Self {
        match status {
            SlotStatus::Available => Self::Success,
            SlotStatus::Booked => Self::Info,
            SlotStatus::Unavailable => Self::Neutral,
        }
    }
}

impl From<DayStatus> for BadgeTone {
    fn from(status: DayStatus) -> Self {
        match status {
            DayStatus::Available => Self::Success,
            DayStatus::PartiallyBooked => Self::Warning,
            DayStatus::Unavailable => Self::Neutral,
        }
    }
}

#[component]
pub fn Badge(#[prop(optional)] tone: BadgeTone, #[prop(into)] label: String) -> impl IntoView {
    view! { <span class=tone.class()>{label}</span> }
}
