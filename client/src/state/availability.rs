//! Weekly availability, today's time slots, blocked dates, and booking toggles.

#[cfg(test)]
#[path = "availability_test.rs"]
mod availability_test;

use serde::{Deserialize, Serialize};

use super::{ActionError, Reducer, fixtures, required};

/// Default start/end shown in the add-slot form.
pub const DEFAULT_SLOT_START: &str = "11:00 AM";
pub const DEFAULT_SLOT_END: &str = "11:30 AM";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Available,
    Booked,
    Unavailable,
}

impl SlotStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Booked => "Booked",
            Self::Unavailable => "Unavailable",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Available,
    PartiallyBooked,
    Unavailable,
}

impl DayStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::PartiallyBooked => "Partially booked",
            Self::Unavailable => "Unavailable",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Self; 7] =
        [Self::Monday, Self::Tuesday, Self::Wednesday, Self::Thursday, Self::Friday, Self::Saturday, Self::Sunday];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Lowercase form value used by the day `<select>`.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.value() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub time: String,
    pub status: SlotStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: Weekday,
    pub date: String,
    pub status: DayStatus,
}

/// A slot added through the form, kept alongside the fixture week.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedSlot {
    pub day: Weekday,
    pub start: String,
    pub end: String,
    pub available: bool,
}

/// Raw add-slot form values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDraft {
    pub day: Option<Weekday>,
    pub start: String,
    pub end: String,
    pub mark_available: bool,
}

impl Default for SlotDraft {
    fn default() -> Self {
        Self { day: None, start: DEFAULT_SLOT_START.to_owned(), end: DEFAULT_SLOT_END.to_owned(), mark_available: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityState {
    pub is_available: bool,
    pub auto_block: bool,
    pub allow_urgent: bool,
    pub week: Vec<DaySchedule>,
    pub today_slots: Vec<TimeSlot>,
    pub added_slots: Vec<AddedSlot>,
    pub blocked_dates: Vec<String>,
    pub emergency_start: String,
    pub emergency_end: String,
}

impl Default for AvailabilityState {
    fn default() -> Self {
        Self {
            is_available: true,
            auto_block: true,
            allow_urgent: true,
            week: fixtures::week_schedule(),
            today_slots: fixtures::today_slots(),
            added_slots: Vec::new(),
            blocked_dates: fixtures::blocked_dates(),
            emergency_start: "06:00 PM".to_owned(),
            emergency_end: "10:00 PM".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityAction {
    ToggleAvailable,
    ToggleAutoBlock,
    ToggleAllowUrgent,
    AddSlot(SlotDraft),
    BlockDate(String),
    UnblockDate(String),
}

impl AvailabilityState {
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.today_slots.len()
    }

    #[must_use]
    pub fn count_with_status(&self, status: SlotStatus) -> usize {
        self.today_slots.iter().filter(|s| s.status == status).count()
    }

    #[must_use]
    pub fn added_for(&self, day: Weekday) -> usize {
        self.added_slots.iter().filter(|s| s.day == day).count()
    }
}

/// Validate an add-slot draft.
///
/// # Errors
///
/// Returns `MissingField` when no day is selected or a time is blank.
pub fn build_slot(draft: &SlotDraft) -> Result<AddedSlot, ActionError> {
    let day = draft.day.ok_or(ActionError::MissingField("day"))?;
    let start = required("start", &draft.start)?;
    let end = required("end", &draft.end)?;
    Ok(AddedSlot { day, start, end, available: draft.mark_available })
}

impl Reducer for AvailabilityState {
    type Action = AvailabilityAction;
    const NAME: &'static str = "availability";

    fn apply(&mut self, action: AvailabilityAction) -> Result<(), ActionError> {
        match action {
            AvailabilityAction::ToggleAvailable => self.is_available = !self.is_available,
            AvailabilityAction::ToggleAutoBlock => self.auto_block = !self.auto_block,
            AvailabilityAction::ToggleAllowUrgent => self.allow_urgent = !self.allow_urgent,
            AvailabilityAction::AddSlot(draft) => {
                let slot = build_slot(&draft)?;
                self.added_slots.push(slot);
            }
            AvailabilityAction::BlockDate(label) => {
                let label = required("date", &label)?;
                if !self.blocked_dates.contains(&label) {
                    self.blocked_dates.push(label);
                }
            }
            AvailabilityAction::UnblockDate(label) => {
                let index = self
                    .blocked_dates
                    .iter()
                    .position(|d| *d == label)
                    .ok_or(ActionError::UnknownId(label))?;
                self.blocked_dates.remove(index);
            }
        }
        Ok(())
    }
}
