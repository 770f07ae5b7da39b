//! Service catalogue with emergency toggles and the add-service form.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use serde::{Deserialize, Serialize};

use super::{ActionError, Reducer, fixtures, required};
use crate::util::money::parse_whole;

/// Categories offered by the add-service form. The first is the default.
pub const SERVICE_CATEGORIES: [&str; 6] =
    ["Consultation", "Preventive Care", "Dental Care", "Emergency", "Surgery", "Grooming"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Whole dollars.
    pub price: u32,
    /// Minutes.
    pub duration: u32,
    pub emergency_available: bool,
    /// Shows the "Emergency" badge on the card.
    pub is_emergency: bool,
}

/// Raw add-service form values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    pub emergency_available: bool,
    pub category: String,
}

impl Default for ServiceDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            duration: String::new(),
            emergency_available: false,
            category: SERVICE_CATEGORIES[0].to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesState {
    pub items: Vec<Service>,
}

impl Default for ServicesState {
    fn default() -> Self {
        Self { items: fixtures::services() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServicesAction {
    ToggleEmergency(String),
    Add(ServiceDraft),
}

impl ServicesState {
    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Mean price rounded to the nearest dollar; 0 for an empty catalogue.
    #[must_use]
    pub fn average_price(&self) -> u32 {
        if self.items.is_empty() {
            return 0;
        }
        let sum: u64 = self.items.iter().map(|s| u64::from(s.price)).sum();
        let count = self.items.len() as u64;
        u32::try_from((sum + count / 2) / count).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn emergency_count(&self) -> usize {
        self.items.iter().filter(|s| s.emergency_available).count()
    }

    fn next_id(&self) -> String {
        let max = self.items.iter().filter_map(|s| s.id.parse::<u32>().ok()).max().unwrap_or(0);
        (max + 1).to_string()
    }
}

/// Validate an add-service draft into a record with the given id.
///
/// # Errors
///
/// Returns `MissingField` for blank name, description, price, or duration and
/// `InvalidNumber` when price or duration is not a whole non-negative number.
pub fn build_service(id: String, draft: &ServiceDraft) -> Result<Service, ActionError> {
    let name = required("name", &draft.name)?;
    let description = required("description", &draft.description)?;
    let price = parse_whole("price", &required("price", &draft.price)?)?;
    let duration = parse_whole("duration", &required("duration", &draft.duration)?)?;
    let category = if draft.category.trim().is_empty() { SERVICE_CATEGORIES[0].to_owned() } else { draft.category.clone() };

    Ok(Service {
        id,
        name,
        category,
        description,
        price,
        duration,
        emergency_available: draft.emergency_available,
        is_emergency: false,
    })
}

impl Reducer for ServicesState {
    type Action = ServicesAction;
    const NAME: &'static str = "services";

    fn apply(&mut self, action: ServicesAction) -> Result<(), ActionError> {
        match action {
            ServicesAction::ToggleEmergency(id) => {
                let service = self
                    .items
                    .iter_mut()
                    .find(|s| s.id == id)
                    .ok_or(ActionError::UnknownId(id))?;
                service.emergency_available = !service.emergency_available;
            }
            ServicesAction::Add(draft) => {
                let service = build_service(self.next_id(), &draft)?;
                self.items.push(service);
            }
        }
        Ok(())
    }
}
