//! Dashboard widgets: headline metrics, today's schedule, recent reviews.
//!
//! Read-only; the dashboard has no actions.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use serde::{Deserialize, Serialize};

use super::fixtures;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub title: String,
    pub value: String,
    pub subtitle: String,
    pub trend: Trend,
    pub badge: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub pet_name: String,
    pub owner_name: String,
    pub service: String,
    pub time: String,
    pub emergency: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSnippet {
    pub rating: u8,
    pub text: String,
    pub author: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    pub practitioner: String,
    pub metrics: Vec<Metric>,
    pub schedule: Vec<ScheduleEntry>,
    pub recent_reviews: Vec<ReviewSnippet>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            practitioner: fixtures::PRACTITIONER.to_owned(),
            metrics: fixtures::dashboard_metrics(),
            schedule: fixtures::todays_schedule(),
            recent_reviews: fixtures::recent_reviews(),
        }
    }
}

impl DashboardState {
    #[must_use]
    pub fn emergency_count(&self) -> usize {
        self.schedule.iter().filter(|e| e.emergency).count()
    }
}

