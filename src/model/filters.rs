use serde::{Deserialize, Serialize};

use crate::model::task::TaskStatus;

/// Forward-looking time window for the horizon filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "2w")]
    TwoWeeks,
    #[serde(rename = "3w")]
    ThreeWeeks,
}

impl Horizon {
    /// Window length in days
    pub fn days(self) -> i64 {
        match self {
            Horizon::OneWeek => 7,
            Horizon::TwoWeeks => 14,
            Horizon::ThreeWeeks => 21,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Horizon::OneWeek => "1w",
            Horizon::TwoWeeks => "2w",
            Horizon::ThreeWeeks => "3w",
        }
    }
}

/// The persisted filter state: `{categories, time, search}`.
///
/// Every dimension is optional; an empty dimension imposes no restriction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    #[serde(default)]
    pub categories: Vec<TaskStatus>,
    #[serde(default)]
    pub time: Option<Horizon>,
    #[serde(default)]
    pub search: String,
}

impl Filters {
    /// True when no dimension restricts anything
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.time.is_none() && self.search.trim().is_empty()
    }

    /// Toggle a status in the category set
    pub fn toggle_category(&mut self, status: TaskStatus) {
        if let Some(pos) = self.categories.iter().position(|s| *s == status) {
            self.categories.remove(pos);
        } else {
            self.categories.push(status);
        }
    }

    /// Toggle the horizon: selecting the active one clears it
    pub fn toggle_time(&mut self, horizon: Horizon) {
        if self.time == Some(horizon) {
            self.time = None;
        } else {
            self.time = Some(horizon);
        }
    }
}
