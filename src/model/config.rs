use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Configuration from config.toml in the data directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default)]
    pub ui: UiConfig,
}

/// First day of the displayed week
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// How many days `day` sits after the start of its display week
    pub fn offset_of(self, day: NaiveDate) -> i64 {
        match self {
            WeekStart::Sunday => i64::from(day.weekday().num_days_from_sunday()),
            WeekStart::Monday => i64::from(day.weekday().num_days_from_monday()),
        }
    }

    /// Weekday header labels in display order
    pub fn header(self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }
}

/// UI overrides from [ui]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_start_offsets() {
        // 2024-06-12 is a Wednesday
        let wed = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        assert_eq!(WeekStart::Sunday.offset_of(wed), 3);
        assert_eq!(WeekStart::Monday.offset_of(wed), 2);

        let sun = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        assert_eq!(WeekStart::Sunday.offset_of(sun), 0);
        assert_eq!(WeekStart::Monday.offset_of(sun), 6);
    }

    #[test]
    fn config_parses_with_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.week_start, WeekStart::Sunday);
        assert!(config.ui.colors.is_empty());

        let config: Config = toml::from_str(
            r##"
week_start = "monday"

[ui.colors]
review = "#FFAA00"
"##,
        )
        .unwrap();
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.ui.colors.get("review").unwrap(), "#FFAA00");
    }
}
