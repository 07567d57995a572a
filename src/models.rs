use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive, str::FromStr};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Years a parsed key may fall in. Keeps every week and month grid built from
/// user input well inside what chrono can represent.
pub const DATE_KEY_YEARS: RangeInclusive<i32> = 1..=9999;

#[derive(Debug)]
pub enum DateKeyError {
    Format(chrono::ParseError),
    OutOfRange(NaiveDate),
}

impl fmt::Display for DateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(err) => write!(f, "date must be YYYY-MM-DD: {err}"),
            Self::OutOfRange(date) => write!(
                f,
                "date {date} is outside years {}-{}",
                DATE_KEY_YEARS.start(),
                DATE_KEY_YEARS.end()
            ),
        }
    }
}

impl std::error::Error for DateKeyError {}

/// Calendar-day identifier. Built from the year/month/day triplet only, so the
/// same day maps to the same key whatever the process timezone is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s.trim(), DATE_KEY_FORMAT).map_err(DateKeyError::Format)?;
        if !DATE_KEY_YEARS.contains(&date.year()) {
            return Err(DateKeyError::OutOfRange(date));
        }
        Ok(Self(date))
    }
}

impl TryFrom<String> for DateKey {
    type Error = DateKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Week,
    Month,
}

impl ViewMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MonthStatistics {
    pub total_workouts: u32,
    pub weeks_with_goal: u32,
    pub total_weeks: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayDescriptor {
    pub date: DateKey,
    pub day: u32,
    pub label: &'static str,
    pub is_completed: bool,
    pub is_preferred: bool,
    pub is_today: bool,
    pub is_in_current_month: bool,
}

#[derive(Debug, Deserialize)]
pub struct DateRequest {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub action: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewModeRequest {
    pub mode: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub date: String,
    pub completed: bool,
    pub week_completion_count: u32,
}

#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub day_labels: [&'static str; 7],
    pub month_labels: [&'static str; 12],
    pub preferred_days: Vec<&'static str>,
    pub weekly_goal: u32,
}

#[derive(Debug, Serialize)]
pub struct WeekSummary {
    pub start_date: String,
    pub end_date: String,
    pub completed: u32,
    pub goal: u32,
    pub goal_achieved: bool,
}

#[derive(Debug, Serialize)]
pub struct MonthSummary {
    pub total_workouts: u32,
    pub weeks_with_goal: u32,
    pub total_weeks: u32,
    pub success_rate: u32,
    pub monthly_target: u32,
}

#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub view_mode: ViewMode,
    pub reference_date: String,
    pub today: String,
    pub title: String,
    pub days: Vec<DayDescriptor>,
    pub week: WeekSummary,
    pub goal_banner: bool,
    pub month: MonthSummary,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub week: WeekSummary,
    pub month: MonthSummary,
    pub streak: u32,
}
