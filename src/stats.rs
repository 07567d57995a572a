use crate::calendar::{days_from, month_end, month_start, same_month, week_dates, week_start};
use crate::completions::CompletionStore;
use crate::models::{DateKey, MonthStatistics};
use chrono::{Duration, NaiveDate};

/// Completed days per Monday-Sunday week needed to hit the goal.
pub const WEEKLY_GOAL: u32 = 4;

pub fn week_completion_count(store: &CompletionStore, dates: &[NaiveDate]) -> u32 {
    dates
        .iter()
        .filter(|date| store.is_completed(DateKey::from(**date)))
        .count() as u32
}

pub fn goal_achieved(count: u32) -> bool {
    count >= WEEKLY_GOAL
}

pub fn month_statistics(store: &CompletionStore, reference: NaiveDate) -> MonthStatistics {
    let first = month_start(reference);
    let last = month_end(reference);

    let total_workouts = days_from(first)
        .take_while(|date| *date <= last)
        .filter(|date| store.is_completed(DateKey::from(*date)))
        .count() as u32;

    let mut stats = MonthStatistics {
        total_workouts,
        ..MonthStatistics::default()
    };

    let mut start = week_start(first);
    while start <= last {
        let dates = week_dates(start);
        if dates.iter().any(|date| same_month(*date, reference)) {
            stats.total_weeks += 1;
            if goal_achieved(week_completion_count(store, &dates)) {
                stats.weeks_with_goal += 1;
            }
        }
        match dates.last().and_then(|sunday| sunday.succ_opt()) {
            Some(monday) => start = monday,
            None => break,
        }
    }

    stats
}

impl MonthStatistics {
    /// Percentage of weeks that hit the goal, rounded half up.
    pub fn success_rate(&self) -> u32 {
        if self.total_weeks == 0 {
            return 0;
        }
        (200 * self.weeks_with_goal + self.total_weeks) / (2 * self.total_weeks)
    }

    pub fn monthly_target(&self) -> u32 {
        self.total_weeks * WEEKLY_GOAL
    }
}

/// Consecutive goal weeks walking back from the week containing `today`.
///
/// The current week is a hard gate: if it has not reached the goal yet the
/// streak is 0, however long the history behind it.
pub fn current_streak(store: &CompletionStore, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut start = week_start(today);
    loop {
        let count = week_completion_count(store, &week_dates(start));
        if !goal_achieved(count) {
            break;
        }
        streak += 1;
        match start.checked_sub_signed(Duration::weeks(1)) {
            Some(previous) => start = previous,
            None => break,
        }
    }
    streak
}
