use crate::calendar::{
    day_label, is_preferred, month_grid_dates, month_title, same_month, week_dates, week_title,
};
use crate::models::{
    DateKey, DayDescriptor, MonthSummary, StatsResponse, ViewMode, ViewResponse, WeekSummary,
};
use crate::navigation;
use crate::state::Tracker;
use crate::stats::{
    current_streak, goal_achieved, month_statistics, week_completion_count, WEEKLY_GOAL,
};
use chrono::{Datelike, NaiveDate};

pub fn build_view(tracker: &Tracker) -> ViewResponse {
    build_view_at(navigation::today(), tracker)
}

pub fn build_view_at(today: NaiveDate, tracker: &Tracker) -> ViewResponse {
    let reference = tracker.reference_date();
    let mode = tracker.view_mode();

    let (title, dates) = match mode {
        ViewMode::Week => (week_title(reference), week_dates(reference)),
        ViewMode::Month => (month_title(reference), month_grid_dates(reference)),
    };

    let days = dates
        .into_iter()
        .map(|date| describe_day(tracker, date, reference, today))
        .collect();

    let week = week_summary(tracker, reference);
    let goal_banner = mode == ViewMode::Week && week.goal_achieved;

    ViewResponse {
        view_mode: mode,
        reference_date: DateKey::from(reference).to_string(),
        today: DateKey::from(today).to_string(),
        title,
        days,
        week,
        goal_banner,
        month: month_summary(tracker, reference),
        streak: current_streak(tracker.completions(), today),
    }
}

pub fn build_stats(tracker: &Tracker) -> StatsResponse {
    build_stats_at(navigation::today(), tracker)
}

pub fn build_stats_at(today: NaiveDate, tracker: &Tracker) -> StatsResponse {
    let reference = tracker.reference_date();
    StatsResponse {
        week: week_summary(tracker, reference),
        month: month_summary(tracker, reference),
        streak: current_streak(tracker.completions(), today),
    }
}

pub fn week_summary(tracker: &Tracker, reference: NaiveDate) -> WeekSummary {
    let dates = week_dates(reference);
    let completed = week_completion_count(tracker.completions(), &dates);
    let start = dates.first().copied().unwrap_or(reference);
    let end = dates.last().copied().unwrap_or(reference);
    WeekSummary {
        start_date: DateKey::from(start).to_string(),
        end_date: DateKey::from(end).to_string(),
        completed,
        goal: WEEKLY_GOAL,
        goal_achieved: goal_achieved(completed),
    }
}

fn month_summary(tracker: &Tracker, reference: NaiveDate) -> MonthSummary {
    let stats = month_statistics(tracker.completions(), reference);
    MonthSummary {
        total_workouts: stats.total_workouts,
        weeks_with_goal: stats.weeks_with_goal,
        total_weeks: stats.total_weeks,
        success_rate: stats.success_rate(),
        monthly_target: stats.monthly_target(),
    }
}

fn describe_day(
    tracker: &Tracker,
    date: NaiveDate,
    reference: NaiveDate,
    today: NaiveDate,
) -> DayDescriptor {
    let key = DateKey::from(date);
    DayDescriptor {
        date: key,
        day: date.day(),
        label: day_label(date),
        is_completed: tracker.is_completed(key),
        is_preferred: is_preferred(date),
        is_today: date == today,
        is_in_current_month: same_month(date, reference),
    }
}
