use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub const MONTH_LABELS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Suggested workout days. Not enforced anywhere.
pub const PREFERRED_DAYS: [Weekday; 4] = [Weekday::Tue, Weekday::Wed, Weekday::Fri, Weekday::Sat];

/// Monday on or before `date`. Clamped to `NaiveDate::MIN` when that Monday is
/// not representable.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.checked_sub_signed(Duration::days(date.weekday().num_days_from_monday() as i64))
        .unwrap_or(NaiveDate::MIN)
}

/// Sunday on or after `date`, clamped to `NaiveDate::MAX`.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    date.checked_add_signed(Duration::days(6 - date.weekday().num_days_from_monday() as i64))
        .unwrap_or(NaiveDate::MAX)
}

/// Consecutive days from `start`, ending after `NaiveDate::MAX`.
pub fn days_from(start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |day| day.succ_opt())
}

/// The Monday-Sunday week holding `date`. Only shorter than 7 days at the
/// edges of the representable range.
pub fn week_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start(date);
    let end = week_end(start);
    days_from(start).take_while(|day| *day <= end).collect()
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Every day from the Monday on/before the 1st through the Sunday on/after the
/// last day of `date`'s month, so the grid is made of whole weeks.
pub fn month_grid_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start(month_start(date));
    let end = week_end(month_end(date));
    days_from(start).take_while(|day| *day <= end).collect()
}

pub fn is_preferred(date: NaiveDate) -> bool {
    PREFERRED_DAYS.contains(&date.weekday())
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn day_label(date: NaiveDate) -> &'static str {
    DAY_LABELS[date.weekday().num_days_from_monday() as usize]
}

pub fn month_title(date: NaiveDate) -> String {
    format!("{} {}", MONTH_LABELS[date.month0() as usize], date.year())
}

pub fn week_title(date: NaiveDate) -> String {
    let dates = week_dates(date);
    let start = dates.first().copied().unwrap_or(date);
    let end = dates.last().copied().unwrap_or(date);
    format!("Week of {} - {}", short_day(start), short_day(end))
}

fn short_day(date: NaiveDate) -> String {
    let month = MONTH_LABELS[date.month0() as usize];
    format!("{} {}", &month[..3], date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_start_is_monday_on_or_before() {
        assert_eq!(week_start(ymd(2024, 6, 3)), ymd(2024, 6, 3));
        assert_eq!(week_start(ymd(2024, 6, 5)), ymd(2024, 6, 3));
        assert_eq!(week_start(ymd(2024, 6, 9)), ymd(2024, 6, 3));
        assert_eq!(week_start(ymd(2024, 1, 1)), ymd(2024, 1, 1));
        assert_eq!(week_start(ymd(2023, 1, 1)), ymd(2022, 12, 26));
    }

    #[test]
    fn week_dates_are_seven_consecutive_days_from_monday() {
        let mut day = ymd(2023, 12, 20);
        for _ in 0..400 {
            let dates = week_dates(day);
            assert_eq!(dates.len(), 7);
            assert_eq!(dates[0].weekday(), Weekday::Mon);
            for pair in dates.windows(2) {
                assert_eq!(pair[1] - pair[0], Duration::days(1));
            }
            assert!(dates.contains(&day));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn june_2024_grid_spans_whole_weeks() {
        let grid = month_grid_dates(ymd(2024, 6, 15));
        assert_eq!(grid.first(), Some(&ymd(2024, 5, 27)));
        assert_eq!(grid.last(), Some(&ymd(2024, 6, 30)));
        assert_eq!(grid.len(), 35);
    }

    #[test]
    fn month_grid_is_minimal_aligned_superset() {
        for year in [2023, 2024] {
            for month in 1..=12 {
                let date = ymd(year, month, 1);
                let grid = month_grid_dates(date);
                assert_eq!(grid.len() % 7, 0);
                assert_eq!(grid[0].weekday(), Weekday::Mon);
                assert_eq!(grid[grid.len() - 1].weekday(), Weekday::Sun);
                assert!(grid.contains(&month_start(date)));
                assert!(grid.contains(&month_end(date)));
                // first and last rows each hold at least one day of the month
                assert!(grid[..7].iter().any(|d| same_month(*d, date)));
                assert!(grid[grid.len() - 7..].iter().any(|d| same_month(*d, date)));
            }
        }
    }

    #[test]
    fn month_starting_monday_ending_sunday_needs_no_padding() {
        // February 2021: Mon 1st through Sun 28th
        let grid = month_grid_dates(ymd(2021, 2, 10));
        assert_eq!(grid.len(), 28);
        assert_eq!(grid[0], ymd(2021, 2, 1));
        assert_eq!(grid[27], ymd(2021, 2, 28));
    }

    #[test]
    fn month_end_handles_leap_years() {
        assert_eq!(month_end(ymd(2024, 2, 10)), ymd(2024, 2, 29));
        assert_eq!(month_end(ymd(2023, 2, 10)), ymd(2023, 2, 28));
        assert_eq!(month_end(ymd(2024, 12, 31)), ymd(2024, 12, 31));
    }

    #[test]
    fn preferred_days_are_tue_wed_fri_sat() {
        let preferred: Vec<_> = week_dates(ymd(2024, 6, 3))
            .into_iter()
            .filter(|d| is_preferred(*d))
            .map(day_label)
            .collect();
        assert_eq!(preferred, vec!["Tue", "Wed", "Fri", "Sat"]);
    }

    #[test]
    fn grids_at_representable_limits_are_truncated() {
        let last_week = week_dates(NaiveDate::MAX);
        assert!(!last_week.is_empty() && last_week.len() <= 7);
        assert_eq!(last_week[0].weekday(), Weekday::Mon);
        assert_eq!(last_week.last(), Some(&NaiveDate::MAX));

        let first_week = week_dates(NaiveDate::MIN);
        assert_eq!(first_week[0], NaiveDate::MIN);
        assert_eq!(first_week.last().map(|d| d.weekday()), Some(Weekday::Sun));

        let last_grid = month_grid_dates(NaiveDate::MAX);
        assert_eq!(last_grid.last(), Some(&NaiveDate::MAX));

        let first_grid = month_grid_dates(NaiveDate::MIN);
        assert_eq!(first_grid.first(), Some(&week_start(NaiveDate::MIN)));
        assert!(first_grid.contains(&NaiveDate::MIN));
        assert!(week_title(NaiveDate::MAX).starts_with("Week of "));
    }

    #[test]
    fn titles_match_display_format() {
        assert_eq!(month_title(ymd(2024, 6, 15)), "June 2024");
        assert_eq!(week_title(ymd(2024, 6, 5)), "Week of Jun 3 - Jun 9");
        assert_eq!(week_title(ymd(2024, 7, 31)), "Week of Jul 29 - Aug 4");
    }
}
