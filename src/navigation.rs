use crate::models::ViewMode;
use chrono::{Duration, Local, Months, NaiveDate};

pub fn previous(reference: NaiveDate, mode: ViewMode) -> NaiveDate {
    let stepped = match mode {
        ViewMode::Week => reference.checked_sub_signed(Duration::days(7)),
        ViewMode::Month => reference.checked_sub_months(Months::new(1)),
    };
    stepped.unwrap_or(reference)
}

pub fn next(reference: NaiveDate, mode: ViewMode) -> NaiveDate {
    let stepped = match mode {
        ViewMode::Week => reference.checked_add_signed(Duration::days(7)),
        ViewMode::Month => reference.checked_add_months(Months::new(1)),
    };
    stepped.unwrap_or(reference)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_mode_steps_seven_days() {
        assert_eq!(previous(ymd(2024, 6, 5), ViewMode::Week), ymd(2024, 5, 29));
        assert_eq!(next(ymd(2024, 6, 5), ViewMode::Week), ymd(2024, 6, 12));
        assert_eq!(next(ymd(2024, 12, 30), ViewMode::Week), ymd(2025, 1, 6));
    }

    #[test]
    fn month_mode_steps_calendar_months() {
        assert_eq!(previous(ymd(2024, 6, 15), ViewMode::Month), ymd(2024, 5, 15));
        assert_eq!(next(ymd(2024, 12, 15), ViewMode::Month), ymd(2025, 1, 15));
        assert_eq!(previous(ymd(2024, 1, 15), ViewMode::Month), ymd(2023, 12, 15));
    }

    #[test]
    fn month_mode_clamps_to_month_length() {
        assert_eq!(previous(ymd(2024, 3, 31), ViewMode::Month), ymd(2024, 2, 29));
        assert_eq!(next(ymd(2023, 1, 31), ViewMode::Month), ymd(2023, 2, 28));
        assert_eq!(next(ymd(2024, 5, 31), ViewMode::Month), ymd(2024, 6, 30));
    }

    #[test]
    fn next_then_previous_returns_in_week_mode() {
        let start = ymd(2024, 2, 29);
        assert_eq!(previous(next(start, ViewMode::Week), ViewMode::Week), start);
    }

    #[test]
    fn out_of_range_step_keeps_reference() {
        assert_eq!(next(NaiveDate::MAX, ViewMode::Week), NaiveDate::MAX);
        assert_eq!(previous(NaiveDate::MIN, ViewMode::Month), NaiveDate::MIN);
    }
}
