//! Daily puzzle calendar
//!
//! Puzzle numbers count days since the original game's launch date, so every
//! player sees the same puzzle on the same day.

use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};

/// The first puzzle's date
const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2021, 6, 19) {
    Some(date) => date,
    None => panic!("epoch date is valid"),
};

/// Puzzle number for a calendar date
///
/// Days since the epoch; dates at or before the epoch map to puzzle 0.
#[must_use]
pub fn puzzle_number(date: NaiveDate) -> u32 {
    let days = date.signed_duration_since(EPOCH).num_days();
    u32::try_from(days).unwrap_or(0)
}

/// Today's puzzle number in local time
#[must_use]
pub fn todays_puzzle() -> u32 {
    puzzle_number(Local::now().date_naive())
}

/// Time remaining until the next puzzle, as `HH:MM:SS`
///
/// `None` once the next puzzle's date has been reached (the caller should
/// recompute the puzzle number instead of counting down).
#[must_use]
pub fn next_puzzle_eta(now: NaiveDateTime) -> Option<String> {
    let next_midnight = now.date().succ_opt()?.and_hms_opt(0, 0, 0)?;
    let remaining = next_midnight.signed_duration_since(now);

    if remaining <= TimeDelta::zero() {
        return None;
    }

    let total_seconds = remaining.num_seconds();
    Some(format!(
        "{:02}:{:02}:{:02}",
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_puzzle_zero() {
        let epoch = NaiveDate::from_ymd_opt(2021, 6, 19).unwrap();
        assert_eq!(puzzle_number(epoch), 0);
    }

    #[test]
    fn numbers_increment_daily() {
        let date = NaiveDate::from_ymd_opt(2021, 6, 20).unwrap();
        assert_eq!(puzzle_number(date), 1);

        let date = NaiveDate::from_ymd_opt(2022, 6, 19).unwrap();
        assert_eq!(puzzle_number(date), 365);
    }

    #[test]
    fn dates_before_epoch_clamp_to_zero() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(puzzle_number(date), 0);
    }

    #[test]
    fn eta_counts_down_to_midnight() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(21, 58, 30)
            .unwrap();
        assert_eq!(next_puzzle_eta(now).as_deref(), Some("02:01:30"));
    }

    #[test]
    fn eta_just_after_midnight_is_nearly_a_day() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(0, 0, 1)
            .unwrap();
        assert_eq!(next_puzzle_eta(now).as_deref(), Some("23:59:59"));
    }
}
