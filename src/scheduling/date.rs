//! Calendar-day rules for the call date picker.

use chrono::{Datelike, Duration, NaiveDate};

/// True when `day` may be picked: strictly after `today`.
///
/// Both values are calendar days, so this is a day-start comparison and
/// today itself is excluded.
pub fn is_selectable_date(day: NaiveDate, today: NaiveDate) -> bool {
    day > today
}

/// Earliest date the picker offers.
pub fn first_selectable_date(today: NaiveDate) -> NaiveDate {
    today.succ_opt().unwrap_or(today)
}

/// Move `from` by `days`, refusing to land on a non-selectable day.
///
/// An unset date steps onto the first selectable day regardless of direction.
pub fn step_date(from: Option<NaiveDate>, days: i64, today: NaiveDate) -> Option<NaiveDate> {
    let Some(from) = from else {
        return Some(first_selectable_date(today));
    };
    let target = from.checked_add_signed(Duration::days(days))?;
    is_selectable_date(target, today).then_some(target)
}

/// Long-form date, e.g. "October 19th, 2026".
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Weeks of the month containing `date`, Monday first.
///
/// Days outside the month are `None`.
pub fn month_grid(date: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let Some(first) = date.with_day(1) else {
        return Vec::new();
    };
    let lead = first.weekday().num_days_from_monday() as usize;
    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = lead;
    let mut day = Some(first);

    while let Some(current) = day.filter(|d| d.month() == first.month()) {
        week[slot] = Some(current);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
        day = current.succ_opt();
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn today_and_past_are_not_selectable() {
        let today = ymd(2026, 10, 18);
        assert!(!is_selectable_date(today, today));
        assert!(!is_selectable_date(ymd(2026, 10, 17), today));
        assert!(!is_selectable_date(ymd(2025, 12, 31), today));
        assert!(is_selectable_date(ymd(2026, 10, 19), today));
    }

    #[test]
    fn stepping_never_reaches_today() {
        let today = ymd(2026, 10, 18);
        assert_eq!(step_date(None, -1, today), Some(ymd(2026, 10, 19)));
        assert_eq!(step_date(Some(ymd(2026, 10, 19)), -1, today), None);
        assert_eq!(step_date(Some(ymd(2026, 10, 19)), 7, today), Some(ymd(2026, 10, 26)));
        assert_eq!(step_date(Some(ymd(2026, 10, 24)), -7, today), None);
    }

    #[test]
    fn long_date_uses_ordinals() {
        assert_eq!(format_long_date(ymd(2026, 10, 19)), "October 19th, 2026");
        assert_eq!(format_long_date(ymd(2026, 11, 1)), "November 1st, 2026");
        assert_eq!(format_long_date(ymd(2026, 11, 2)), "November 2nd, 2026");
        assert_eq!(format_long_date(ymd(2026, 11, 3)), "November 3rd, 2026");
        assert_eq!(format_long_date(ymd(2026, 11, 11)), "November 11th, 2026");
        assert_eq!(format_long_date(ymd(2026, 11, 12)), "November 12th, 2026");
        assert_eq!(format_long_date(ymd(2026, 11, 13)), "November 13th, 2026");
        assert_eq!(format_long_date(ymd(2026, 11, 22)), "November 22nd, 2026");
    }

    #[test]
    fn month_grid_covers_every_day_once() {
        // October 2026 starts on a Thursday.
        let grid = month_grid(ymd(2026, 10, 18));
        assert_eq!(grid[0][..3], [None, None, None]);
        assert_eq!(grid[0][3], Some(ymd(2026, 10, 1)));
        let days: Vec<_> = grid.iter().flatten().flatten().collect();
        assert_eq!(days.len(), 31);
        assert_eq!(grid.len(), 5);
    }
}
