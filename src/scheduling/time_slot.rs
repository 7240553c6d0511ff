//! Quarter-hour time slots for call scheduling.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Granularity of the slot grid in minutes.
pub const SLOT_MINUTES: u16 = 15;

/// Number of slots in one day (`00:00`..`23:45`).
pub const SLOTS_PER_DAY: usize = 24 * 60 / SLOT_MINUTES as usize;

/// One quarter-hour boundary of a day.
///
/// Ordering follows the time of day. Because labels are zero-padded
/// `HH:MM`, this is the same ordering as comparing the labels as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    minute_of_day: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeSlotError {
    #[error("invalid time slot '{0}': expected HH:MM")]
    Malformed(String),
    #[error("invalid time slot '{0}': not on a 15-minute boundary")]
    OffGrid(String),
}

impl TimeSlot {
    /// Slot at `index` on the daily grid (0 = `00:00`, 95 = `23:45`).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SLOTS_PER_DAY).then(|| Self {
            minute_of_day: index as u16 * SLOT_MINUTES,
        })
    }

    pub fn index(self) -> usize {
        (self.minute_of_day / SLOT_MINUTES) as usize
    }

    pub fn minute_of_day(self) -> u16 {
        self.minute_of_day
    }

    pub fn hour(self) -> u16 {
        self.minute_of_day / 60
    }

    pub fn minute(self) -> u16 {
        self.minute_of_day % 60
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    fn as_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour() as u32, self.minute() as u32, 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = TimeSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeSlotError::Malformed(s.to_string());
        let (hours, minutes) = s.split_once(':').ok_or_else(malformed)?;
        if hours.len() != 2 || minutes.len() != 2 {
            return Err(malformed());
        }
        let hours: u16 = hours.parse().map_err(|_| malformed())?;
        let minutes: u16 = minutes.parse().map_err(|_| malformed())?;
        if hours >= 24 || minutes >= 60 {
            return Err(malformed());
        }
        if minutes % SLOT_MINUTES != 0 {
            return Err(TimeSlotError::OffGrid(s.to_string()));
        }
        Ok(Self {
            minute_of_day: hours * 60 + minutes,
        })
    }
}

/// All 96 slots of a day in order, starting at `00:00`.
pub fn time_slots() -> Vec<TimeSlot> {
    (0..SLOTS_PER_DAY).filter_map(TimeSlot::from_index).collect()
}

/// Slots that may be offered as an end time for the given start.
///
/// Only slots strictly after `start` qualify. With no start chosen every
/// slot is a candidate.
pub fn end_time_candidates(start: Option<TimeSlot>) -> Vec<TimeSlot> {
    time_slots()
        .into_iter()
        .filter(|slot| start.map_or(true, |start| *slot > start))
        .collect()
}

/// Minutes between `start` and `end` on one reference day.
///
/// Returns `None` unless both are set and `end` is after `start`.
pub fn duration_minutes(start: Option<TimeSlot>, end: Option<TimeSlot>) -> Option<u32> {
    let (start, end) = (start?, end?);
    let reference = NaiveDate::from_ymd_opt(2000, 1, 1)?;
    let start = NaiveDateTime::new(reference, start.as_naive_time());
    let end = NaiveDateTime::new(reference, end.as_naive_time());
    let minutes = (end - start).num_minutes();
    (minutes > 0).then_some(minutes as u32)
}
