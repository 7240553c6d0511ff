//! The transient state of one call request.

use chrono::NaiveDate;

use super::date::is_selectable_date;
use super::time_slot::{duration_minutes, TimeSlot};

/// Step of the scheduling wizard. Moves forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Form,
    Review,
    Confirmation,
}

/// Date and time range picked for a call, plus the wizard phase.
///
/// A session only exists while the dialog is open. Closing drops it, so a
/// reopened dialog always starts from `SchedulingSession::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchedulingSession {
    pub date: Option<NaiveDate>,
    pub start_time: Option<TimeSlot>,
    pub end_time: Option<TimeSlot>,
    pub phase: Phase,
}

impl SchedulingSession {
    /// Call length in minutes, recomputed from the current times.
    pub fn duration(&self) -> Option<u32> {
        duration_minutes(self.start_time, self.end_time)
    }

    /// Whether the Form may advance to Review.
    pub fn can_review(&self) -> bool {
        self.phase == Phase::Form
            && self.date.is_some()
            && self.start_time.is_some()
            && self.end_time.is_some()
            && self.duration().is_some_and(|minutes| minutes > 0)
    }

    /// Set the call date. Days on or before `today` are rejected.
    pub fn with_date(mut self, date: NaiveDate, today: NaiveDate) -> Self {
        if self.phase == Phase::Form && is_selectable_date(date, today) {
            self.date = Some(date);
        }
        self
    }

    /// Set the start time. An end time that no longer follows it is cleared.
    pub fn with_start_time(mut self, start: TimeSlot) -> Self {
        if self.phase != Phase::Form {
            return self;
        }
        self.start_time = Some(start);
        if self.end_time.is_some_and(|end| end <= start) {
            self.end_time = None;
        }
        self
    }

    /// Set the end time. Slots at or before the start are rejected.
    pub fn with_end_time(mut self, end: TimeSlot) -> Self {
        if self.phase != Phase::Form {
            return self;
        }
        if self.start_time.map_or(true, |start| end > start) {
            self.end_time = Some(end);
        }
        self
    }

    pub fn review(mut self) -> Self {
        if self.can_review() {
            self.phase = Phase::Review;
        }
        self
    }

    pub fn confirm(mut self) -> Self {
        if self.phase == Phase::Review {
            self.phase = Phase::Confirmation;
        }
        self
    }
}
