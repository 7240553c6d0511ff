//! Intents for the scheduling dialog.

use chrono::NaiveDate;

use crate::scheduling::TimeSlot;
use crate::ui::mvi::Intent;

/// Direction and size of an arrow-key adjustment on the focused field.
///
/// Dates move by one day (`Back`/`Forward`) or one week (`PageBack`/
/// `PageForward`). Times move by one candidate slot or one hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Back,
    Forward,
    PageBack,
    PageForward,
}

/// Intents that can be dispatched to the scheduling dialog.
#[derive(Debug, Clone)]
pub enum SchedulingIntent {
    /// Container opened the dialog. Starts an empty session.
    Open { today: NaiveDate },

    /// Dialog closed by any means. Discards the session.
    Close,

    FocusNext,
    FocusPrev,

    /// Adjust the value of the focused Form field.
    Adjust(Step),

    SelectDate(NaiveDate),
    SelectStartTime(TimeSlot),
    SelectEndTime(TimeSlot),

    /// "Review call request". Ignored unless the Form is complete.
    Review,

    /// "Send call request to expert".
    Send,
}

impl Intent for SchedulingIntent {}
