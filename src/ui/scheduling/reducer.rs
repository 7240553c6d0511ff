//! Reducer for the scheduling dialog.

use chrono::NaiveDate;

use crate::scheduling::{end_time_candidates, step_date, time_slots, SchedulingSession, TimeSlot};
use crate::ui::mvi::Reducer;

use super::intent::{SchedulingIntent, Step};
use super::state::{FormField, SchedulingDialogState};

/// Slots per hour, used for page steps on time fields.
const HOUR_STEP: i64 = 4;

/// Reducer for scheduling dialog state transitions.
pub struct SchedulingReducer;

impl Reducer for SchedulingReducer {
    type State = SchedulingDialogState;
    type Intent = SchedulingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let (today, session, focus) = match state {
            SchedulingDialogState::Open {
                today,
                session,
                focus,
            } => (today, session, focus),
            SchedulingDialogState::Hidden => {
                return match intent {
                    SchedulingIntent::Open { today } => opened(today),
                    _ => SchedulingDialogState::Hidden,
                };
            }
        };

        let (session, focus) = match intent {
            SchedulingIntent::Open { today } => return opened(today),
            SchedulingIntent::Close => return SchedulingDialogState::Hidden,
            SchedulingIntent::FocusNext => (session, focus.next()),
            SchedulingIntent::FocusPrev => (session, focus.prev()),
            SchedulingIntent::Adjust(step) => (adjust(session, focus, step, today), focus),
            SchedulingIntent::SelectDate(date) => (session.with_date(date, today), focus),
            SchedulingIntent::SelectStartTime(slot) => (session.with_start_time(slot), focus),
            SchedulingIntent::SelectEndTime(slot) => (session.with_end_time(slot), focus),
            SchedulingIntent::Review => (session.review(), focus),
            SchedulingIntent::Send => (session.confirm(), focus),
        };

        SchedulingDialogState::Open {
            today,
            session,
            focus,
        }
    }
}

fn opened(today: NaiveDate) -> SchedulingDialogState {
    SchedulingDialogState::Open {
        today,
        session: SchedulingSession::default(),
        focus: FormField::default(),
    }
}

fn adjust(
    session: SchedulingSession,
    focus: FormField,
    step: Step,
    today: NaiveDate,
) -> SchedulingSession {
    match focus {
        FormField::Date => {
            let days = match step {
                Step::Back => -1,
                Step::Forward => 1,
                Step::PageBack => -7,
                Step::PageForward => 7,
            };
            match step_date(session.date, days, today) {
                Some(date) => session.with_date(date, today),
                None => session,
            }
        }
        FormField::StartTime => {
            match step_slot(&time_slots(), session.start_time, slot_delta(step)) {
                Some(slot) => session.with_start_time(slot),
                None => session,
            }
        }
        FormField::EndTime => {
            let candidates = end_time_candidates(session.start_time);
            match step_slot(&candidates, session.end_time, slot_delta(step)) {
                Some(slot) => session.with_end_time(slot),
                None => session,
            }
        }
        FormField::Submit => session,
    }
}

fn slot_delta(step: Step) -> i64 {
    match step {
        Step::Back => -1,
        Step::Forward => 1,
        Step::PageBack => -HOUR_STEP,
        Step::PageForward => HOUR_STEP,
    }
}

/// Move `delta` positions through `candidates`, clamped at both ends.
///
/// An unset value lands on the first candidate going forward and the last
/// going back.
fn step_slot(candidates: &[TimeSlot], current: Option<TimeSlot>, delta: i64) -> Option<TimeSlot> {
    let last = candidates.len().checked_sub(1)?;
    let position = current.and_then(|slot| candidates.iter().position(|c| *c == slot));
    let index = match position {
        Some(index) => (index as i64 + delta).clamp(0, last as i64) as usize,
        None if delta > 0 => 0,
        None => last,
    };
    candidates.get(index).copied()
}
