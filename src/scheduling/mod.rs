//! Scheduling rules shared by the dialog and its tests.
//!
//! Nothing here knows about the terminal. The dialog reducer drives a
//! [`SchedulingSession`] through these functions and the renderer reads
//! the derived values back.

mod date;
mod session;
mod time_slot;

pub use date::{first_selectable_date, format_long_date, is_selectable_date, month_grid, step_date};
pub use session::{Phase, SchedulingSession};
pub use time_slot::{
    duration_minutes, end_time_candidates, time_slots, TimeSlot, TimeSlotError, SLOTS_PER_DAY,
    SLOT_MINUTES,
};
