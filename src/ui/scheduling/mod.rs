//! Scheduling dialog feature module.
//!
//! The modal that walks a user through requesting a call with an expert:
//! Form (date and time range) → Review → Confirmation.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Dialog state enum
//! - `intent.rs` - User/container actions
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::{dialog_lines, render_scheduling_dialog, SchedulingDialogProps};
pub use intent::{SchedulingIntent, Step};
pub use reducer::SchedulingReducer;
pub use state::{FormField, SchedulingDialogState};
