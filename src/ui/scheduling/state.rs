//! State for the scheduling dialog.

use chrono::NaiveDate;

use crate::scheduling::{Phase, SchedulingSession};
use crate::ui::mvi::UiState;

/// Focusable controls of the Form phase, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Date,
    StartTime,
    EndTime,
    /// The "Review call request" action.
    Submit,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::StartTime,
            Self::StartTime => Self::EndTime,
            Self::EndTime => Self::Submit,
            Self::Submit => Self::Date,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Submit,
            Self::StartTime => Self::Date,
            Self::EndTime => Self::StartTime,
            Self::Submit => Self::EndTime,
        }
    }
}

/// State of the scheduling dialog.
///
/// The session only exists in `Open`, so closing the dialog is the reset.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SchedulingDialogState {
    /// Dialog is not visible.
    #[default]
    Hidden,

    /// Dialog is showing one of the three wizard phases.
    Open {
        /// Calendar day the dialog was opened on; the date constraint is relative to it.
        today: NaiveDate,
        session: SchedulingSession,
        /// Focused control. Only meaningful in the Form phase.
        focus: FormField,
    },
}

impl UiState for SchedulingDialogState {}

impl SchedulingDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn session(&self) -> Option<&SchedulingSession> {
        match self {
            Self::Open { session, .. } => Some(session),
            Self::Hidden => None,
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        self.session().map(|session| session.phase)
    }

    pub fn focus(&self) -> Option<FormField> {
        match self {
            Self::Open { focus, .. } => Some(*focus),
            Self::Hidden => None,
        }
    }

    pub fn today(&self) -> Option<NaiveDate> {
        match self {
            Self::Open { today, .. } => Some(*today),
            Self::Hidden => None,
        }
    }
}
