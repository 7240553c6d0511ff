//! UI state marker trait.

/// Snapshot of everything a view needs to draw itself.
///
/// `Default` is the closed/empty state; reducers take it by value and
/// `std::mem::take` leaves it behind during dispatch.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
