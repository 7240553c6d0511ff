//! Model-View-Intent primitives for the dialog and page state.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ render
//!     ↑                                            │
//!     └────────────────────────────────────────────┘
//! ```
//!
//! Reducers are the only place state changes. Renderers only read.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
