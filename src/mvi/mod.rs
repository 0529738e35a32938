//! Model-View-Intent (MVI) primitives.
//!
//! Unidirectional data flow for client-side state:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot, replaced on every intent
//! - **Intent**: an already-resolved event (request issued, response arrived, ...)
//! - **Reducer**: pure function `(State, Intent) -> State`
//! - **Store**: the single writer that owns the current snapshot

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{SharedStore, Store};
