//! Base trait for intents (events folded into state).

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Requests the host has just issued (`*Requested`)
/// - Outcomes of asynchronous work (`*Succeeded` / `*Failed`)
/// - Events owned by other features (session termination)
///
/// Intents are processed by reducers to produce new states. `Debug` is
/// required so the store can trace what it applied.
pub trait Intent: Debug + Send + 'static {}
