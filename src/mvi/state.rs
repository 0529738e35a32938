//! Base trait for state snapshots in MVI architecture.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq so consumers can detect changes)
/// - Resettable (Default is the initial snapshot)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
