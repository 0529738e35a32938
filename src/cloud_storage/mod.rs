//! Cloud storage feature module.
//!
//! Tracks the client-side view of remotely managed cloud storages and of the
//! asynchronous operations acting on them (listing, create, update, delete,
//! directory browsing). No I/O happens here; outcomes arrive as events.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Snapshot: listing page, query, activity trackers
//! - `query.rs` - Listing filters and pagination
//! - `content.rs` - Directory content listings
//! - `intent.rs` - Lifecycle events (Requested / Succeeded / Failed)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod content;
mod intent;
mod query;
mod reducer;
mod state;

pub use content::{ContentEntry, ContentListing, EntryKind};
pub use intent::{CloudStorageIntent, CloudStoragesEvent};
pub use query::{
    CredentialsType, ProviderType, QueryParams, QueryPatch, StorageStatus, FIRST_PAGE,
};
pub use reducer::CloudStoragesReducer;
pub use state::{
    CloudStorage, CloudStorageActivities, CloudStorageId, CloudStorageItem, CloudStoragesState,
    ContentLoadActivity, CreateActivity, DeleteStatus, Preview, UpdateActivity,
};
