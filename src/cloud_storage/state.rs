//! Client-side snapshot of cloud storages and the operations acting on them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

use super::content::ContentListing;
use super::query::{CredentialsType, ProviderType, QueryParams};

/// Identity of a cloud storage on the remote side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CloudStorageId(pub u64);

impl fmt::Display for CloudStorageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CloudStorageId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Resource descriptor as returned by the remote API.
///
/// Only `id` matters to the reducer. Fields this crate does not model are
/// kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudStorage {
    pub id: CloudStorageId,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner: Option<String>,
    pub provider_type: ProviderType,
    /// Bucket/container name on the provider side.
    pub resource: String,
    pub credentials_type: CredentialsType,
    #[serde(default)]
    pub manifests: Vec<String>,
    #[serde(default)]
    pub specific_attributes: String,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub updated_date: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Preview artifact rendered next to a storage in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    /// Location of the preview image (usually an object URL).
    pub uri: String,
}

impl Preview {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

/// A listed storage paired with its preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudStorageItem {
    pub instance: CloudStorage,
    pub preview: Option<Preview>,
}

impl CloudStorageItem {
    pub fn id(&self) -> CloudStorageId {
        self.instance.id
    }
}

/// Latest create attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateActivity {
    pub attaching: bool,
    /// Id assigned by the remote side on success.
    pub id: Option<CloudStorageId>,
    /// Empty when the last attempt did not fail.
    pub error: String,
}

/// Latest update attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateActivity {
    pub updating: bool,
    pub item_id: Option<CloudStorageId>,
    pub error: String,
}

/// Latest directory-content listing attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentLoadActivity {
    pub item_id: Option<CloudStorageId>,
    pub content: Option<ContentListing>,
    pub fetching: bool,
    pub error: String,
}

/// Progress of a tracked delete.
///
/// Untracked ids have no entry at all; a failed delete removes the entry so a
/// retry starts clean. Serialized as `false` (pending) / `true` (deleted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum DeleteStatus {
    Pending,
    Deleted,
}

impl From<bool> for DeleteStatus {
    fn from(done: bool) -> Self {
        if done {
            Self::Deleted
        } else {
            Self::Pending
        }
    }
}

impl From<DeleteStatus> for bool {
    fn from(status: DeleteStatus) -> Self {
        matches!(status, DeleteStatus::Deleted)
    }
}

/// Bookkeeping for mutating operations.
///
/// Create, update and content-load track a single latest attempt each.
/// Deletes are tracked per storage so several can run at once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CloudStorageActivities {
    pub creates: CreateActivity,
    pub updates: UpdateActivity,
    pub deletes: BTreeMap<CloudStorageId, DeleteStatus>,
    pub content_loads: ContentLoadActivity,
}

impl CloudStorageActivities {
    pub fn delete_status(&self, id: CloudStorageId) -> Option<DeleteStatus> {
        self.deletes.get(&id).copied()
    }

    /// Boolean view of delete tracking: `Some(false)` pending, `Some(true)`
    /// deleted, `None` untracked.
    pub fn delete_flag(&self, id: CloudStorageId) -> Option<bool> {
        self.delete_status(id).map(bool::from)
    }
}

/// Full snapshot owned by [`super::CloudStoragesReducer`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CloudStoragesState {
    /// An initial listing attempt has completed (either way).
    pub initialized: bool,
    /// A listing request is in flight.
    pub fetching: bool,
    /// Total number of matching storages on the remote side.
    pub count: u64,
    /// Current page, from the latest successful listing only.
    pub items: Vec<CloudStorageItem>,
    pub query: QueryParams,
    pub activities: CloudStorageActivities,
}

impl UiState for CloudStoragesState {}

impl CloudStoragesState {
    pub fn item(&self, id: CloudStorageId) -> Option<&CloudStorageItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Nothing to render yet: listing in flight or never completed.
    pub fn is_loading(&self) -> bool {
        self.fetching || !self.initialized
    }
}
