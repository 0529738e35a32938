//! Events folded into the cloud storage snapshot.

use serde::{Deserialize, Serialize};

use crate::auth::AuthIntent;
use crate::mvi::Intent;

use super::content::ContentListing;
use super::query::QueryPatch;
use super::state::{CloudStorage, CloudStorageId, Preview};

/// Cloud storage lifecycle events.
///
/// Each remote operation shows up as a Requested / Succeeded / Failed
/// triple. `Failed` variants carry a display string only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CloudStorageIntent {
    /// Replace the query with defaults overlaid by `query`.
    SetQuery {
        #[serde(default)]
        query: QueryPatch,
    },

    ListRequested,
    ListSucceeded {
        items: Vec<CloudStorage>,
        /// Positionally paired with `items`.
        #[serde(default)]
        previews: Vec<Option<Preview>>,
        count: u64,
        #[serde(default)]
        query: QueryPatch,
    },
    ListFailed {
        #[serde(default)]
        error: String,
    },

    CreateRequested,
    CreateSucceeded {
        id: CloudStorageId,
    },
    CreateFailed {
        error: String,
    },

    UpdateRequested,
    UpdateSucceeded {
        storage: CloudStorage,
    },
    UpdateFailed {
        error: String,
    },

    DeleteRequested {
        id: CloudStorageId,
    },
    DeleteSucceeded {
        id: CloudStorageId,
    },
    DeleteFailed {
        id: CloudStorageId,
        #[serde(default)]
        error: String,
    },

    ContentLoadRequested,
    ContentLoadSucceeded {
        id: CloudStorageId,
        content: ContentListing,
    },
    ContentLoadFailed {
        error: String,
    },
}

impl Intent for CloudStorageIntent {}

/// Everything the cloud storage reducer can be handed.
///
/// Events from the auth family other than session termination are accepted
/// and ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum CloudStoragesEvent {
    CloudStorage(CloudStorageIntent),
    Auth(AuthIntent),
}

impl Intent for CloudStoragesEvent {}

impl From<CloudStorageIntent> for CloudStoragesEvent {
    fn from(intent: CloudStorageIntent) -> Self {
        Self::CloudStorage(intent)
    }
}

impl From<AuthIntent> for CloudStoragesEvent {
    fn from(intent: AuthIntent) -> Self {
        Self::Auth(intent)
    }
}
