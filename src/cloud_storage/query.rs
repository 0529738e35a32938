//! Filter and pagination parameters for cloud storage listings.

use serde::{Deserialize, Serialize};

use super::state::CloudStorageId;

/// Remote provider backing a cloud storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderType {
    AwsS3Bucket,
    AzureContainer,
    GoogleCloudStorage,
}

/// How the remote side authenticates access to the storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CredentialsType {
    KeySecretKeyPair,
    AccountNameTokenPair,
    KeyFilePath,
    AnonymousAccess,
    ConnectionString,
}

/// Reachability reported by the remote side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageStatus {
    Available,
    NotFound,
    Forbidden,
}

/// First page of a listing; pages are 1-based.
pub const FIRST_PAGE: u32 = 1;

/// Query of the most recent requested or completed listing.
///
/// Every filter is unset by default; `page` defaults to [`FIRST_PAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub page: u32,
    pub id: Option<CloudStorageId>,
    pub search: Option<String>,
    pub owner: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub resource_name: Option<String>,
    pub provider_type: Option<ProviderType>,
    pub credentials_type: Option<CredentialsType>,
    pub status: Option<StorageStatus>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            id: None,
            search: None,
            owner: None,
            display_name: None,
            description: None,
            resource_name: None,
            provider_type: None,
            credentials_type: None,
            status: None,
        }
    }
}

/// Partial query as issued by callers.
///
/// Absent fields mean "use the default", never "keep the previous value".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryPatch {
    pub page: Option<u32>,
    pub id: Option<CloudStorageId>,
    pub search: Option<String>,
    pub owner: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub resource_name: Option<String>,
    pub provider_type: Option<ProviderType>,
    pub credentials_type: Option<CredentialsType>,
    pub status: Option<StorageStatus>,
}

impl QueryPatch {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }
}

impl QueryParams {
    /// Defaults with every field provided by `patch` laid over them.
    pub fn merged(patch: QueryPatch) -> Self {
        let defaults = Self::default();
        Self {
            page: patch.page.unwrap_or(defaults.page),
            id: patch.id.or(defaults.id),
            search: patch.search.or(defaults.search),
            owner: patch.owner.or(defaults.owner),
            display_name: patch.display_name.or(defaults.display_name),
            description: patch.description.or(defaults.description),
            resource_name: patch.resource_name.or(defaults.resource_name),
            provider_type: patch.provider_type.or(defaults.provider_type),
            credentials_type: patch.credentials_type.or(defaults.credentials_type),
            status: patch.status.or(defaults.status),
        }
    }
}

impl From<QueryParams> for QueryPatch {
    fn from(query: QueryParams) -> Self {
        Self {
            page: Some(query.page),
            id: query.id,
            search: query.search,
            owner: query.owner,
            display_name: query.display_name,
            description: query.description,
            resource_name: query.resource_name,
            provider_type: query.provider_type,
            credentials_type: query.credentials_type,
            status: query.status,
        }
    }
}
