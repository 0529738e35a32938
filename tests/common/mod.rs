//! Shared fixtures for cloud storage tests.

#![allow(dead_code, unused_imports)]

use cloudstate::cloud_storage::{
    CloudStorage, CloudStorageId, CloudStorageIntent, CloudStoragesEvent, CloudStoragesReducer,
    CloudStoragesState, CredentialsType, Preview, ProviderType, QueryPatch,
};
use cloudstate::mvi::Reducer;
use std::io::Write;
use tempfile::NamedTempFile;

/// Build a storage descriptor with predictable fields.
pub fn storage(id: u64) -> CloudStorage {
    CloudStorage {
        id: CloudStorageId(id),
        display_name: format!("Storage {id}"),
        description: format!("bucket number {id}"),
        owner: Some("admin".to_string()),
        provider_type: ProviderType::AwsS3Bucket,
        resource: format!("bucket-{id}"),
        credentials_type: CredentialsType::KeySecretKeyPair,
        manifests: vec!["manifest.jsonl".to_string()],
        specific_attributes: "region=eu-west-1".to_string(),
        created_date: None,
        updated_date: None,
        extra: Default::default(),
    }
}

pub fn preview(id: u64) -> Option<Preview> {
    Some(Preview::new(format!("blob:preview-{id}")))
}

/// Apply a sequence of cloud storage intents starting from `state`.
pub fn apply(
    state: CloudStoragesState,
    intents: impl IntoIterator<Item = CloudStorageIntent>,
) -> CloudStoragesState {
    intents.into_iter().fold(state, |state, intent| {
        CloudStoragesReducer::reduce(state, CloudStoragesEvent::from(intent))
    })
}

/// State after a successful listing of `ids`, each with a preview.
pub fn listed(ids: &[u64]) -> CloudStoragesState {
    apply(
        CloudStoragesState::default(),
        [
            CloudStorageIntent::ListRequested,
            CloudStorageIntent::ListSucceeded {
                items: ids.iter().map(|id| storage(*id)).collect(),
                previews: ids.iter().map(|id| preview(*id)).collect(),
                count: ids.len() as u64,
                query: QueryPatch::default(),
            },
        ],
    )
}

/// Write `lines` to a temporary JSON-lines file.
pub fn temp_event_log(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{line}").expect("Failed to write event");
    }
    file
}
