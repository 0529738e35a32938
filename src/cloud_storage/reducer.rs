//! Reducer for the cloud storage snapshot.

use crate::mvi::Reducer;

use super::intent::{CloudStorageIntent, CloudStoragesEvent};
use super::query::QueryParams;
use super::state::{
    CloudStorageItem, CloudStoragesState, ContentLoadActivity, CreateActivity, DeleteStatus,
    UpdateActivity,
};

/// Reducer for cloud storage state transitions.
///
/// Total and pure. Stale completions are applied as delivered; callers that
/// need ordering must serialize same-kind requests before dispatching.
pub struct CloudStoragesReducer;

impl Reducer for CloudStoragesReducer {
    type State = CloudStoragesState;
    type Intent = CloudStoragesEvent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CloudStoragesEvent::CloudStorage(intent) => reduce_cloud_storage(state, intent),
            CloudStoragesEvent::Auth(intent) if intent.ends_session() => {
                CloudStoragesState::default()
            }
            CloudStoragesEvent::Auth(_) => state,
        }
    }
}

fn reduce_cloud_storage(
    mut state: CloudStoragesState,
    intent: CloudStorageIntent,
) -> CloudStoragesState {
    match intent {
        CloudStorageIntent::SetQuery { query } => CloudStoragesState {
            query: QueryParams::merged(query),
            ..state
        },

        // Old page is dropped right away; nothing is displayable until the
        // listing completes.
        CloudStorageIntent::ListRequested => CloudStoragesState {
            initialized: false,
            fetching: true,
            count: 0,
            items: Vec::new(),
            ..state
        },

        CloudStorageIntent::ListSucceeded {
            items,
            previews,
            count,
            query,
        } => {
            let mut previews = previews.into_iter();
            let items: Vec<_> = items
                .into_iter()
                .map(|instance| CloudStorageItem {
                    instance,
                    preview: previews.next().flatten(),
                })
                .collect();
            CloudStoragesState {
                initialized: true,
                fetching: false,
                // A page never holds more storages than the total.
                count: count.max(items.len() as u64),
                items,
                query: QueryParams::merged(query),
                ..state
            }
        }

        CloudStorageIntent::ListFailed { .. } => CloudStoragesState {
            initialized: true,
            fetching: false,
            ..state
        },

        CloudStorageIntent::CreateRequested => {
            state.activities.creates = CreateActivity {
                attaching: true,
                id: None,
                error: String::new(),
            };
            state
        }

        CloudStorageIntent::CreateSucceeded { id } => {
            state.activities.creates = CreateActivity {
                attaching: false,
                id: Some(id),
                error: String::new(),
            };
            state
        }

        CloudStorageIntent::CreateFailed { error } => {
            let creates = &mut state.activities.creates;
            creates.attaching = false;
            creates.error = error;
            state
        }

        CloudStorageIntent::UpdateRequested => {
            state.activities.updates = UpdateActivity {
                updating: true,
                item_id: None,
                error: String::new(),
            };
            state
        }

        CloudStorageIntent::UpdateSucceeded { storage } => {
            state.activities.updates = UpdateActivity {
                updating: false,
                item_id: Some(storage.id),
                error: String::new(),
            };
            // Preview of the matching row is kept.
            if let Some(item) = state.items.iter_mut().find(|item| item.id() == storage.id) {
                item.instance = storage;
            }
            state
        }

        CloudStorageIntent::UpdateFailed { error } => {
            let updates = &mut state.activities.updates;
            updates.updating = false;
            updates.error = error;
            state
        }

        CloudStorageIntent::DeleteRequested { id } => {
            state.activities.deletes.insert(id, DeleteStatus::Pending);
            state
        }

        CloudStorageIntent::DeleteSucceeded { id } => {
            state.activities.deletes.insert(id, DeleteStatus::Deleted);
            state
        }

        // Failure collapses back to untracked so a retry starts clean.
        CloudStorageIntent::DeleteFailed { id, .. } => {
            state.activities.deletes.remove(&id);
            state
        }

        CloudStorageIntent::ContentLoadRequested => {
            state.activities.content_loads = ContentLoadActivity {
                item_id: None,
                content: None,
                fetching: true,
                error: String::new(),
            };
            state
        }

        CloudStorageIntent::ContentLoadSucceeded { id, content } => {
            state.activities.content_loads = ContentLoadActivity {
                item_id: Some(id),
                content: Some(content),
                fetching: false,
                error: String::new(),
            };
            state
        }

        CloudStorageIntent::ContentLoadFailed { error } => {
            let content_loads = &mut state.activities.content_loads;
            content_loads.fetching = false;
            content_loads.error = error;
            state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthIntent;
    use crate::cloud_storage::query::{CredentialsType, ProviderType, QueryPatch};
    use crate::cloud_storage::state::{CloudStorage, CloudStorageId, Preview};

    fn storage(id: u64) -> CloudStorage {
        CloudStorage {
            id: CloudStorageId(id),
            display_name: format!("storage-{id}"),
            description: String::new(),
            owner: None,
            provider_type: ProviderType::AwsS3Bucket,
            resource: format!("bucket-{id}"),
            credentials_type: CredentialsType::AnonymousAccess,
            manifests: vec!["manifest.jsonl".into()],
            specific_attributes: String::new(),
            created_date: None,
            updated_date: None,
            extra: Default::default(),
        }
    }

    fn reduce(state: CloudStoragesState, intent: CloudStorageIntent) -> CloudStoragesState {
        CloudStoragesReducer::reduce(state, intent.into())
    }

    #[test]
    fn set_query_resets_omitted_fields() {
        let state = reduce(
            CloudStoragesState::default(),
            CloudStorageIntent::SetQuery {
                query: QueryPatch::search("cats"),
            },
        );
        let state = reduce(
            state,
            CloudStorageIntent::SetQuery {
                query: QueryPatch::page(2),
            },
        );
        assert_eq!(state.query.page, 2);
        assert!(state.query.search.is_none());
    }

    #[test]
    fn list_succeeded_pairs_missing_previews_with_none() {
        let state = reduce(
            CloudStoragesState::default(),
            CloudStorageIntent::ListSucceeded {
                items: vec![storage(1), storage(2)],
                previews: vec![Some(Preview::new("blob:1"))],
                count: 2,
                query: QueryPatch::default(),
            },
        );
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].preview, Some(Preview::new("blob:1")));
        assert_eq!(state.items[1].preview, None);
    }

    #[test]
    fn list_succeeded_raises_count_to_page_size() {
        let state = reduce(
            CloudStoragesState::default(),
            CloudStorageIntent::ListSucceeded {
                items: vec![storage(1), storage(2)],
                previews: vec![None, None],
                count: 0,
                query: QueryPatch::default(),
            },
        );
        assert!(state.initialized);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.count, 2);
    }

    #[test]
    fn update_keeps_preview_of_replaced_row() {
        let state = reduce(
            CloudStoragesState::default(),
            CloudStorageIntent::ListSucceeded {
                items: vec![storage(7)],
                previews: vec![Some(Preview::new("blob:7"))],
                count: 1,
                query: QueryPatch::default(),
            },
        );
        let mut renamed = storage(7);
        renamed.display_name = "renamed".into();
        let state = reduce(
            state,
            CloudStorageIntent::UpdateSucceeded {
                storage: renamed.clone(),
            },
        );
        assert_eq!(state.items[0].instance, renamed);
        assert_eq!(state.items[0].preview, Some(Preview::new("blob:7")));
    }

    #[test]
    fn create_failed_keeps_previous_id() {
        let state = reduce(
            CloudStoragesState::default(),
            CloudStorageIntent::CreateSucceeded {
                id: CloudStorageId(9),
            },
        );
        let state = reduce(
            state,
            CloudStorageIntent::CreateFailed {
                error: "quota".into(),
            },
        );
        assert_eq!(state.activities.creates.id, Some(CloudStorageId(9)));
        assert_eq!(state.activities.creates.error, "quota");
        assert!(!state.activities.creates.attaching);
    }

    #[test]
    fn non_logout_auth_event_is_identity() {
        let state = reduce(CloudStoragesState::default(), CloudStorageIntent::ListRequested);
        let next = CloudStoragesReducer::reduce(state.clone(), AuthIntent::LoginSuccess.into());
        assert_eq!(next, state);
    }
}
