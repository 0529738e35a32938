//! Client-side state engine for remotely managed cloud storages.
//!
//! [`cloud_storage::CloudStoragesReducer`] folds lifecycle events into a
//! [`cloud_storage::CloudStoragesState`] snapshot; [`mvi::Store`] owns the
//! current snapshot on behalf of the host.

pub mod auth;
pub mod cloud_storage;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod replay;
