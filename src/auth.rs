//! Authentication events.
//!
//! The authentication flow lives elsewhere; its events are part of the
//! vocabulary here only so reducers can react to session termination.

use serde::{Deserialize, Serialize};

use crate::mvi::Intent;

/// Outcomes published by the authentication flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthIntent {
    Authorized,
    LoginSuccess,
    LoginFailed {
        #[serde(default)]
        error: String,
    },
    /// Session ended; every per-session snapshot resets to defaults.
    LogoutSuccess,
    LogoutFailed {
        #[serde(default)]
        error: String,
    },
    RegisterSuccess,
    RegisterFailed {
        #[serde(default)]
        error: String,
    },
}

impl Intent for AuthIntent {}

impl AuthIntent {
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::LogoutSuccess)
    }
}
