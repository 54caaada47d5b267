//! One-shot messages shown on the next rendered page.
//!
//! Notices are queued in the visitor's session. Failing session storage is
//! only logged, a lost notice never fails the request it belongs to.

use axum::{extract::FromRequestParts, RequestPartsExt as _};
use http::{request::Parts, StatusCode};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::error;

use crate::state::AppState;

const SESSION_NOTICES_KEY: &str = "notices";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: Level::Error,
            message: message.into(),
        }
    }
}

pub struct Notices {
    session: Session,
}

impl FromRequestParts<AppState> for Notices {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = parts.extract::<Session>().await.map_err(|e| {
            error!("Missing session for notices: {}", e.1);
            e.0
        })?;
        Ok(Notices { session })
    }
}

impl Notices {
    pub async fn push(&self, notice: Notice) {
        let mut queued = match self.session.get::<Vec<Notice>>(SESSION_NOTICES_KEY).await {
            Ok(queued) => queued.unwrap_or_default(),
            Err(e) => {
                error!("Failed to read notices from session: {e}");
                Vec::new()
            }
        };
        queued.push(notice);
        if let Err(e) = self.session.insert(SESSION_NOTICES_KEY, queued).await {
            error!("Failed to store notice in session: {e}");
        }
    }

    pub async fn success(&self, message: impl Into<String>) {
        self.push(Notice::success(message)).await
    }

    /// Drains all queued notices.
    pub async fn take(&self) -> Vec<Notice> {
        match self.session.remove::<Vec<Notice>>(SESSION_NOTICES_KEY).await {
            Ok(notices) => notices.unwrap_or_default(),
            Err(e) => {
                error!("Failed to take notices from session: {e}");
                Vec::new()
            }
        }
    }
}
