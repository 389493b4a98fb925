//! Record Service
//!
//! CRUD against the `/api/todo` resource, every request credentialed from
//! the [`CredentialStore`]. Mutations return the backend's fresh list
//! rather than patching local state: one extra round trip buys a display
//! list that is always a server-derived snapshot, never a client-side
//! reconstruction that can drift.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

use crate::credentials::CredentialStore;

const RESOURCE_PATH: &str = "/api/todo";

/// Record operation errors
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("No credential present; authenticate before record operations")]
    Unauthenticated,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend rejected {op} with status {status}")]
    Rejected { op: &'static str, status: StatusCode },
}

/// A managed record as the backend serves it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "isComplete")]
    pub is_complete: bool,
}

/// Create payload: a record minus the backend-assigned identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDraft {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "isComplete")]
    pub is_complete: bool,
}

/// Credentialed CRUD client for the record resource
pub struct RecordService {
    client: Client,
    base_url: String,
    store: Arc<CredentialStore>,
    /// Serializes mutation+refresh pairs so two rapid mutations cannot
    /// interleave their re-fetches and leave a stale snapshot visible.
    mutation_lock: Mutex<()>,
}

impl RecordService {
    pub fn new(client: Client, base_url: String, store: Arc<CredentialStore>) -> Self {
        Self {
            client,
            base_url,
            store,
            mutation_lock: Mutex::new(()),
        }
    }

    /// Fetch the full record list
    pub async fn list(&self) -> Result<Vec<Record>, RecordError> {
        let auth = self.bearer()?;

        debug!("GET {}", RESOURCE_PATH);
        let response = self
            .client
            .get(self.url(None))
            .header(AUTHORIZATION, auth)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RecordError::Rejected {
                op: "list",
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch a single record by identifier
    pub async fn get(&self, id: i64) -> Result<Record, RecordError> {
        let auth = self.bearer()?;

        debug!("GET {}/{}", RESOURCE_PATH, id);
        let response = self
            .client
            .get(self.url(Some(id)))
            .header(AUTHORIZATION, auth)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RecordError::Rejected {
                op: "get",
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }

    /// Create a record, then return the backend's fresh list
    pub async fn create(&self, draft: &RecordDraft) -> Result<Vec<Record>, RecordError> {
        let _guard = self.mutation_lock.lock().await;
        let auth = self.bearer()?;

        debug!("POST {} ({})", RESOURCE_PATH, draft.name);
        let response = self
            .client
            .post(self.url(None))
            .header(AUTHORIZATION, auth)
            .json(draft)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RecordError::Rejected {
                op: "create",
                status: response.status(),
            });
        }

        self.list().await
    }

    /// Update a record in place, then return the backend's fresh list
    pub async fn update(&self, record: &Record) -> Result<Vec<Record>, RecordError> {
        let _guard = self.mutation_lock.lock().await;
        let auth = self.bearer()?;

        debug!("PUT {}/{}", RESOURCE_PATH, record.id);
        let response = self
            .client
            .put(self.url(Some(record.id)))
            .header(AUTHORIZATION, auth)
            .json(record)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RecordError::Rejected {
                op: "update",
                status: response.status(),
            });
        }

        self.list().await
    }

    /// Delete a record by identifier, then return the backend's fresh list
    pub async fn delete(&self, id: i64) -> Result<Vec<Record>, RecordError> {
        let _guard = self.mutation_lock.lock().await;
        let auth = self.bearer()?;

        debug!("DELETE {}/{}", RESOURCE_PATH, id);
        let response = self
            .client
            .delete(self.url(Some(id)))
            .header(AUTHORIZATION, auth)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RecordError::Rejected {
                op: "delete",
                status: response.status(),
            });
        }

        self.list().await
    }

    /// Authorization header value, or [`RecordError::Unauthenticated`]
    /// before any request is sent. An empty stored token counts as absent.
    fn bearer(&self) -> Result<String, RecordError> {
        self.store
            .get()
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {}", t))
            .ok_or(RecordError::Unauthenticated)
    }

    fn url(&self, id: Option<i64>) -> String {
        match id {
            Some(id) => format!("{}{}/{}", self.base_url, RESOURCE_PATH, id),
            None => format!("{}{}", self.base_url, RESOURCE_PATH),
        }
    }
}
