//! Session wiring and the view-ready control flow
//!
//! [`Session`] is an explicit value owning the credential store; nothing
//! here reads ambient/global state. [`AdminClient`] is what a presentation
//! surface talks to: it runs the authenticate-then-list startup sequence
//! and maps user intents onto the Record Service, always handing back a
//! fresh server snapshot for re-render.

use std::sync::Arc;
use tracing::{error, info};

use crate::auth::AuthGateway;
use crate::config::Config;
use crate::credentials::{CredentialError, CredentialStore};
use crate::error::Error;
use crate::records::{Record, RecordDraft, RecordService};

/// Client-side authenticated/unauthenticated state plus the credential
#[derive(Clone)]
pub struct Session {
    store: Arc<CredentialStore>,
}

impl Session {
    pub fn new(store: Arc<CredentialStore>) -> Self {
        Self { store }
    }

    /// Whether a credential is available (in memory or recoverable from
    /// the mirror)
    pub fn is_authenticated(&self) -> bool {
        self.store.has_token()
    }

    /// Handle to the underlying store, for callers that need to inspect
    /// or share the credential beyond this session's lifetime
    pub fn credential_store(&self) -> Arc<CredentialStore> {
        self.store.clone()
    }

    /// Drop the credential from memory and from the persistent mirror
    pub fn end(&self) -> Result<(), CredentialError> {
        self.store.clear()
    }
}

/// A confirmed user intent from the presentation surface.
///
/// `Edit` carries the owned value handed back when a modal closes, not a
/// reference into the displayed list. A cancelled dialog produces no
/// intent at all.
#[derive(Debug, Clone)]
pub enum RecordIntent {
    Create(RecordDraft),
    Edit(Record),
    Delete(i64),
    Refresh,
}

/// Facade the presentation surface drives
pub struct AdminClient {
    session: Session,
    auth: AuthGateway,
    records: RecordService,
}

impl AdminClient {
    /// Wire gateway and service around one shared HTTP client and one
    /// explicit session
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        let store = Arc::new(CredentialStore::new(config.token_path.clone()));
        let session = Session::new(store.clone());

        let auth = AuthGateway::new(
            client.clone(),
            config.base_url.clone(),
            config.app_user.clone(),
            config.app_pass.clone(),
            store.clone(),
        );
        let records = RecordService::new(client, config.base_url.clone(), store);

        Ok(Self {
            session,
            auth,
            records,
        })
    }

    /// The view-ready sequence: authenticate, then the initial list.
    /// Strictly sequential; the list fetch never starts if the handshake
    /// fails. Intended to run exactly once per view-ready event.
    pub async fn start(&self, username: &str, password: &str) -> Result<Vec<Record>, Error> {
        if let Err(e) = self.auth.authenticate(username, password).await {
            error!("Authentication failed: {}", e);
            return Err(e.into());
        }

        info!("Session established; loading initial record list");
        Ok(self.records.list().await?)
    }

    /// Map a confirmed user intent onto the Record Service and return the
    /// resulting server snapshot
    pub async fn handle(&self, intent: RecordIntent) -> Result<Vec<Record>, Error> {
        let snapshot = match intent {
            RecordIntent::Create(draft) => self.records.create(&draft).await?,
            RecordIntent::Edit(record) => self.records.update(&record).await?,
            RecordIntent::Delete(id) => self.records.delete(id).await?,
            RecordIntent::Refresh => self.records.list().await?,
        };

        Ok(snapshot)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn records(&self) -> &RecordService {
        &self.records
    }
}
