//! UserFront Client
//!
//! Credentialed REST client for the UserFront todo admin backend.
//!
//! # Features
//!
//! - **Signin handshake**: Basic-Auth application identity plus end-user
//!   credentials exchanged for a bearer token
//! - **Credential Store**: in-memory token with a best-effort persistent
//!   mirror for cross-restart recovery
//! - **Record CRUD**: list/get/create/update/delete with every request
//!   credentialed, and every mutation followed by a full list re-fetch
//! - **Single-flight mutations**: mutation+refresh pairs are serialized so
//!   rapid edits cannot leave a stale snapshot visible
//!
//! # Architecture
//!
//! ```text
//! Presentation Surface ──► AdminClient ──► Auth Gateway ──► POST /api/auth/signin
//!   (external, renders)        │                │
//!                              │                └── Credential Store (memory + mirror)
//!                              │
//!                              └── Record Service ──► GET/POST/PUT/DELETE /api/todo
//! ```
//!
//! The presentation surface (table, dialogs) is an external collaborator:
//! it calls [`AdminClient::start`] on view-ready and feeds confirmed user
//! intents to [`AdminClient::handle`], rendering whatever snapshot comes
//! back.

pub mod auth;
pub mod config;
pub mod credentials;
pub mod error;
pub mod records;
pub mod session;

pub use auth::{AuthError, AuthGateway};
pub use config::Config;
pub use credentials::{CredentialError, CredentialStore};
pub use error::Error;
pub use records::{Record, RecordDraft, RecordError, RecordService};
pub use session::{AdminClient, RecordIntent, Session};
