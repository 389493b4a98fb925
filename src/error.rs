//! Crate-level error type
//!
//! One aggregate so [`crate::AdminClient`] returns a single error type.
//! Failures surface where they occur and are never retried.

use thiserror::Error;

use crate::auth::AuthError;
use crate::credentials::CredentialError;
use crate::records::RecordError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("Configuration error: {0}")]
    Config(String),
}
