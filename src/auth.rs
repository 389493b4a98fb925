//! Auth Gateway
//!
//! Performs the signin handshake: Basic-Auth application identity plus
//! end-user credentials in, bearer token out. The token lands in the
//! injected [`CredentialStore`] on success. Single attempt, no retry.
//!
//! The backend does not let callers tell "wrong password" apart from
//! "backend unreachable"; the variants below keep the distinction for
//! logs, but the calling flow treats them as one failure class.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::credentials::CredentialStore;

const SIGNIN_PATH: &str = "/api/auth/signin";

/// Some backends return the token already prefixed for header use
const TOKEN_PREFIX: &str = "Bearer ";

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Application identity not configured (USERFRONT_APP_USER / USERFRONT_APP_PASS)")]
    MissingAppIdentity,

    #[error("Authentication request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Authentication rejected with status {status}")]
    Rejected { status: StatusCode },

    #[error("Malformed authentication response: missing token field")]
    MalformedResponse,
}

#[derive(Debug, Serialize)]
struct SigninRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct SigninResponse {
    token: Option<String>,
}

/// Signin handshake against the authentication endpoint
pub struct AuthGateway {
    client: Client,
    base_url: String,
    app_user: Option<String>,
    app_pass: Option<String>,
    store: Arc<CredentialStore>,
}

impl AuthGateway {
    pub fn new(
        client: Client,
        base_url: String,
        app_user: Option<String>,
        app_pass: Option<String>,
        store: Arc<CredentialStore>,
    ) -> Self {
        Self {
            client,
            base_url,
            app_user,
            app_pass,
            store,
        }
    }

    /// Exchange credentials for a bearer token and store it.
    ///
    /// Sends `POST /api/auth/signin` with the user's credentials in the
    /// body and the application identity as a Basic header. A leading
    /// `"Bearer "` prefix on the returned token is stripped before
    /// storage so the Record Service can rebuild the header itself.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let app_user = self.app_user.as_deref().ok_or(AuthError::MissingAppIdentity)?;
        let app_pass = self.app_pass.as_deref().ok_or(AuthError::MissingAppIdentity)?;

        let basic = BASE64.encode(format!("{}:{}", app_user, app_pass));

        debug!("Signing in as {} at {}{}", username, self.base_url, SIGNIN_PATH);

        let response = self
            .client
            .post(format!("{}{}", self.base_url, SIGNIN_PATH))
            .header(AUTHORIZATION, format!("Basic {}", basic))
            .json(&SigninRequest { username, password })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::Rejected {
                status: response.status(),
            });
        }

        let body: SigninResponse = response.json().await?;
        let raw = body.token.ok_or(AuthError::MalformedResponse)?;
        let token = strip_token_prefix(&raw).to_string();

        self.store.set(&token);
        info!("Authenticated as {}; bearer token stored", username);

        Ok(token)
    }
}

fn strip_token_prefix(raw: &str) -> &str {
    raw.strip_prefix(TOKEN_PREFIX).unwrap_or(raw)
}
