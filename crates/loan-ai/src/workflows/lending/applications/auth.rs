use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::config::OperatorConfig;

/// Login form payload.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Identity of an authenticated operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperatorPrincipal(pub String);

/// Pluggable credential check guarding the operator console.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, credentials: &Credentials) -> Option<OperatorPrincipal>;
}

/// Authenticator backed by the single operator account from configuration.
#[derive(Debug, Clone)]
pub struct ConfiguredOperatorAuthenticator {
    operator: OperatorConfig,
}

impl ConfiguredOperatorAuthenticator {
    pub fn new(operator: OperatorConfig) -> Self {
        Self { operator }
    }
}

impl Authenticator for ConfiguredOperatorAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Option<OperatorPrincipal> {
        let expected = self.operator.password.as_deref()?;
        let username_matches = credentials.username.trim() == self.operator.username;
        let password_matches: bool = credentials
            .password
            .as_bytes()
            .ct_eq(expected.as_bytes())
            .into();

        if username_matches && password_matches {
            Some(OperatorPrincipal(self.operator.username.clone()))
        } else {
            None
        }
    }
}

/// Opaque bearer token handed out on login.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(pub String);

/// Logged-in context owned by the presentation layer. The decision engine never sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorSession {
    pub token: SessionToken,
    pub operator: OperatorPrincipal,
    pub issued_at: DateTime<Utc>,
}

impl OperatorSession {
    pub fn greeting(&self) -> String {
        format!("Welcome, {}!", self.operator.0)
    }
}

/// Errors raised by the login gate.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Access Denied. Invalid username or password.")]
    InvalidCredentials,
    #[error("missing bearer token")]
    MissingToken,
    #[error("session expired or unknown")]
    UnknownSession,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_token() -> SessionToken {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    SessionToken(format!("session-{id:06}-{nanos:x}"))
}

/// In-memory session table combining an [`Authenticator`] with issued tokens.
///
/// Holds at most one session per operator: logging in again replaces the previous token.
pub struct SessionStore<A> {
    authenticator: Arc<A>,
    sessions: Mutex<HashMap<SessionToken, OperatorSession>>,
}

impl<A> SessionStore<A>
where
    A: Authenticator + 'static,
{
    pub fn new(authenticator: Arc<A>) -> Self {
        Self {
            authenticator,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Check credentials and open a new session, revoking any earlier one for the operator.
    pub fn login(&self, credentials: &Credentials) -> Result<OperatorSession, AuthError> {
        let operator = self
            .authenticator
            .authenticate(credentials)
            .ok_or(AuthError::InvalidCredentials)?;

        let session = OperatorSession {
            token: next_session_token(),
            operator,
            issued_at: Utc::now(),
        };

        let mut sessions = self.sessions.lock().expect("session mutex poisoned");
        sessions.retain(|_, existing| existing.operator != session.operator);
        sessions.insert(session.token.clone(), session.clone());

        Ok(session)
    }

    pub fn resolve(&self, token: &SessionToken) -> Result<OperatorSession, AuthError> {
        self.sessions
            .lock()
            .expect("session mutex poisoned")
            .get(token)
            .cloned()
            .ok_or(AuthError::UnknownSession)
    }

    /// Close a session; the token is unusable afterwards.
    pub fn logout(&self, token: &SessionToken) -> Result<OperatorSession, AuthError> {
        self.sessions
            .lock()
            .expect("session mutex poisoned")
            .remove(token)
            .ok_or(AuthError::UnknownSession)
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.lock().expect("session mutex poisoned").len()
    }
}
