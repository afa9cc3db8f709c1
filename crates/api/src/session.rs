//! Single-admin login and bearer session tokens.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use merenda_core::SessionId;

use crate::context::SessionContext;

#[derive(Debug, Clone)]
pub struct AdminCredentials {
    username: String,
    password: SecretString,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username.trim() && self.password.expose_secret() == password
    }
}

/// How long a token stays valid after login.
pub const SESSION_TTL: Duration = Duration::from_secs(12 * 60 * 60);
/// Live sessions kept at once; the oldest is dropped past this.
pub const MAX_SESSIONS: usize = 256;

#[derive(Debug)]
struct Session {
    username: String,
    issued: u64,
    expires_at: Instant,
}

#[derive(Debug, Default)]
struct Sessions {
    live: HashMap<SessionId, Session>,
    next_seq: u64,
}

/// Live sessions, keyed by the token handed out at login.
#[derive(Debug)]
pub struct SessionStore {
    credentials: AdminCredentials,
    ttl: Duration,
    max_sessions: usize,
    sessions: RwLock<Sessions>,
}

impl SessionStore {
    pub fn new(credentials: AdminCredentials) -> Self {
        Self::with_limits(credentials, SESSION_TTL, MAX_SESSIONS)
    }

    pub fn with_limits(credentials: AdminCredentials, ttl: Duration, max_sessions: usize) -> Self {
        Self {
            credentials,
            ttl,
            max_sessions: max_sessions.max(1),
            sessions: RwLock::new(Sessions::default()),
        }
    }

    pub fn login(&self, username: &str, password: &str) -> Option<SessionContext> {
        if !self.credentials.matches(username, password) {
            return None;
        }

        let now = Instant::now();
        let session_id = SessionId::new();
        let username = self.credentials.username.clone();

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        sessions.live.retain(|_, s| s.expires_at > now);
        while sessions.live.len() >= self.max_sessions {
            let oldest = sessions
                .live
                .iter()
                .min_by_key(|(_, s)| s.issued)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    sessions.live.remove(&id);
                    debug!(session_id = %id, "evicted oldest session");
                }
                None => break,
            }
        }

        let issued = sessions.next_seq;
        sessions.next_seq += 1;
        sessions.live.insert(
            session_id,
            Session {
                username: username.clone(),
                issued,
                expires_at: now + self.ttl,
            },
        );

        Some(SessionContext::new(session_id, username))
    }

    /// The session behind `token`, unless it is unknown or has expired.
    pub fn resolve(&self, token: &str) -> Option<SessionContext> {
        let session_id: SessionId = token.parse().ok()?;
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        sessions
            .live
            .get(&session_id)
            .filter(|s| s.expires_at > Instant::now())
            .map(|s| SessionContext::new(session_id, s.username.clone()))
    }

    /// Returns `false` if the session was already gone.
    pub fn logout(&self, session_id: SessionId) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .live
            .remove(&session_id)
            .is_some()
    }
}
