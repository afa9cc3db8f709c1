use merenda_core::SessionId;

/// Authenticated session for a request.
///
/// Inserted by the auth middleware; present for every protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    session_id: SessionId,
    username: String,
}

impl SessionContext {
    pub fn new(session_id: SessionId, username: String) -> Self {
        Self {
            session_id,
            username,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
