//! Session state
//!
//! Holds who is signed in for the lifetime of the process. Login only checks
//! that username and password are present; the password is dropped right away.

use crate::models::{DeskError, DeskResult, Role, Session};

/// Current session, if any
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    current: Option<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign in, replacing any existing session
    pub fn login(&mut self, role: Role, username: &str, password: &str) -> DeskResult<&Session> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DeskError::Validation("username".to_string()));
        }
        if password.is_empty() {
            return Err(DeskError::Validation("password".to_string()));
        }

        Ok(&*self.current.insert(Session::new(role, username)))
    }

    /// Sign out, returning the session that was active
    pub fn logout(&mut self) -> Option<Session> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// The active session, provided it has `role`
    pub fn require(&self, role: Role) -> DeskResult<&Session> {
        let session = self.current.as_ref().ok_or(DeskError::NotLoggedIn)?;
        if session.role != role {
            return Err(DeskError::WrongRole {
                required: role,
                actual: session.role,
            });
        }
        Ok(session)
    }
}
