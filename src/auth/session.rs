//! Operator sessions.
//!
//! This module provides the [`Session`] type: the credential every backend
//! call is made with. A session is issued at login, may carry an expiry, and
//! can be invalidated at logout. It is passed explicitly into each operation
//! rather than looked up from ambient state.

use chrono::{DateTime, Utc};

use crate::auth::AuthError;
use crate::config::BearerToken;

/// An authenticated operator session.
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`, making it safe to share across threads.
///
/// # Example
///
/// ```rust
/// use boxinator_admin::{BearerToken, Session};
///
/// let mut session = Session::issue(BearerToken::new("token").unwrap(), None);
/// assert!(session.is_active());
/// assert_eq!(session.bearer_token().unwrap().as_ref(), "token");
///
/// session.invalidate();
/// assert!(!session.is_active());
/// assert!(session.bearer_token().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    token: BearerToken,
    issued_at: DateTime<Utc>,
    expires: Option<DateTime<Utc>>,
    invalidated_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Issues a session for a freshly obtained token.
    #[must_use]
    pub fn issue(token: BearerToken, expires: Option<DateTime<Utc>>) -> Self {
        Self {
            token,
            issued_at: Utc::now(),
            expires,
            invalidated_at: None,
        }
    }

    /// Returns when this session was issued.
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Returns when this session expires, if it does.
    #[must_use]
    pub const fn expires(&self) -> Option<DateTime<Utc>> {
        self.expires
    }

    /// Returns `true` if this session has expired.
    ///
    /// Sessions without an expiration time never expire.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires.is_some_and(|expires| Utc::now() > expires)
    }

    /// Returns `true` if [`invalidate`](Self::invalidate) has been called.
    #[must_use]
    pub const fn is_invalidated(&self) -> bool {
        self.invalidated_at.is_some()
    }

    /// Returns `true` if this session can still authorize requests.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.is_invalidated() && !self.expired()
    }

    /// Ends the session. Subsequent calls through it fail before any I/O.
    pub fn invalidate(&mut self) {
        if self.invalidated_at.is_none() {
            tracing::debug!("Operator session invalidated");
            self.invalidated_at = Some(Utc::now());
        }
    }

    /// Returns the bearer token if the session is still active.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Invalidated`] after logout or
    /// [`AuthError::Expired`] once the expiry has passed.
    pub fn bearer_token(&self) -> Result<&BearerToken, AuthError> {
        if self.is_invalidated() {
            return Err(AuthError::Invalidated);
        }
        if let Some(expires) = self.expires.filter(|_| self.expired()) {
            return Err(AuthError::Expired { expires });
        }
        Ok(&self.token)
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
