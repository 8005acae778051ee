use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use licensedesk_core::UserId;

use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};
use crate::session::Session;

/// Identity capability consumed by the dashboard.
///
/// Implementations wrap a hosted auth service; the dashboard only needs to
/// know whether someone is signed in and how to end the session.
pub trait Identity: Send + Sync {
    /// The active session, if any.
    fn current_session(&self) -> AuthResult<Option<Session>>;

    /// Authenticate and start a session, replacing any existing one.
    fn sign_in(&self, credentials: &Credentials) -> AuthResult<Session>;

    /// End the active session. Signing out with no session is a no-op.
    fn sign_out(&self) -> AuthResult<()>;

    fn is_authenticated(&self) -> AuthResult<bool> {
        Ok(self.current_session()?.is_some())
    }
}

impl<I> Identity for Arc<I>
where
    I: Identity + ?Sized,
{
    fn current_session(&self) -> AuthResult<Option<Session>> {
        (**self).current_session()
    }

    fn sign_in(&self, credentials: &Credentials) -> AuthResult<Session> {
        (**self).sign_in(credentials)
    }

    fn sign_out(&self) -> AuthResult<()> {
        (**self).sign_out()
    }
}

#[derive(Clone)]
struct Account {
    user_id: UserId,
    email: String,
    password: String,
}

impl core::fmt::Debug for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Account")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// In-memory identity provider for tests/dev.
///
/// Emails are matched case-insensitively. Holds at most one session.
#[derive(Debug, Default)]
pub struct InMemoryIdentity {
    accounts: RwLock<HashMap<String, Account>>,
    session: RwLock<Option<Session>>,
}

impl InMemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) an account. Returns its user id.
    pub fn register(&self, email: &str, password: &str) -> AuthResult<UserId> {
        let creds = Credentials::new(email, password)?;
        let user_id = UserId::new();
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| AuthError::Unavailable("account registry lock poisoned".to_string()))?;
        accounts.insert(
            creds.email().to_lowercase(),
            Account {
                user_id,
                email: creds.email().to_string(),
                password: creds.password().to_string(),
            },
        );
        Ok(user_id)
    }

    /// Builder-style [`register`](Self::register) for fixtures.
    pub fn with_account(self, email: &str, password: &str) -> AuthResult<Self> {
        self.register(email, password)?;
        Ok(self)
    }
}

impl Identity for InMemoryIdentity {
    fn current_session(&self) -> AuthResult<Option<Session>> {
        let session = self
            .session
            .read()
            .map_err(|_| AuthError::Unavailable("session lock poisoned".to_string()))?;
        Ok(session.clone())
    }

    fn sign_in(&self, credentials: &Credentials) -> AuthResult<Session> {
        let account = {
            let accounts = self
                .accounts
                .read()
                .map_err(|_| AuthError::Unavailable("account registry lock poisoned".to_string()))?;
            accounts.get(&credentials.email().to_lowercase()).cloned()
        };

        let account = match account {
            Some(a) if a.password == credentials.password() => a,
            _ => {
                tracing::warn!(email = %credentials.email(), "sign-in rejected");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let session = Session {
            user_id: account.user_id,
            email: account.email,
            signed_in_at: Utc::now(),
        };

        let mut slot = self
            .session
            .write()
            .map_err(|_| AuthError::Unavailable("session lock poisoned".to_string()))?;
        *slot = Some(session.clone());

        tracing::info!(user_id = %session.user_id, email = %session.email, "signed in");
        Ok(session)
    }

    fn sign_out(&self) -> AuthResult<()> {
        let mut slot = self
            .session
            .write()
            .map_err(|_| AuthError::Unavailable("session lock poisoned".to_string()))?;
        if let Some(session) = slot.take() {
            tracing::info!(user_id = %session.user_id, "signed out");
        }
        Ok(())
    }
}
