//! Persisted client session.
//!
//! The session lives in two storage keys: `token` holds the opaque bearer
//! string and `user` holds the serialized [`SessionUser`]. Views never touch
//! browser storage directly; they go through a [`SessionHandle`] taken from
//! the Leptos context so tests can substitute an in-memory store.

use crate::api::{LoginResponse, SessionUser};
use leptos::*;
use std::rc::Rc;
use thiserror::Error;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to access `{0}` in session storage")]
    Access(&'static str),
    #[error("stored user could not be decoded: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: SessionUser,
    pub token: String,
}

impl Session {
    pub fn email(&self) -> &str {
        &self.user.email
    }

    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            user: response.user,
            token: response.token,
        }
    }
}

/// Raw key/value storage backing a session.
pub trait SessionStorage {
    fn get_item(&self, key: &'static str) -> Result<Option<String>, SessionError>;
    fn set_item(&self, key: &'static str, value: &str) -> Result<(), SessionError>;
    fn remove_item(&self, key: &'static str) -> Result<(), SessionError>;
}

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, SessionError> {
        web_sys::window()
            .ok_or_else(|| SessionError::Unavailable("No window object".into()))?
            .local_storage()
            .map_err(|_| SessionError::Unavailable("No localStorage".into()))?
            .ok_or_else(|| SessionError::Unavailable("No localStorage".into()))
    }
}

impl SessionStorage for LocalStorage {
    fn get_item(&self, key: &'static str) -> Result<Option<String>, SessionError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| SessionError::Access(key))
    }

    fn set_item(&self, key: &'static str, value: &str) -> Result<(), SessionError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| SessionError::Access(key))
    }

    fn remove_item(&self, key: &'static str) -> Result<(), SessionError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| SessionError::Access(key))
    }
}

#[derive(Clone)]
pub struct SessionHandle {
    storage: Rc<dyn SessionStorage>,
}

impl SessionHandle {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
        }
    }

    pub fn browser() -> Self {
        Self::new(LocalStorage)
    }

    /// Returns `Ok(None)` unless both the user and a non-empty token are stored.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let user = match self.storage.get_item(USER_KEY)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(None),
        };
        let token = match self.storage.get_item(TOKEN_KEY)? {
            Some(token) if !token.trim().is_empty() => token,
            _ => return Ok(None),
        };
        let user: SessionUser = serde_json::from_str(&user)?;
        Ok(Some(Session { user, token }))
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        let user = serde_json::to_string(&session.user)?;
        self.storage.set_item(TOKEN_KEY, &session.token)?;
        self.storage.set_item(USER_KEY, &user)
    }

    /// Removes both keys; a failure on one key does not keep the other.
    pub fn clear(&self) -> Result<(), SessionError> {
        let token = self.storage.remove_item(TOKEN_KEY);
        let user = self.storage.remove_item(USER_KEY);
        token.and(user)
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionHandle::browser());
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().unwrap_or_else(SessionHandle::browser)
}

#[cfg(test)]
pub use memory::MemoryStorage;
