//! Single-user client session.
//!
//! The store keeps at most one [`User`] in memory and mirrors it to a
//! durable key-value slot. Credentials are never verified: any non-empty
//! email/password pair produces a fresh user record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{SessionError, StorageError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl User {
    fn fabricate(email: &str, name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
        }
    }
}

/// Everything before the first `@`, or the whole address when there is none.
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Durable string slot backing the session (browser local storage in the app).
pub trait SessionStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.slots.insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.slots.remove(key);
    }
}

pub struct SessionStore<S: SessionStorage> {
    storage: S,
    key: String,
    user: Option<User>,
    initializing: bool,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Creates an unauthenticated store. Call [`SessionStore::restore`] once
    /// at startup to pick up a persisted session.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            user: None,
            initializing: true,
        }
    }

    /// Reads the durable slot. A payload that fails to parse is dropped and
    /// the store stays unauthenticated.
    pub fn restore(&mut self) -> Option<&User> {
        self.initializing = false;

        let raw = match self.storage.load(&self.key) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return None,
        };

        match decode_user(&raw) {
            Ok(user) => {
                log::info!("Restored session for {}", user.email);
                self.user = Some(user);
            }
            Err(e) => {
                log::warn!("Discarding stored session: {}", e);
                self.storage.remove(&self.key);
                self.user = None;
            }
        }

        self.user.as_ref()
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<User, SessionError> {
        if email.is_empty() || password.is_empty() {
            return Err(SessionError::Validation("Please enter email and password"));
        }

        let user = User::fabricate(email, local_part(email));
        self.activate(user.clone());
        Ok(user)
    }

    pub fn signup(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<User, SessionError> {
        if email.is_empty() || password.is_empty() || name.is_empty() {
            return Err(SessionError::Validation("Please fill all required fields"));
        }

        let user = User::fabricate(email, name);
        self.activate(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("Session ended for {}", user.email);
        }
        self.storage.remove(&self.key);
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_initializing(&self) -> bool {
        self.initializing
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn activate(&mut self, user: User) {
        match serde_json::to_string(&user) {
            Ok(raw) => {
                // The in-memory session stays active even if the mirror fails.
                if let Err(e) = self.storage.save(&self.key, &raw) {
                    log::warn!("Failed to persist session for {}: {}", user.email, e);
                }
            }
            Err(e) => log::warn!("Failed to encode session for {}: {}", user.email, e),
        }

        log::info!("Session started for {}", user.email);
        self.user = Some(user);
    }
}

fn decode_user(raw: &str) -> Result<User, SessionError> {
    Ok(serde_json::from_str(raw)?)
}
