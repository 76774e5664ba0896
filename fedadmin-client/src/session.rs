//! Session management
//!
//! One session manager replaces the dashboard's scattered cookie reads and
//! writes: the bearer token and cached profile live together, persistence is
//! write-through to a JSON file under the state dir, and refresh is serialized
//! behind a single async lock so concurrent callers observe exactly one
//! refresh.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use shared::models::UserInfo;

use crate::error::ClientResult;

/// Session lifetime, matching the backend's cookie policy
pub const SESSION_TTL_DAYS: i64 = 7;

const SESSION_FILE: &str = "session.json";

/// Authenticated session: bearer token plus the cached profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a session expiring [`SESSION_TTL_DAYS`] from now
    pub fn new(token: impl Into<String>, user: UserInfo) -> Self {
        Self {
            token: token.into(),
            user,
            expires_at: Utc::now() + Duration::days(SESSION_TTL_DAYS),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// File-backed session persistence
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        let path = state_dir.into().join(SESSION_FILE);
        Self { path }
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Persist the session
    pub fn save(&self, session: &Session) -> ClientResult<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Load the persisted session. An unreadable, corrupt, or expired file
    /// loads as no session.
    pub fn load(&self) -> Option<Session> {
        let json = std::fs::read_to_string(&self.path).ok()?;
        let session: Session = serde_json::from_str(&json).ok()?;
        if session.is_expired() {
            tracing::debug!("persisted session expired, ignoring");
            return None;
        }
        Some(session)
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove the persisted session
    pub fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Shared session state with write-through persistence
#[derive(Debug)]
pub struct SessionManager {
    store: SessionStore,
    current: RwLock<Option<Session>>,
    refresh_lock: tokio::sync::Mutex<()>,
    // Transient handoff of a selected member id to the profile view
    selected_member: Mutex<Option<String>>,
}

impl SessionManager {
    /// Create a manager seeded from the store's persisted session
    pub fn new(store: SessionStore) -> Self {
        let current = store.load();
        Self {
            store,
            current: RwLock::new(current),
            refresh_lock: tokio::sync::Mutex::new(()),
            selected_member: Mutex::new(None),
        }
    }

    /// Current bearer token, if authenticated
    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.token.clone())
    }

    /// Cached profile, if authenticated
    pub fn user(&self) -> Option<UserInfo> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Install a session and persist it
    pub fn set_session(&self, session: Session) -> ClientResult<()> {
        self.store.save(&session)?;
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(session);
        Ok(())
    }

    /// Replace the token on the current session, keeping the cached profile.
    /// The store is updated before this returns so a retry always sees the
    /// new token.
    pub fn adopt_token(&self, token: &str) -> ClientResult<()> {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(session) = guard.as_mut() {
            session.token = token.to_string();
            session.expires_at = Utc::now() + Duration::days(SESSION_TTL_DAYS);
            self.store.save(session)?;
        }
        Ok(())
    }

    /// Drop the session in memory and on disk
    pub fn clear(&self) -> ClientResult<()> {
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
        self.store.clear()
    }

    /// Serializes token refresh. Callers hold the guard for the duration of
    /// the refresh side-request; a waiter that acquires it afterwards
    /// double-checks `token()` against its stale value before refreshing
    /// again.
    pub async fn refresh_guard(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.refresh_lock.lock().await
    }

    /// Stash the member id selected in a table for the profile view
    pub fn set_selected_member(&self, id: impl Into<String>) {
        *self
            .selected_member
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(id.into());
    }

    /// Take the stashed member id, clearing it
    pub fn take_selected_member(&self) -> Option<String> {
        self.selected_member
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
