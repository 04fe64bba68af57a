//! Session store.
//!
//! `SessionStore` is the only path to the credential store. It owns the
//! `token` / `isAdmin` keys, publishes every change through a
//! `tokio::sync::watch` channel, and never logs a token in full.

use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Result;
use tokio::sync::watch;

use crate::store::{
    ADMIN_FLAG_KEY, CredentialStore, FileCredentialStore, MemoryCredentialStore, TOKEN_KEY,
};

/// Snapshot of the persisted session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token, if logged in.
    pub token: Option<String>,
    /// Admin flag returned by the login endpoint.
    pub is_admin: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Observable, shared handle to the credential store.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn CredentialStore>,
    tx: Arc<watch::Sender<Session>>,
    write_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let session = self.tx.borrow();
        f.debug_struct("SessionStore")
            .field("token", &session.token.as_deref().map(mask_token))
            .field("is_admin", &session.is_admin)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Wraps a credential store, reading its current contents once.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        let initial = read_session(store.as_ref());
        let (tx, _rx) = watch::channel(initial);
        Self {
            store,
            tx: Arc::new(tx),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Session backed by `<CLIPDECK_HOME>/session.json`.
    pub fn open_default() -> Self {
        Self::new(Arc::new(FileCredentialStore::open_default()))
    }

    /// Session backed by memory only.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryCredentialStore::new()))
    }

    /// Reads the stored token. Read failures count as "no token".
    pub fn token(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "failed to read stored token");
                None
            }
        }
    }

    /// Reads the stored admin flag. Anything but JSON `true` is `false`.
    pub fn is_admin(&self) -> bool {
        match self.store.get(ADMIN_FLAG_KEY) {
            Ok(Some(raw)) => parse_admin_flag(&raw),
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "failed to read stored admin flag");
                false
            }
        }
    }

    /// Current session as last published.
    pub fn snapshot(&self) -> Session {
        self.tx.borrow().clone()
    }

    /// Subscribes to session changes.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    /// Persists a new session (token plus admin flag) and publishes it.
    ///
    /// Both keys are written or neither: if the flag write fails, the
    /// token is removed again and the empty session is published.
    ///
    /// # Errors
    /// Returns an error if either key cannot be written.
    pub fn begin(&self, token: &str, is_admin: bool) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let flag = serde_json::to_string(&is_admin)?;
        self.store.set(TOKEN_KEY, token)?;
        if let Err(err) = self.store.set(ADMIN_FLAG_KEY, &flag) {
            self.roll_back();
            return Err(err.context("Failed to store admin flag"));
        }
        tracing::info!(token = %mask_token(token), is_admin, "session started");
        self.tx.send_replace(Session {
            token: Some(token.to_string()),
            is_admin,
        });
        Ok(())
    }

    /// Removes both keys and publishes the empty session.
    ///
    /// # Errors
    /// Returns an error if the store cannot be written. Subscribers are
    /// notified either way so the UI never keeps a stale session.
    pub fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let token_result = self.store.remove(TOKEN_KEY);
        let flag_result = self.store.remove(ADMIN_FLAG_KEY);
        self.tx.send_if_modified(|session| {
            let changed = session.is_authenticated() || session.is_admin;
            *session = Session::default();
            changed
        });
        token_result?;
        flag_result?;
        tracing::info!("session cleared");
        Ok(())
    }

    /// Drops a half-written session. Caller holds the write lock.
    fn roll_back(&self) {
        for key in [TOKEN_KEY, ADMIN_FLAG_KEY] {
            if let Err(err) = self.store.remove(key) {
                tracing::error!(key, error = %format!("{err:#}"), "failed to roll back session key");
            }
        }
        self.tx.send_if_modified(|session| {
            let changed = session.is_authenticated() || session.is_admin;
            *session = Session::default();
            changed
        });
    }

    /// Re-reads the backing store and publishes if it changed.
    pub fn reload(&self) -> Session {
        let fresh = read_session(self.store.as_ref());
        self.tx.send_if_modified(|session| {
            if *session == fresh {
                false
            } else {
                *session = fresh.clone();
                true
            }
        });
        fresh
    }
}

fn read_session(store: &dyn CredentialStore) -> Session {
    let token = store
        .get(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.trim().is_empty());
    let is_admin = store
        .get(ADMIN_FLAG_KEY)
        .ok()
        .flatten()
        .is_some_and(|raw| parse_admin_flag(&raw));
    Session { token, is_admin }
}

fn parse_admin_flag(raw: &str) -> bool {
    serde_json::from_str::<bool>(raw.trim()).unwrap_or(false)
}

/// Returns a masked version of a token for display (first 12 chars + ...).
pub fn mask_token(token: &str) -> String {
    if token.len() <= 16 || !token.is_char_boundary(12) {
        return "***".to_string();
    }
    format!("{}...", &token[..12])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: begin persists the exact token and the JSON flag.
    #[test]
    fn test_begin_persists_exact_values() {
        let backing = Arc::new(MemoryCredentialStore::new());
        let session = SessionStore::new(Arc::clone(&backing) as Arc<dyn CredentialStore>);

        session.begin("header.payload.sig", true).unwrap();

        assert_eq!(backing.get(TOKEN_KEY).unwrap().as_deref(), Some("header.payload.sig"));
        assert_eq!(backing.get(ADMIN_FLAG_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(session.token().as_deref(), Some("header.payload.sig"));
        assert!(session.is_admin());
    }

    /// Store whose admin flag write always fails.
    struct FlagWriteFails(MemoryCredentialStore);

    impl CredentialStore for FlagWriteFails {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            if key == ADMIN_FLAG_KEY {
                anyhow::bail!("disk full");
            }
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.0.remove(key)
        }
    }

    /// Test: a failed flag write leaves no token behind.
    #[test]
    fn test_begin_rolls_back_on_flag_failure() {
        let backing = Arc::new(FlagWriteFails(MemoryCredentialStore::new()));
        let session = SessionStore::new(Arc::clone(&backing) as Arc<dyn CredentialStore>);

        let err = session.begin("h.p.s", true).unwrap_err();

        assert!(format!("{err:#}").contains("disk full"));
        assert_eq!(backing.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(session.token(), None);
        assert_eq!(session.reload(), Session::default());
    }

    #[test]
    fn test_failed_begin_replaces_previous_session() {
        let backing = Arc::new(FlagWriteFails(MemoryCredentialStore::new()));
        backing.0.set(TOKEN_KEY, "old.token.sig").unwrap();
        backing.0.set(ADMIN_FLAG_KEY, "true").unwrap();
        let session = SessionStore::new(Arc::clone(&backing) as Arc<dyn CredentialStore>);
        let mut rx = session.subscribe();

        assert!(session.begin("new.token.sig", false).is_err());

        assert_eq!(backing.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(backing.get(ADMIN_FLAG_KEY).unwrap(), None);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Session::default());
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let backing = Arc::new(MemoryCredentialStore::new());
        let session = SessionStore::new(Arc::clone(&backing) as Arc<dyn CredentialStore>);
        session.begin("t.t.t", false).unwrap();

        session.clear().unwrap();

        assert_eq!(backing.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(backing.get(ADMIN_FLAG_KEY).unwrap(), None);
        assert_eq!(session.snapshot(), Session::default());
    }

    /// Test: subscribers observe login and logout.
    #[test]
    fn test_subscribers_see_changes() {
        let session = SessionStore::in_memory();
        let mut rx = session.subscribe();
        assert!(!rx.has_changed().unwrap());

        session.begin("a.b.c", false).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().token.as_deref(), Some("a.b.c"));

        session.clear().unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().is_authenticated());

        // Clearing an empty session does not wake subscribers.
        session.clear().unwrap();
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_admin_flag_parsing_is_strict() {
        let backing = Arc::new(MemoryCredentialStore::new());
        backing.set(TOKEN_KEY, "x.y.z").unwrap();
        backing.set(ADMIN_FLAG_KEY, "\"yes\"").unwrap();
        let session = SessionStore::new(Arc::clone(&backing) as Arc<dyn CredentialStore>);
        assert!(!session.is_admin());

        backing.set(ADMIN_FLAG_KEY, "false").unwrap();
        assert!(!session.is_admin());
        backing.set(ADMIN_FLAG_KEY, "true").unwrap();
        assert!(session.is_admin());
    }

    #[test]
    fn test_reload_picks_up_external_changes() {
        let backing = Arc::new(MemoryCredentialStore::new());
        let session = SessionStore::new(Arc::clone(&backing) as Arc<dyn CredentialStore>);
        let mut rx = session.subscribe();

        backing.set(TOKEN_KEY, "from.other.process").unwrap();
        let fresh = session.reload();

        assert_eq!(fresh.token.as_deref(), Some("from.other.process"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().token.as_deref(), Some("from.other.process"));
    }

    #[test]
    fn test_blank_token_reads_as_none() {
        let backing = Arc::new(MemoryCredentialStore::new());
        backing.set(TOKEN_KEY, "   ").unwrap();
        let session = SessionStore::new(backing);
        assert_eq!(session.token(), None);
        assert!(!session.snapshot().is_authenticated());
    }

    /// Test: Token masking.
    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("eyJhbGciOiJIUzI1NiJ9.payload"), "eyJhbGciOiJI...");
        assert_eq!(mask_token("short"), "***");
    }
}
