//! Persisted session state: token, cached profile, expiry.
//!
//! Three well-known keys in a small key-value store. The file-backed store
//! keeps them in a JSON map next to the executable; tests use the
//! in-memory store. Nothing here panics: a broken session file just reads
//! as "not signed in".

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use contracts::system::auth::{LoginResponse, UserInfo};

pub const TOKEN_KEY: &str = "admin_auth_token";
pub const PROFILE_KEY: &str = "admin_auth_user";
pub const EXPIRES_AT_KEY: &str = "admin_auth_expires_at";

/// Key-value storage the session lives in
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

// ============================================================================
// Storage backends
// ============================================================================

#[derive(Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

/// JSON map in a file; every write rewrites the whole file (three keys,
/// single-process access)
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// session.json next to the executable, falling back to the working
    /// directory
    pub fn next_to_executable() -> Self {
        let path = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("session.json")))
            .unwrap_or_else(|| PathBuf::from("session.json"));
        Self::new(path)
    }

    fn load(&self) -> HashMap<String, String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    fn store(&self, items: &HashMap<String, String>) {
        match serde_json::to_string_pretty(items) {
            Ok(contents) => {
                if let Err(e) = std::fs::write(&self.path, contents) {
                    tracing::warn!("Failed to write session file: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize session: {}", e),
        }
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.load().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        let mut items = self.load();
        items.insert(key.to_string(), value.to_string());
        self.store(&items);
    }

    fn remove_item(&self, key: &str) {
        let mut items = self.load();
        if items.remove(key).is_some() {
            self.store(&items);
        }
    }
}

// ============================================================================
// Typed session facade
// ============================================================================

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    pub fn on_disk() -> Self {
        Self::new(Arc::new(FileStorage::next_to_executable()))
    }

    /// Get access token from storage
    pub fn token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY)
    }

    /// Cached profile of the signed-in user
    pub fn profile(&self) -> Option<UserInfo> {
        let raw = self.storage.get_item(PROFILE_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Token expiry, milliseconds since epoch
    pub fn expires_at(&self) -> Option<i64> {
        self.storage.get_item(EXPIRES_AT_KEY)?.parse().ok()
    }

    /// Expired means "we know the expiry and it has passed"; an absent
    /// expiry is not expired (the server will say 401 if it disagrees)
    pub fn is_expired(&self, now_millis: i64) -> bool {
        matches!(self.expires_at(), Some(expires_at) if expires_at <= now_millis)
    }

    /// [`Self::is_expired`] against the wall clock
    pub fn is_expired_now(&self) -> bool {
        self.is_expired(chrono::Utc::now().timestamp_millis())
    }

    /// Persist a successful sign-in
    pub fn save_login(&self, login: &LoginResponse) {
        self.storage.set_item(TOKEN_KEY, &login.token);
        self.storage
            .set_item(EXPIRES_AT_KEY, &login.expires_at.to_string());
        if let Ok(profile) = serde_json::to_string(&login.user) {
            self.storage.set_item(PROFILE_KEY, &profile);
        }
    }

    /// Clear all session keys
    pub fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(PROFILE_KEY);
        self.storage.remove_item(EXPIRES_AT_KEY);
    }
}

// ============================================================================
// Sign-in redirect guard
// ============================================================================

/// Decides whether an unauthorized response should navigate to sign-in.
///
/// Holds the current route so that a 401 arriving while the user is already
/// on the sign-in screen does not trigger a redirect loop. The navigation
/// itself is injected; this layer knows nothing about routers.
pub struct RedirectGuard {
    sign_in_route: String,
    current_route: Mutex<String>,
    navigate: Box<dyn Fn(&str) + Send + Sync>,
}

impl RedirectGuard {
    pub fn new(
        sign_in_route: impl Into<String>,
        navigate: impl Fn(&str) + Send + Sync + 'static,
    ) -> Self {
        let sign_in_route = sign_in_route.into();
        Self {
            current_route: Mutex::new(String::new()),
            sign_in_route,
            navigate: Box::new(navigate),
        }
    }

    /// Screens report route changes here
    pub fn set_current_route(&self, route: &str) {
        if let Ok(mut current) = self.current_route.lock() {
            *current = route.to_string();
        }
    }

    pub fn on_unauthorized(&self) {
        let Ok(mut current) = self.current_route.lock() else {
            return;
        };
        if *current == self.sign_in_route {
            return;
        }
        *current = self.sign_in_route.clone();
        (self.navigate)(&self.sign_in_route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn login_response() -> LoginResponse {
        LoginResponse {
            token: "tok-1".into(),
            expires_at: 1_700_000_000_000,
            user: UserInfo {
                id: "u-1".into(),
                email: "admin@example.com".into(),
                full_name: Some("Admin".into()),
                role: "admin".into(),
                avatar: None,
                is_admin: true,
            },
        }
    }

    #[test]
    fn test_save_login_round_trip() {
        let session = SessionStore::in_memory();
        session.save_login(&login_response());

        assert_eq!(session.token().as_deref(), Some("tok-1"));
        assert_eq!(session.expires_at(), Some(1_700_000_000_000));
        assert_eq!(session.profile().map(|u| u.email).as_deref(), Some("admin@example.com"));
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let session = SessionStore::in_memory();
        session.save_login(&login_response());
        session.clear();

        assert_eq!(session.token(), None);
        assert_eq!(session.profile().map(|u| u.id), None);
        assert_eq!(session.expires_at(), None);
    }

    #[test]
    fn test_is_expired() {
        let session = SessionStore::in_memory();
        assert!(!session.is_expired(1_700_000_000_000));

        session.save_login(&login_response());
        assert!(!session.is_expired(1_699_999_999_999));
        assert!(session.is_expired(1_700_000_000_000));
        assert!(session.is_expired(1_700_000_000_001));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));
        storage.set_item(TOKEN_KEY, "tok-2");
        assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("tok-2"));
        storage.remove_item(TOKEN_KEY);
        assert_eq!(storage.get_item(TOKEN_KEY), None);
    }

    #[test]
    fn test_redirect_guard_navigates_once() {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = hits.clone();
        let guard = RedirectGuard::new("/sign-in", move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });
        guard.set_current_route("/orders");

        guard.on_unauthorized();
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        // already on sign-in: no second navigation
        guard.on_unauthorized();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_redirect_guard_skips_when_already_on_sign_in() {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = hits.clone();
        let guard = RedirectGuard::new("/sign-in", move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });
        guard.set_current_route("/sign-in");

        guard.on_unauthorized();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
