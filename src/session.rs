//! Session store: current-user identity plus a persisted snapshot.
//!
//! The signal is the single source of truth at runtime; the localStorage
//! snapshot only rehydrates it across page loads. Login replaces the whole
//! value and logout removes it; there is no in-place field mutation.

use leptos::*;
use serde::{Deserialize, Serialize};

const USER_SNAPSHOT_KEY: &str = "user";

/// Admin starts at role 10; higher values (root) are a superset.
pub const ROLE_ADMIN: i32 = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub role: i32,
    #[serde(default)]
    pub quota: i64,
    #[serde(default)]
    pub group: String,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role >= ROLE_ADMIN
    }
}

/// Cheap copyable handle to the session signal, passed around via context.
#[derive(Clone, Copy)]
pub struct Session {
    user: RwSignal<Option<UserInfo>>,
}

impl Session {
    /// Rehydrate from the persisted snapshot, anonymous when none exists.
    pub fn restore() -> Self {
        Session {
            user: create_rw_signal(load_snapshot()),
        }
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.user.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    /// Replace the session with a freshly authenticated user and persist it.
    pub fn log_in(&self, user: UserInfo) {
        save_snapshot(&user);
        self.user.set(Some(user));
    }

    /// Drop to anonymous and remove the snapshot. Only called once the
    /// server has confirmed the logout.
    pub fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(USER_SNAPSHOT_KEY);
        }
        self.user.set(None);
    }
}

pub fn provide_session() {
    provide_context(Session::restore());
}

pub fn use_session() -> Session {
    expect_context::<Session>()
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

// Storage is a browser facility; native builds (tests) see it as absent,
// which is already a supported degraded mode.
#[cfg(not(target_arch = "wasm32"))]
pub fn local_storage() -> Option<web_sys::Storage> {
    None
}

fn load_snapshot() -> Option<UserInfo> {
    let raw = local_storage()?.get_item(USER_SNAPSHOT_KEY).ok()??;
    parse_snapshot(&raw)
}

fn save_snapshot(user: &UserInfo) {
    if let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(USER_SNAPSHOT_KEY, &raw);
    }
}

/// A snapshot that fails to parse is treated as absent, not an error.
fn parse_snapshot(raw: &str) -> Option<UserInfo> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_round_trip() {
        let user = UserInfo {
            id: 7,
            username: "alice".to_string(),
            display_name: "Alice".to_string(),
            role: 10,
            quota: 1_000_000,
            group: "default".to_string(),
        };

        let raw = serde_json::to_string(&user).unwrap();
        let restored = parse_snapshot(&raw).unwrap();
        assert_eq!(restored, user);
    }

    #[test]
    fn test_snapshot_defaults_missing_fields() {
        let restored = parse_snapshot(r#"{"id": 3, "username": "bob"}"#).unwrap();
        assert_eq!(restored.username, "bob");
        assert_eq!(restored.role, 0);
        assert_eq!(restored.quota, 0);
        assert!(!restored.is_admin());
    }

    #[test]
    fn test_malformed_snapshot_is_absent() {
        assert!(parse_snapshot("not json").is_none());
        assert!(parse_snapshot("").is_none());
    }

    #[test]
    fn test_admin_threshold() {
        let mut user = parse_snapshot(r#"{"id": 1, "username": "u"}"#).unwrap();
        user.role = 9;
        assert!(!user.is_admin());
        user.role = 10;
        assert!(user.is_admin());
        user.role = 100;
        assert!(user.is_admin());
    }
}
