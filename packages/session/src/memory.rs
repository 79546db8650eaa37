use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::SessionStore;

/// In-memory SessionStore for testing and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Session, UserRole, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_TYPE_KEY};

    #[test]
    fn test_save_and_load_session() {
        let store = MemoryStore::new();
        assert!(Session::load(&store).is_none());

        let session = Session::new(
            "T1".to_string(),
            "T2".to_string(),
            Some(UserRole::Client),
        );
        session.save(&store);

        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("T1"));
        assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some("T2"));
        assert_eq!(store.get(USER_TYPE_KEY).as_deref(), Some("client"));

        let loaded = Session::load(&store).unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let store = MemoryStore::new();
        Session::new(
            "T1".to_string(),
            "T2".to_string(),
            Some(UserRole::Freelancer),
        )
        .save(&store);

        Session::clear(&store);

        assert!(store.get(ACCESS_TOKEN_KEY).is_none());
        assert!(store.get(REFRESH_TOKEN_KEY).is_none());
        assert!(store.get(USER_TYPE_KEY).is_none());
        assert!(Session::load(&store).is_none());
    }

    #[test]
    fn test_load_without_access_token_is_signed_out() {
        let store = MemoryStore::new();
        store.set(REFRESH_TOKEN_KEY, "T2");
        store.set(USER_TYPE_KEY, "client");
        assert!(Session::load(&store).is_none());

        // Empty access token is treated the same as a missing one.
        store.set(ACCESS_TOKEN_KEY, "");
        assert!(Session::load(&store).is_none());
    }

    #[test]
    fn test_unknown_role_string_loads_as_none() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "T1");
        store.set(USER_TYPE_KEY, "superviseur");

        let loaded = Session::load(&store).unwrap();
        assert_eq!(loaded.user_type, None);
    }

    #[test]
    fn test_role_parse_round_trip() {
        for role in [
            UserRole::Client,
            UserRole::Freelancer,
            UserRole::Administrateur,
        ] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("Client"), None);
        assert_eq!(UserRole::parse(""), None);
    }

    #[test]
    fn test_role_paths() {
        assert_eq!(UserRole::Client.dashboard_path(), "/client/dashboard");
        assert_eq!(
            UserRole::Administrateur.dashboard_path(),
            "/administrateur/dashboard"
        );
        assert_eq!(
            UserRole::Freelancer.profile_path(),
            "/freelancer/profile"
        );
        assert_eq!(
            UserRole::Administrateur.edit_profile_path(),
            "/admin/profil/edit"
        );
    }
}
