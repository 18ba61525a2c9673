use crate::SessionBackend;

pub const KEY_TOKEN: &str = "token";
pub const KEY_USER_NAME: &str = "user_name";
pub const KEY_PROFILE_IMAGE: &str = "profile_image";

/// The locally cached authentication state.
///
/// A missing token means the user is treated as unauthenticated; the remote
/// API is the actual authority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user_name: Option<String>,
    pub profile_image: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Reads and writes a [`Session`] through a [`SessionBackend`].
///
/// Each of the three slots is handled independently; a slot that fails to
/// read simply loads as absent.
#[derive(Clone)]
pub struct SessionStore<B: SessionBackend> {
    backend: B,
}

impl<B: SessionBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn load(&self) -> Session {
        Session {
            token: self.backend.read(KEY_TOKEN),
            user_name: self.backend.read(KEY_USER_NAME),
            profile_image: self.backend.read(KEY_PROFILE_IMAGE),
        }
    }

    pub fn save(&self, session: &Session) {
        self.write_slot(KEY_TOKEN, session.token.as_deref());
        self.write_slot(KEY_USER_NAME, session.user_name.as_deref());
        self.write_slot(KEY_PROFILE_IMAGE, session.profile_image.as_deref());
    }

    pub fn clear(&self) {
        self.backend.remove(KEY_TOKEN);
        self.backend.remove(KEY_USER_NAME);
        self.backend.remove(KEY_PROFILE_IMAGE);
    }

    fn write_slot(&self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => self.backend.write(key, value),
            None => self.backend.remove(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;

    fn store() -> SessionStore<MemoryBackend> {
        SessionStore::new(MemoryBackend::new())
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = store();
        let session = Session {
            token: Some("tok-123".into()),
            user_name: Some("Ada_Lovelace".into()),
            profile_image: Some("data:image/png;base64,xyz".into()),
        };

        store.save(&session);
        assert_eq!(store.load(), session);
    }

    #[test]
    fn clear_removes_all_slots() {
        let store = store();
        store.save(&Session {
            token: Some("tok".into()),
            user_name: Some("name".into()),
            profile_image: None,
        });

        store.clear();

        let loaded = store.load();
        assert_eq!(loaded, Session::default());
        assert!(!loaded.is_authenticated());
    }

    #[test]
    fn slots_load_independently() {
        let store = store();
        // Only a token, as after a signup without a profile image.
        store.save(&Session {
            token: Some("tok".into()),
            user_name: None,
            profile_image: None,
        });

        let loaded = store.load();
        assert!(loaded.is_authenticated());
        assert_eq!(loaded.user_name, None);
        assert_eq!(loaded.profile_image, None);
    }

    #[test]
    fn saving_absent_slot_removes_stale_value() {
        let store = store();
        store.save(&Session {
            token: Some("tok".into()),
            user_name: Some("old".into()),
            profile_image: Some("img".into()),
        });

        store.save(&Session {
            token: Some("tok-2".into()),
            user_name: Some("new".into()),
            profile_image: None,
        });

        let loaded = store.load();
        assert_eq!(loaded.token.as_deref(), Some("tok-2"));
        assert_eq!(loaded.profile_image, None);
    }
}
