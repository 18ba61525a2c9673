//! # Store crate — client-side session persistence
//!
//! Holds the signed-in user's session (bearer token, display name, avatar)
//! in the browser's localStorage, behind the [`SessionBackend`] seam so the
//! same [`SessionStore`] logic runs against an in-memory map on native
//! targets (tests, tooling builds).
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | [`Session`] model and the three storage keys |
//! | [`local`] | [`LocalStorageBackend`] — wasm, browser localStorage |
//! | [`memory`] | [`MemoryBackend`] — native, `HashMap` behind a mutex |
//!
//! The three slots are written and read independently; there is no atomicity
//! across them and no expiry tracking. An expired token is only discovered
//! when the remote API answers 401.

pub mod session;

#[cfg(target_arch = "wasm32")]
pub mod local;
pub mod memory;

pub use session::{Session, SessionStore, KEY_PROFILE_IMAGE, KEY_TOKEN, KEY_USER_NAME};

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorageBackend;
pub use memory::MemoryBackend;

/// Key/value seam between [`SessionStore`] and the platform storage.
pub trait SessionBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The storage backend for the current platform: localStorage on web,
/// an in-memory map elsewhere.
pub fn platform_backend() -> impl SessionBackend + Clone {
    #[cfg(target_arch = "wasm32")]
    {
        LocalStorageBackend::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        MemoryBackend::shared()
    }
}
