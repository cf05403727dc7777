//! Access-token session store.
//!
//! The stored token is the single source of truth for "is the user
//! authenticated" on the client. Controllers receive the store as an
//! explicit dependency so tests can substitute [`MemorySession`] for the
//! localStorage-backed [`BrowserSession`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "accessToken";

/// Synchronous get/set/clear over a single persisted token slot.
///
/// No expiry tracking and no encryption happen here; the token is opaque
/// and the server decides when it stops being valid.
pub trait SessionStore {
    /// Current token, or `None` when signed out.
    fn get(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn set(&self, token: &str);
    /// Drop the token. A no-op when nothing is stored.
    fn clear(&self);
}

/// Session store backed by `localStorage`, so the token survives a page
/// reload. Degrades to a no-op outside a browser environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, token);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(STORAGE_KEY);
                }
            }
        }
    }
}

/// In-memory session store for tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemorySession(std::cell::RefCell<Option<String>>);

impl MemorySession {
    /// Store pre-seeded with a token, as after an earlier login.
    pub fn with_token(token: &str) -> Self {
        Self(std::cell::RefCell::new(Some(token.to_owned())))
    }
}

impl SessionStore for MemorySession {
    fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}
