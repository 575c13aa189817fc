// ============================================================================
// TOKEN STORAGE - Dónde vive el bearer token
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Solo los flujos de auth escriben; el cliente HTTP solo lee
pub trait TokenStorage {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Token en memoria (tests y ejecución fuera del navegador)
#[derive(Clone, Default)]
pub struct MemoryTokenStorage {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let storage = Self::default();
        storage.set(token);
        storage
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[cfg(target_arch = "wasm32")]
pub use local::LocalTokenStorage;

#[cfg(target_arch = "wasm32")]
mod local {
    use gloo_storage::{LocalStorage, Storage};

    use super::TokenStorage;
    use crate::utils::STORAGE_KEY_AUTH_TOKEN;

    /// Token en localStorage, como string plano bajo `auth_token`
    pub struct LocalTokenStorage {
        key: &'static str,
    }

    impl LocalTokenStorage {
        pub fn new() -> Self {
            Self {
                key: STORAGE_KEY_AUTH_TOKEN,
            }
        }
    }

    impl Default for LocalTokenStorage {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TokenStorage for LocalTokenStorage {
        fn get(&self) -> Option<String> {
            LocalStorage::raw().get_item(self.key).ok().flatten()
        }

        fn set(&self, token: &str) {
            if let Err(e) = LocalStorage::raw().set_item(self.key, token) {
                log::error!("❌ No se pudo guardar el token: {:?}", e);
            }
        }

        fn clear(&self) {
            LocalStorage::delete(self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryTokenStorage::new();
        assert_eq!(storage.get(), None);

        storage.set("abc");
        let shared = storage.clone();
        assert_eq!(shared.get(), Some("abc".to_string()));

        shared.clear();
        assert_eq!(storage.get(), None);
    }
}
