//! Theme Store
//!
//! Light/dark preference, persisted under a single localStorage key and
//! mirrored onto the document root as a `dark` class. Anything other than
//! the literal "light" (including an empty store) resolves to dark.

use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn from_stored(value: Option<&str>) -> Theme {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Resolve the persisted preference, defaulting to dark
    pub fn load(storage: &impl ThemeStorage) -> Theme {
        Theme::from_stored(storage.get(THEME_KEY).as_deref())
    }

    pub fn persist(&self, storage: &impl ThemeStorage) {
        storage.set(THEME_KEY, self.as_str());
    }
}

/// Persisted key-value slot for the theme preference. The browser backend
/// wraps localStorage; tests use the in-memory variant.
pub trait ThemeStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// localStorage-backed storage. All browser-API failures degrade to "no
/// stored value" so the default theme applies.
pub struct BrowserStorage;

impl ThemeStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Add or remove the `dark` class on the document root so stylesheets can
/// key off it.
pub fn apply_to_document(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let class_list = root.class_list();
    let result = if theme.is_dark() {
        class_list.add_1("dark")
    } else {
        class_list.remove_1("dark")
    };
    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        slots: RefCell<HashMap<String, String>>,
    }

    impl ThemeStorage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.slots.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_empty_storage_defaults_to_dark() {
        let storage = MemoryStorage::default();
        assert_eq!(Theme::load(&storage), Theme::Dark);
    }

    #[test]
    fn test_unrecognized_value_defaults_to_dark() {
        let storage = MemoryStorage::default();
        storage.set(THEME_KEY, "solarized");
        assert_eq!(Theme::load(&storage), Theme::Dark);
    }

    #[test]
    fn test_persist_then_load_round_trips() {
        let storage = MemoryStorage::default();
        for theme in [Theme::Light, Theme::Dark, Theme::Light] {
            theme.persist(&storage);
            assert_eq!(Theme::load(&storage), theme);
            assert_eq!(storage.get(THEME_KEY).as_deref(), Some(theme.as_str()));
        }
    }

    #[test]
    fn test_toggled_inverts() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
