use std::fmt;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// A stored "dark" wins; with nothing stored the environment decides.
    /// Any other stored value means light.
    pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Self {
        match saved {
            Some("dark") => Self::Dark,
            None if prefers_dark => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle button glyph: the theme you would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{263E}",
            Self::Dark => "\u{2600}",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value persistence (browser local storage in the app).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), String>;
}

pub fn load_theme(store: &impl PreferenceStore, prefers_dark: bool) -> ThemePreference {
    let saved = store.load(THEME_KEY);
    ThemePreference::resolve(saved.as_deref(), prefers_dark)
}

/// Flip the theme and persist it. A failed write is logged; the new
/// theme still applies for this session.
pub fn toggle_theme(store: &impl PreferenceStore, current: ThemePreference) -> ThemePreference {
    let next = current.toggled();
    if let Err(e) = store.save(THEME_KEY, next.as_str()) {
        log::warn!("Failed to persist theme: {e}");
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        read_only: bool,
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn save(&self, key: &str, value: &str) -> Result<(), String> {
            if self.read_only {
                return Err("quota exceeded".into());
            }
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_resolve() {
        assert_eq!(ThemePreference::resolve(Some("dark"), false), ThemePreference::Dark);
        assert_eq!(ThemePreference::resolve(Some("light"), true), ThemePreference::Light);
        assert_eq!(ThemePreference::resolve(None, true), ThemePreference::Dark);
        assert_eq!(ThemePreference::resolve(None, false), ThemePreference::Light);
        assert_eq!(ThemePreference::resolve(Some("sepia"), true), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::default();
        assert_eq!(load_theme(&store, true), ThemePreference::Dark);

        let next = toggle_theme(&store, ThemePreference::Dark);
        assert_eq!(next, ThemePreference::Light);
        assert_eq!(store.load(THEME_KEY).as_deref(), Some("light"));
        // stored value now overrides the environment
        assert_eq!(load_theme(&store, true), ThemePreference::Light);

        assert_eq!(toggle_theme(&store, next), ThemePreference::Dark);
        assert_eq!(load_theme(&store, false), ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_survives_write_failure() {
        let store = MemoryStore { read_only: true, ..Default::default() };
        assert_eq!(toggle_theme(&store, ThemePreference::Light), ThemePreference::Dark);
        assert_eq!(store.load(THEME_KEY), None);
    }

    #[test]
    fn test_icons() {
        assert_eq!(ThemePreference::Dark.icon(), "\u{2600}");
        assert_eq!(ThemePreference::Light.icon(), "\u{263E}");
    }
}
