use log::warn;
use web_sys::window;

use crate::config;
use crate::dom::set_document_attribute;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything but an explicit "dark" is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

pub fn load_theme() -> Theme {
    let stored = window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(config::THEME_STORAGE_KEY).ok())
        .flatten();
    Theme::from_stored(stored.as_deref())
}

pub fn apply_theme(theme: Theme) {
    match theme {
        Theme::Dark => set_document_attribute("data-theme", Some("dark")),
        Theme::Light => set_document_attribute("data-theme", None),
    }
}

pub fn save_theme(theme: Theme) {
    match window().and_then(|w| w.local_storage().ok()).flatten() {
        Some(storage) => {
            let _ = storage.set_item(config::THEME_STORAGE_KEY, theme.as_str());
        }
        None => warn!("Local storage unavailable, theme not saved"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_dark_is_dark() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn stored_value_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        }
    }
}
