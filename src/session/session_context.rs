use serde::{Deserialize, Serialize};

/// Color scheme of the dashboard.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

pub const DEFAULT_MENU_ITEM: &str = "Dashboard";

/// State kept between runs of the viewer.
///
/// Loaded once when the viewer starts and saved after each change, always through a
/// [`SessionStore`](crate::session::session_store::SessionStore).
///
/// # Fields
///
/// * `steam_id` - The account last looked up.
/// * `theme_mode` - The selected color scheme.
/// * `selected_menu_item` - The page last opened.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    #[serde(default)]
    pub steam_id: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default = "default_menu_item")]
    pub selected_menu_item: String,
}

fn default_menu_item() -> String {
    DEFAULT_MENU_ITEM.to_owned()
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            steam_id: None,
            theme_mode: ThemeMode::default(),
            selected_menu_item: default_menu_item(),
        }
    }
}

impl SessionContext {
    pub fn with_steam_id(self, steam_id: impl Into<String>) -> Self {
        Self {
            steam_id: Some(steam_id.into()),
            ..self
        }
    }

    pub fn with_menu_item(self, item: impl Into<String>) -> Self {
        Self {
            selected_menu_item: item.into(),
            ..self
        }
    }

    pub fn with_theme_mode(self, theme_mode: ThemeMode) -> Self {
        Self { theme_mode, ..self }
    }
}
