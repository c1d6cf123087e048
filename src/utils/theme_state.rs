use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn tokens(self) -> &'static ColorTokens {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColorTokens {
    pub background: &'static str,
    pub foreground: &'static str,
    pub accent: &'static str,
    pub icon: &'static str,
    pub icon_hover: &'static str,
}

const LIGHT: ColorTokens = ColorTokens {
    background: "#fff",
    foreground: "#000",
    accent: "#888",
    icon: "#000",
    icon_hover: "#888",
};

const DARK: ColorTokens = ColorTokens {
    background: "#000",
    foreground: "#fff",
    accent: "#888",
    icon: "#fff",
    icon_hover: "#888",
};

// A valid stored preference always wins; the color-scheme query only breaks
// the tie, and an unavailable query means dark.
pub fn resolve_initial(stored: Option<&str>, prefers_dark: Option<bool>) -> ThemeMode {
    if let Some(mode) = stored.and_then(ThemeMode::from_str) {
        return mode;
    }
    match prefers_dark {
        Some(false) => ThemeMode::Light,
        Some(true) | None => ThemeMode::Dark,
    }
}

pub fn get_initial_theme() -> ThemeMode {
    #[cfg(target_arch = "wasm32")]
    {
        resolve_initial(stored_preference().as_deref(), system_prefers_dark())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        ThemeMode::default()
    }
}

pub fn persist(mode: ThemeMode) {
    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => {
                if let Err(err) = storage.set_item(STORAGE_KEY, mode.as_str()) {
                    log::warn!("failed to persist theme preference: {:?}", err);
                }
            }
            None => log::warn!("local storage unavailable, theme preference not persisted"),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mode;
    }
}

#[cfg(target_arch = "wasm32")]
fn stored_preference() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
}

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> Option<bool> {
    let query = web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    Some(query.matches())
}
