mod theme_state;

pub use theme_state::{get_initial_theme, persist, resolve_initial, ColorTokens, ThemeMode};
