use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Color tokens shared by every page. Views read these through CSS variables
/// instead of carrying their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bg: &'static str,
    pub surface: &'static str,
    pub ink: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub accent_soft: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
    pub border: &'static str,
}

pub const LIGHT: Theme = Theme {
    bg: "#f7f9fb",
    surface: "#ffffff",
    ink: "#2d2d2d",
    muted: "#6b7280",
    accent: "#6b46ff",
    accent_soft: "rgba(107, 70, 255, 0.12)",
    success: "#00b976",
    warning: "#ff9e45",
    danger: "#dc2626",
    border: "rgba(17, 24, 39, 0.08)",
};

pub const DARK: Theme = Theme {
    bg: "#0f0b1c",
    surface: "#1a1426",
    ink: "#ffffff",
    muted: "#b0b0b0",
    accent: "#a259ff",
    accent_soft: "rgba(162, 89, 255, 0.2)",
    success: "#00ff9d",
    warning: "#ffb86b",
    danger: "#ff6b6b",
    border: "#2a2038",
};

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> &'static Theme {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    pub fn css_variables(&self) -> String {
        format!(
            ":root {{ --bg: {}; --surface: {}; --ink: {}; --muted: {}; --accent: {}; \
             --accent-soft: {}; --success: {}; --warning: {}; --danger: {}; --border: {}; }}",
            self.bg,
            self.surface,
            self.ink,
            self.muted,
            self.accent,
            self.accent_soft,
            self.success,
            self.warning,
            self.danger,
            self.border,
        )
    }
}
