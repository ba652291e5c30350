//! UI bootstrap table
//!
//! The parameters the front end registers with its component framework: icon
//! font, component allow-list, light theme, locale and the button presets.
//! Serialized as JSON for the host page; no runtime behavior beyond lookups.

use serde::Serialize;

use crate::notification::Severity;

pub const THEME_NAME: &str = "myCustomLightTheme";

const COMPONENTS: &[&str] = &[
    "VApp",
    "VAppBar",
    "VAppBarNavIcon",
    "VToolbarTitle",
    "VToolbar",
    "VToolbarItems",
    "VTabs",
    "VTab",
    "VCard",
    "VCardText",
    "VContainer",
    "VRow",
    "VSnackbar",
    "VCol",
    "VTextField",
    "VDataTable",
    "VDataTableServer",
    "VBtn",
    "VMain",
    "VIcon",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub background: &'static str,
    pub surface: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub dark: bool,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: THEME_NAME,
            dark: false,
            colors: ThemeColors {
                background: "#FFFFFF",
                surface: "#EFEFEF",
                primary: "#AFE8C2",
                secondary: "#D8F0E0",
                error: "#C61A1A",
                info: "#2196F3",
                success: "#199334",
                warning: "#FB8C00",
            },
        }
    }

    /// Snackbar color for a notification
    pub fn color_for(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Success => self.colors.success,
            Severity::Error => self.colors.error,
            Severity::Info => self.colors.info,
            Severity::Warning => self.colors.warning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Text,
}

/// Named alias over `VBtn` with fixed color, variant and icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonPreset {
    pub alias: &'static str,
    pub base: &'static str,
    pub color: &'static str,
    pub variant: ButtonVariant,
    pub icon: &'static str,
}

impl ButtonPreset {
    const fn text(alias: &'static str, color: &'static str, icon: &'static str) -> Self {
        Self {
            alias,
            base: "VBtn",
            color,
            variant: ButtonVariant::Text,
            icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSetup {
    pub locale: &'static str,
    pub fallback: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiSetup {
    pub icon_font: &'static str,
    pub components: Vec<&'static str>,
    pub default_theme: &'static str,
    pub themes: Vec<Theme>,
    pub locale: LocaleSetup,
    pub buttons: Vec<ButtonPreset>,
}

impl UiSetup {
    pub fn standard() -> Self {
        Self {
            icon_font: "mdi",
            components: COMPONENTS.to_vec(),
            default_theme: THEME_NAME,
            themes: vec![Theme::light()],
            locale: LocaleSetup {
                locale: "pt",
                fallback: "pt",
            },
            buttons: vec![
                ButtonPreset::text("VBtnEdit", "info", "mdi-pencil"),
                ButtonPreset::text("VBtnDelete", "error", "mdi-delete"),
                ButtonPreset::text("VBtnDetails", "#609B74", "mdi-text-search"),
                ButtonPreset::text("VBtnDownload", "blue-darken-2", "mdi-download"),
                ButtonPreset::text("VBtnItens", "#609B74", "mdi-format-list-bulleted"),
            ],
        }
    }

    pub fn is_registered(&self, component: &str) -> bool {
        self.components.iter().any(|c| *c == component)
            || self.buttons.iter().any(|b| b.alias == component)
    }

    pub fn button(&self, alias: &str) -> Option<&ButtonPreset> {
        self.buttons.iter().find(|b| b.alias == alias)
    }

    pub fn theme(&self) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name == self.default_theme)
    }
}

impl Default for UiSetup {
    fn default() -> Self {
        Self::standard()
    }
}
