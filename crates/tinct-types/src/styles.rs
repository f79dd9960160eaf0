// ABOUTME: Token set data types for the two-mode theme style model
// ABOUTME: Closed structs with string-key accessors and canonical emission order

use serde::{Deserialize, Serialize};

/// Editing/emission mode for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the opposite mode.
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Keys shared between modes. Stored in both token maps but emitted only in
/// the root CSS block; dark-mode consumers inherit them through the cascade.
pub const COMMON_KEYS: &[&str] = &[
    "font-sans",
    "font-serif",
    "font-mono",
    "radius",
    "shadow-opacity",
    "shadow-blur",
    "shadow-spread",
    "shadow-offset-x",
    "shadow-offset-y",
    "letter-spacing",
    "spacing",
];

/// Keys holding color values. These run through the adjustment transform and
/// the output color formatter; everything else passes through verbatim.
pub const COLOR_KEYS: &[&str] = &[
    "background",
    "foreground",
    "card",
    "card-foreground",
    "popover",
    "popover-foreground",
    "primary",
    "primary-foreground",
    "secondary",
    "secondary-foreground",
    "muted",
    "muted-foreground",
    "accent",
    "accent-foreground",
    "destructive",
    "destructive-foreground",
    "border",
    "input",
    "ring",
    "chart-1",
    "chart-2",
    "chart-3",
    "chart-4",
    "chart-5",
    "sidebar",
    "sidebar-foreground",
    "sidebar-primary",
    "sidebar-primary-foreground",
    "sidebar-accent",
    "sidebar-accent-foreground",
    "sidebar-border",
    "sidebar-ring",
    "shadow-color",
];

/// A complete token map for one mode.
///
/// Every token is an opaque string whose validity is format-dependent; the
/// color crate decides what parses. The sidebar group and `spacing` are
/// optional, everything else is required in both modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThemeStyleProps {
    pub background: String,
    pub foreground: String,
    pub card: String,
    pub card_foreground: String,
    pub popover: String,
    pub popover_foreground: String,
    pub primary: String,
    pub primary_foreground: String,
    pub secondary: String,
    pub secondary_foreground: String,
    pub muted: String,
    pub muted_foreground: String,
    pub accent: String,
    pub accent_foreground: String,
    pub destructive: String,
    pub destructive_foreground: String,
    pub border: String,
    pub input: String,
    pub ring: String,
    pub chart_1: String,
    pub chart_2: String,
    pub chart_3: String,
    pub chart_4: String,
    pub chart_5: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_primary_foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_accent_foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_ring: Option<String>,
    pub font_sans: String,
    pub font_serif: String,
    pub font_mono: String,
    pub radius: String,
    pub shadow_color: String,
    pub shadow_opacity: String,
    pub shadow_blur: String,
    pub shadow_spread: String,
    pub shadow_offset_x: String,
    pub shadow_offset_y: String,
    pub letter_spacing: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,
}

impl ThemeStyleProps {
    /// Look up a token by its CSS custom-property name (without `--`).
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "background" => Some(&self.background),
            "foreground" => Some(&self.foreground),
            "card" => Some(&self.card),
            "card-foreground" => Some(&self.card_foreground),
            "popover" => Some(&self.popover),
            "popover-foreground" => Some(&self.popover_foreground),
            "primary" => Some(&self.primary),
            "primary-foreground" => Some(&self.primary_foreground),
            "secondary" => Some(&self.secondary),
            "secondary-foreground" => Some(&self.secondary_foreground),
            "muted" => Some(&self.muted),
            "muted-foreground" => Some(&self.muted_foreground),
            "accent" => Some(&self.accent),
            "accent-foreground" => Some(&self.accent_foreground),
            "destructive" => Some(&self.destructive),
            "destructive-foreground" => Some(&self.destructive_foreground),
            "border" => Some(&self.border),
            "input" => Some(&self.input),
            "ring" => Some(&self.ring),
            "chart-1" => Some(&self.chart_1),
            "chart-2" => Some(&self.chart_2),
            "chart-3" => Some(&self.chart_3),
            "chart-4" => Some(&self.chart_4),
            "chart-5" => Some(&self.chart_5),
            "sidebar" => self.sidebar.as_deref(),
            "sidebar-foreground" => self.sidebar_foreground.as_deref(),
            "sidebar-primary" => self.sidebar_primary.as_deref(),
            "sidebar-primary-foreground" => self.sidebar_primary_foreground.as_deref(),
            "sidebar-accent" => self.sidebar_accent.as_deref(),
            "sidebar-accent-foreground" => self.sidebar_accent_foreground.as_deref(),
            "sidebar-border" => self.sidebar_border.as_deref(),
            "sidebar-ring" => self.sidebar_ring.as_deref(),
            "font-sans" => Some(&self.font_sans),
            "font-serif" => Some(&self.font_serif),
            "font-mono" => Some(&self.font_mono),
            "radius" => Some(&self.radius),
            "shadow-color" => Some(&self.shadow_color),
            "shadow-opacity" => Some(&self.shadow_opacity),
            "shadow-blur" => Some(&self.shadow_blur),
            "shadow-spread" => Some(&self.shadow_spread),
            "shadow-offset-x" => Some(&self.shadow_offset_x),
            "shadow-offset-y" => Some(&self.shadow_offset_y),
            "letter-spacing" => Some(&self.letter_spacing),
            "spacing" => self.spacing.as_deref(),
            _ => None,
        }
    }

    /// Set a token by its CSS custom-property name.
    ///
    /// Returns false for unknown keys so callers can log and skip instead of
    /// silently growing an open map.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        match key {
            "background" => self.background = value,
            "foreground" => self.foreground = value,
            "card" => self.card = value,
            "card-foreground" => self.card_foreground = value,
            "popover" => self.popover = value,
            "popover-foreground" => self.popover_foreground = value,
            "primary" => self.primary = value,
            "primary-foreground" => self.primary_foreground = value,
            "secondary" => self.secondary = value,
            "secondary-foreground" => self.secondary_foreground = value,
            "muted" => self.muted = value,
            "muted-foreground" => self.muted_foreground = value,
            "accent" => self.accent = value,
            "accent-foreground" => self.accent_foreground = value,
            "destructive" => self.destructive = value,
            "destructive-foreground" => self.destructive_foreground = value,
            "border" => self.border = value,
            "input" => self.input = value,
            "ring" => self.ring = value,
            "chart-1" => self.chart_1 = value,
            "chart-2" => self.chart_2 = value,
            "chart-3" => self.chart_3 = value,
            "chart-4" => self.chart_4 = value,
            "chart-5" => self.chart_5 = value,
            "sidebar" => self.sidebar = Some(value),
            "sidebar-foreground" => self.sidebar_foreground = Some(value),
            "sidebar-primary" => self.sidebar_primary = Some(value),
            "sidebar-primary-foreground" => self.sidebar_primary_foreground = Some(value),
            "sidebar-accent" => self.sidebar_accent = Some(value),
            "sidebar-accent-foreground" => self.sidebar_accent_foreground = Some(value),
            "sidebar-border" => self.sidebar_border = Some(value),
            "sidebar-ring" => self.sidebar_ring = Some(value),
            "font-sans" => self.font_sans = value,
            "font-serif" => self.font_serif = value,
            "font-mono" => self.font_mono = value,
            "radius" => self.radius = value,
            "shadow-color" => self.shadow_color = value,
            "shadow-opacity" => self.shadow_opacity = value,
            "shadow-blur" => self.shadow_blur = value,
            "shadow-spread" => self.shadow_spread = value,
            "shadow-offset-x" => self.shadow_offset_x = value,
            "shadow-offset-y" => self.shadow_offset_y = value,
            "letter-spacing" => self.letter_spacing = value,
            "spacing" => self.spacing = Some(value),
            _ => return false,
        }
        true
    }

    /// All recognized token keys in canonical emission order.
    pub fn all_keys() -> &'static [&'static str] {
        ALL_KEYS
    }

    /// Present `(key, value)` pairs in canonical emission order. Absent
    /// optional tokens are skipped.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        ALL_KEYS
            .iter()
            .filter_map(|&key| self.get(key).map(|value| (key, value)))
            .collect()
    }
}

const ALL_KEYS: &[&str] = &[
    "background",
    "foreground",
    "card",
    "card-foreground",
    "popover",
    "popover-foreground",
    "primary",
    "primary-foreground",
    "secondary",
    "secondary-foreground",
    "muted",
    "muted-foreground",
    "accent",
    "accent-foreground",
    "destructive",
    "destructive-foreground",
    "border",
    "input",
    "ring",
    "chart-1",
    "chart-2",
    "chart-3",
    "chart-4",
    "chart-5",
    "sidebar",
    "sidebar-foreground",
    "sidebar-primary",
    "sidebar-primary-foreground",
    "sidebar-accent",
    "sidebar-accent-foreground",
    "sidebar-border",
    "sidebar-ring",
    "font-sans",
    "font-serif",
    "font-mono",
    "radius",
    "shadow-color",
    "shadow-opacity",
    "shadow-blur",
    "shadow-spread",
    "shadow-offset-x",
    "shadow-offset-y",
    "letter-spacing",
    "spacing",
];

/// Whether a key is semantically shared between light and dark modes.
pub fn is_common_key(key: &str) -> bool {
    COMMON_KEYS.contains(&key)
}

/// Whether a key holds a color value.
pub fn is_color_key(key: &str) -> bool {
    COLOR_KEYS.contains(&key)
}

/// The full two-mode style model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeStyles {
    pub light: ThemeStyleProps,
    pub dark: ThemeStyleProps,
}

impl ThemeStyles {
    pub fn for_mode(&self, mode: ThemeMode) -> &ThemeStyleProps {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    pub fn for_mode_mut(&mut self, mode: ThemeMode) -> &mut ThemeStyleProps {
        match mode {
            ThemeMode::Light => &mut self.light,
            ThemeMode::Dark => &mut self.dark,
        }
    }
}

impl Default for ThemeStyles {
    fn default() -> Self {
        Self {
            light: crate::defaults::default_light_styles(),
            dark: crate::defaults::default_dark_styles(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_by_key() {
        let mut props = crate::defaults::default_light_styles();
        assert!(props.set("primary", "oklch(0.5 0.2 250)"));
        assert_eq!(props.get("primary"), Some("oklch(0.5 0.2 250)"));

        assert!(!props.set("not-a-token", "x"));
        assert_eq!(props.get("not-a-token"), None);
    }

    #[test]
    fn test_optional_keys_roundtrip() {
        let mut props = crate::defaults::default_light_styles();
        props.spacing = None;
        assert_eq!(props.get("spacing"), None);
        assert!(props.set("spacing", "0.25rem"));
        assert_eq!(props.get("spacing"), Some("0.25rem"));
    }

    #[test]
    fn test_entries_follow_canonical_order() {
        let props = crate::defaults::default_light_styles();
        let entries = props.entries();
        assert_eq!(entries.first().map(|e| e.0), Some("background"));

        let keys: Vec<&str> = entries.iter().map(|e| e.0).collect();
        let mut expected: Vec<&str> = ALL_KEYS.to_vec();
        expected.retain(|k| props.get(k).is_some());
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_every_registry_key_is_recognized() {
        let props = crate::defaults::default_light_styles();
        for key in COMMON_KEYS.iter().chain(COLOR_KEYS.iter()) {
            assert!(
                ALL_KEYS.contains(key),
                "registry key {key} missing from ALL_KEYS"
            );
            // Defaults populate every key, optional ones included.
            assert!(props.get(key).is_some(), "default missing for {key}");
        }
    }

    #[test]
    fn test_common_and_color_keys_are_disjoint() {
        for key in COMMON_KEYS {
            assert!(!is_color_key(key), "{key} is in both registries");
        }
    }

    #[test]
    fn test_serde_uses_kebab_case_names() {
        let props = crate::defaults::default_light_styles();
        let json = serde_json::to_value(&props).unwrap();
        assert!(json.get("card-foreground").is_some());
        assert!(json.get("shadow-offset-x").is_some());
        assert!(json.get("card_foreground").is_none());
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }
}
