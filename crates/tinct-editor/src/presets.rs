// ABOUTME: Built-in preset bundles: complete two-mode style sets applied wholesale
// ABOUTME: External preset sources go through the same apply_preset entry point

use tinct_types::{ThemeStyles, default_dark_styles, default_light_styles};

/// A named, complete style bundle.
#[derive(Debug, Clone)]
pub struct ThemePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub styles: ThemeStyles,
}

/// The built-in presets, neutral default first.
pub fn builtin_presets() -> Vec<ThemePreset> {
    vec![
        ThemePreset {
            id: "neutral",
            name: "Neutral",
            styles: ThemeStyles::default(),
        },
        ThemePreset {
            id: "ocean",
            name: "Ocean",
            styles: ocean_styles(),
        },
        ThemePreset {
            id: "forest",
            name: "Forest",
            styles: forest_styles(),
        },
    ]
}

/// Look up a built-in preset by id.
pub fn find_preset(id: &str) -> Option<ThemePreset> {
    builtin_presets().into_iter().find(|preset| preset.id == id)
}

fn ocean_styles() -> ThemeStyles {
    let mut light = default_light_styles();
    light.primary = "oklch(0.546 0.215 262.881)".into();
    light.primary_foreground = "oklch(0.985 0 0)".into();
    light.ring = "oklch(0.623 0.214 259.815)".into();
    light.accent = "oklch(0.951 0.023 255.095)".into();
    light.accent_foreground = "oklch(0.424 0.181 265.638)".into();
    light.chart_1 = "oklch(0.623 0.214 259.815)".into();
    light.sidebar_primary = Some("oklch(0.546 0.215 262.881)".into());

    let mut dark = default_dark_styles();
    dark.primary = "oklch(0.707 0.165 254.624)".into();
    dark.primary_foreground = "oklch(0.145 0 0)".into();
    dark.ring = "oklch(0.488 0.243 264.376)".into();
    dark.accent = "oklch(0.282 0.087 267.935)".into();
    dark.accent_foreground = "oklch(0.882 0.059 254.128)".into();
    dark.chart_1 = "oklch(0.623 0.214 259.815)".into();
    dark.sidebar_primary = Some("oklch(0.707 0.165 254.624)".into());

    ThemeStyles { light, dark }
}

fn forest_styles() -> ThemeStyles {
    let mut light = default_light_styles();
    light.primary = "oklch(0.527 0.154 150.069)".into();
    light.primary_foreground = "oklch(0.985 0 0)".into();
    light.ring = "oklch(0.723 0.192 149.579)".into();
    light.accent = "oklch(0.962 0.044 156.743)".into();
    light.accent_foreground = "oklch(0.448 0.119 151.328)".into();
    light.chart_1 = "oklch(0.723 0.192 149.579)".into();
    light.sidebar_primary = Some("oklch(0.527 0.154 150.069)".into());

    let mut dark = default_dark_styles();
    dark.primary = "oklch(0.723 0.192 149.579)".into();
    dark.primary_foreground = "oklch(0.145 0 0)".into();
    dark.ring = "oklch(0.527 0.154 150.069)".into();
    dark.accent = "oklch(0.262 0.051 152.934)".into();
    dark.accent_foreground = "oklch(0.871 0.15 154.449)".into();
    dark.chart_1 = "oklch(0.792 0.209 151.711)".into();
    dark.sidebar_primary = Some("oklch(0.723 0.192 149.579)".into());

    ThemeStyles { light, dark }
}
