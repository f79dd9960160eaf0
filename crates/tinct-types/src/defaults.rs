// ABOUTME: Built-in default token values for both modes
// ABOUTME: A neutral OKLCH palette used at session start and on reset

use crate::styles::ThemeStyleProps;

const FONT_SANS: &str = "ui-sans-serif, system-ui, sans-serif";
const FONT_SERIF: &str = "ui-serif, Georgia, serif";
const FONT_MONO: &str = "ui-monospace, SFMono-Regular, monospace";

/// Default light-mode token set.
pub fn default_light_styles() -> ThemeStyleProps {
    ThemeStyleProps {
        background: "oklch(1 0 0)".into(),
        foreground: "oklch(0.145 0 0)".into(),
        card: "oklch(1 0 0)".into(),
        card_foreground: "oklch(0.145 0 0)".into(),
        popover: "oklch(1 0 0)".into(),
        popover_foreground: "oklch(0.145 0 0)".into(),
        primary: "oklch(0.205 0 0)".into(),
        primary_foreground: "oklch(0.985 0 0)".into(),
        secondary: "oklch(0.97 0 0)".into(),
        secondary_foreground: "oklch(0.205 0 0)".into(),
        muted: "oklch(0.97 0 0)".into(),
        muted_foreground: "oklch(0.556 0 0)".into(),
        accent: "oklch(0.97 0 0)".into(),
        accent_foreground: "oklch(0.205 0 0)".into(),
        destructive: "oklch(0.505 0.213 27.518)".into(),
        destructive_foreground: "oklch(0.985 0 0)".into(),
        border: "oklch(0.922 0 0)".into(),
        input: "oklch(0.922 0 0)".into(),
        ring: "oklch(0.708 0 0)".into(),
        chart_1: "oklch(0.646 0.222 41.116)".into(),
        chart_2: "oklch(0.6 0.118 184.704)".into(),
        chart_3: "oklch(0.398 0.07 227.392)".into(),
        chart_4: "oklch(0.828 0.189 84.429)".into(),
        chart_5: "oklch(0.769 0.188 70.08)".into(),
        sidebar: Some("oklch(0.985 0 0)".into()),
        sidebar_foreground: Some("oklch(0.145 0 0)".into()),
        sidebar_primary: Some("oklch(0.205 0 0)".into()),
        sidebar_primary_foreground: Some("oklch(0.985 0 0)".into()),
        sidebar_accent: Some("oklch(0.97 0 0)".into()),
        sidebar_accent_foreground: Some("oklch(0.205 0 0)".into()),
        sidebar_border: Some("oklch(0.922 0 0)".into()),
        sidebar_ring: Some("oklch(0.708 0 0)".into()),
        font_sans: FONT_SANS.into(),
        font_serif: FONT_SERIF.into(),
        font_mono: FONT_MONO.into(),
        radius: "0.625rem".into(),
        shadow_color: "oklch(0 0 0)".into(),
        shadow_opacity: "0.1".into(),
        shadow_blur: "3px".into(),
        shadow_spread: "0px".into(),
        shadow_offset_x: "0px".into(),
        shadow_offset_y: "1px".into(),
        letter_spacing: "0em".into(),
        spacing: Some("0.25rem".into()),
    }
}

/// Default dark-mode token set. Common keys carry the same values as light;
/// the generator emits them once in the root block.
pub fn default_dark_styles() -> ThemeStyleProps {
    ThemeStyleProps {
        background: "oklch(0.145 0 0)".into(),
        foreground: "oklch(0.985 0 0)".into(),
        card: "oklch(0.205 0 0)".into(),
        card_foreground: "oklch(0.985 0 0)".into(),
        popover: "oklch(0.205 0 0)".into(),
        popover_foreground: "oklch(0.985 0 0)".into(),
        primary: "oklch(0.922 0 0)".into(),
        primary_foreground: "oklch(0.205 0 0)".into(),
        secondary: "oklch(0.269 0 0)".into(),
        secondary_foreground: "oklch(0.985 0 0)".into(),
        muted: "oklch(0.269 0 0)".into(),
        muted_foreground: "oklch(0.708 0 0)".into(),
        accent: "oklch(0.269 0 0)".into(),
        accent_foreground: "oklch(0.985 0 0)".into(),
        destructive: "oklch(0.505 0.213 27.518)".into(),
        destructive_foreground: "oklch(0.985 0 0)".into(),
        border: "oklch(0.269 0 0)".into(),
        input: "oklch(0.269 0 0)".into(),
        ring: "oklch(0.556 0 0)".into(),
        chart_1: "oklch(0.488 0.243 264.376)".into(),
        chart_2: "oklch(0.696 0.17 162.48)".into(),
        chart_3: "oklch(0.769 0.188 70.08)".into(),
        chart_4: "oklch(0.627 0.265 303.9)".into(),
        chart_5: "oklch(0.645 0.246 16.439)".into(),
        sidebar: Some("oklch(0.205 0 0)".into()),
        sidebar_foreground: Some("oklch(0.985 0 0)".into()),
        sidebar_primary: Some("oklch(0.488 0.243 264.376)".into()),
        sidebar_primary_foreground: Some("oklch(0.985 0 0)".into()),
        sidebar_accent: Some("oklch(0.269 0 0)".into()),
        sidebar_accent_foreground: Some("oklch(0.985 0 0)".into()),
        sidebar_border: Some("oklch(0.269 0 0)".into()),
        sidebar_ring: Some("oklch(0.556 0 0)".into()),
        font_sans: FONT_SANS.into(),
        font_serif: FONT_SERIF.into(),
        font_mono: FONT_MONO.into(),
        radius: "0.625rem".into(),
        shadow_color: "oklch(0 0 0)".into(),
        shadow_opacity: "0.1".into(),
        shadow_blur: "3px".into(),
        shadow_spread: "0px".into(),
        shadow_offset_x: "0px".into(),
        shadow_offset_y: "1px".into(),
        letter_spacing: "0em".into(),
        spacing: Some("0.25rem".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::COMMON_KEYS;

    #[test]
    fn test_common_keys_match_across_modes() {
        let light = default_light_styles();
        let dark = default_dark_styles();
        for key in COMMON_KEYS {
            assert_eq!(light.get(key), dark.get(key), "common key {key} diverges");
        }
    }

    #[test]
    fn test_default_background_is_white() {
        assert_eq!(default_light_styles().background, "oklch(1 0 0)");
    }
}
