// ABOUTME: Serializes a two-mode token set into CSS text or an inline style map
// ABOUTME: Common keys are emitted once in the root block; dark inherits via cascade

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use tinct_color::{ColorFormat, CssVersion, adjust, format_color};
use tinct_types::{HslAdjustments, ThemeMode, ThemeStyles, styles};

/// Options controlling CSS/style output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssOptions {
    #[serde(default)]
    pub color_format: ColorFormat,
    #[serde(default)]
    pub css_version: CssVersion,
    #[serde(default)]
    pub adjustments: HslAdjustments,
    #[serde(default)]
    pub minify: bool,
}

/// Run one token value through the per-key transform pipeline: color keys are
/// adjusted (when the adjustment is non-identity) and reformatted; everything
/// else passes through verbatim.
fn transform_value(key: &str, value: &str, options: &CssOptions) -> String {
    if !styles::is_color_key(key) {
        return value.to_string();
    }
    if options.adjustments.is_identity() {
        format_color(value, options.color_format, options.css_version)
    } else {
        let adjusted = adjust(value, &options.adjustments);
        format_color(&adjusted, options.color_format, options.css_version)
    }
}

fn write_block(
    out: &mut String,
    selector: &str,
    entries: &[(&'static str, &str)],
    skip_common: bool,
    options: &CssOptions,
) {
    if options.minify {
        out.push_str(selector);
        out.push('{');
        for (key, value) in entries {
            if skip_common && styles::is_common_key(key) {
                continue;
            }
            let value = transform_value(key, value, options);
            out.push_str(&format!("--{key}:{value};"));
        }
        out.push('}');
    } else {
        out.push_str(selector);
        out.push_str(" {\n");
        for (key, value) in entries {
            if skip_common && styles::is_common_key(key) {
                continue;
            }
            let value = transform_value(key, value, options);
            out.push_str(&format!("  --{key}: {value};\n"));
        }
        out.push_str("}\n");
    }
}

/// Generate the full two-block stylesheet for a token set.
///
/// The `:root` block carries every present light-mode token; the `.dark`
/// block skips common keys, which dark-mode consumers inherit from root.
pub fn generate_css(styles: &ThemeStyles, options: &CssOptions) -> String {
    let mut out = String::new();
    write_block(&mut out, ":root", &styles.light.entries(), false, options);
    if !options.minify {
        out.push('\n');
    }
    write_block(&mut out, ".dark", &styles.dark.entries(), true, options);
    out
}

/// Generate a flat custom-property map for inline style injection.
///
/// Unlike the stylesheet path there is no cascade to inherit from, so the
/// dark map includes the common keys too.
pub fn style_map(
    styles: &ThemeStyles,
    mode: ThemeMode,
    options: &CssOptions,
) -> HashMap<String, String> {
    styles
        .for_mode(mode)
        .entries()
        .iter()
        .map(|(key, value)| {
            (
                format!("--{key}"),
                transform_value(key, value, options),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_types::HslAdjustmentsPatch;

    fn default_options() -> CssOptions {
        CssOptions::default()
    }

    #[test]
    fn test_common_keys_emitted_only_in_root_block() {
        let styles = ThemeStyles::default();
        let css = generate_css(&styles, &default_options());

        let root_start = css.find(":root").unwrap();
        let dark_start = css.find(".dark").unwrap();
        let root_block = &css[root_start..dark_start];
        let dark_block = &css[dark_start..];

        assert!(root_block.contains("--font-sans:"));
        assert!(root_block.contains("--radius:"));
        assert!(!dark_block.contains("--font-sans:"));
        assert!(!dark_block.contains("--radius:"));

        // Mode-specific tokens appear in both blocks
        assert!(root_block.contains("--background:"));
        assert!(dark_block.contains("--background:"));
    }

    #[test]
    fn test_common_key_appears_exactly_once() {
        let styles = ThemeStyles::default();
        let css = generate_css(&styles, &default_options());
        assert_eq!(css.matches("--font-sans:").count(), 1);
        assert_eq!(css.matches("--letter-spacing:").count(), 1);
    }

    #[test]
    fn test_color_keys_are_reformatted() {
        let styles = ThemeStyles::default();
        let options = CssOptions {
            color_format: ColorFormat::Hsl,
            ..Default::default()
        };
        let css = generate_css(&styles, &options);
        // background oklch(1 0 0) -> white in hsl v4 syntax
        assert!(css.contains("--background: hsl(0 0% 100%)"), "{css}");
        // non-color tokens pass through untouched
        assert!(css.contains("--radius: 0.625rem;"));
    }

    #[test]
    fn test_hsl_version_three_emits_bare_tuples() {
        let styles = ThemeStyles::default();
        let options = CssOptions {
            color_format: ColorFormat::Hsl,
            css_version: CssVersion::Three,
            ..Default::default()
        };
        let css = generate_css(&styles, &options);
        assert!(css.contains("--background: 0 0% 100%;"), "{css}");
    }

    #[test]
    fn test_adjustments_feed_the_pipeline() {
        let styles = ThemeStyles::default();
        let mut adjustments = HslAdjustments::default();
        adjustments.apply(HslAdjustmentsPatch::lightness_scale(0.5));
        let options = CssOptions {
            adjustments,
            ..Default::default()
        };
        let css = generate_css(&styles, &options);
        // White background halves to 50% lightness; no longer renders as pure white
        assert!(!css.contains("--background: oklch(1 0 0)"), "{css}");
    }

    #[test]
    fn test_minified_output_has_no_insignificant_whitespace() {
        let styles = ThemeStyles::default();
        let options = CssOptions {
            minify: true,
            ..Default::default()
        };
        let css = generate_css(&styles, &options);
        assert!(css.starts_with(":root{"));
        assert!(css.contains("}.dark{"));
        assert!(!css.contains('\n'));
        assert!(css.contains("--background:oklch(1 0 0);"));
    }

    #[test]
    fn test_style_map_keeps_common_keys_in_dark_mode() {
        let styles = ThemeStyles::default();
        let map = style_map(&styles, ThemeMode::Dark, &default_options());
        assert_eq!(map.get("--font-sans").map(String::as_str), styles.dark.get("font-sans"));
        assert_eq!(
            map.get("--background").map(String::as_str),
            Some("oklch(0.145 0 0)")
        );
    }

    #[test]
    fn test_style_map_light_matches_generated_values() {
        let styles = ThemeStyles::default();
        let map = style_map(&styles, ThemeMode::Light, &default_options());
        assert_eq!(
            map.get("--background").map(String::as_str),
            Some("oklch(1 0 0)")
        );
        assert_eq!(map.len(), styles.light.entries().len());
    }
}
