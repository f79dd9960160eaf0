// ABOUTME: Reverse operation: extract custom-property declarations from foreign CSS
// ABOUTME: Routes :root/.dark blocks into partial light/dark token maps

use std::collections::HashMap;

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use tinct_logging::debug;

/// Partial token maps recovered from an externally authored stylesheet.
/// Keys are stored without the `--` prefix; values are untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CssImport {
    pub light: HashMap<String, String>,
    pub dark: HashMap<String, String>,
}

impl CssImport {
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum CssImportError {
    #[error("No custom-property declarations found in input")]
    NoCustomProperties,
}

fn block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)([^{}]+)\{([^{}]*)\}").unwrap())
}

fn decl_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"--([a-zA-Z0-9-]+)\s*:\s*([^;{}]+)").unwrap())
}

fn collect_declarations(body: &str, into: &mut HashMap<String, String>) {
    for caps in decl_re().captures_iter(body) {
        let key = caps[1].to_string();
        let value = caps[2].trim().to_string();
        if !value.is_empty() {
            into.insert(key, value);
        }
    }
}

/// Parse `--key: value;` declarations out of an arbitrary CSS string.
///
/// `:root` (or `html`/`body`) blocks land in the light map, `.dark` blocks in
/// the dark map; declarations outside any recognized block default to light.
/// Unknown keys are preserved; the caller decides what to keep.
pub fn import_css(input: &str) -> Result<CssImport, CssImportError> {
    let mut import = CssImport::default();
    let mut consumed_ranges: Vec<(usize, usize)> = Vec::new();

    for caps in block_re().captures_iter(input) {
        let whole = caps.get(0).unwrap();
        consumed_ranges.push((whole.start(), whole.end()));

        let selector = caps[1].trim().to_ascii_lowercase();
        let body = &caps[2];
        if selector.contains(".dark") {
            collect_declarations(body, &mut import.dark);
        } else if selector.contains(":root")
            || selector.contains("html")
            || selector.contains("body")
        {
            collect_declarations(body, &mut import.light);
        }
        // Other selectors (components, media bodies) are not token sources
    }

    // Declarations outside any block default to the light map
    let mut remainder = String::new();
    let mut cursor = 0;
    for (start, end) in consumed_ranges {
        remainder.push_str(&input[cursor..start]);
        cursor = end;
    }
    remainder.push_str(&input[cursor..]);
    collect_declarations(&remainder, &mut import.light);

    if import.is_empty() {
        return Err(CssImportError::NoCustomProperties);
    }

    debug!(
        light_tokens = import.light.len(),
        dark_tokens = import.dark.len(),
        "Imported custom properties from foreign CSS"
    );
    Ok(import)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_routes_root_and_dark_blocks() {
        let css = r#"
            :root {
                --background: oklch(1 0 0);
                --primary: #3b82f6;
                --radius: 0.5rem;
            }

            .dark {
                --background: oklch(0.145 0 0);
            }
        "#;
        let import = import_css(css).unwrap();
        assert_eq!(
            import.light.get("background").map(String::as_str),
            Some("oklch(1 0 0)")
        );
        assert_eq!(
            import.light.get("radius").map(String::as_str),
            Some("0.5rem")
        );
        assert_eq!(
            import.dark.get("background").map(String::as_str),
            Some("oklch(0.145 0 0)")
        );
        assert!(import.dark.get("primary").is_none());
    }

    #[test]
    fn test_bare_declarations_default_to_light() {
        let css = "--primary: red;\n--accent: blue;";
        let import = import_css(css).unwrap();
        assert_eq!(import.light.get("primary").map(String::as_str), Some("red"));
        assert_eq!(import.light.get("accent").map(String::as_str), Some("blue"));
        assert!(import.dark.is_empty());
    }

    #[test]
    fn test_component_blocks_are_not_token_sources() {
        let css = r#"
            .button { --ripple: 200ms; }
            :root { --primary: #fff; }
        "#;
        let import = import_css(css).unwrap();
        assert!(import.light.get("ripple").is_none());
        assert_eq!(import.light.get("primary").map(String::as_str), Some("#fff"));
    }

    #[test]
    fn test_unknown_keys_are_preserved() {
        let css = ":root { --brand-halo: #123456; }";
        let import = import_css(css).unwrap();
        assert_eq!(
            import.light.get("brand-halo").map(String::as_str),
            Some("#123456")
        );
    }

    #[test]
    fn test_last_declaration_without_semicolon_is_captured() {
        let css = ":root { --primary: #fff }";
        let import = import_css(css).unwrap();
        assert_eq!(import.light.get("primary").map(String::as_str), Some("#fff"));
    }

    #[test]
    fn test_no_declarations_is_an_error() {
        assert!(matches!(
            import_css("h1 { color: red; }"),
            Err(CssImportError::NoCustomProperties)
        ));
        assert!(import_css("").is_err());
    }

    #[test]
    fn test_generated_css_reimports_cleanly() {
        let styles = tinct_types::ThemeStyles::default();
        let css = crate::generator::generate_css(&styles, &Default::default());
        let import = import_css(&css).unwrap();
        assert_eq!(
            import.light.get("background").map(String::as_str),
            Some("oklch(1 0 0)")
        );
        // Dark block omits common keys, so they only land in the light map
        assert!(import.dark.get("font-sans").is_none());
        assert!(import.light.get("font-sans").is_some());
    }
}
