// ABOUTME: WCAG relative luminance and contrast math over the token pair registry
// ABOUTME: Degrades unparseable pairs to a failing 1.00 ratio instead of raising

use serde::Serialize;

use crate::parse::parse;
use crate::space::Rgba;
use tinct_logging::warn;
use tinct_types::ThemeStyleProps;

/// WCAG contrast ratios for accessibility compliance
pub struct ContrastRatios;

impl ContrastRatios {
    pub const AAA_NORMAL: f32 = 7.0;
    pub const AA_NORMAL: f32 = 4.5;
    pub const AA_LARGE: f32 = 3.0;
}

/// WCAG 2.1 channel linearization. The knee constant here (0.03928) is the
/// one written into the WCAG formula, not the sRGB spec's 0.04045.
fn wcag_linearize(v: f32) -> f32 {
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance for contrast calculations, per WCAG 2.1.
pub fn relative_luminance(color: Rgba) -> f32 {
    let r_linear = wcag_linearize(color.r);
    let g_linear = wcag_linearize(color.g);
    let b_linear = wcag_linearize(color.b);

    0.2126 * r_linear + 0.7152 * g_linear + 0.0722 * b_linear
}

/// Relative luminance of a color string, if it parses.
pub fn luminance_of(input: &str) -> Option<f32> {
    parse(input).map(relative_luminance)
}

/// Calculate contrast ratio between two colors. Symmetric, in [1, 21].
pub fn contrast_ratio(color1: Rgba, color2: Rgba) -> f32 {
    let lum1 = relative_luminance(color1);
    let lum2 = relative_luminance(color2);

    let lighter = lum1.max(lum2);
    let darker = lum1.min(lum2);

    (lighter + 0.05) / (darker + 0.05)
}

/// A background/foreground token pair subject to contrast validation.
#[derive(Debug, Clone, Copy)]
pub struct ContrastPair {
    pub background_key: &'static str,
    pub foreground_key: &'static str,
    pub label: &'static str,
    /// A failing critical pair blocks publishing.
    pub critical: bool,
}

/// The fixed registry of pairs checked on every validation run.
pub const CONTRAST_PAIRS: &[ContrastPair] = &[
    ContrastPair {
        background_key: "background",
        foreground_key: "foreground",
        label: "Base",
        critical: true,
    },
    ContrastPair {
        background_key: "card",
        foreground_key: "card-foreground",
        label: "Card",
        critical: true,
    },
    ContrastPair {
        background_key: "popover",
        foreground_key: "popover-foreground",
        label: "Popover",
        critical: false,
    },
    ContrastPair {
        background_key: "primary",
        foreground_key: "primary-foreground",
        label: "Primary",
        critical: true,
    },
    ContrastPair {
        background_key: "secondary",
        foreground_key: "secondary-foreground",
        label: "Secondary",
        critical: false,
    },
    ContrastPair {
        background_key: "muted",
        foreground_key: "muted-foreground",
        label: "Muted",
        critical: false,
    },
    ContrastPair {
        background_key: "accent",
        foreground_key: "accent-foreground",
        label: "Accent",
        critical: false,
    },
    ContrastPair {
        background_key: "destructive",
        foreground_key: "destructive-foreground",
        label: "Destructive",
        critical: true,
    },
    ContrastPair {
        background_key: "sidebar",
        foreground_key: "sidebar-foreground",
        label: "Sidebar",
        critical: false,
    },
    ContrastPair {
        background_key: "sidebar-primary",
        foreground_key: "sidebar-primary-foreground",
        label: "Sidebar primary",
        critical: false,
    },
    ContrastPair {
        background_key: "sidebar-accent",
        foreground_key: "sidebar-accent-foreground",
        label: "Sidebar accent",
        critical: false,
    },
];

/// Result of checking one token pair.
#[derive(Debug, Clone, Serialize)]
pub struct ContrastCheck {
    pub label: &'static str,
    pub background_key: &'static str,
    pub foreground_key: &'static str,
    pub critical: bool,
    /// Ratio rounded to 2 decimal places.
    pub ratio: f32,
    pub passes_aa: bool,
    pub passes_aa_large: bool,
    pub passes_aaa: bool,
}

impl ContrastCheck {
    /// Ratio rendered the way the UI reports it, e.g. "21.00".
    pub fn ratio_display(&self) -> String {
        format!("{:.2}", self.ratio)
    }

    fn degraded(pair: &ContrastPair) -> Self {
        Self {
            label: pair.label,
            background_key: pair.background_key,
            foreground_key: pair.foreground_key,
            critical: pair.critical,
            ratio: 1.0,
            passes_aa: false,
            passes_aa_large: false,
            passes_aaa: false,
        }
    }
}

/// Aggregate result over all checked pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContrastSummary {
    pub total: usize,
    pub passing: usize,
    pub failing: usize,
    pub critical_failing: usize,
}

/// Check a single registry pair against a token map.
///
/// A missing or unparseable token degrades the pair to a failing 1.00 ratio;
/// one bad token must never abort the whole validation run.
pub fn check_pair(props: &ThemeStyleProps, pair: &ContrastPair) -> ContrastCheck {
    let background = props.get(pair.background_key).and_then(parse);
    let foreground = props.get(pair.foreground_key).and_then(parse);

    let (background, foreground) = match (background, foreground) {
        (Some(bg), Some(fg)) => (bg, fg),
        _ => {
            warn!(
                background_key = pair.background_key,
                foreground_key = pair.foreground_key,
                "Contrast pair has missing or unparseable tokens, reporting as failing"
            );
            return ContrastCheck::degraded(pair);
        }
    };

    let ratio = (contrast_ratio(background, foreground) * 100.0).round() / 100.0;
    ContrastCheck {
        label: pair.label,
        background_key: pair.background_key,
        foreground_key: pair.foreground_key,
        critical: pair.critical,
        ratio,
        passes_aa: ratio >= ContrastRatios::AA_NORMAL,
        passes_aa_large: ratio >= ContrastRatios::AA_LARGE,
        passes_aaa: ratio >= ContrastRatios::AAA_NORMAL,
    }
}

/// Check every registry pair against a token map.
pub fn check_all(props: &ThemeStyleProps) -> Vec<ContrastCheck> {
    CONTRAST_PAIRS
        .iter()
        .map(|pair| check_pair(props, pair))
        .collect()
}

/// Summarize a set of checks for UI display.
pub fn summarize(checks: &[ContrastCheck]) -> ContrastSummary {
    let passing = checks.iter().filter(|c| c.passes_aa).count();
    let critical_failing = checks
        .iter()
        .filter(|c| c.critical && !c.passes_aa)
        .count();
    ContrastSummary {
        total: checks.len(),
        passing,
        failing: checks.len() - passing,
        critical_failing,
    }
}

/// Publish gate: true when no critical pair falls below AA normal text.
pub fn can_publish(props: &ThemeStyleProps) -> bool {
    CONTRAST_PAIRS
        .iter()
        .filter(|pair| pair.critical)
        .all(|pair| check_pair(props, pair).ratio >= ContrastRatios::AA_NORMAL)
}
