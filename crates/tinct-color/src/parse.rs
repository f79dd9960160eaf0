// ABOUTME: String-level color parsing and version-aware formatting
// ABOUTME: Supports hex, rgb(), hsl(), and oklch() syntaxes with graceful degradation

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::space::{Rgba, rgb_to_hsl, rgb_to_oklch};
use tinct_logging::warn;

/// Output syntax for formatted colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
    #[default]
    Oklch,
}

/// Major version of the consumer stylesheet conventions. Only affects `hsl`
/// output: version 3 emits the bare tuple so the value can be substituted
/// inside a pre-existing `hsl(...)` wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CssVersion {
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    #[default]
    Four,
}

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-f]{3}|[0-9a-f]{4}|[0-9a-f]{6}|[0-9a-f]{8})$").unwrap()
    })
}

fn rgb_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^rgba?\(\s*([0-9]*\.?[0-9]+)\s*(?:,|\s)\s*([0-9]*\.?[0-9]+)\s*(?:,|\s)\s*([0-9]*\.?[0-9]+)\s*(?:[,/]\s*([0-9]*\.?[0-9]+%?))?\s*\)$",
        )
        .unwrap()
    })
}

fn hsl_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^hsla?\(\s*(-?[0-9]*\.?[0-9]+)(?:deg)?\s*(?:,|\s)\s*([0-9]*\.?[0-9]+)%?\s*(?:,|\s)\s*([0-9]*\.?[0-9]+)%?\s*(?:[,/]\s*([0-9]*\.?[0-9]+%?))?\s*\)$",
        )
        .unwrap()
    })
}

fn oklch_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^oklch\(\s*([0-9]*\.?[0-9]+)(%?)\s+([0-9]*\.?[0-9]+)\s+(-?[0-9]*\.?[0-9]+)(?:deg)?\s*(?:/\s*([0-9]*\.?[0-9]+%?))?\s*\)$",
        )
        .unwrap()
    })
}

/// Parse a color string in any supported syntax.
///
/// Unparseable input is not an error condition: callers degrade to the
/// original string, so this returns `None` rather than an error type.
pub fn parse(input: &str) -> Option<Rgba> {
    let input = input.trim().to_ascii_lowercase();
    if let Some(rest) = input.strip_prefix('#') {
        parse_hex(rest, &input)
    } else if input.starts_with("rgb") {
        parse_rgb(&input)
    } else if input.starts_with("hsl") {
        parse_hsl(&input)
    } else if input.starts_with("oklch") {
        parse_oklch(&input)
    } else {
        None
    }
}

/// Whether the input parses as one of the supported color syntaxes.
pub fn is_valid(input: &str) -> bool {
    parse(input).is_some()
}

fn parse_hex(digits: &str, whole: &str) -> Option<Rgba> {
    if !hex_re().is_match(whole) {
        return None;
    }
    let expand = |c: u8| -> u8 {
        let v = (c as char).to_digit(16).unwrap_or(0) as u8;
        v << 4 | v
    };
    let bytes = digits.as_bytes();
    let (r, g, b, a) = match digits.len() {
        3 => (expand(bytes[0]), expand(bytes[1]), expand(bytes[2]), 255),
        4 => (
            expand(bytes[0]),
            expand(bytes[1]),
            expand(bytes[2]),
            expand(bytes[3]),
        ),
        6 | 8 => {
            let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            (
                byte(0)?,
                byte(2)?,
                byte(4)?,
                if digits.len() == 8 { byte(6)? } else { 255 },
            )
        }
        _ => return None,
    };
    Some(Rgba::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ))
}

fn parse_rgb(input: &str) -> Option<Rgba> {
    let caps = rgb_re().captures(input)?;
    let channel = |i: usize| -> Option<f32> { caps.get(i)?.as_str().parse::<f32>().ok() };
    let alpha = caps
        .get(4)
        .map(|m| parse_alpha(m.as_str()))
        .unwrap_or(1.0);
    Some(Rgba::new(
        channel(1)? / 255.0,
        channel(2)? / 255.0,
        channel(3)? / 255.0,
        alpha,
    ))
}

fn parse_hsl(input: &str) -> Option<Rgba> {
    let caps = hsl_re().captures(input)?;
    let h: f32 = caps.get(1)?.as_str().parse().ok()?;
    let s: f32 = caps.get(2)?.as_str().parse().ok()?;
    let l: f32 = caps.get(3)?.as_str().parse().ok()?;
    let alpha = caps
        .get(4)
        .map(|m| parse_alpha(m.as_str()))
        .unwrap_or(1.0);
    Some(crate::space::hsl_to_rgb(
        crate::space::Hsl {
            h,
            s: (s / 100.0).clamp(0.0, 1.0),
            l: (l / 100.0).clamp(0.0, 1.0),
        },
        alpha,
    ))
}

fn parse_oklch(input: &str) -> Option<Rgba> {
    let caps = oklch_re().captures(input)?;
    let mut l: f32 = caps.get(1)?.as_str().parse().ok()?;
    if !caps.get(2)?.as_str().is_empty() {
        l /= 100.0;
    }
    let c: f32 = caps.get(3)?.as_str().parse().ok()?;
    let h: f32 = caps.get(4)?.as_str().parse().ok()?;
    let alpha = caps
        .get(5)
        .map(|m| parse_alpha(m.as_str()))
        .unwrap_or(1.0);
    Some(crate::space::oklch_to_rgb(
        crate::space::Oklch {
            l: l.clamp(0.0, 1.0),
            c: c.max(0.0),
            h,
        },
        alpha,
    ))
}

fn parse_alpha(input: &str) -> f32 {
    if let Some(percent) = input.strip_suffix('%') {
        percent.parse::<f32>().map(|v| v / 100.0).unwrap_or(1.0)
    } else {
        input.parse::<f32>().unwrap_or(1.0)
    }
    .clamp(0.0, 1.0)
}

/// Format a color string into the requested output syntax.
///
/// Degrades to returning the input unchanged (with a logged warning) when
/// the input does not parse; a malformed token must never abort theme-wide
/// operations.
pub fn format_color(input: &str, format: ColorFormat, version: CssVersion) -> String {
    match parse(input) {
        Some(color) => format_rgba(color, format, version),
        None => {
            warn!(color = %input, target_format = ?format, "Unparseable color passed through unchanged");
            input.to_string()
        }
    }
}

/// Format an already-parsed color into the requested output syntax.
pub fn format_rgba(color: Rgba, format: ColorFormat, version: CssVersion) -> String {
    match format {
        ColorFormat::Hex => format_hex(color),
        ColorFormat::Rgb => format_rgb(color),
        ColorFormat::Hsl => format_hsl(color, version),
        ColorFormat::Oklch => format_oklch(color),
    }
}

fn channel_byte(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

fn is_opaque(color: Rgba) -> bool {
    channel_byte(color.a) == 255
}

fn format_hex(color: Rgba) -> String {
    let (r, g, b) = (
        channel_byte(color.r),
        channel_byte(color.g),
        channel_byte(color.b),
    );
    if is_opaque(color) {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{:02x}", channel_byte(color.a))
    }
}

fn format_rgb(color: Rgba) -> String {
    let (r, g, b) = (
        channel_byte(color.r),
        channel_byte(color.g),
        channel_byte(color.b),
    );
    if is_opaque(color) {
        format!("rgb({r}, {g}, {b})")
    } else {
        format!("rgba({r}, {g}, {b}, {})", fmt_number(color.a))
    }
}

fn format_hsl(color: Rgba, version: CssVersion) -> String {
    let hsl = rgb_to_hsl(color);
    let h = fmt_number(hsl.h);
    let s = fmt_number(hsl.s * 100.0);
    let l = fmt_number(hsl.l * 100.0);
    match version {
        // Bare space-separated tuple, substitutable inside hsl(...) wrappers.
        // Alpha cannot ride along in that position and is dropped.
        CssVersion::Three => format!("{h} {s}% {l}%"),
        CssVersion::Four => {
            if is_opaque(color) {
                format!("hsl({h} {s}% {l}%)")
            } else {
                format!("hsl({h} {s}% {l}% / {})", fmt_number(color.a))
            }
        }
    }
}

fn format_oklch(color: Rgba) -> String {
    let mut lch = rgb_to_oklch(color);
    // Neutral colors have no meaningful hue; pin it so output is stable
    if lch.c < 5e-5 {
        lch.c = 0.0;
        lch.h = 0.0;
    }
    let l = fmt_number(lch.l);
    let c = fmt_number(lch.c);
    let h = fmt_number(lch.h);
    if is_opaque(color) {
        format!("oklch({l} {c} {h})")
    } else {
        format!("oklch({l} {c} {h} / {})", fmt_number(color.a))
    }
}

/// Render a number the way the stylesheet surface expects: integers without
/// a decimal point, everything else rounded to 4 decimal places with
/// trailing zeros stripped.
pub fn fmt_number(value: f32) -> String {
    let rounded = (value as f64 * 10_000.0).round() / 10_000.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let mut s = format!("{rounded:.4}");
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        s
    }
}
