// ABOUTME: Global hue/saturation/lightness transform applied to single colors
// ABOUTME: Outputs canonical OKLCH; identity adjustments and parse failures pass through

use crate::parse::{ColorFormat, CssVersion, format_rgba, parse};
use crate::space::{Hsl, hsl_to_rgb, rgb_to_hsl};
use tinct_logging::warn;
use tinct_types::HslAdjustments;

/// Lightness floor preventing collapse to pure black under small scales.
const LIGHTNESS_FLOOR: f32 = 0.1;

/// Apply a global HSL adjustment to one color string.
///
/// The result is rendered in canonical OKLCH, the engine's interchange
/// format. Identity adjustments return the input untouched; the exactness
/// matters because the generator substitutes this function's output for the
/// stored token value. Parse failures also fall back to the input unchanged.
pub fn adjust(input: &str, adjustments: &HslAdjustments) -> String {
    if adjustments.is_identity() {
        return input.to_string();
    }

    let Some(color) = parse(input) else {
        warn!(color = %input, "Unparseable color left unadjusted");
        return input.to_string();
    };

    let hsl = rgb_to_hsl(color);
    let adjusted = Hsl {
        h: (hsl.h + adjustments.hue_shift).rem_euclid(360.0),
        s: (hsl.s * adjustments.saturation_scale).clamp(0.0, 1.0),
        l: (hsl.l * adjustments.lightness_scale).clamp(LIGHTNESS_FLOOR, 1.0),
    };

    format_rgba(
        hsl_to_rgb(adjusted, color.a),
        ColorFormat::Oklch,
        CssVersion::Four,
    )
}
