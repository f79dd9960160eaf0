// ABOUTME: Color engine for tinct: parsing, conversion, adjustment, and contrast
// ABOUTME: All failure paths degrade to the original value instead of raising

pub mod adjust;
pub mod contrast;
pub mod parse;
pub mod space;

pub use adjust::adjust;
pub use contrast::{
    CONTRAST_PAIRS, ContrastCheck, ContrastPair, ContrastRatios, ContrastSummary, can_publish,
    check_all, check_pair, contrast_ratio, luminance_of, relative_luminance, summarize,
};
pub use parse::{ColorFormat, CssVersion, fmt_number, format_color, format_rgba, is_valid, parse};
pub use space::{Hsl, Oklab, Oklch, Rgba};
