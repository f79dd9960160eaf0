// ABOUTME: Core data model for the tinct theme customization engine
// ABOUTME: Pure serde data structures shared by every other tinct crate

pub mod adjustments;
pub mod defaults;
pub mod state;
pub mod styles;

pub use adjustments::{HslAdjustments, HslAdjustmentsPatch};
pub use defaults::{default_dark_styles, default_light_styles};
pub use state::{ThemeEditorState, ThemeRecord};
pub use styles::{COLOR_KEYS, COMMON_KEYS, ThemeMode, ThemeStyleProps, ThemeStyles};
