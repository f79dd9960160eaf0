// ABOUTME: CSS surface for tinct: stylesheet generation, inline style maps, import
// ABOUTME: Token transforms delegate to tinct-color; inheritance rules live here

pub mod generator;
pub mod import;

pub use generator::{CssOptions, generate_css, style_map};
pub use import::{CssImport, CssImportError, import_css};
