// ABOUTME: Editor session state snapshot and persisted record types
// ABOUTME: The snapshot is the unit of undo/redo history and of checkpointing

use serde::{Deserialize, Serialize};

use crate::adjustments::HslAdjustments;
use crate::styles::{ThemeMode, ThemeStyles};

/// Complete editor state: the unit captured by history entries and
/// checkpoints. `current_mode` rides along but is a view concern; undo/redo
/// restore everything except it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThemeEditorState {
    pub styles: ThemeStyles,
    #[serde(default)]
    pub hsl_adjustments: HslAdjustments,
    #[serde(default)]
    pub current_mode: ThemeMode,
    #[serde(default)]
    pub preset_id: Option<String>,
}

/// The persisted shape produced by the external persistence collaborator.
/// Normalized into a [`ThemeEditorState`] on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRecord {
    pub id: String,
    pub styles: ThemeStyles,
    #[serde(default)]
    pub hsl_adjustments: HslAdjustments,
    #[serde(default)]
    pub preset_id: Option<String>,
}

impl ThemeRecord {
    /// Normalize the record into editor state. Loads always start in light
    /// mode regardless of what the session looked like when saved.
    pub fn into_editor_state(self) -> ThemeEditorState {
        ThemeEditorState {
            styles: self.styles,
            hsl_adjustments: self.hsl_adjustments,
            current_mode: ThemeMode::Light,
            preset_id: self.preset_id,
        }
    }
}
