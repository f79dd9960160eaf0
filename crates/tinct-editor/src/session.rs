// ABOUTME: The theme editor session: token store state machine with undo/redo
// ABOUTME: Debounce-coalesced history, checkpoint-based dirty tracking, publish gating

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tinct_color::{ContrastCheck, ContrastSummary};
use tinct_logging::{debug, info, warn};
use tinct_types::{
    HslAdjustments, HslAdjustmentsPatch, ThemeEditorState, ThemeMode, ThemeRecord, ThemeStyles,
};

/// Maximum depth of each of the undo and redo stacks.
pub const HISTORY_CAPACITY: usize = 30;

/// Edits closer together than this fold into the same undoable step.
pub const HISTORY_DEBOUNCE: Duration = Duration::from_millis(500);

/// One undoable step: the full editor state as it was before the edit(s)
/// this entry coalesces.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub state: ThemeEditorState,
    pub pushed_at: Instant,
}

/// An owned editing session over one theme.
///
/// All mutation is synchronous and single-threaded; instantiate one session
/// per editing surface rather than sharing a global. Persistence is a
/// collaborator concern: it calls [`load_theme`](Self::load_theme) and
/// [`acknowledge_save`](Self::acknowledge_save) at its boundaries.
#[derive(Debug)]
pub struct ThemeEditorSession {
    state: ThemeEditorState,
    history: VecDeque<HistoryEntry>,
    future: VecDeque<HistoryEntry>,
    checkpoint: Option<ThemeEditorState>,
    dirty: bool,
    loading: bool,
    saving: bool,
    history_debounce: Duration,
    pub(crate) last_history_push: Option<Instant>,
}

impl ThemeEditorSession {
    /// Create a session holding the built-in defaults.
    pub fn new() -> Self {
        Self::with_debounce(HISTORY_DEBOUNCE)
    }

    /// Create a session with a custom history debounce window.
    pub fn with_debounce(history_debounce: Duration) -> Self {
        Self {
            state: ThemeEditorState::default(),
            history: VecDeque::new(),
            future: VecDeque::new(),
            checkpoint: None,
            dirty: false,
            loading: false,
            saving: false,
            history_debounce,
            last_history_push: None,
        }
    }

    // ========== State access ==========

    pub fn state(&self) -> &ThemeEditorState {
        &self.state
    }

    pub fn styles(&self) -> &ThemeStyles {
        &self.state.styles
    }

    pub fn hsl_adjustments(&self) -> HslAdjustments {
        self.state.hsl_adjustments
    }

    pub fn preset_id(&self) -> Option<&str> {
        self.state.preset_id.as_deref()
    }

    pub fn current_mode(&self) -> ThemeMode {
        self.state.current_mode
    }

    /// Switch the editing mode. A view concern: not undoable, not dirtying.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        if self.state.current_mode != mode {
            debug!(mode = ?mode, "Switched editing mode");
            self.state.current_mode = mode;
        }
    }

    // ========== Edit operations ==========

    /// Merge one token value into the named mode's map.
    ///
    /// A manual edit invalidates preset attribution and clears the redo
    /// stack. A new history entry is opened only when the last pushed entry
    /// is older than the debounce window; rapid edits (typing, slider drags)
    /// fold into the current step while the live state still updates.
    ///
    /// Returns false (and changes nothing) for unknown keys.
    pub fn set_style_property(
        &mut self,
        mode: ThemeMode,
        key: &str,
        value: impl Into<String>,
    ) -> bool {
        let value = value.into();
        let snapshot = self.state.clone();
        if !self.state.styles.for_mode_mut(mode).set(key, value) {
            warn!(key, "Ignored edit to unknown style property");
            return false;
        }

        self.maybe_push_history(snapshot);
        self.state.preset_id = None;
        self.future.clear();
        self.dirty = true;
        true
    }

    /// Replace both mode maps wholesale with a preset bundle.
    ///
    /// Resets adjustments to identity, records the preset attribution, and
    /// always opens a fresh history entry.
    pub fn apply_preset(&mut self, preset_id: impl Into<String>, styles: ThemeStyles) {
        let preset_id = preset_id.into();
        let snapshot = self.state.clone();
        self.push_history(snapshot, Instant::now());

        self.state.styles = styles;
        self.state.hsl_adjustments = HslAdjustments::default();
        self.state.preset_id = Some(preset_id.clone());
        self.future.clear();
        self.dirty = true;
        info!(preset_id = %preset_id, "Applied preset");
    }

    /// Merge a partial HSL adjustment update.
    ///
    /// Clears preset attribution and marks dirty, but pushes no history
    /// entry: adjustment edits are not individually undoable, matching the
    /// behavior the surrounding product was built against (see DESIGN.md).
    pub fn set_hsl_adjustments(&mut self, patch: HslAdjustmentsPatch) {
        self.state.hsl_adjustments.apply(patch);
        self.state.preset_id = None;
        self.dirty = true;
    }

    // ========== History ==========

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    /// Restore the most recent history entry. Silent no-op when empty.
    ///
    /// The captured styles/adjustments/preset are restored; the current mode
    /// is kept, since mode is a view concern rather than part of the undo
    /// unit. The pre-undo state moves onto the redo stack.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.pop_back() else {
            return false;
        };
        let mode = self.state.current_mode;
        push_bounded(&mut self.future, entry_with(self.state.clone()));
        self.state = entry.state;
        self.state.current_mode = mode;
        self.dirty = true;
        self.last_history_push = None;
        true
    }

    /// Symmetric inverse of [`undo`](Self::undo). Silent no-op when empty.
    pub fn redo(&mut self) -> bool {
        let Some(entry) = self.future.pop_back() else {
            return false;
        };
        let mode = self.state.current_mode;
        push_bounded(&mut self.history, entry_with(self.state.clone()));
        self.state = entry.state;
        self.state.current_mode = mode;
        self.dirty = true;
        self.last_history_push = None;
        true
    }

    fn maybe_push_history(&mut self, snapshot: ThemeEditorState) {
        let now = Instant::now();
        let window_elapsed = self
            .last_history_push
            .map(|t| now.duration_since(t) > self.history_debounce)
            .unwrap_or(true);
        if window_elapsed {
            self.push_history(snapshot, now);
        }
    }

    fn push_history(&mut self, snapshot: ThemeEditorState, now: Instant) {
        push_bounded(
            &mut self.history,
            HistoryEntry {
                state: snapshot,
                pushed_at: now,
            },
        );
        self.last_history_push = Some(now);
    }

    // ========== Dirty tracking / persistence boundary ==========

    /// Deep-copy the current state as the last-known-persisted snapshot.
    pub fn save_checkpoint(&mut self) {
        self.checkpoint = Some(self.state.clone());
    }

    /// Change detection against the checkpoint.
    ///
    /// With a checkpoint present this is a structural comparison of the
    /// style maps; persisted data is always a fresh copy, so reference
    /// identity means nothing here. Without one it falls back to the dirty
    /// flag.
    pub fn has_unsaved_changes(&self) -> bool {
        match &self.checkpoint {
            Some(checkpoint) => checkpoint.styles != self.state.styles,
            None => self.dirty,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag (called on successful external save).
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Handle a save acknowledgement from the persistence collaborator:
    /// checkpoint the acknowledged state and clear dirty/saving.
    pub fn acknowledge_save(&mut self) {
        self.save_checkpoint();
        self.mark_clean();
        self.saving = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn set_saving(&mut self, saving: bool) {
        self.saving = saving;
    }

    // ========== Lifecycle ==========

    /// Replace the session from a persisted record.
    ///
    /// Starts in light mode, checkpoints the loaded state, clears both
    /// stacks, and marks clean.
    pub fn load_theme(&mut self, record: ThemeRecord) {
        info!(theme_id = %record.id, "Loading theme record into session");
        self.state = record.into_editor_state();
        self.checkpoint = Some(self.state.clone());
        self.history.clear();
        self.future.clear();
        self.dirty = false;
        self.loading = false;
        self.last_history_push = None;
    }

    /// Restore built-in defaults and forget all session history.
    pub fn reset(&mut self) {
        info!("Resetting session to built-in defaults");
        self.state = ThemeEditorState::default();
        self.history.clear();
        self.future.clear();
        self.checkpoint = None;
        self.dirty = false;
        self.last_history_push = None;
    }

    // ========== Validation surface ==========

    /// Contrast results for the active mode's token set.
    pub fn contrast_checks(&self) -> Vec<ContrastCheck> {
        tinct_color::check_all(self.state.styles.for_mode(self.state.current_mode))
    }

    /// Aggregate contrast summary for the active mode's token set.
    pub fn contrast_summary(&self) -> ContrastSummary {
        tinct_color::summarize(&self.contrast_checks())
    }

    /// Publish gate over the active mode: no critical pair may fail AA.
    pub fn can_publish(&self) -> bool {
        tinct_color::can_publish(self.state.styles.for_mode(self.state.current_mode))
    }
}

impl Default for ThemeEditorSession {
    fn default() -> Self {
        Self::new()
    }
}

fn entry_with(state: ThemeEditorState) -> HistoryEntry {
    HistoryEntry {
        state,
        pushed_at: Instant::now(),
    }
}

fn push_bounded(stack: &mut VecDeque<HistoryEntry>, entry: HistoryEntry) {
    if stack.len() == HISTORY_CAPACITY {
        stack.pop_front();
    }
    stack.push_back(entry);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewind_anchor(session: &mut ThemeEditorSession, by: Duration) {
        session.last_history_push = Some(Instant::now() - by);
    }

    #[test]
    fn test_first_edit_opens_history_entry() {
        let mut session = ThemeEditorSession::new();
        assert!(session.set_style_property(
            ThemeMode::Light,
            "primary",
            "oklch(0.5 0.2 250)"
        ));
        assert_eq!(session.history_len(), 1);
        assert_eq!(
            session.styles().light.get("primary"),
            Some("oklch(0.5 0.2 250)")
        );
        assert_eq!(session.preset_id(), None);
        assert!(session.is_dirty());
    }

    #[test]
    fn test_rapid_edits_coalesce_into_one_entry() {
        let mut session = ThemeEditorSession::new();
        session.set_style_property(ThemeMode::Light, "primary", "#111111");
        session.set_style_property(ThemeMode::Light, "primary", "#222222");
        session.set_style_property(ThemeMode::Light, "primary", "#333333");
        assert_eq!(session.history_len(), 1);
        assert_eq!(session.styles().light.get("primary"), Some("#333333"));
    }

    #[test]
    fn test_edit_after_window_opens_new_entry() {
        let mut session = ThemeEditorSession::new();
        session.set_style_property(ThemeMode::Light, "primary", "#111111");
        session.set_style_property(ThemeMode::Light, "primary", "#222222");
        session.set_style_property(ThemeMode::Light, "primary", "#333333");
        assert_eq!(session.history_len(), 1);

        // Pretend the coalescing window expired
        rewind_anchor(&mut session, Duration::from_millis(900));
        session.set_style_property(ThemeMode::Light, "primary", "#444444");
        assert_eq!(session.history_len(), 2);
    }

    #[test]
    fn test_unknown_key_changes_nothing() {
        let mut session = ThemeEditorSession::new();
        assert!(!session.set_style_property(ThemeMode::Light, "bogus-token", "red"));
        assert_eq!(session.history_len(), 0);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_edit_clears_preset_attribution_and_redo() {
        let mut session = ThemeEditorSession::new();
        session.apply_preset("ocean", ThemeStyles::default());
        assert_eq!(session.preset_id(), Some("ocean"));

        session.undo();
        assert!(session.can_redo());

        rewind_anchor(&mut session, Duration::from_millis(900));
        session.set_style_property(ThemeMode::Light, "accent", "#00ffcc");
        assert_eq!(session.preset_id(), None);
        assert!(!session.can_redo());
    }

    #[test]
    fn test_apply_preset_pushes_once_and_resets_adjustments() {
        let mut session = ThemeEditorSession::new();
        session.set_hsl_adjustments(HslAdjustmentsPatch::hue_shift(40.0));
        assert!(!session.hsl_adjustments().is_identity());

        session.apply_preset("ocean", ThemeStyles::default());
        assert_eq!(session.history_len(), 1);
        assert!(session.hsl_adjustments().is_identity());
        assert_eq!(session.preset_id(), Some("ocean"));
        assert!(session.is_dirty());
    }

    #[test]
    fn test_hsl_adjustments_do_not_create_history() {
        let mut session = ThemeEditorSession::new();
        session.set_hsl_adjustments(HslAdjustmentsPatch::saturation_scale(1.4));
        assert_eq!(session.history_len(), 0);
        assert!(session.is_dirty());
        assert_eq!(session.preset_id(), None);
        assert_eq!(session.hsl_adjustments().saturation_scale, 1.4);
    }

    #[test]
    fn test_undo_restores_snapshot_but_keeps_mode() {
        let mut session = ThemeEditorSession::new();
        session.set_style_property(ThemeMode::Light, "primary", "#123456");
        session.set_mode(ThemeMode::Dark);

        assert!(session.undo());
        assert_eq!(session.current_mode(), ThemeMode::Dark);
        assert_eq!(
            session.styles().light.get("primary"),
            ThemeStyles::default().light.get("primary")
        );
        assert!(session.can_redo());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_undo_redo_roundtrip_restores_exactly() {
        let mut session = ThemeEditorSession::new();
        session.set_style_property(ThemeMode::Light, "primary", "#123456");
        rewind_anchor(&mut session, Duration::from_millis(900));
        session.apply_preset("ocean", ThemeStyles::default());
        let before = session.state().clone();

        assert!(session.undo());
        assert_ne!(session.state().preset_id, before.preset_id);
        assert!(session.redo());
        assert_eq!(session.state().styles, before.styles);
        assert_eq!(session.state().preset_id, before.preset_id);
        assert_eq!(session.state().hsl_adjustments, before.hsl_adjustments);
    }

    #[test]
    fn test_undo_redo_empty_stacks_are_noops() {
        let mut session = ThemeEditorSession::new();
        assert!(!session.undo());
        assert!(!session.redo());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_history_capacity_evicts_oldest() {
        let mut session = ThemeEditorSession::with_debounce(Duration::ZERO);
        for i in 0..40 {
            session.set_style_property(ThemeMode::Light, "primary", format!("#0000{i:02x}"));
            // Zero window still requires strictly-exceeding elapsed time
            rewind_anchor(&mut session, Duration::from_millis(1));
        }
        assert_eq!(session.history_len(), HISTORY_CAPACITY);

        // Oldest surviving snapshot is from edit #10 (0..40, 10 evicted),
        // which captured the state written by edit #9
        let oldest = session.history.front().unwrap();
        assert_eq!(oldest.state.styles.light.get("primary"), Some("#000009"));
    }

    #[test]
    fn test_checkpoint_drives_unsaved_changes() {
        let mut session = ThemeEditorSession::new();
        assert!(!session.has_unsaved_changes());

        session.set_style_property(ThemeMode::Light, "primary", "#fedcba");
        assert!(session.has_unsaved_changes());

        session.acknowledge_save();
        assert!(!session.has_unsaved_changes());
        assert!(!session.is_dirty());

        // Undo after a save: the flag over-reports by design, but the
        // checkpoint comparison still tells the truth about styles
        session.undo();
        assert!(session.is_dirty());
        assert!(session.has_unsaved_changes());
    }

    #[test]
    fn test_load_theme_resets_session_around_record() {
        let mut session = ThemeEditorSession::new();
        session.set_mode(ThemeMode::Dark);
        session.set_style_property(ThemeMode::Dark, "primary", "#999999");

        let record = ThemeRecord {
            id: "site-theme".into(),
            styles: ThemeStyles::default(),
            hsl_adjustments: HslAdjustments::new(10.0, 1.0, 1.0),
            preset_id: Some("ocean".into()),
        };
        session.load_theme(record);

        assert_eq!(session.current_mode(), ThemeMode::Light);
        assert_eq!(session.preset_id(), Some("ocean"));
        assert!(!session.is_dirty());
        assert!(!session.has_unsaved_changes());
        assert!(!session.can_undo());
        assert!(!session.can_redo());
    }

    #[test]
    fn test_reset_restores_defaults_and_clears_checkpoint() {
        let mut session = ThemeEditorSession::new();
        session.set_style_property(ThemeMode::Light, "primary", "#999999");
        session.acknowledge_save();

        session.reset();
        assert_eq!(session.state(), &ThemeEditorState::default());
        assert!(!session.can_undo());
        assert!(!session.has_unsaved_changes());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_loading_saving_flags_are_orthogonal() {
        let mut session = ThemeEditorSession::new();
        session.set_loading(true);
        session.set_saving(true);
        assert!(session.is_loading());
        assert!(session.is_saving());
        session.acknowledge_save();
        assert!(!session.is_saving());
        assert!(session.is_loading());
    }

    #[test]
    fn test_publish_gate_follows_active_mode_tokens() {
        let mut session = ThemeEditorSession::new();
        assert!(session.can_publish());

        let foreground = session.styles().light.primary.clone();
        session.set_style_property(ThemeMode::Light, "primary-foreground", foreground);
        assert!(!session.can_publish());

        let summary = session.contrast_summary();
        assert!(summary.critical_failing >= 1);

        // The dark map is untouched and still publishable
        session.set_mode(ThemeMode::Dark);
        assert!(session.can_publish());
    }
}
