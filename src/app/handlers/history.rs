//! Handler für Undo/Redo.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Macht die letzte Änderung rückgängig. No-op bei leerem Undo-Stack.
pub fn undo(state: &mut AppState) {
    // Laufende Sessions überleben keinen Zustandswechsel
    state.editor.drag = None;

    let current = Snapshot::from_state(state);
    if let Some(snap) = state.history.pop_undo_with_current(current) {
        snap.apply_to(state);
        log::info!("Undo ausgeführt");
    }
}

/// Stellt die zuletzt rückgängig gemachte Änderung wieder her.
pub fn redo(state: &mut AppState) {
    state.editor.drag = None;

    let current = Snapshot::from_state(state);
    if let Some(snap) = state.history.pop_redo_with_current(current) {
        snap.apply_to(state);
        log::info!("Redo ausgeführt");
    }
}
