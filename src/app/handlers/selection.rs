//! Handler für Selektions- und Drag-Operationen.

use crate::app::history::Snapshot;
use crate::app::use_cases;
use crate::app::{AppState, SelectionState};
use glam::Vec2;

/// Zeichnet einen Undo-Snapshot auf, wenn sich die Selektion geändert hat.
fn record_if_selection_changed(state: &mut AppState, old_selection: SelectionState) {
    if old_selection.selected_vertices != state.selection.selected_vertices
        || old_selection.selected_segments != state.selection.selected_segments
    {
        let snap = Snapshot {
            map: state.map.clone(),
            selection: old_selection,
        };
        state.history.record_snapshot(snap);
    }
}

/// Selektiert einen Vertex per Klick.
pub fn select_vertex(state: &mut AppState, index: usize, additive: bool) {
    let old = state.selection.clone();
    use_cases::selection::select_vertex(state, index, additive);
    record_if_selection_changed(state, old);
}

/// Selektiert ein Segment per Klick.
pub fn select_segment(state: &mut AppState, index: usize, additive: bool) {
    let old = state.selection.clone();
    use_cases::selection::select_segment(state, index, additive);
    record_if_selection_changed(state, old);
}

/// Leert die Vertex-Selektion.
pub fn clear_vertex_selection(state: &mut AppState) {
    let old = state.selection.clone();
    use_cases::selection::clear_vertex_selection(state);
    record_if_selection_changed(state, old);
}

/// Leert die Segment-Selektion.
pub fn clear_segment_selection(state: &mut AppState) {
    let old = state.selection.clone();
    use_cases::selection::clear_segment_selection(state);
    record_if_selection_changed(state, old);
}

/// Selektiert alle Vertices (Ctrl+A).
pub fn select_all(state: &mut AppState) {
    let old = state.selection.clone();
    use_cases::selection::select_all_vertices(state);
    record_if_selection_changed(state, old);
}

/// Selektiert Vertices innerhalb eines Welt-Rechtecks (Marquee).
pub fn select_in_rect(state: &mut AppState, min: Vec2, max: Vec2) {
    let old = state.selection.clone();
    use_cases::selection::select_vertices_in_rect(state, min, max);
    record_if_selection_changed(state, old);
}

/// Startet eine Drag-Session. Der Undo-Snapshot fällt erst bei der
/// ersten tatsächlichen Bewegung an (siehe `use_cases::selection::drag`).
pub fn begin_drag(state: &mut AppState, vertex_index: usize, world_pos: Vec2) {
    use_cases::selection::begin_drag(state, vertex_index, world_pos);
}

/// Bewegt die laufende Drag-Session (No-op ohne Session).
pub fn update_drag(state: &mut AppState, world_pos: Vec2) {
    use_cases::selection::update_drag(state, world_pos);
}

/// Beendet die Drag-Session (idempotent).
pub fn end_drag(state: &mut AppState) {
    use_cases::selection::end_drag(state);
}
