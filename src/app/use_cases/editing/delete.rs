//! Use-Case: Vertices und Segmente löschen.
//!
//! Löschen renummeriert: spätere Vertices rücken nach, referenzierende
//! Segmente fallen mit weg, und beide Selektionsmengen werden auf die
//! neue Nummerierung umgeschrieben.

use super::super::selection::remap_indices_after_removal;
use crate::app::AppState;

/// Löscht einen einzelnen Vertex (Kontextmenü).
pub fn delete_vertex(state: &mut AppState, index: usize) {
    if state.map.vertex(index).is_none() {
        return;
    }

    state.record_undo_snapshot();
    let removed_segments = state.map_mut().remove_vertex(index);

    remap_indices_after_removal(&mut state.selection.selected_vertices, &[index]);
    remap_indices_after_removal(&mut state.selection.selected_segments, &removed_segments);

    log::info!(
        "Vertex {} gelöscht ({} Segmente mit entfernt)",
        index,
        removed_segments.len()
    );
}

/// Löscht alle selektierten Vertices (Entf/Backspace).
pub fn delete_selected_vertices(state: &mut AppState) {
    if state.selection.selected_vertices.is_empty() {
        return;
    }

    state.record_undo_snapshot();
    let doomed: Vec<usize> = state.selection.selected_vertices.iter().copied().collect();
    let removed_segments = state.map_mut().remove_vertices(&doomed);

    state.selection.clear_vertex_selection();
    remap_indices_after_removal(&mut state.selection.selected_segments, &removed_segments);

    log::info!(
        "{} Vertices gelöscht ({} Segmente mit entfernt)",
        doomed.len(),
        removed_segments.len()
    );
}

/// Löscht alle selektierten Segmente (Entf ohne Vertex-Selektion).
pub fn delete_selected_segments(state: &mut AppState) {
    if state.selection.selected_segments.is_empty() {
        return;
    }

    state.record_undo_snapshot();
    let doomed: Vec<usize> = state.selection.selected_segments.iter().copied().collect();
    state.map_mut().remove_segments(&doomed);

    state.selection.clear_segment_selection();
    log::info!("{} Segmente gelöscht", doomed.len());
}

/// Löscht ein Segment über den Selektions-Pfad: ein nicht selektiertes
/// Ziel wird erst zur alleinigen Selektion gemacht, dann wird die
/// Segment-Selektion gelöscht.
pub fn delete_segment_via_selection(state: &mut AppState, index: usize) {
    if state.map.segment(index).is_none() {
        return;
    }
    if !state.selection.selected_segments.contains(&index) {
        state.selection.clear_segment_selection();
        state.selection.selected_segments.insert(index);
    }
    delete_selected_segments(state);
}
