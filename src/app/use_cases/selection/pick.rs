//! Use-Case: Selektion per Klick (ersetzend oder additiv).

use crate::app::AppState;

/// Selektiert einen Vertex. Unbekannte Indizes sind ein No-op —
/// ein Hit-Test darf ein gleichzeitiges Löschen überholen.
pub fn select_vertex(state: &mut AppState, index: usize, additive: bool) {
    if index >= state.map.vertex_count() {
        return;
    }
    state.selection.select_vertex(index, additive);
}

/// Selektiert ein Segment. Unbekannte Indizes sind ein No-op.
pub fn select_segment(state: &mut AppState, index: usize, additive: bool) {
    if index >= state.map.segment_count() {
        return;
    }
    state.selection.select_segment(index, additive);
}

/// Ersetzt die Vertex-Selektion durch alle Vertices der Karte.
pub fn select_all_vertices(state: &mut AppState) {
    let count = state.map.vertex_count();
    state.selection.select_all_vertices(count);
    log::info!("Alle {} Vertices selektiert", count);
}

/// Leert nur die Vertex-Selektion.
pub fn clear_vertex_selection(state: &mut AppState) {
    state.selection.clear_vertex_selection();
}

/// Leert nur die Segment-Selektion.
pub fn clear_segment_selection(state: &mut AppState) {
    state.selection.clear_segment_selection();
}
