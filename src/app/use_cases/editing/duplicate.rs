//! Use-Case: Vertices und Segmente duplizieren.
//!
//! Kopien werden am Listenende angehängt und bilden die neue Selektion.
//! Vertex-Kopien bekommen einen Welt-Offset, damit sie neben dem
//! Original sichtbar sind.

use crate::app::AppState;
use glam::Vec2;

/// Dupliziert einen einzelnen Vertex (Kontextmenü).
pub fn duplicate_vertex(state: &mut AppState, index: usize) {
    if state.map.vertex(index).is_none() {
        return;
    }
    let offset = Vec2::splat(state.options.duplicate_offset_world);

    state.record_undo_snapshot();
    if let Some(new_index) = state.map_mut().duplicate_vertex(index, offset) {
        state.selection.selected_vertices.clear();
        state.selection.selected_vertices.insert(new_index);
        log::info!("Vertex {} dupliziert als {}", index, new_index);
    }
}

/// Dupliziert ein einzelnes Segment (Kontextmenü).
pub fn duplicate_segment(state: &mut AppState, index: usize) {
    if state.map.segment(index).is_none() {
        return;
    }

    state.record_undo_snapshot();
    if let Some(new_index) = state.map_mut().duplicate_segment(index) {
        state.selection.selected_segments.clear();
        state.selection.selected_segments.insert(new_index);
        log::info!("Segment {} dupliziert als {}", index, new_index);
    }
}

/// Dupliziert alle selektierten Vertices (Ctrl+D).
pub fn duplicate_selected_vertices(state: &mut AppState) {
    if state.selection.selected_vertices.is_empty() {
        return;
    }
    let offset = Vec2::splat(state.options.duplicate_offset_world);
    let sources: Vec<usize> = state.selection.selected_vertices.iter().copied().collect();

    state.record_undo_snapshot();

    let mut copies = Vec::with_capacity(sources.len());
    for index in sources {
        if let Some(new_index) = state.map_mut().duplicate_vertex(index, offset) {
            copies.push(new_index);
        }
    }

    state.selection.selected_vertices = copies.iter().copied().collect();
    log::info!("{} Vertices dupliziert", copies.len());
}

/// Dupliziert alle selektierten Segmente (Ctrl+D ohne Vertex-Selektion).
pub fn duplicate_selected_segments(state: &mut AppState) {
    if state.selection.selected_segments.is_empty() {
        return;
    }
    let sources: Vec<usize> = state.selection.selected_segments.iter().copied().collect();

    state.record_undo_snapshot();

    let mut copies = Vec::with_capacity(sources.len());
    for index in sources {
        if let Some(new_index) = state.map_mut().duplicate_segment(index) {
            copies.push(new_index);
        }
    }

    state.selection.selected_segments = copies.iter().copied().collect();
    log::info!("{} Segmente dupliziert", copies.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_triangle() -> AppState {
        let mut state = AppState::new();
        state.map_mut().add_vertex(Vec2::new(0.0, 0.0));
        state.map_mut().add_vertex(Vec2::new(100.0, 0.0));
        state.map_mut().add_vertex(Vec2::new(50.0, 80.0));
        state.map_mut().add_segment(0, 1, 0.0);
        state
    }

    #[test]
    fn duplicate_vertex_offsets_copy_and_selects_it() {
        let mut state = state_with_triangle();
        duplicate_vertex(&mut state, 1);

        assert_eq!(state.map.vertex_count(), 4);
        assert_eq!(
            state.map.vertex(3).unwrap().position,
            Vec2::new(110.0, 10.0)
        );
        assert_eq!(state.selection.selected_vertices.len(), 1);
        assert!(state.selection.selected_vertices.contains(&3));
    }

    #[test]
    fn duplicate_selected_vertices_selects_all_copies() {
        let mut state = state_with_triangle();
        state.selection.selected_vertices.insert(0);
        state.selection.selected_vertices.insert(2);

        duplicate_selected_vertices(&mut state);

        assert_eq!(state.map.vertex_count(), 5);
        let selected: Vec<usize> = state.selection.selected_vertices.iter().copied().collect();
        assert_eq!(selected, vec![3, 4]);
    }

    #[test]
    fn duplicate_unknown_vertex_records_nothing() {
        let mut state = state_with_triangle();
        duplicate_vertex(&mut state, 99);

        assert_eq!(state.map.vertex_count(), 3);
        assert!(!state.can_undo());
    }

    #[test]
    fn duplicate_segment_keeps_endpoints_and_curve() {
        let mut state = state_with_triangle();
        duplicate_segment(&mut state, 0);

        assert_eq!(state.map.segment_count(), 2);
        assert_eq!(state.map.segment(1), state.map.segment(0));
        assert!(state.selection.selected_segments.contains(&1));
    }
}
