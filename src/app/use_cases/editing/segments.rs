//! Use-Case: Segment-Tool — Segmente zwischen Vertices zeichnen.

use crate::app::AppState;

/// Verarbeitet einen Vertex-Klick im Segment-Tool.
///
/// Ist genau ein anderer Vertex selektiert, entsteht ein gerades Segment
/// zwischen beiden und die Selektion rückt auf den geklickten Vertex vor
/// — aufeinanderfolgende Klicks zeichnen so eine Kette. Sonst wird der
/// Vertex schlicht zur alleinigen Selektion.
pub fn segment_tool_pick(state: &mut AppState, index: usize) {
    if state.map.vertex(index).is_none() {
        return;
    }

    let source = if state.selection.selected_vertices.len() == 1 {
        state.selection.selected_vertices.iter().next().copied()
    } else {
        None
    };

    match source {
        Some(from) if from != index && state.map.vertex(from).is_some() => {
            state.record_undo_snapshot();
            if let Some(new_index) = state.map_mut().add_segment(from, index, 0.0) {
                log::info!("Segment {} erstellt: {} → {}", new_index, from, index);
            }
            // Kette: der geklickte Vertex wird zum neuen Startpunkt
            state.selection.select_vertex(index, false);
        }
        _ => {
            state.selection.select_vertex(index, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn state_with_three() -> AppState {
        let mut state = AppState::new();
        state.map_mut().add_vertex(Vec2::new(0.0, 0.0));
        state.map_mut().add_vertex(Vec2::new(100.0, 0.0));
        state.map_mut().add_vertex(Vec2::new(200.0, 0.0));
        state
    }

    #[test]
    fn first_pick_only_selects() {
        let mut state = state_with_three();
        segment_tool_pick(&mut state, 0);

        assert_eq!(state.map.segment_count(), 0);
        assert!(state.selection.selected_vertices.contains(&0));
    }

    #[test]
    fn chain_picks_create_segments_and_advance_selection() {
        let mut state = state_with_three();
        segment_tool_pick(&mut state, 0);
        segment_tool_pick(&mut state, 1);
        segment_tool_pick(&mut state, 2);

        assert_eq!(state.map.segment_count(), 2);
        assert_eq!(state.map.segment(0).map(|s| (s.v0, s.v1)), Some((0, 1)));
        assert_eq!(state.map.segment(1).map(|s| (s.v0, s.v1)), Some((1, 2)));
        let selected: Vec<usize> = state.selection.selected_vertices.iter().copied().collect();
        assert_eq!(selected, vec![2]);
    }

    #[test]
    fn picking_the_selected_vertex_creates_nothing() {
        let mut state = state_with_three();
        segment_tool_pick(&mut state, 1);
        segment_tool_pick(&mut state, 1);

        assert_eq!(state.map.segment_count(), 0);
        assert!(state.selection.selected_vertices.contains(&1));
    }

    #[test]
    fn multi_selection_collapses_to_picked_vertex() {
        let mut state = state_with_three();
        state.selection.selected_vertices.insert(0);
        state.selection.selected_vertices.insert(1);

        segment_tool_pick(&mut state, 2);

        assert_eq!(state.map.segment_count(), 0);
        let selected: Vec<usize> = state.selection.selected_vertices.iter().copied().collect();
        assert_eq!(selected, vec![2]);
    }
}
