//! Use-Case: Neuen Vertex an einer Weltposition anlegen.

use crate::app::AppState;
use glam::Vec2;

/// Fügt einen neuen Vertex an der (gerundeten) Weltposition an.
///
/// Die Vertex-Selektion wird geleert: ein Klick auf leere Fläche im
/// Vertex-Tool ersetzt die Auswahl durch nichts und erzeugt den Punkt.
pub fn add_vertex_at(state: &mut AppState, world_pos: Vec2) {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let index = state.map_mut().add_vertex(world_pos);
    state.selection.clear_vertex_selection();

    log::info!(
        "Vertex {} an Position ({:.0}, {:.0}) angelegt",
        index,
        world_pos.x.round(),
        world_pos.y.round()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_vertex_rounds_and_clears_vertex_selection() {
        let mut state = AppState::new();
        state.map_mut().add_vertex(Vec2::new(0.0, 0.0));
        state.selection.select_vertex(0, false);
        state.selection.select_segment(0, false);

        add_vertex_at(&mut state, Vec2::new(10.6, 10.4));

        assert_eq!(state.map.vertex_count(), 2);
        assert_eq!(
            state.map.vertex(1).unwrap().position,
            Vec2::new(11.0, 10.0)
        );
        assert!(state.selection.selected_vertices.is_empty());
        assert!(state.can_undo());
    }
}
