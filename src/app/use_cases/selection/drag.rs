//! Use-Case: Drag-Lifecycle für das Verschieben von Vertices.
//!
//! Die Session friert beim Pointer-Down den Anker und alle Startpositionen
//! ein. Jede Bewegung schreibt `round(start + (aktuell − anker))` pro
//! Vertex — starre Translation der Gruppe, ohne akkumulierten Drift aus
//! Zwischen-Rundungen.

use crate::app::state::DragSession;
use crate::app::AppState;
use glam::Vec2;

/// Beginnt eine Drag-Session auf dem gegebenen Vertex.
///
/// Ist der Vertex Teil einer Mehrfachselektion, wird die gesamte
/// Selektion mitbewegt; sonst nur der getroffene Vertex.
pub fn begin_drag(state: &mut AppState, vertex_index: usize, world_pos: Vec2) {
    if state.map.vertex(vertex_index).is_none() {
        return;
    }

    let multi = state.selection.selected_vertices.contains(&vertex_index)
        && state.selection.selected_vertices.len() > 1;

    let start_positions: Vec<(usize, Vec2)> = if multi {
        state
            .selection
            .selected_vertices
            .iter()
            .filter_map(|&i| state.map.vertex(i).map(|v| (i, v.position)))
            .collect()
    } else {
        state
            .map
            .vertex(vertex_index)
            .map(|v| vec![(vertex_index, v.position)])
            .unwrap_or_default()
    };

    state.editor.drag = Some(DragSession {
        anchor_world: world_pos,
        start_positions,
        undo_recorded: false,
    });
}

/// Bewegt alle Vertices der Session starr zum aktuellen Pointer-Punkt.
/// No-op ohne aktive Session; mittlerweile gelöschte Indizes werden
/// stillschweigend übersprungen.
///
/// Der Undo-Snapshot fällt bei der ersten Bewegung an, die tatsächlich
/// etwas verschiebt — nicht schon beim Armieren der Session.
pub fn update_drag(state: &mut AppState, world_pos: Vec2) {
    let Some(session) = state.editor.drag.clone() else {
        return;
    };

    let delta = world_pos - session.anchor_world;

    // Startpositionen sind ganzzahlig: ein Delta, das auf 0 rundet,
    // verschiebt nichts und braucht keinen Snapshot
    let moves = delta.round() != Vec2::ZERO;
    if moves && !session.undo_recorded {
        state.record_undo_snapshot();
        if let Some(active) = state.editor.drag.as_mut() {
            active.undo_recorded = true;
        }
    }

    let map = state.map_mut();
    for (index, start) in session.start_positions {
        map.update_vertex(index, start + delta);
    }
}

/// Beendet die Drag-Session. Idempotent.
pub fn end_drag(state: &mut AppState) {
    state.editor.drag = None;
}
