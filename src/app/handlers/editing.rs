//! Handler für Editier-Commands (Werkzeuge, Anlegen, Duplizieren, Löschen).

use crate::app::state::{ContextTarget, EditorTool};
use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Wechselt das aktive Werkzeug und verwirft transiente Sessions.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    if state.editor.active_tool == tool {
        return;
    }
    state.editor.active_tool = tool;
    state.editor.drag = None;
    log::info!("Werkzeug gewechselt: {}", tool.label());
}

/// Legt einen Vertex an einer Weltposition an.
pub fn add_vertex(state: &mut AppState, world_pos: Vec2) {
    use_cases::editing::add_vertex_at(state, world_pos);
}

/// Verarbeitet einen Vertex-Klick im Segment-Tool.
pub fn segment_tool_pick(state: &mut AppState, index: usize) {
    use_cases::editing::segment_tool_pick(state, index);
}

/// Dupliziert einen einzelnen Vertex.
pub fn duplicate_vertex(state: &mut AppState, index: usize) {
    use_cases::editing::duplicate_vertex(state, index);
}

/// Löscht einen einzelnen Vertex.
pub fn delete_vertex(state: &mut AppState, index: usize) {
    use_cases::editing::delete_vertex(state, index);
}

/// Dupliziert ein einzelnes Segment.
pub fn duplicate_segment(state: &mut AppState, index: usize) {
    use_cases::editing::duplicate_segment(state, index);
}

/// Löscht ein Segment über den Selektions-Pfad.
pub fn delete_segment_via_selection(state: &mut AppState, index: usize) {
    use_cases::editing::delete_segment_via_selection(state, index);
}

/// Dupliziert alle selektierten Vertices.
pub fn duplicate_selected_vertices(state: &mut AppState) {
    use_cases::editing::duplicate_selected_vertices(state);
}

/// Dupliziert alle selektierten Segmente.
pub fn duplicate_selected_segments(state: &mut AppState) {
    use_cases::editing::duplicate_selected_segments(state);
}

/// Löscht alle selektierten Vertices.
pub fn delete_selected_vertices(state: &mut AppState) {
    use_cases::editing::delete_selected_vertices(state);
}

/// Löscht alle selektierten Segmente.
pub fn delete_selected_segments(state: &mut AppState) {
    use_cases::editing::delete_selected_segments(state);
}

/// Setzt das Kontextmenü-Ziel (oder leert es).
pub fn set_context_target(state: &mut AppState, target: Option<ContextTarget>) {
    state.ui.context_target = target;
}
