//! Handler für Kamera-, Viewport- und Darstellungs-Commands.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Übernimmt die Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::set_viewport_size(state, size);
}

/// Startet die Kamera-Pan-Geste.
pub fn begin_pan(state: &mut AppState, screen: Vec2) {
    use_cases::camera::begin_pan(state, screen);
}

/// Führt die Kamera-Pan-Geste fort.
pub fn update_pan(state: &mut AppState, screen: Vec2) {
    use_cases::camera::update_pan(state, screen);
}

/// Beendet die Kamera-Pan-Geste.
pub fn end_pan(state: &mut AppState) {
    use_cases::camera::end_pan(state);
}

/// Merkt sich die Pointer-Weltposition für die Statuszeile.
pub fn set_cursor_world(state: &mut AppState, world_pos: Vec2) {
    state.ui.cursor_world = Some(world_pos);
}

/// Merkt sich den gehoverten Vertex.
pub fn set_hovered_vertex(state: &mut AppState, vertex: Option<usize>) {
    state.ui.hovered_vertex = vertex;
}

/// Setzt das Deckungs-Niveau des Hintergrundbilds.
pub fn set_background_opacity(state: &mut AppState, opacity: f32) {
    state.view.background_opacity = opacity.clamp(0.0, 1.0);
}

/// Blendet das Hintergrundbild ein/aus.
pub fn toggle_background_visibility(state: &mut AppState) {
    state.view.background_visible = !state.view.background_visible;
}

/// Blendet das Grid ein/aus.
pub fn toggle_grid(state: &mut AppState) {
    state.view.grid_visible = !state.view.grid_visible;
}
