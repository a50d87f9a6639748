//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use glam::Vec2;

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        1.0 / state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Startet die Pan-Geste an einer Screen-Position.
pub fn begin_pan(state: &mut AppState, screen: Vec2) {
    state.view.camera.start_pan(screen);
}

/// Führt die laufende Pan-Geste fort (No-op ohne aktive Geste).
pub fn update_pan(state: &mut AppState, screen: Vec2) {
    state.view.camera.update_pan(screen);
}

/// Beendet die Pan-Geste (idempotent).
pub fn end_pan(state: &mut AppState) {
    state.view.camera.end_pan();
}
