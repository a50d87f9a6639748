//! Use-Case: Viewport-Verwaltung.

use crate::app::AppState;

/// Übernimmt die aktuelle Viewport-Größe in den Zustand.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
