//! Use-Case: Marquee-Auflösung — Vertices im Welt-Rechteck selektieren.

use crate::app::AppState;
use glam::Vec2;

/// Selektiert alle Vertices im geschlossenen Rechteck additiv.
///
/// Die Selektion wächst monoton: bereits selektierte Vertices bleiben
/// selektiert, es wird nie getoggelt. Ein Rechteck ohne Fläche
/// selektiert nichts.
pub fn select_vertices_in_rect(state: &mut AppState, min: Vec2, max: Vec2) {
    let lo = min.min(max);
    let hi = min.max(max);
    if hi.x - lo.x <= 0.0 || hi.y - lo.y <= 0.0 {
        return;
    }

    let inside = state.map.vertices_within_rect(lo, hi);
    for index in inside {
        state.selection.selected_vertices.insert(index);
    }
}
