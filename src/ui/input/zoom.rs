//! Scroll-Zoom im Viewport.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Übersetzt Scroll-Bewegung in stufenweises Zoomen.
    ///
    /// Gezoomt wird in festen Stufen um den Viewport-Ursprung; die
    /// Pointer-Position geht bewusst nicht ein.
    pub(super) fn handle_scroll_zoom(
        &mut self,
        ctx: &ViewportContext<'_>,
        events: &mut Vec<AppIntent>,
    ) {
        if !ctx.response.hovered() {
            return;
        }
        let scroll_y = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll_y == 0.0 {
            return;
        }

        if scroll_y > 0.0 {
            events.push(AppIntent::ZoomInRequested);
        } else {
            events.push(AppIntent::ZoomOutRequested);
        }
    }
}
