//! Marquee-Selektion (Rechteck-Aufziehen) und Overlay-Painting.

/// Zustand einer aktiven Marquee-Selektion in Screen-Koordinaten.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MarqueeSelection {
    /// Startposition (Pointer-Down)
    pub start_screen: egui::Pos2,
    /// Aktuelle Pointer-Position
    pub current_screen: egui::Pos2,
}

impl MarqueeSelection {
    /// Startet eine Marquee-Selektion am Pointer-Down-Punkt.
    pub fn new(start_screen: egui::Pos2) -> Self {
        Self {
            start_screen,
            current_screen: start_screen,
        }
    }
}

/// Zeichnet das Marquee-Overlay über den Viewport.
pub(super) fn draw_marquee_overlay(
    marquee: Option<&MarqueeSelection>,
    ui: &egui::Ui,
    response: &egui::Response,
) {
    let Some(marquee) = marquee else {
        return;
    };

    let stroke = egui::Stroke::new(1.5, ui.visuals().selection.stroke.color);
    let fill = ui.visuals().selection.bg_fill.gamma_multiply(0.15);
    let painter = ui.painter();

    let rect = egui::Rect::from_two_pos(marquee.start_screen, marquee.current_screen)
        .intersect(response.rect);
    painter.rect_filled(rect, 0.0, fill);
    painter.rect_stroke(rect, 0.0, stroke, egui::StrokeKind::Inside);
}
