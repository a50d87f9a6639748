//! Kontextmenü im Viewport: Vertex-, Segment- und Leerflächen-Variante.

use crate::app::{AppIntent, ContextTarget};
use crate::core::TraceMap;
use glam::Vec2;

/// Kontextabhängige Menü-Variante basierend auf dem Treffer unter dem Pointer.
///
/// Wird beim Rechtsklick einmalig bestimmt und eingefroren, bis das Menü
/// geschlossen wird — so verursachen Zustandsänderungen während das Menü
/// offen ist kein Flackern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MenuVariant {
    /// Rechtsklick auf leeren Bereich
    EmptyArea,
    /// Rechtsklick auf einen Vertex
    Vertex { index: usize },
    /// Rechtsklick auf ein Segment (kein Vertex im Radius)
    Segment { index: usize },
}

impl MenuVariant {
    /// Das zugehörige Kontextmenü-Ziel für den AppState.
    pub fn context_target(&self) -> Option<ContextTarget> {
        match self {
            MenuVariant::EmptyArea => None,
            MenuVariant::Vertex { index } => Some(ContextTarget::Vertex(*index)),
            MenuVariant::Segment { index } => Some(ContextTarget::Segment(*index)),
        }
    }
}

/// Helper-Funktion: Erstellt einen Button, der bei Klick einen Intent
/// emittiert und das Menü schließt.
fn button_intent(ui: &mut egui::Ui, label: &str, intent: AppIntent, events: &mut Vec<AppIntent>) {
    if ui.button(label).clicked() {
        events.push(intent);
        ui.close();
    }
}

/// Bestimmt die MenuVariant am Rechtsklick-Punkt, Vertex vor Segment.
pub(crate) fn determine_menu_variant(
    map: &TraceMap,
    pointer_pos_world: Option<Vec2>,
    pick_radius_world: f32,
) -> MenuVariant {
    let Some(world_pos) = pointer_pos_world else {
        return MenuVariant::EmptyArea;
    };

    if let Some(index) = map.vertex_at(world_pos, pick_radius_world) {
        return MenuVariant::Vertex { index };
    }
    if let Some(index) = map.segment_at(world_pos, pick_radius_world) {
        return MenuVariant::Segment { index };
    }
    MenuVariant::EmptyArea
}

/// Rendert das Kontextmenü basierend auf der eingefrorenen MenuVariant.
pub(crate) fn render_context_menu(
    response: &egui::Response,
    map: &TraceMap,
    variant: &MenuVariant,
    events: &mut Vec<AppIntent>,
) {
    response.context_menu(|ui| {
        ui.set_min_width(160.0);
        match variant {
            MenuVariant::EmptyArea => {
                if map.vertices().is_empty() {
                    ui.label("Leere Karte");
                } else {
                    button_intent(
                        ui,
                        "⬚ Alle Vertices selektieren",
                        AppIntent::SelectAllRequested,
                        events,
                    );
                }
            }
            MenuVariant::Vertex { index } => {
                if let Some(vertex) = map.vertices().get(*index) {
                    ui.label(format!("📍 Vertex {}", index));
                    ui.label(format!(
                        "Pos: ({:.0}, {:.0})",
                        vertex.position.x, vertex.position.y
                    ));
                    ui.separator();
                }
                button_intent(
                    ui,
                    "⧉ Duplizieren",
                    AppIntent::DuplicateVertexRequested { index: *index },
                    events,
                );
                button_intent(
                    ui,
                    "✂ Löschen",
                    AppIntent::DeleteVertexRequested { index: *index },
                    events,
                );
            }
            MenuVariant::Segment { index } => {
                if let Some(segment) = map.segments().get(*index) {
                    ui.label(format!("📍 Segment {}", index));
                    ui.label(format!("{} ↦ {}", segment.v0, segment.v1));
                    if segment.curve != 0.0 {
                        ui.label(format!("Kurve: {:.0}°", segment.curve));
                    }
                    ui.separator();
                }
                button_intent(
                    ui,
                    "⧉ Duplizieren",
                    AppIntent::DuplicateSegmentRequested { index: *index },
                    events,
                );
                button_intent(
                    ui,
                    "✂ Löschen",
                    AppIntent::DeleteSegmentRequested { index: *index },
                    events,
                );
            }
        }
    });
}
