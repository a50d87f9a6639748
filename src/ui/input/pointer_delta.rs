//! Pointer-Bewegung: Cursor-Position, Drag-Updates, Hover-Erkennung.

use super::{local_screen_pos, screen_pos_to_world, InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Pointer-Bewegung im Viewport.
    ///
    /// Bei aktiver Session (Vertex-Drag, Kamera-Pan) werden die passenden
    /// Update-Intents erzeugt; sonst Hover-Erkennung. Die Cursor-Weltposition
    /// für die Statuszeile wird in jedem Fall gemeldet.
    pub(super) fn handle_pointer_move(
        &mut self,
        ctx: &ViewportContext<'_>,
        events: &mut Vec<AppIntent>,
    ) {
        let delta = ctx.ui.input(|i| i.pointer.delta());
        if delta == egui::Vec2::ZERO {
            return;
        }

        let pointer_pos = ctx
            .response
            .interact_pointer_pos()
            .or_else(|| ctx.response.hover_pos());
        let Some(pointer_pos) = pointer_pos else {
            return;
        };

        let world_pos = screen_pos_to_world(pointer_pos, ctx.response, ctx.camera);
        events.push(AppIntent::CursorMoved { world_pos });

        // Marquee-Nachführung läuft separat in handle_marquee_update
        if self.marquee.is_some() {
            return;
        }

        if ctx.response.dragged_by(egui::PointerButton::Primary) {
            match self.primary_drag_mode {
                PrimaryDragMode::VertexDrag => {
                    events.push(AppIntent::DragMoved { world_pos });
                }
                PrimaryDragMode::CameraPan => {
                    events.push(AppIntent::CameraPanMoved {
                        screen: local_screen_pos(pointer_pos, ctx.response),
                    });
                }
                PrimaryDragMode::None => {}
            }
            return;
        }

        // Bewegung mit gehaltener Sekundärtaste verschiebt eine per
        // Kontextmenü armierte Gruppe; ohne Session ist das ein No-Op.
        if ctx.response.dragged_by(egui::PointerButton::Secondary) {
            events.push(AppIntent::DragMoved { world_pos });
            return;
        }

        // Reine Hover-Bewegung: gehoverten Vertex neu bestimmen
        let hovered = ctx.map.vertex_at(world_pos, ctx.pick_radius_world());
        if hovered != ctx.hovered_vertex {
            events.push(AppIntent::HoverChanged { vertex: hovered });
        }
    }
}
