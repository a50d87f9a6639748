//! Klick-Verarbeitung im Viewport (Press + Release ohne Drag-Schwelle).

use super::{screen_pos_to_world, InputState, ViewportContext};
use crate::app::{AppIntent, EditorTool};

impl InputState {
    /// Verarbeitet Primär-Klicks und routet sie nach Modifier und Tool.
    ///
    /// egui garantiert, dass eine Geste entweder als Klick ODER als Drag
    /// gemeldet wird — Doppelverarbeitung mit `handle_drag_start` ist
    /// dadurch ausgeschlossen.
    pub(super) fn handle_clicks(
        &mut self,
        ctx: &ViewportContext<'_>,
        modifiers: egui::Modifiers,
        events: &mut Vec<AppIntent>,
    ) {
        if !ctx.response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        let Some(pointer_pos) = ctx.response.interact_pointer_pos() else {
            return;
        };

        let world_pos = screen_pos_to_world(pointer_pos, ctx.response, ctx.camera);
        let radius = ctx.pick_radius_world();
        let vertex_hit = ctx.map.vertex_at(world_pos, radius);

        // Ctrl/Cmd-Klick toggelt unabhängig vom Werkzeug, Vertex vor Segment
        if modifiers.command {
            if let Some(index) = vertex_hit {
                events.push(AppIntent::VertexPickRequested {
                    index,
                    additive: true,
                });
            } else if let Some(index) = ctx.map.segment_at(world_pos, radius) {
                events.push(AppIntent::SegmentPickRequested {
                    index,
                    additive: true,
                });
            }
            return;
        }

        match ctx.active_tool {
            // Klick ohne Bewegung hat im Pan-Tool keinen Effekt
            EditorTool::Pan => {}

            EditorTool::Vertex => match vertex_hit {
                Some(index) => {
                    if modifiers.shift {
                        // Shift-Klick auf bereits selektierten Vertex würde
                        // eine Gruppen-Drag-Session armieren; ohne Bewegung
                        // bleibt die Selektion unverändert.
                        if !ctx.selection.selected_vertices.contains(&index) {
                            events.push(AppIntent::VertexPickRequested {
                                index,
                                additive: true,
                            });
                        }
                    } else {
                        events.push(AppIntent::VertexPickRequested {
                            index,
                            additive: false,
                        });
                    }
                }
                None => {
                    // Shift auf leerer Fläche startet die Marquee-Selektion;
                    // ein Klick ohne Bewegung ergibt ein Null-Rechteck und
                    // damit keine Selektion.
                    if !modifiers.shift {
                        events.push(AppIntent::AddVertexRequested { world_pos });
                    }
                }
            },

            EditorTool::Segment => match vertex_hit {
                Some(index) => events.push(AppIntent::SegmentToolVertexPicked { index }),
                None => {
                    if let Some(index) = ctx.map.segment_at(world_pos, radius) {
                        events.push(AppIntent::SegmentPickRequested {
                            index,
                            additive: false,
                        });
                    } else {
                        events.push(AppIntent::ClearSegmentSelectionRequested);
                    }
                }
            },
        }
    }
}
