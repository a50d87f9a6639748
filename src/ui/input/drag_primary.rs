//! Drag-Lebenszyklus für die primäre Maustaste: Start, Marquee-Update, Ende.

use super::super::marquee::MarqueeSelection;
use super::{local_screen_pos, screen_pos_to_world, InputState, PrimaryDragMode, ViewportContext};
use crate::app::{AppIntent, EditorTool};

impl InputState {
    /// Verarbeitet den Beginn eines Primär-Drags.
    ///
    /// `press_origin()` liefert die exakte Pointer-Down-Position — nicht die
    /// aktuelle Pointer-Position, die beim Überschreiten der Drag-Schwelle
    /// bereits verschoben ist. Anker und Treffer-Test beziehen sich immer
    /// auf den Down-Punkt.
    pub(super) fn handle_drag_start(
        &mut self,
        ctx: &ViewportContext<'_>,
        modifiers: egui::Modifiers,
        events: &mut Vec<AppIntent>,
    ) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }
        let press_pos = ctx
            .ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| ctx.response.interact_pointer_pos());
        let Some(press_pos) = press_pos else {
            return;
        };

        let world_pos = screen_pos_to_world(press_pos, ctx.response, ctx.camera);
        let radius = ctx.pick_radius_world();
        let vertex_hit = ctx.map.vertex_at(world_pos, radius);

        // Ctrl/Cmd-Drag verhält sich wie Ctrl/Cmd-Klick: Toggle statt Session.
        // Auf leerer Fläche zählt Ctrl/Cmd im Vertex-Tool als
        // Mehrfachselektions-Modifier und startet das Marquee.
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
            } else if ctx.active_tool == EditorTool::Vertex {
                self.marquee = Some(MarqueeSelection::new(press_pos));
            }
            self.primary_drag_mode = PrimaryDragMode::None;
            return;
        }

        match ctx.active_tool {
            EditorTool::Pan => {
                self.primary_drag_mode = PrimaryDragMode::CameraPan;
                events.push(AppIntent::CameraPanStarted {
                    screen: local_screen_pos(press_pos, ctx.response),
                });
            }

            EditorTool::Vertex => match vertex_hit {
                Some(index) => {
                    let selected = ctx.selection.selected_vertices.contains(&index);
                    if modifiers.shift {
                        if selected {
                            // Gruppen-Drag armieren, Selektion unverändert
                            self.primary_drag_mode = PrimaryDragMode::VertexDrag;
                            events.push(AppIntent::DragStartRequested {
                                vertex_index: index,
                                world_pos,
                            });
                        } else {
                            events.push(AppIntent::VertexPickRequested {
                                index,
                                additive: true,
                            });
                        }
                    } else if selected && ctx.selection.selected_vertices.len() > 1 {
                        // Drag innerhalb einer Mehrfachselektion bewegt die
                        // gesamte Gruppe, ohne die Selektion zu kollabieren
                        self.primary_drag_mode = PrimaryDragMode::VertexDrag;
                        events.push(AppIntent::DragStartRequested {
                            vertex_index: index,
                            world_pos,
                        });
                    } else {
                        self.primary_drag_mode = PrimaryDragMode::VertexDrag;
                        events.push(AppIntent::VertexPickRequested {
                            index,
                            additive: false,
                        });
                        events.push(AppIntent::DragStartRequested {
                            vertex_index: index,
                            world_pos,
                        });
                    }
                }
                None => {
                    if modifiers.shift {
                        self.marquee = Some(MarqueeSelection::new(press_pos));
                    } else {
                        // Vertex entsteht am Down-Punkt, auch wenn danach
                        // weitergezogen wird
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

    /// Zieht das Marquee-Rechteck mit dem Pointer nach.
    pub(super) fn handle_marquee_update(&mut self, ctx: &ViewportContext<'_>) {
        if !ctx.response.dragged_by(egui::PointerButton::Primary) {
            return;
        }
        let Some(marquee) = self.marquee.as_mut() else {
            return;
        };
        if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
            marquee.current_screen = pointer_pos;
        }
    }

    /// Beendet laufende Sessions bei Pointer-Up oder Pointer-Leave.
    ///
    /// Pointer-Leave wird wie Pointer-Up behandelt: Drag und Pan committen
    /// den letzten Stand, das Marquee löst mit dem letzten Rechteck auf.
    pub(super) fn handle_drag_end(&mut self, ctx: &ViewportContext<'_>, events: &mut Vec<AppIntent>) {
        let released = ctx.response.drag_stopped_by(egui::PointerButton::Primary)
            || ctx.response.drag_stopped_by(egui::PointerButton::Secondary);

        let session_active =
            self.marquee.is_some() || self.primary_drag_mode != PrimaryDragMode::None;
        let pointer_left = session_active && ctx.ui.input(|i| !i.pointer.has_pointer());

        if !released && !pointer_left {
            return;
        }

        if let Some(marquee) = self.marquee.take() {
            let a = screen_pos_to_world(marquee.start_screen, ctx.response, ctx.camera);
            let b = screen_pos_to_world(marquee.current_screen, ctx.response, ctx.camera);
            events.push(AppIntent::MarqueeResolved {
                min_world: a.min(b),
                max_world: a.max(b),
            });
        }

        // Beide Enden sind im Controller idempotent; ohne passende Session
        // sind sie No-Ops. Deckt auch per Rechtsklick armierte Drags ab.
        events.push(AppIntent::DragEnded);
        events.push(AppIntent::CameraPanEnded);
        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
