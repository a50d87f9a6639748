//! Viewport-Input-Handling: Maus-Events, Marquee, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks` — Klick-Events (Press+Release ohne Bewegung, Tool-Routing)
//! - `drag_primary` — Drag-Start/-Ende (Vertex-Drag, Kamera-Pan, Marquee)
//! - `pointer_delta` — Cursor-, Drag- und Hover-Updates während Bewegung
//! - `zoom` — Scroll-Zoom in festen Stufen

mod clicks;
mod drag_primary;
mod pointer_delta;
mod zoom;

use super::context_menu;
use super::keyboard;
use super::marquee::{draw_marquee_overlay, MarqueeSelection};
use crate::app::{AppIntent, EditorTool, SelectionState};
use crate::core::{Camera2D, TraceMap};
use crate::shared::EditorOptions;

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    VertexDrag,
    CameraPan,
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub camera: &'a Camera2D,
    pub map: &'a TraceMap,
    pub selection: &'a SelectionState,
    pub active_tool: EditorTool,
    pub hovered_vertex: Option<usize>,
    pub options: &'a EditorOptions,
}

impl ViewportContext<'_> {
    /// Pick-Radius in Welteinheiten (zoom-invariant auf dem Bildschirm).
    pub fn pick_radius_world(&self) -> f32 {
        self.camera
            .pick_radius_world(self.options.selection_pick_radius_px)
    }
}

/// Verwaltet den Input-Zustand für das Viewport (Drag, Marquee, Kontextmenü).
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
    pub(crate) marquee: Option<MarqueeSelection>,
    /// Eingefrorene MenuVariant während das Kontextmenü offen ist.
    /// Wird beim Rechtsklick gesetzt und erst geleert, wenn egui das
    /// Popup schließt.
    cached_menu_variant: Option<context_menu::MenuVariant>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_drag_mode: PrimaryDragMode::None,
            marquee: None,
            cached_menu_variant: None,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Drag-Interaktionen im Viewport. Die Branch-Reihenfolge stellt
    /// sicher, dass höchstens eine Session (Drag, Marquee, Pan) aktiv ist.
    #[allow(clippy::too_many_arguments)]
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        map: &TraceMap,
        selection: &SelectionState,
        active_tool: EditorTool,
        hovered_vertex: Option<usize>,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            camera,
            map,
            selection,
            active_tool,
            hovered_vertex,
            options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
        events.extend(keyboard::collect_keyboard_intents(
            ui,
            selection,
            active_tool,
        ));

        let modifiers = ui.input(|i| i.modifiers);

        self.handle_drag_start(&ctx, modifiers, &mut events);
        self.handle_marquee_update(&ctx);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_clicks(&ctx, modifiers, &mut events);
        self.handle_pointer_move(&ctx, &mut events);

        // Marquee-Overlay (ausgelagert in marquee.rs)
        draw_marquee_overlay(self.marquee.as_ref(), ui, response);

        // ── Kontextmenü ─────────────────────────────────────────────────
        // Genau EIN `response.context_menu()`-Aufruf pro Frame.
        //
        // Open-Detection über egui's interne Popup-ID (deterministisch),
        // statt heuristischer Position+Hover-Prüfung.
        let popup_id = response.id.with("context_menu");
        let is_popup_open = egui::Popup::is_id_open(ui.ctx(), popup_id);

        // Cache leeren wenn Popup geschlossen wurde
        if !is_popup_open {
            self.cached_menu_variant = None;
        }

        // Beim Rechtsklick: Variant bestimmen und einfrieren
        if response.secondary_clicked() {
            let world_pos = response
                .hover_pos()
                .map(|screen_pos| screen_pos_to_world(screen_pos, response, camera));

            let variant =
                context_menu::determine_menu_variant(map, world_pos, ctx.pick_radius_world());
            events.push(AppIntent::ContextTargetChanged {
                target: variant.context_target(),
                press_world: world_pos,
            });
            self.cached_menu_variant = Some(variant);
        }

        // Eingefrorene Variant verwenden falls vorhanden, sonst EmptyArea
        // als Fallback. Die Variante wird NICHT jedes Frame neu berechnet.
        let variant = self
            .cached_menu_variant
            .clone()
            .unwrap_or(context_menu::MenuVariant::EmptyArea);

        context_menu::render_context_menu(response, map, &variant, &mut events);

        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    camera: &Camera2D,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(glam::Vec2::new(local.x, local.y))
}

/// Lokale Screen-Position (relativ zur Viewport-Ecke) als glam-Vektor.
pub(crate) fn local_screen_pos(pointer_pos: egui::Pos2, response: &egui::Response) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    glam::Vec2::new(local.x, local.y)
}
