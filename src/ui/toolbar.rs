//! Toolbar für Editor-Werkzeugauswahl.

use crate::app::{AppIntent, AppState, EditorTool};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.active_tool;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");
            ui.separator();

            let pan_btn = egui::Button::new("✋ Pan (1)");
            if ui.add(pan_btn.selected(active == EditorTool::Pan)).clicked() {
                events.push(AppIntent::SetEditorToolRequested {
                    tool: EditorTool::Pan,
                });
            }

            let vertex_btn = egui::Button::new("📍 Vertex (2)");
            if ui
                .add(vertex_btn.selected(active == EditorTool::Vertex))
                .clicked()
            {
                events.push(AppIntent::SetEditorToolRequested {
                    tool: EditorTool::Vertex,
                });
            }

            let segment_btn = egui::Button::new("➖ Segment (3)");
            if ui
                .add(segment_btn.selected(active == EditorTool::Segment))
                .clicked()
            {
                events.push(AppIntent::SetEditorToolRequested {
                    tool: EditorTool::Segment,
                });
            }

            ui.separator();

            // Undo/Redo
            if ui
                .add_enabled(state.can_undo(), egui::Button::new("↩ Undo"))
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }
            if ui
                .add_enabled(state.can_redo(), egui::Button::new("↪ Redo"))
                .clicked()
            {
                events.push(AppIntent::RedoRequested);
            }

            ui.separator();

            // Delete/Duplicate (nur wenn Selektion vorhanden)
            let has_selection = !state.selection.selected_vertices.is_empty()
                || !state.selection.selected_segments.is_empty();
            if ui
                .add_enabled(has_selection, egui::Button::new("🗑 Delete (Del)"))
                .clicked()
            {
                events.push(AppIntent::DeleteSelectedRequested);
            }
            if ui
                .add_enabled(has_selection, egui::Button::new("⧉ Duplicate (Ctrl+D)"))
                .clicked()
            {
                events.push(AppIntent::DuplicateSelectedRequested);
            }

            ui.separator();

            let mut grid_visible = state.view.grid_visible;
            if ui.checkbox(&mut grid_visible, "Grid").changed() {
                events.push(AppIntent::GridToggled);
            }

            // Segment-Tool Status
            if active == EditorTool::Segment {
                ui.separator();
                if let Some(&from) = state.selection.selected_vertices.iter().next() {
                    if state.selection.selected_vertices.len() == 1 {
                        ui.label(format!("Startvertex: {} → Wähle Zielvertex", from));
                    }
                } else {
                    ui.label("Wähle Startvertex");
                }
            }

            // Hintergrundbild-Controls (rechts ausgerichtet)
            if state.map.background.image.is_some() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut opacity = state.view.background_opacity;
                    ui.label("Hintergrund:");
                    if ui
                        .add(egui::Slider::new(&mut opacity, 0.0..=1.0).text("Opacity"))
                        .changed()
                    {
                        events.push(AppIntent::BackgroundOpacityChanged { opacity });
                    }

                    let visible = state.view.background_visible;
                    let toggle_text = if visible {
                        "👁 Sichtbar"
                    } else {
                        "🚫 Ausgeblendet"
                    };
                    if ui.button(toggle_text).clicked() {
                        events.push(AppIntent::BackgroundVisibilityToggled);
                    }
                });
            }
        });
    });

    events
}
