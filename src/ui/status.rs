//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Vertices: {} | Segments: {}",
                state.map.vertices().len(),
                state.map.segments().len()
            ));

            ui.separator();

            if let Some(ref path) = state.ui.current_file_path {
                let filename = std::path::Path::new(path)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                ui.label(format!("Datei: {}", filename));
            } else {
                ui.label("Keine Datei geladen");
            }

            ui.separator();

            if let Some(cursor) = state.ui.cursor_world {
                ui.label(format!(
                    "Zoom: {:.2}x | Position: ({:.0}, {:.0})",
                    state.view.camera.zoom(),
                    cursor.x,
                    cursor.y
                ));
            } else {
                ui.label(format!("Zoom: {:.2}x", state.view.camera.zoom()));
            }

            ui.separator();

            let vertex_count = state.selection.selected_vertices.len();
            let segment_count = state.selection.selected_segments.len();
            ui.label(format!(
                "Selektiert: {} Vertices, {} Segmente",
                vertex_count, segment_count
            ));

            ui.separator();

            ui.label(format!("Tool: {}", state.editor.active_tool.label()));

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
