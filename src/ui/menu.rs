//! Top-Menü (File, Edit, View, etc.).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New").clicked() {
                    events.push(AppIntent::NewProjectRequested);
                    ui.close();
                }

                if ui.button("Open...").clicked() {
                    events.push(AppIntent::OpenFileRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Export...").clicked() {
                    events.push(AppIntent::ExportRequested);
                    ui.close();
                }

                ui.separator();

                // Hintergrundbild-Option
                let background_label = if state.map.background.image.is_some() {
                    "Change Background Image..."
                } else {
                    "Select Background Image..."
                };

                if ui.button(background_label).clicked() {
                    events.push(AppIntent::BackgroundImageSelectionRequested);
                    ui.close();
                }

                if state.map.background.image.is_some()
                    && ui.button("Clear Background Image").clicked()
                {
                    events.push(AppIntent::BackgroundImageCleared);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            // Edit menu: Undo / Redo
            ui.menu_button("Edit", |ui| {
                let can_undo = state.can_undo();
                let can_redo = state.can_redo();

                if ui
                    .add_enabled(can_undo, egui::Button::new("Undo (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(can_redo, egui::Button::new("Redo (Ctrl+Y / Shift+Cmd+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }

                ui.separator();

                let has_vertices = !state.map.vertices().is_empty();
                if ui
                    .add_enabled(has_vertices, egui::Button::new("Select All (Ctrl+A)"))
                    .clicked()
                {
                    events.push(AppIntent::SelectAllRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                ui.separator();

                if ui
                    .selectable_label(state.view.grid_visible, "Grid")
                    .clicked()
                {
                    events.push(AppIntent::GridToggled);
                    ui.close();
                }

                if state.map.background.image.is_some()
                    && ui
                        .selectable_label(state.view.background_visible, "Background Image")
                        .clicked()
                {
                    events.push(AppIntent::BackgroundVisibilityToggled);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    log::info!("Vector Trace Editor v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
