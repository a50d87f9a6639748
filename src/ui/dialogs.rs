//! Datei-Dialoge (rfd), angestoßen über Flags im UiState.

use crate::app::{AppIntent, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Open-Datei-Dialog
    if ui_state.show_file_dialog {
        ui_state.show_file_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Trace Map", &["hbs", "json"])
            .pick_file()
        {
            events.push(AppIntent::FileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Export-Datei-Dialog
    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        let default_name = ui_state
            .current_file_path
            .as_ref()
            .and_then(|p| std::path::Path::new(p).file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("trace_map.hbs");

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Trace Map", &["hbs", "json"])
            .set_file_name(default_name)
            .save_file()
        {
            events.push(AppIntent::ExportPathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Hintergrundbild-Auswahl-Dialog
    if ui_state.show_background_dialog {
        ui_state.show_background_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Background Image", &["png", "jpg", "jpeg"])
            .pick_file()
        {
            events.push(AppIntent::BackgroundImageSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
