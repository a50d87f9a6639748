//! Handler für Datei-I/O und Projektverwaltung.

use std::path::Path;
use std::sync::Arc;

use crate::app::AppState;
use crate::core::TraceMap;
use crate::io;
use crate::shared::options::HISTORY_MAX_DEPTH;

/// Öffnet den Datei-Auswahl-Dialog (asynchron über die UI-Schleife).
pub fn request_open(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Öffnet den Export-Dialog.
pub fn request_export(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Öffnet den Hintergrundbild-Dialog.
pub fn request_background(state: &mut AppState) {
    state.ui.show_background_dialog = true;
}

/// Setzt auf ein leeres Projekt zurück.
pub fn new_project(state: &mut AppState) {
    state.map = Arc::new(TraceMap::default());
    state.selection.clear_vertex_selection();
    state.selection.clear_segment_selection();
    state.editor.drag = None;
    state.ui.current_file_path = None;
    state.ui.hovered_vertex = None;
    state.ui.context_target = None;
    state.view.background_dirty = true;
    state.history = crate::app::history::EditHistory::new_with_capacity(HISTORY_MAX_DEPTH);
    log::info!("Neues Projekt angelegt");
}

/// Lädt eine Kartendatei. Bei Fehlern bleibt der Zustand unverändert.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let map = io::load_trace_map(Path::new(&path))?;

    state.map = Arc::new(map);
    state.selection.clear_vertex_selection();
    state.selection.clear_segment_selection();
    state.editor.drag = None;
    state.ui.hovered_vertex = None;
    state.ui.context_target = None;
    state.ui.current_file_path = Some(path);
    state.view.background_dirty = true;
    state.history = crate::app::history::EditHistory::new_with_capacity(HISTORY_MAX_DEPTH);
    Ok(())
}

/// Exportiert die Karte unter dem gegebenen Pfad.
pub fn export(state: &mut AppState, path: String) -> anyhow::Result<()> {
    io::save_trace_map(&state.map, Path::new(&path))?;
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Hinterlegt ein Hintergrundbild in der Karte.
pub fn set_background_image(state: &mut AppState, path: String) {
    state.record_undo_snapshot();
    state.map_mut().background.image = Some(path);
    state.view.background_dirty = true;
    log::info!("Hintergrundbild gesetzt");
}

/// Entfernt das Hintergrundbild aus der Karte.
pub fn clear_background_image(state: &mut AppState) {
    if state.map.background.image.is_none() {
        return;
    }
    state.record_undo_snapshot();
    state.map_mut().background.image = None;
    state.view.background_dirty = true;
    log::info!("Hintergrundbild entfernt");
}

/// Markiert die Anwendung zum Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
