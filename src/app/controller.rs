//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Datei-I/O & Projekt ===
            AppCommand::NewProject => handlers::file_io::new_project(state),
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestExportFileDialog => handlers::file_io::request_export(state),
            AppCommand::RequestBackgroundDialog => handlers::file_io::request_background(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::ExportFile { path } => handlers::file_io::export(state, path)?,
            AppCommand::SetBackgroundImage { path } => {
                handlers::file_io::set_background_image(state, path)
            }
            AppCommand::ClearBackgroundImage => handlers::file_io::clear_background_image(state),
            AppCommand::RequestExit => handlers::file_io::request_exit(state),

            // === Kamera & Viewport ===
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::BeginCameraPan { screen } => handlers::view::begin_pan(state, screen),
            AppCommand::UpdateCameraPan { screen } => handlers::view::update_pan(state, screen),
            AppCommand::EndCameraPan => handlers::view::end_pan(state),
            AppCommand::SetCursorWorld { world_pos } => {
                handlers::view::set_cursor_world(state, world_pos)
            }
            AppCommand::SetHoveredVertex { vertex } => {
                handlers::view::set_hovered_vertex(state, vertex)
            }
            AppCommand::SetBackgroundOpacity { opacity } => {
                handlers::view::set_background_opacity(state, opacity)
            }
            AppCommand::ToggleBackgroundVisibility => {
                handlers::view::toggle_background_visibility(state)
            }
            AppCommand::ToggleGrid => handlers::view::toggle_grid(state),

            // === Selektion & Drag ===
            AppCommand::SelectVertex { index, additive } => {
                handlers::selection::select_vertex(state, index, additive)
            }
            AppCommand::SelectSegment { index, additive } => {
                handlers::selection::select_segment(state, index, additive)
            }
            AppCommand::ClearVertexSelection => handlers::selection::clear_vertex_selection(state),
            AppCommand::ClearSegmentSelection => {
                handlers::selection::clear_segment_selection(state)
            }
            AppCommand::SelectAllVertices => handlers::selection::select_all(state),
            AppCommand::SelectVerticesInRect { min, max } => {
                handlers::selection::select_in_rect(state, min, max)
            }
            AppCommand::BeginDrag {
                vertex_index,
                world_pos,
            } => handlers::selection::begin_drag(state, vertex_index, world_pos),
            AppCommand::UpdateDrag { world_pos } => {
                handlers::selection::update_drag(state, world_pos)
            }
            AppCommand::EndDrag => handlers::selection::end_drag(state),

            // === Editing ===
            AppCommand::SetEditorTool { tool } => handlers::editing::set_editor_tool(state, tool),
            AppCommand::AddVertexAt { world_pos } => handlers::editing::add_vertex(state, world_pos),
            AppCommand::SegmentToolPick { index } => {
                handlers::editing::segment_tool_pick(state, index)
            }
            AppCommand::DuplicateVertex { index } => {
                handlers::editing::duplicate_vertex(state, index)
            }
            AppCommand::DeleteVertex { index } => handlers::editing::delete_vertex(state, index),
            AppCommand::DuplicateSegment { index } => {
                handlers::editing::duplicate_segment(state, index)
            }
            AppCommand::DeleteSegmentViaSelection { index } => {
                handlers::editing::delete_segment_via_selection(state, index)
            }
            AppCommand::DuplicateSelectedVertices => {
                handlers::editing::duplicate_selected_vertices(state)
            }
            AppCommand::DuplicateSelectedSegments => {
                handlers::editing::duplicate_selected_segments(state)
            }
            AppCommand::DeleteSelectedVertices => {
                handlers::editing::delete_selected_vertices(state)
            }
            AppCommand::DeleteSelectedSegments => {
                handlers::editing::delete_selected_segments(state)
            }
            AppCommand::SetContextTarget { target } => {
                handlers::editing::set_context_target(state, target)
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }
}
