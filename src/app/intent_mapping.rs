//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::ContextTarget;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::NewProjectRequested => vec![AppCommand::NewProject],
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::ExportRequested => vec![AppCommand::RequestExportFileDialog],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::ExportFile { path }],
        AppIntent::BackgroundImageSelectionRequested => {
            vec![AppCommand::RequestBackgroundDialog]
        }
        AppIntent::BackgroundImageSelected { path } => {
            vec![AppCommand::SetBackgroundImage { path }]
        }
        AppIntent::BackgroundImageCleared => vec![AppCommand::ClearBackgroundImage],

        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPanStarted { screen } => vec![AppCommand::BeginCameraPan { screen }],
        AppIntent::CameraPanMoved { screen } => vec![AppCommand::UpdateCameraPan { screen }],
        AppIntent::CameraPanEnded => vec![AppCommand::EndCameraPan],
        AppIntent::CursorMoved { world_pos } => vec![AppCommand::SetCursorWorld { world_pos }],
        AppIntent::HoverChanged { vertex } => vec![AppCommand::SetHoveredVertex { vertex }],
        AppIntent::BackgroundOpacityChanged { opacity } => {
            vec![AppCommand::SetBackgroundOpacity { opacity }]
        }
        AppIntent::BackgroundVisibilityToggled => vec![AppCommand::ToggleBackgroundVisibility],
        AppIntent::GridToggled => vec![AppCommand::ToggleGrid],

        AppIntent::VertexPickRequested { index, additive } => {
            vec![AppCommand::SelectVertex { index, additive }]
        }
        AppIntent::SegmentPickRequested { index, additive } => {
            vec![AppCommand::SelectSegment { index, additive }]
        }
        AppIntent::ClearVertexSelectionRequested => vec![AppCommand::ClearVertexSelection],
        AppIntent::ClearSegmentSelectionRequested => vec![AppCommand::ClearSegmentSelection],
        AppIntent::SelectAllRequested => vec![AppCommand::SelectAllVertices],
        AppIntent::MarqueeResolved {
            min_world,
            max_world,
        } => vec![AppCommand::SelectVerticesInRect {
            min: min_world,
            max: max_world,
        }],

        AppIntent::DragStartRequested {
            vertex_index,
            world_pos,
        } => vec![AppCommand::BeginDrag {
            vertex_index,
            world_pos,
        }],
        AppIntent::DragMoved { world_pos } => vec![AppCommand::UpdateDrag { world_pos }],
        AppIntent::DragEnded => vec![AppCommand::EndDrag],

        AppIntent::AddVertexRequested { world_pos } => {
            vec![AppCommand::AddVertexAt { world_pos }]
        }
        AppIntent::SegmentToolVertexPicked { index } => {
            vec![AppCommand::SegmentToolPick { index }]
        }
        AppIntent::DuplicateVertexRequested { index } => vec![
            AppCommand::DuplicateVertex { index },
            AppCommand::SetContextTarget { target: None },
        ],
        AppIntent::DeleteVertexRequested { index } => vec![
            AppCommand::DeleteVertex { index },
            AppCommand::SetContextTarget { target: None },
        ],
        AppIntent::DuplicateSegmentRequested { index } => vec![
            AppCommand::DuplicateSegment { index },
            AppCommand::SetContextTarget { target: None },
        ],
        AppIntent::DeleteSegmentRequested { index } => vec![
            AppCommand::DeleteSegmentViaSelection { index },
            AppCommand::SetContextTarget { target: None },
        ],

        // Vertices haben Vorrang vor Segmenten, nie beides in einem Schritt
        AppIntent::DuplicateSelectedRequested => {
            if !state.selection.selected_vertices.is_empty() {
                vec![AppCommand::DuplicateSelectedVertices]
            } else if !state.selection.selected_segments.is_empty() {
                vec![AppCommand::DuplicateSelectedSegments]
            } else {
                vec![]
            }
        }
        AppIntent::DeleteSelectedRequested => {
            if !state.selection.selected_vertices.is_empty() {
                vec![AppCommand::DeleteSelectedVertices]
            } else if !state.selection.selected_segments.is_empty() {
                vec![AppCommand::DeleteSelectedSegments]
            } else {
                vec![]
            }
        }

        AppIntent::ContextTargetChanged { target, press_world } => {
            let mut commands = vec![AppCommand::SetContextTarget { target }];

            // Rechtsklick auf einen Vertex innerhalb einer Mehrfachselektion
            // armiert die Drag-Session, ohne etwas zu bewegen. Anker ist die
            // Pointer-Position beim Rechtsklick — nicht das Vertex-Zentrum,
            // sonst springt die Gruppe bei der ersten Bewegung um den
            // Pointer-Vertex-Versatz.
            if let (Some(ContextTarget::Vertex(index)), Some(world_pos)) = (target, press_world) {
                let in_multi_selection = state.selection.selected_vertices.contains(&index)
                    && state.selection.selected_vertices.len() > 1;
                if in_multi_selection && state.map.vertex(index).is_some() {
                    commands.push(AppCommand::BeginDrag {
                        vertex_index: index,
                        world_pos,
                    });
                }
            }

            commands
        }

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],
    }
}
