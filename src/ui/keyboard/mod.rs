//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, EditorTool, SelectionState};

#[cfg(test)]
mod tests;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    selection: &SelectionState,
    active_tool: EditorTool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Kein Shortcut-Handling während ein Textfeld den Fokus hat
    if ui.ctx().memory(|m| m.focused().is_some()) {
        return events;
    }

    let has_selection =
        !selection.selected_vertices.is_empty() || !selection.selected_segments.is_empty();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Ctrl+O (Öffnen), Ctrl+S (Export), Ctrl+A (Alle selektieren),
    // Ctrl+D (Selektion duplizieren), Escape (Selektion aufheben)
    let (key_o_pressed, key_s_pressed, key_a_pressed, key_d_pressed, key_escape_pressed) = ui
        .input(|i| {
            (
                i.key_pressed(egui::Key::O),
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::A),
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::Escape),
            )
        });

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenFileRequested);
    }

    if modifiers.command && key_s_pressed && !modifiers.shift {
        events.push(AppIntent::ExportRequested);
    }

    if modifiers.command && key_a_pressed {
        events.push(AppIntent::SelectAllRequested);
    }

    if modifiers.command && key_d_pressed && has_selection {
        events.push(AppIntent::DuplicateSelectedRequested);
    }

    if key_escape_pressed {
        if !selection.selected_vertices.is_empty() {
            events.push(AppIntent::ClearVertexSelectionRequested);
        }
        if !selection.selected_segments.is_empty() {
            events.push(AppIntent::ClearSegmentSelectionRequested);
        }
        if !has_selection && active_tool != EditorTool::Pan {
            // Zurück zum Pan-Tool
            events.push(AppIntent::SetEditorToolRequested {
                tool: EditorTool::Pan,
            });
        }
    }

    // Delete und Tool-Wechsel (1/P = Pan, 2/V = Vertex, 3/S = Segment)
    let (key_del_pressed, key_pan_pressed, key_vertex_pressed, key_segment_pressed) =
        ui.input(|i| {
            (
                i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Num1) || i.key_pressed(egui::Key::P),
                i.key_pressed(egui::Key::Num2) || i.key_pressed(egui::Key::V),
                i.key_pressed(egui::Key::Num3) || i.key_pressed(egui::Key::S),
            )
        });

    if key_del_pressed && has_selection {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    if key_pan_pressed && !modifiers.command {
        events.push(AppIntent::SetEditorToolRequested {
            tool: EditorTool::Pan,
        });
    }
    if key_vertex_pressed && !modifiers.command {
        events.push(AppIntent::SetEditorToolRequested {
            tool: EditorTool::Vertex,
        });
    }
    if key_segment_pressed && !modifiers.command {
        events.push(AppIntent::SetEditorToolRequested {
            tool: EditorTool::Segment,
        });
    }

    events
}
