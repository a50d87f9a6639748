use super::*;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event(event: egui::Event, selection: SelectionState) -> Vec<AppIntent> {
    collect_with_key_event_and_tool(event, selection, EditorTool::Vertex)
}

fn collect_with_key_event_and_tool(
    event: egui::Event,
    selection: SelectionState,
    active_tool: EditorTool,
) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    if let egui::Event::Key { modifiers, .. } = &event {
        raw_input.modifiers = *modifiers;
    }
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui, &selection, active_tool);
        });
    });

    events
}

fn selection_with_vertex(index: usize) -> SelectionState {
    let mut selection = SelectionState::new();
    selection.selected_vertices.insert(index);
    selection
}

#[test]
fn test_num2_emits_vertex_tool_intent() {
    let events = collect_with_key_event(
        key_event(egui::Key::Num2, egui::Modifiers::default()),
        SelectionState::new(),
    );

    assert!(events.iter().any(|event| matches!(
        event,
        AppIntent::SetEditorToolRequested {
            tool: EditorTool::Vertex
        }
    )));
}

#[test]
fn test_letter_s_emits_segment_tool_intent() {
    let events = collect_with_key_event(
        key_event(egui::Key::S, egui::Modifiers::default()),
        SelectionState::new(),
    );

    assert!(events.iter().any(|event| matches!(
        event,
        AppIntent::SetEditorToolRequested {
            tool: EditorTool::Segment
        }
    )));
}

#[test]
fn test_delete_with_selection_emits_delete_intent() {
    let events = collect_with_key_event(
        key_event(egui::Key::Delete, egui::Modifiers::default()),
        selection_with_vertex(10),
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::DeleteSelectedRequested)));
}

#[test]
fn test_delete_without_selection_emits_nothing() {
    let events = collect_with_key_event(
        key_event(egui::Key::Delete, egui::Modifiers::default()),
        SelectionState::new(),
    );

    assert!(events.is_empty());
}

#[test]
fn test_ctrl_z_emits_undo() {
    let events = collect_with_key_event(
        key_event(egui::Key::Z, egui::Modifiers::COMMAND),
        SelectionState::new(),
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::UndoRequested)));
    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::RedoRequested)));
}

#[test]
fn test_ctrl_shift_z_emits_redo() {
    let events = collect_with_key_event(
        key_event(egui::Key::Z, egui::Modifiers::COMMAND | egui::Modifiers::SHIFT),
        SelectionState::new(),
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::RedoRequested)));
    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::UndoRequested)));
}

#[test]
fn test_ctrl_y_emits_redo() {
    let events = collect_with_key_event(
        key_event(egui::Key::Y, egui::Modifiers::COMMAND),
        SelectionState::new(),
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::RedoRequested)));
}

#[test]
fn test_ctrl_a_emits_select_all() {
    let events = collect_with_key_event(
        key_event(egui::Key::A, egui::Modifiers::COMMAND),
        SelectionState::new(),
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::SelectAllRequested)));
}

#[test]
fn test_ctrl_d_with_selection_emits_duplicate() {
    let events = collect_with_key_event(
        key_event(egui::Key::D, egui::Modifiers::COMMAND),
        selection_with_vertex(3),
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::DuplicateSelectedRequested)));
}

#[test]
fn test_escape_with_selection_clears_selection() {
    let events = collect_with_key_event(
        key_event(egui::Key::Escape, egui::Modifiers::default()),
        selection_with_vertex(5),
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::ClearVertexSelectionRequested)));
}

#[test]
fn test_escape_without_selection_switches_to_pan_tool() {
    let events = collect_with_key_event_and_tool(
        key_event(egui::Key::Escape, egui::Modifiers::default()),
        SelectionState::new(),
        EditorTool::Segment,
    );

    assert!(events.iter().any(|event| matches!(
        event,
        AppIntent::SetEditorToolRequested {
            tool: EditorTool::Pan
        }
    )));
}

#[test]
fn test_shortcuts_ignored_while_text_field_has_focus() {
    let ctx = egui::Context::default();
    let mut text = String::new();

    // Frame 1: Textfeld anzeigen und fokussieren
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.text_edit_singleline(&mut text);
            response.request_focus();
        });
    });

    // Frame 2: Taste `2` bei fokussiertem Textfeld darf das Tool nicht wechseln
    let mut raw_input = egui::RawInput::default();
    raw_input
        .events
        .push(key_event(egui::Key::Num2, egui::Modifiers::default()));

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            let _ = ui.text_edit_singleline(&mut text);
            events = collect_keyboard_intents(ui, &SelectionState::new(), EditorTool::Pan);
        });
    });

    assert!(events.is_empty());
}
