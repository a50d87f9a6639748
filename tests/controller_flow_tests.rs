use glam::Vec2;
use vector_trace_editor::{
    AppCommand, AppController, AppIntent, AppState, ContextTarget, EditorTool,
};

/// Baut einen Zustand mit Vertices an den gegebenen Weltpositionen.
fn state_with_vertices(positions: &[(f32, f32)]) -> AppState {
    let mut state = AppState::new();
    for &(x, y) in positions {
        state.map_mut().add_vertex(Vec2::new(x, y));
    }
    state.view.viewport_size = [1280.0, 720.0];
    state
}

fn handle(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);
    handle(&mut controller, &mut state, AppIntent::ExitRequested);
    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_add_vertex_then_additive_pick_selects_both() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(
        &mut controller,
        &mut state,
        AppIntent::AddVertexRequested {
            world_pos: Vec2::new(10.4, 10.6),
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::AddVertexRequested {
            world_pos: Vec2::new(50.0, 50.0),
        },
    );

    // Positionen werden beim Anlegen gerundet
    assert_eq!(state.map.vertices().len(), 2);
    assert_eq!(state.map.vertices()[0].position, Vec2::new(10.0, 11.0));

    handle(
        &mut controller,
        &mut state,
        AppIntent::VertexPickRequested {
            index: 0,
            additive: false,
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::VertexPickRequested {
            index: 1,
            additive: true,
        },
    );

    assert_eq!(state.selection.selected_vertices.len(), 2);
}

#[test]
fn test_group_drag_moves_selection_rigidly_and_rounds() {
    let mut controller = AppController::new();
    let mut state = state_with_vertices(&[(0.0, 0.0), (100.0, 0.0)]);

    handle(
        &mut controller,
        &mut state,
        AppIntent::VertexPickRequested {
            index: 0,
            additive: true,
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::VertexPickRequested {
            index: 1,
            additive: true,
        },
    );

    handle(
        &mut controller,
        &mut state,
        AppIntent::DragStartRequested {
            vertex_index: 0,
            world_pos: Vec2::new(0.0, 0.0),
        },
    );
    assert!(state.editor.drag.is_some());

    handle(
        &mut controller,
        &mut state,
        AppIntent::DragMoved {
            world_pos: Vec2::new(30.4, 0.0),
        },
    );

    // Starre Translation: beide Vertices um dasselbe Delta, gerundet
    assert_eq!(state.map.vertices()[0].position, Vec2::new(30.0, 0.0));
    assert_eq!(state.map.vertices()[1].position, Vec2::new(130.0, 0.0));

    // Selektion bleibt während des Drags vollständig erhalten
    assert_eq!(state.selection.selected_vertices.len(), 2);

    handle(&mut controller, &mut state, AppIntent::DragEnded);
    assert!(state.editor.drag.is_none());
}

#[test]
fn test_marquee_is_additive_and_zero_area_selects_nothing() {
    let mut controller = AppController::new();
    let mut state = state_with_vertices(&[(10.0, 10.0), (200.0, 200.0)]);

    handle(
        &mut controller,
        &mut state,
        AppIntent::MarqueeResolved {
            min_world: Vec2::new(0.0, 0.0),
            max_world: Vec2::new(50.0, 50.0),
        },
    );
    assert!(state.selection.selected_vertices.contains(&0));
    assert_eq!(state.selection.selected_vertices.len(), 1);

    // Zweites Marquee erweitert, statt zu ersetzen
    handle(
        &mut controller,
        &mut state,
        AppIntent::MarqueeResolved {
            min_world: Vec2::new(150.0, 150.0),
            max_world: Vec2::new(250.0, 250.0),
        },
    );
    assert_eq!(state.selection.selected_vertices.len(), 2);

    // Null-Fläche (Klick ohne Bewegung) selektiert nichts und leert nichts
    handle(
        &mut controller,
        &mut state,
        AppIntent::MarqueeResolved {
            min_world: Vec2::new(10.0, 10.0),
            max_world: Vec2::new(10.0, 10.0),
        },
    );
    assert_eq!(state.selection.selected_vertices.len(), 2);
}

#[test]
fn test_undo_redo_roundtrip_for_add_vertex() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(
        &mut controller,
        &mut state,
        AppIntent::AddVertexRequested {
            world_pos: Vec2::new(5.0, 5.0),
        },
    );
    assert_eq!(state.map.vertices().len(), 1);
    assert!(state.can_undo());

    handle(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.map.vertices().len(), 0);
    assert!(state.can_redo());

    handle(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.map.vertices().len(), 1);
}

#[test]
fn test_undo_restores_pure_selection_change() {
    let mut controller = AppController::new();
    let mut state = state_with_vertices(&[(0.0, 0.0)]);

    handle(
        &mut controller,
        &mut state,
        AppIntent::VertexPickRequested {
            index: 0,
            additive: false,
        },
    );
    assert_eq!(state.selection.selected_vertices.len(), 1);

    handle(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.selection.selected_vertices.is_empty());
}

#[test]
fn test_delete_vertex_renumbers_segment_endpoints() {
    let mut controller = AppController::new();
    let mut state = state_with_vertices(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)]);
    state.map_mut().add_segment(0, 1, 0.0).expect("Segment 0-1");
    state.map_mut().add_segment(1, 2, 0.0).expect("Segment 1-2");

    handle(
        &mut controller,
        &mut state,
        AppIntent::DeleteVertexRequested { index: 0 },
    );

    // Segment 0-1 hing am gelöschten Vertex und ist mit entfernt
    assert_eq!(state.map.vertices().len(), 2);
    assert_eq!(state.map.segments().len(), 1);
    let segment = &state.map.segments()[0];
    assert_eq!((segment.v0, segment.v1), (0, 1));
}

#[test]
fn test_duplicate_selected_offsets_copies_and_moves_selection() {
    let mut controller = AppController::new();
    let mut state = state_with_vertices(&[(0.0, 0.0), (100.0, 0.0)]);

    handle(
        &mut controller,
        &mut state,
        AppIntent::SelectAllRequested,
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::DuplicateSelectedRequested,
    );

    assert_eq!(state.map.vertices().len(), 4);
    assert_eq!(state.map.vertices()[2].position, Vec2::new(10.0, 10.0));
    assert_eq!(state.map.vertices()[3].position, Vec2::new(110.0, 10.0));

    // Die Kopien sind jetzt die Selektion
    assert!(state.selection.selected_vertices.contains(&2));
    assert!(state.selection.selected_vertices.contains(&3));
    assert!(!state.selection.selected_vertices.contains(&0));
}

#[test]
fn test_delete_selected_prefers_vertices_and_keeps_segment_selection_remapped() {
    let mut controller = AppController::new();
    let mut state = state_with_vertices(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)]);
    state.map_mut().add_segment(1, 2, 0.0).expect("Segment 1-2");

    handle(
        &mut controller,
        &mut state,
        AppIntent::VertexPickRequested {
            index: 0,
            additive: false,
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::SegmentPickRequested {
            index: 0,
            additive: true,
        },
    );

    handle(
        &mut controller,
        &mut state,
        AppIntent::DeleteSelectedRequested,
    );

    // Nur der Vertex wird gelöscht, das selektierte Segment überlebt
    assert_eq!(state.map.vertices().len(), 2);
    assert_eq!(state.map.segments().len(), 1);
    assert!(state.selection.selected_vertices.is_empty());
    assert!(state.selection.selected_segments.contains(&0));
}

#[test]
fn test_context_menu_delete_routes_segment_through_selection() {
    let mut controller = AppController::new();
    let mut state = state_with_vertices(&[(0.0, 0.0), (100.0, 0.0)]);
    state.map_mut().add_segment(0, 1, 45.0).expect("Segment 0-1");

    handle(
        &mut controller,
        &mut state,
        AppIntent::DeleteSegmentRequested { index: 0 },
    );

    assert!(state.map.segments().is_empty());
    assert!(state.selection.selected_segments.is_empty());
    assert_eq!(state.map.vertices().len(), 2);
    assert!(state.ui.context_target.is_none());
}

#[test]
fn test_tool_switch_cancels_active_drag() {
    let mut controller = AppController::new();
    let mut state = state_with_vertices(&[(0.0, 0.0)]);

    handle(
        &mut controller,
        &mut state,
        AppIntent::DragStartRequested {
            vertex_index: 0,
            world_pos: Vec2::new(0.0, 0.0),
        },
    );
    assert!(state.editor.drag.is_some());

    handle(
        &mut controller,
        &mut state,
        AppIntent::SetEditorToolRequested {
            tool: EditorTool::Segment,
        },
    );

    assert_eq!(state.editor.active_tool, EditorTool::Segment);
    assert!(state.editor.drag.is_none());
}

#[test]
fn test_segment_tool_chains_from_last_picked_vertex() {
    let mut controller = AppController::new();
    let mut state = state_with_vertices(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)]);

    handle(
        &mut controller,
        &mut state,
        AppIntent::SegmentToolVertexPicked { index: 0 },
    );
    assert!(state.map.segments().is_empty());
    assert!(state.selection.selected_vertices.contains(&0));

    handle(
        &mut controller,
        &mut state,
        AppIntent::SegmentToolVertexPicked { index: 1 },
    );
    assert_eq!(state.map.segments().len(), 1);
    // Kettenzeichnen: Endvertex wird zum neuen Startvertex
    assert!(state.selection.selected_vertices.contains(&1));
    assert_eq!(state.selection.selected_vertices.len(), 1);

    handle(
        &mut controller,
        &mut state,
        AppIntent::SegmentToolVertexPicked { index: 2 },
    );
    assert_eq!(state.map.segments().len(), 2);
    let second = &state.map.segments()[1];
    assert_eq!((second.v0, second.v1), (1, 2));
}

#[test]
fn test_zoom_is_clamped_to_configured_bounds() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for _ in 0..100 {
        handle(&mut controller, &mut state, AppIntent::ZoomInRequested);
    }
    assert!(state.view.camera.zoom() <= state.options.camera_zoom_max);

    for _ in 0..200 {
        handle(&mut controller, &mut state, AppIntent::ZoomOutRequested);
    }
    assert!(state.view.camera.zoom() >= state.options.camera_zoom_min);
}

#[test]
fn test_camera_pan_accumulates_screen_delta() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(
        &mut controller,
        &mut state,
        AppIntent::CameraPanStarted {
            screen: Vec2::new(100.0, 100.0),
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::CameraPanMoved {
            screen: Vec2::new(130.0, 80.0),
        },
    );
    handle(&mut controller, &mut state, AppIntent::CameraPanEnded);

    assert_eq!(state.view.camera.pan, Vec2::new(30.0, -20.0));

    // Ende ist idempotent, erneutes Ende ohne Session ist ein No-Op
    handle(&mut controller, &mut state, AppIntent::CameraPanEnded);
    assert_eq!(state.view.camera.pan, Vec2::new(30.0, -20.0));
}

#[test]
fn test_secondary_armed_drag_anchors_at_pointer_not_vertex_center() {
    let mut controller = AppController::new();
    let mut state = state_with_vertices(&[(0.0, 0.0), (100.0, 0.0)]);
    state.selection.selected_vertices.insert(0);
    state.selection.selected_vertices.insert(1);

    // Rechtsklick 3 Welteinheiten neben dem Vertex-Zentrum (im Pick-Radius)
    handle(
        &mut controller,
        &mut state,
        AppIntent::ContextTargetChanged {
            target: Some(ContextTarget::Vertex(0)),
            press_world: Some(Vec2::new(3.0, 0.0)),
        },
    );
    assert!(state.editor.drag.is_some());

    // Pointer steht noch am Down-Punkt: die Gruppe darf nicht springen
    handle(
        &mut controller,
        &mut state,
        AppIntent::DragMoved {
            world_pos: Vec2::new(3.0, 0.0),
        },
    );
    assert_eq!(state.map.vertices()[0].position, Vec2::new(0.0, 0.0));
    assert_eq!(state.map.vertices()[1].position, Vec2::new(100.0, 0.0));

    // Erst echte Bewegung verschiebt, relativ zum Pointer-Anker
    handle(
        &mut controller,
        &mut state,
        AppIntent::DragMoved {
            world_pos: Vec2::new(13.0, 0.0),
        },
    );
    assert_eq!(state.map.vertices()[0].position, Vec2::new(10.0, 0.0));
    assert_eq!(state.map.vertices()[1].position, Vec2::new(110.0, 0.0));
}

#[test]
fn test_armed_drag_without_movement_adds_no_undo_entry() {
    let mut controller = AppController::new();
    let mut state = state_with_vertices(&[(0.0, 0.0), (100.0, 0.0)]);
    state.selection.selected_vertices.insert(0);
    state.selection.selected_vertices.insert(1);

    handle(
        &mut controller,
        &mut state,
        AppIntent::DragStartRequested {
            vertex_index: 0,
            world_pos: Vec2::new(0.0, 0.0),
        },
    );
    handle(&mut controller, &mut state, AppIntent::DragEnded);

    assert!(!state.can_undo());
}

#[test]
fn test_click_select_then_drag_undoes_in_two_steps() {
    let mut controller = AppController::new();
    let mut state = state_with_vertices(&[(0.0, 0.0)]);

    handle(
        &mut controller,
        &mut state,
        AppIntent::VertexPickRequested {
            index: 0,
            additive: false,
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::DragStartRequested {
            vertex_index: 0,
            world_pos: Vec2::new(0.0, 0.0),
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::DragMoved {
            world_pos: Vec2::new(10.0, 0.0),
        },
    );
    handle(&mut controller, &mut state, AppIntent::DragEnded);

    // Erstes Undo: Bewegung zurück, Selektion bleibt
    handle(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.map.vertices()[0].position, Vec2::new(0.0, 0.0));
    assert!(state.selection.selected_vertices.contains(&0));

    // Zweites Undo: Selektion zurück, danach ist die History leer
    handle(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.selection.selected_vertices.is_empty());
    assert!(!state.can_undo());
}

#[test]
fn test_mid_drag_vertex_deletion_is_skipped_silently() {
    let mut controller = AppController::new();
    let mut state = state_with_vertices(&[(0.0, 0.0), (100.0, 0.0)]);

    handle(&mut controller, &mut state, AppIntent::SelectAllRequested);
    handle(
        &mut controller,
        &mut state,
        AppIntent::DragStartRequested {
            vertex_index: 0,
            world_pos: Vec2::new(0.0, 0.0),
        },
    );

    // Vertex 1 verschwindet während der Session
    state.map_mut().remove_vertex(1);

    handle(
        &mut controller,
        &mut state,
        AppIntent::DragMoved {
            world_pos: Vec2::new(10.0, 0.0),
        },
    );

    assert_eq!(state.map.vertices().len(), 1);
    assert_eq!(state.map.vertices()[0].position, Vec2::new(10.0, 0.0));
}
