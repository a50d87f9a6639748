use glam::Vec2;
use vector_trace_editor::{AppController, AppIntent, AppState};

fn handle(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn temp_path(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("vector_trace_editor_tests");
    std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis anlegbar");
    dir.join(name)
}

#[test]
fn test_add_vertex_clears_vertex_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.map_mut().add_vertex(Vec2::new(0.0, 0.0));

    handle(
        &mut controller,
        &mut state,
        AppIntent::VertexPickRequested {
            index: 0,
            additive: false,
        },
    );
    assert_eq!(state.selection.selected_vertices.len(), 1);

    handle(
        &mut controller,
        &mut state,
        AppIntent::AddVertexRequested {
            world_pos: Vec2::new(50.0, 50.0),
        },
    );

    assert_eq!(state.map.vertices().len(), 2);
    assert!(state.selection.selected_vertices.is_empty());
}

#[test]
fn test_duplicate_segment_copy_becomes_sole_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.map_mut().add_vertex(Vec2::new(0.0, 0.0));
    state.map_mut().add_vertex(Vec2::new(100.0, 0.0));
    state.map_mut().add_segment(0, 1, 90.0).expect("Segment 0-1");

    handle(
        &mut controller,
        &mut state,
        AppIntent::DuplicateSegmentRequested { index: 0 },
    );

    // Kopie teilt die Endpunkte und übernimmt die Kurve
    assert_eq!(state.map.vertices().len(), 2);
    assert_eq!(state.map.segments().len(), 2);
    let copy = &state.map.segments()[1];
    assert_eq!((copy.v0, copy.v1), (0, 1));
    assert_eq!(copy.curve, 90.0);

    assert!(state.selection.selected_segments.contains(&1));
    assert_eq!(state.selection.selected_segments.len(), 1);
}

#[test]
fn test_curve_is_clamped_when_adding_segments() {
    let mut state = AppState::new();
    state.map_mut().add_vertex(Vec2::new(0.0, 0.0));
    state.map_mut().add_vertex(Vec2::new(100.0, 0.0));

    state.map_mut().add_segment(0, 1, 400.0).expect("Segment 0-1");
    state.map_mut().add_segment(1, 0, -400.0).expect("Segment 1-0");

    assert_eq!(state.map.segments()[0].curve, 340.0);
    assert_eq!(state.map.segments()[1].curve, -340.0);
}

#[test]
fn test_new_project_resets_map_selection_and_history() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(
        &mut controller,
        &mut state,
        AppIntent::AddVertexRequested {
            world_pos: Vec2::new(10.0, 10.0),
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::VertexPickRequested {
            index: 0,
            additive: false,
        },
    );
    assert!(state.can_undo());

    handle(&mut controller, &mut state, AppIntent::NewProjectRequested);

    assert!(state.map.vertices().is_empty());
    assert!(state.selection.selected_vertices.is_empty());
    assert!(state.ui.current_file_path.is_none());
    assert!(!state.can_undo());
}

#[test]
fn test_background_image_set_is_undoable() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(
        &mut controller,
        &mut state,
        AppIntent::BackgroundImageSelected {
            path: "bg/field.png".to_string(),
        },
    );

    assert_eq!(
        state.map.background.image.as_deref(),
        Some("bg/field.png")
    );
    assert!(state.view.background_dirty);

    handle(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.map.background.image.is_none());
}

#[test]
fn test_history_depth_is_capped() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let depth = state.history.max_depth();

    for i in 0..(depth + 5) {
        handle(
            &mut controller,
            &mut state,
            AppIntent::AddVertexRequested {
                world_pos: Vec2::new(i as f32, 0.0),
            },
        );
    }

    let mut undo_steps = 0;
    while state.can_undo() {
        handle(&mut controller, &mut state, AppIntent::UndoRequested);
        undo_steps += 1;
    }

    // Die ältesten Snapshots sind verdrängt, die ersten 5 Vertices bleiben
    assert_eq!(undo_steps, depth);
    assert_eq!(state.map.vertices().len(), 5);
}

#[test]
fn test_export_and_reload_roundtrip_via_controller() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.map_mut().add_vertex(Vec2::new(-50.0, 20.0));
    state.map_mut().add_vertex(Vec2::new(50.0, 20.0));
    state.map_mut().add_segment(0, 1, 120.0).expect("Segment 0-1");

    let path = temp_path("roundtrip_controller.hbs");
    handle(
        &mut controller,
        &mut state,
        AppIntent::ExportPathSelected {
            path: path.to_string_lossy().into_owned(),
        },
    );
    assert!(path.exists());

    handle(&mut controller, &mut state, AppIntent::NewProjectRequested);
    assert!(state.map.vertices().is_empty());

    handle(
        &mut controller,
        &mut state,
        AppIntent::FileSelected {
            path: path.to_string_lossy().into_owned(),
        },
    );

    assert_eq!(state.map.vertices().len(), 2);
    assert_eq!(state.map.segments().len(), 1);
    assert_eq!(state.map.segments()[0].curve, 120.0);
    assert_eq!(state.map.vertices()[0].position, Vec2::new(-50.0, 20.0));
    assert!(state.ui.current_file_path.is_some());
}
