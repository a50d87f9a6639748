//! Vector Trace Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod io;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, ContextTarget, DragSession, EditorTool,
    EditorToolState, SelectionState, UiState, ViewState,
};
pub use core::{
    sample_segment_points, Camera2D, Segment, SpatialIndex, SpatialMatch, TraceMap, Vertex,
};
pub use io::{load_trace_map, save_trace_map};
pub use shared::EditorOptions;
