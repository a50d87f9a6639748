//! Use-Cases für Dokument-Mutationen (Anlegen, Duplizieren, Löschen).

pub mod add_vertex;
pub mod delete;
pub mod duplicate;
pub mod segments;

pub use add_vertex::add_vertex_at;
pub use delete::{
    delete_segment_via_selection, delete_selected_segments, delete_selected_vertices,
    delete_vertex,
};
pub use duplicate::{
    duplicate_segment, duplicate_selected_segments, duplicate_selected_vertices, duplicate_vertex,
};
pub use segments::segment_tool_pick;
