//! Domänen-Kern: Dokumentmodell, Kamera und Spatial-Index.

pub mod camera;
pub mod spatial;
pub mod trace_map;

pub use camera::Camera2D;
pub use spatial::{SpatialIndex, SpatialMatch};
pub use trace_map::{sample_segment_points, MapBackground, Segment, TraceMap, Vertex};
