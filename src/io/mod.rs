//! Import/Export des `.hbs`-JSON-Kartenformats.
//!
//! Das Schema ist tolerant: unbekannte Felder werden ignoriert, fehlende
//! Felder fallen auf Defaults zurück, und Segmente mit ungültigen
//! Endpunkten werden beim Laden mit Warnung übersprungen.

use std::path::Path;

use anyhow::Context;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::{MapBackground, TraceMap};

fn default_map_name() -> String {
    "Unbenannte Karte".to_string()
}

fn default_width() -> f32 {
    420.0
}

fn default_height() -> f32 {
    200.0
}

/// Hintergrund-Block der `.hbs`-Datei.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BgFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct VertexFile {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SegmentFile {
    v0: usize,
    v1: usize,
    #[serde(default, skip_serializing_if = "is_zero")]
    curve: f32,
}

fn is_zero(value: &f32) -> bool {
    *value == 0.0
}

/// Wurzel-Schema der `.hbs`-Datei.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapFile {
    #[serde(default = "default_map_name")]
    name: String,
    #[serde(default = "default_width")]
    width: f32,
    #[serde(default = "default_height")]
    height: f32,
    #[serde(default)]
    bg: BgFile,
    #[serde(default)]
    vertexes: Vec<VertexFile>,
    #[serde(default)]
    segments: Vec<SegmentFile>,
}

/// Lädt eine `.hbs`-Karte von der Platte.
pub fn load_trace_map(path: &Path) -> anyhow::Result<TraceMap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Kartendatei nicht lesbar: {}", path.display()))?;
    let file: MapFile = serde_json::from_str(&content)
        .with_context(|| format!("Kartendatei nicht parsebar: {}", path.display()))?;

    let mut map = TraceMap::new(file.width, file.height);
    map.background = MapBackground {
        color: file.bg.color,
        image: file.bg.image,
    };

    for vertex in &file.vertexes {
        map.add_vertex(Vec2::new(vertex.x, vertex.y));
    }

    let mut skipped = 0usize;
    for segment in &file.segments {
        if map.add_segment(segment.v0, segment.v1, segment.curve).is_none() {
            skipped += 1;
        }
    }
    if skipped > 0 {
        log::warn!(
            "{} Segmente mit ungültigen Endpunkten übersprungen ({})",
            skipped,
            path.display()
        );
    }

    log::info!(
        "Karte geladen: {} Vertices, {} Segmente aus {}",
        map.vertex_count(),
        map.segment_count(),
        path.display()
    );
    Ok(map)
}

/// Exportiert eine Karte als `.hbs`-JSON.
pub fn save_trace_map(map: &TraceMap, path: &Path) -> anyhow::Result<()> {
    let file = MapFile {
        name: default_map_name(),
        width: map.width,
        height: map.height,
        bg: BgFile {
            color: map.background.color.clone(),
            image: map.background.image.clone(),
        },
        vertexes: map
            .vertices()
            .iter()
            .map(|v| VertexFile {
                x: v.position.x,
                y: v.position.y,
            })
            .collect(),
        segments: map
            .segments()
            .iter()
            .map(|s| SegmentFile {
                v0: s.v0,
                v1: s.v1,
                curve: s.curve,
            })
            .collect(),
    };

    let content = serde_json::to_string_pretty(&file)?;
    std::fs::write(path, content)
        .with_context(|| format!("Kartendatei nicht schreibbar: {}", path.display()))?;

    log::info!(
        "Karte exportiert: {} Vertices, {} Segmente nach {}",
        map.vertex_count(),
        map.segment_count(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_tolerates_missing_and_unknown_fields() {
        let json = r#"{
            "spawnDistance": 170,
            "vertexes": [
                { "x": 10, "y": -20, "trait": "ballArea" },
                { "x": 30.4, "y": 0 }
            ],
            "segments": [
                { "v0": 0, "v1": 1 },
                { "v0": 0, "v1": 7, "curve": 90 }
            ]
        }"#;

        let dir = std::env::temp_dir().join("vte_io_test_load");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("partial.hbs");
        std::fs::write(&path, json).unwrap();

        let map = load_trace_map(&path).expect("ladbar");

        assert_eq!(map.width, 420.0);
        assert_eq!(map.vertex_count(), 2);
        // Positionen werden beim Laden gerundet
        assert_eq!(map.vertex(1).unwrap().position, Vec2::new(30.0, 0.0));
        // Segment mit ungültigem Endpunkt wurde übersprungen
        assert_eq!(map.segment_count(), 1);
    }

    #[test]
    fn load_rejects_invalid_json() {
        let dir = std::env::temp_dir().join("vte_io_test_invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.hbs");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(load_trace_map(&path).is_err());
    }

    #[test]
    fn save_then_load_preserves_geometry() {
        let mut map = TraceMap::new(600.0, 300.0);
        map.background.color = Some("#1b6f2a".to_string());
        map.add_vertex(Vec2::new(-50.0, 0.0));
        map.add_vertex(Vec2::new(50.0, 0.0));
        map.add_segment(0, 1, 120.0);

        let dir = std::env::temp_dir().join("vte_io_test_roundtrip");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("roundtrip.hbs");

        save_trace_map(&map, &path).expect("speicherbar");
        let loaded = load_trace_map(&path).expect("ladbar");

        assert_eq!(loaded.width, 600.0);
        assert_eq!(loaded.height, 300.0);
        assert_eq!(loaded.background.color.as_deref(), Some("#1b6f2a"));
        assert_eq!(loaded.vertex_count(), 2);
        assert_eq!(loaded.segment(0).map(|s| s.curve), Some(120.0));
    }
}
