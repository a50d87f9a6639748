//! Spatial-Index (KD-Tree) für schnelle Vertex-Abfragen.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::Vertex;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Index des gefundenen Vertex in der Dokument-Liste
    pub index: usize,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über allen Vertices einer TraceMap.
///
/// Da Vertices über ihren Listen-Index identifiziert werden, ist das
/// KD-Tree-Item direkt der Vertex-Index.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    positions: Vec<Vec2>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            positions: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus der Vertex-Liste.
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        let entries: Vec<[f64; 2]> = vertices
            .iter()
            .map(|v| [v.position.x as f64, v.position.y as f64])
            .collect();

        let tree: KdTree<f64, 2> = (&entries).into();
        let positions = vertices.iter().map(|v| v.position).collect();

        Self { tree, positions }
    }

    /// Gibt die Anzahl indexierter Vertices zurück.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Gibt `true` zurück, wenn keine Vertices im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Findet alle Vertices innerhalb eines Radius um die Query-Position,
    /// sortiert nach Distanz.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x as f64, query.y as f64], (radius * radius) as f64)
            .into_iter()
            .map(|entry| SpatialMatch {
                index: entry.item as usize,
                distance: (entry.distance as f32).sqrt(),
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }

    /// Findet alle Vertices innerhalb eines axis-aligned Rechtecks.
    ///
    /// Nutzt den KD-Tree mit einer umschließenden Kreisabfrage + Nachfilterung,
    /// statt O(n) über alle Positionen zu iterieren.
    pub fn within_rect(&self, min: Vec2, max: Vec2) -> Vec<usize> {
        if self.is_empty() {
            return Vec::new();
        }

        let center_x = (min.x + max.x) as f64 * 0.5;
        let center_y = (min.y + max.y) as f64 * 0.5;
        let half_w = (max.x - min.x) as f64 * 0.5;
        let half_h = (max.y - min.y) as f64 * 0.5;
        // Radius des umschließenden Kreises (Diagonale / 2)
        let radius_sq = half_w * half_w + half_h * half_h;

        self.tree
            .within::<SquaredEuclidean>(&[center_x, center_y], radius_sq)
            .into_iter()
            .filter_map(|entry| {
                let index = entry.item as usize;
                let pos = self.positions.get(index)?;
                // Exakte Rechteck-Prüfung nach dem KD-Tree-Vorfilter
                if pos.x >= min.x && pos.x <= max.x && pos.y >= min.y && pos.y <= max.y {
                    Some(index)
                } else {
                    None
                }
            })
            .collect()
    }
}
