//! Dokumentmodell: Vertices und (gebogene) Segmente einer Karte.
//!
//! Vertices und Segmente werden über ihren Index in der jeweiligen
//! geordneten Liste identifiziert. Lösch-Operationen renummerieren daher
//! alle nachfolgenden Elemente; Segment-Endpunkte werden mitgezogen.

use glam::Vec2;

use crate::core::SpatialIndex;

/// Maximal zulässiger Kurvenwinkel in Grad (volle Kreise sind entartet).
const CURVE_MAX_DEG: f32 = 340.0;
/// Unterhalb dieses Winkels wird das Segment als Gerade behandelt.
const CURVE_STRAIGHT_EPS_DEG: f32 = 0.01;

/// Ein Punkt der Karte in Weltkoordinaten.
///
/// Positionen werden bei jedem Schreibzugriff auf ganze Zahlen gerundet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Weltposition (ganzzahlig gerundet)
    pub position: Vec2,
}

impl Vertex {
    /// Erstellt einen Vertex an der gerundeten Weltposition.
    pub fn new(position: Vec2) -> Self {
        Self {
            position: position.round(),
        }
    }
}

/// Ein Kreisbogen-Segment zwischen zwei Vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Index des Start-Vertex
    pub v0: usize,
    /// Index des End-Vertex
    pub v1: usize,
    /// Eingeschlossener Bogenwinkel in Grad (0 = Gerade)
    pub curve: f32,
}

impl Segment {
    /// Erstellt ein Segment zwischen zwei Vertex-Indizes.
    pub fn new(v0: usize, v1: usize, curve: f32) -> Self {
        Self { v0, v1, curve }
    }
}

/// Karten-Hintergrund: Füllfarbe und optionales Referenzbild.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapBackground {
    /// Hintergrundfarbe als Hex-String (z.B. "#1b6f2a")
    pub color: Option<String>,
    /// Pfad zu einem Hintergrundbild (rein visuell)
    pub image: Option<String>,
}

/// Die editierbare Karte: geordnete Vertex- und Segment-Listen.
#[derive(Debug, Clone)]
pub struct TraceMap {
    /// Spielfeld-Breite in Welteinheiten
    pub width: f32,
    /// Spielfeld-Höhe in Welteinheiten
    pub height: f32,
    /// Hintergrund-Einstellungen
    pub background: MapBackground,
    vertices: Vec<Vertex>,
    segments: Vec<Segment>,
    spatial_index: SpatialIndex,
}

impl Default for TraceMap {
    fn default() -> Self {
        Self::new(420.0, 200.0)
    }
}

impl TraceMap {
    /// Erstellt eine leere Karte mit der gegebenen Spielfeldgröße.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            background: MapBackground::default(),
            vertices: Vec::new(),
            segments: Vec::new(),
            spatial_index: SpatialIndex::empty(),
        }
    }

    /// Anzahl der Vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Anzahl der Segmente.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Read-only Zugriff auf die Vertex-Liste.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Read-only Zugriff auf die Segment-Liste.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Vertex per Index, `None` wenn außerhalb der Liste.
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Segment per Index, `None` wenn außerhalb der Liste.
    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    // ── Mutationen ──────────────────────────────────────────────────

    /// Fügt einen Vertex an der gerundeten Weltposition an und gibt
    /// seinen Index zurück.
    pub fn add_vertex(&mut self, position: Vec2) -> usize {
        self.vertices.push(Vertex::new(position));
        self.rebuild_spatial_index();
        self.vertices.len() - 1
    }

    /// Setzt die Position eines Vertex (gerundet). No-op bei unbekanntem
    /// Index — ein Delete darf eine laufende Drag-Session überholen.
    pub fn update_vertex(&mut self, index: usize, position: Vec2) -> bool {
        match self.vertices.get_mut(index) {
            Some(vertex) => {
                vertex.position = position.round();
                self.rebuild_spatial_index();
                true
            }
            None => false,
        }
    }

    /// Dupliziert einen Vertex mit Offset und gibt den neuen Index zurück.
    pub fn duplicate_vertex(&mut self, index: usize, offset: Vec2) -> Option<usize> {
        let position = self.vertices.get(index)?.position + offset;
        Some(self.add_vertex(position))
    }

    /// Löscht einen Vertex. Gibt die Indizes der mitgelöschten Segmente
    /// (in Nummerierung vor dem Löschen) zurück.
    pub fn remove_vertex(&mut self, index: usize) -> Vec<usize> {
        self.remove_vertices(&[index])
    }

    /// Löscht mehrere Vertices auf einmal.
    ///
    /// Segmente, die einen gelöschten Vertex referenzieren, werden
    /// mitgelöscht; alle übrigen Vertex-Indizes und Segment-Endpunkte
    /// werden nachgerückt. Rückgabe: Indizes der gelöschten Segmente in
    /// der Nummerierung vor dem Löschen (aufsteigend).
    pub fn remove_vertices(&mut self, indices: &[usize]) -> Vec<usize> {
        let mut doomed: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.vertices.len())
            .collect();
        doomed.sort_unstable();
        doomed.dedup();
        if doomed.is_empty() {
            return Vec::new();
        }

        let removed_segments: Vec<usize> = self
            .segments
            .iter()
            .enumerate()
            .filter(|(_, s)| {
                doomed.binary_search(&s.v0).is_ok() || doomed.binary_search(&s.v1).is_ok()
            })
            .map(|(i, _)| i)
            .collect();

        // Neuer Index = alter Index − Anzahl gelöschter Vertices darunter
        let shift = |v: usize| v - doomed.partition_point(|&d| d < v);

        self.segments = self
            .segments
            .iter()
            .filter(|s| {
                doomed.binary_search(&s.v0).is_err() && doomed.binary_search(&s.v1).is_err()
            })
            .map(|s| Segment::new(shift(s.v0), shift(s.v1), s.curve))
            .collect();

        let mut current = 0;
        self.vertices.retain(|_| {
            let keep = doomed.binary_search(&current).is_err();
            current += 1;
            keep
        });

        self.rebuild_spatial_index();
        removed_segments
    }

    /// Fügt ein Segment zwischen zwei existierenden, verschiedenen
    /// Vertices an. `None` bei ungültigen Endpunkten.
    pub fn add_segment(&mut self, v0: usize, v1: usize, curve: f32) -> Option<usize> {
        if v0 == v1 || v0 >= self.vertices.len() || v1 >= self.vertices.len() {
            return None;
        }
        self.segments
            .push(Segment::new(v0, v1, curve.clamp(-CURVE_MAX_DEG, CURVE_MAX_DEG)));
        Some(self.segments.len() - 1)
    }

    /// Dupliziert ein Segment (gleiche Endpunkte, gleiche Kurve).
    pub fn duplicate_segment(&mut self, index: usize) -> Option<usize> {
        let segment = *self.segments.get(index)?;
        self.segments.push(segment);
        Some(self.segments.len() - 1)
    }

    /// Löscht mehrere Segmente auf einmal (Vertices bleiben unberührt).
    pub fn remove_segments(&mut self, indices: &[usize]) {
        let mut doomed: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.segments.len())
            .collect();
        doomed.sort_unstable();
        doomed.dedup();
        if doomed.is_empty() {
            return;
        }

        let mut current = 0;
        self.segments.retain(|_| {
            let keep = doomed.binary_search(&current).is_err();
            current += 1;
            keep
        });
    }

    // ── Hit-Tests ───────────────────────────────────────────────────

    /// Findet den Vertex unter der Weltposition.
    ///
    /// Unter mehreren Treffern im Radius gewinnt der niedrigste Index
    /// (zuerst erstellt), nicht der nächste.
    pub fn vertex_at(&self, world: Vec2, radius: f32) -> Option<usize> {
        self.spatial_index
            .within_radius(world, radius)
            .into_iter()
            .map(|m| m.index)
            .min()
    }

    /// Findet das erste Segment (aufsteigender Index), dessen abgetastete
    /// Bogen-Polyline den Radius um die Weltposition schneidet.
    pub fn segment_at(&self, world: Vec2, radius: f32) -> Option<usize> {
        self.segments.iter().enumerate().find_map(|(i, seg)| {
            let p0 = self.vertices.get(seg.v0)?.position;
            let p1 = self.vertices.get(seg.v1)?.position;
            let points = sample_segment_points(p0, p1, seg.curve);
            let hit = points
                .windows(2)
                .any(|pair| dist_point_to_line_segment(world, pair[0], pair[1]) <= radius);
            hit.then_some(i)
        })
    }

    /// Alle Vertex-Indizes innerhalb des geschlossenen Welt-Rechtecks.
    pub fn vertices_within_rect(&self, min: Vec2, max: Vec2) -> Vec<usize> {
        self.spatial_index.within_rect(min, max)
    }

    /// Baut den Spatial-Index aus der aktuellen Vertex-Liste neu auf.
    pub fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_vertices(&self.vertices);
    }
}

/// Tastet den Kreisbogen eines Segments als Polyline ab.
///
/// `curve` ist der eingeschlossene Bogenwinkel in Grad; 0 (oder entartete
/// Endpunkte) ergibt die Gerade `[p0, p1]`. Das Vorzeichen wählt die
/// Bogenseite.
pub fn sample_segment_points(p0: Vec2, p1: Vec2, curve: f32) -> Vec<Vec2> {
    let curve = curve.clamp(-CURVE_MAX_DEG, CURVE_MAX_DEG);
    let chord = p1 - p0;
    let chord_len = chord.length();
    if curve.abs() < CURVE_STRAIGHT_EPS_DEG || chord_len < f32::EPSILON {
        return vec![p0, p1];
    }

    let theta = curve.to_radians();
    let half_chord = chord_len * 0.5;
    let mid = (p0 + p1) * 0.5;
    let perp = Vec2::new(-chord.y, chord.x) / chord_len;
    // Abstand Kreismittelpunkt ↔ Sehnenmitte; Vorzeichen wählt die Seite
    let apothem = half_chord / (theta * 0.5).tan();
    let center = mid + perp * apothem;
    let radius = (p0 - center).length();

    let a0 = (p0 - center).y.atan2((p0 - center).x);
    let a1 = (p1 - center).y.atan2((p1 - center).x);
    let mut sweep = (a1 - a0).rem_euclid(std::f32::consts::TAU);
    if sweep > std::f32::consts::PI {
        sweep -= std::f32::consts::TAU;
    }
    // Bei |curve| > 180° liegt der lange Bogen zwischen den Endpunkten
    if theta.abs() > std::f32::consts::PI {
        sweep -= std::f32::consts::TAU * sweep.signum();
    }

    let steps = ((curve.abs() / 6.0).ceil() as usize).clamp(8, 60);
    (0..=steps)
        .map(|k| {
            let angle = a0 + sweep * (k as f32 / steps as f32);
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Kürzeste Distanz eines Punkts zu einer Strecke.
fn dist_point_to_line_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < f32::EPSILON {
        return (point - a).length();
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (point - (a + ab * t)).length()
}
