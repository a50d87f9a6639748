//! 2D-Kamera: Pan-Offset in Screen-Pixeln + Zoom-Faktor.
//!
//! Transformationsmodell: `screen = world * zoom + pan`. Damit sind
//! `world_to_screen` und `screen_to_world` für einen festen Kamerazustand
//! exakte Inverse voneinander.

use glam::Vec2;

/// Kamera über der Welt-Ebene: Pan + Zoom, plus Pan-Gesten-Zustand.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Screen-Offset des Welt-Ursprungs in Pixeln
    pub pan: Vec2,
    /// Zoom-Faktor, von `zoom_by_clamped` auf die Options-Grenzen geklemmt
    zoom: f32,
    /// Aktive Pan-Geste?
    panning: bool,
    /// Letzte Screen-Position der aktiven Pan-Geste
    pan_anchor: Vec2,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera2D {
    /// Erstellt eine Kamera mit Zoom 1.0 und ohne Pan-Offset.
    pub fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            panning: false,
            pan_anchor: Vec2::ZERO,
        }
    }

    /// Aktueller Zoom-Faktor.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Multipliziert den Zoom mit `factor`, geklemmt auf `[min, max]`.
    /// Die Grenzen kommen vom Aufrufer (Options), nicht aus der Kamera.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Rechnet eine Weltposition in Screen-Pixel um.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world * self.zoom + self.pan
    }

    /// Rechnet eine Screen-Position in Weltkoordinaten um.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.pan) / self.zoom
    }

    /// Rechnet einen Screen-Pixel-Radius in Welteinheiten um.
    ///
    /// Der Pick-Radius bleibt damit auf dem Bildschirm konstant,
    /// unabhängig vom Zoom.
    pub fn pick_radius_world(&self, radius_px: f32) -> f32 {
        radius_px / self.zoom
    }

    /// Startet eine Pan-Geste an der gegebenen Screen-Position.
    pub fn start_pan(&mut self, screen: Vec2) {
        self.panning = true;
        self.pan_anchor = screen;
    }

    /// Akkumuliert das Screen-Delta der aktiven Pan-Geste in den Offset.
    ///
    /// Ohne aktive Geste ein No-op.
    pub fn update_pan(&mut self, screen: Vec2) {
        if !self.panning {
            return;
        }
        self.pan += screen - self.pan_anchor;
        self.pan_anchor = screen;
    }

    /// Beendet die Pan-Geste. Idempotent: darf auch ohne aktive Geste
    /// aufgerufen werden (Pointer-Up und Pointer-Leave feuern beide).
    pub fn end_pan(&mut self) {
        self.panning = false;
    }

    /// Läuft gerade eine Pan-Geste?
    pub fn is_panning(&self) -> bool {
        self.panning
    }
}
