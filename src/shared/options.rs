//! Zentrale Konfiguration für den Vector-Trace-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 10.0;
/// Multiplikativer Zoom-Schritt (Mausrad, Menü, Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln.
pub const SELECTION_PICK_RADIUS_PX: f32 = 10.0;

// ── Editieren ───────────────────────────────────────────────────────

/// Offset duplizierter Vertices in Welteinheiten (x und y).
pub const DUPLICATE_OFFSET_WORLD: f32 = 10.0;
/// Maximale Undo-Tiefe.
pub const HISTORY_MAX_DEPTH: usize = 200;

// ── Rendering ───────────────────────────────────────────────────────

/// Vertex-Darstellungsradius in Screen-Pixeln.
pub const VERTEX_RADIUS_PX: f32 = 4.0;
/// Standard-Farbe normaler Vertices (RGBA: Weiß).
pub const VERTEX_COLOR_DEFAULT: [f32; 4] = [0.95, 0.95, 0.95, 1.0];
/// Farbe für selektierte Vertices (RGBA: Magenta).
pub const VERTEX_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe für gehoverte Vertices (RGBA: Gelb).
pub const VERTEX_COLOR_HOVER: [f32; 4] = [1.0, 0.9, 0.2, 1.0];
/// Farbe für Segmente (RGBA: Cyan).
pub const SEGMENT_COLOR_DEFAULT: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe für selektierte Segmente (RGBA: Magenta).
pub const SEGMENT_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Segment-Linienstärke in Screen-Pixeln.
pub const SEGMENT_THICKNESS_PX: f32 = 2.0;

// ── Grid ────────────────────────────────────────────────────────────

/// Grid-Raster in Welteinheiten.
pub const GRID_SIZE_WORLD: f32 = 50.0;
/// Grid-Linienfarbe (RGBA: dunkles Grau).
pub const GRID_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.06];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `vector_trace_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius für Klick-Selektion in Screen-Pixeln
    pub selection_pick_radius_px: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Multiplikativer Zoom-Schritt
    pub camera_zoom_step: f32,

    // ── Editieren ───────────────────────────────────────────────
    /// Offset duplizierter Elemente in Welteinheiten
    pub duplicate_offset_world: f32,

    // ── Rendering ───────────────────────────────────────────────
    /// Vertex-Darstellungsradius in Screen-Pixeln
    pub vertex_radius_px: f32,
    /// Farbe normaler Vertices (RGBA)
    pub vertex_color_default: [f32; 4],
    /// Farbe selektierter Vertices
    pub vertex_color_selected: [f32; 4],
    /// Farbe gehoverter Vertices
    pub vertex_color_hover: [f32; 4],
    /// Farbe normaler Segmente
    pub segment_color_default: [f32; 4],
    /// Farbe selektierter Segmente
    pub segment_color_selected: [f32; 4],
    /// Segment-Linienstärke in Screen-Pixeln
    pub segment_thickness_px: f32,

    // ── Grid / Hintergrund ──────────────────────────────────────
    /// Grid beim Start sichtbar
    #[serde(default)]
    pub grid_visible: bool,
    /// Grid-Raster in Welteinheiten
    pub grid_size_world: f32,
    /// Standard-Deckungs-Niveau des Hintergrundbilds
    pub background_opacity_default: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            selection_pick_radius_px: SELECTION_PICK_RADIUS_PX,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,

            duplicate_offset_world: DUPLICATE_OFFSET_WORLD,

            vertex_radius_px: VERTEX_RADIUS_PX,
            vertex_color_default: VERTEX_COLOR_DEFAULT,
            vertex_color_selected: VERTEX_COLOR_SELECTED,
            vertex_color_hover: VERTEX_COLOR_HOVER,
            segment_color_default: SEGMENT_COLOR_DEFAULT,
            segment_color_selected: SEGMENT_COLOR_SELECTED,
            segment_thickness_px: SEGMENT_THICKNESS_PX,

            grid_visible: false,
            grid_size_world: GRID_SIZE_WORLD,
            background_opacity_default: 1.0,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("vector_trace_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("vector_trace_editor.toml")
    }
}
