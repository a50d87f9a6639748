//! Application State — zentrale Datenhaltung.

use super::history::{EditHistory, Snapshot};
use super::CommandLog;
use crate::core::{Camera2D, TraceMap};
use crate::shared::options::HISTORY_MAX_DEPTH;
use crate::shared::EditorOptions;
use glam::Vec2;
use indexmap::IndexSet;
use std::sync::Arc;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Ansicht verschieben
    #[default]
    Pan,
    /// Vertices platzieren, selektieren und verschieben
    Vertex,
    /// Segmente zwischen Vertices zeichnen
    Segment,
}

impl EditorTool {
    /// Anzeigename für Toolbar und Statusleiste.
    pub fn label(&self) -> &'static str {
        match self {
            EditorTool::Pan => "Pan",
            EditorTool::Vertex => "Vertex",
            EditorTool::Segment => "Segment",
        }
    }
}

/// Aktive Drag-Session: Anker + eingefrorene Startpositionen.
///
/// Wird beim qualifizierenden Pointer-Down erstellt, während der Bewegung
/// nur gelesen und beim Pointer-Up/-Leave zerstört. Jede Bewegung schreibt
/// `round(start + (aktuell − anker))` — starre Translation ohne Drift.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// Weltposition des Pointer-Down
    pub anchor_world: Vec2,
    /// Startpositionen aller bewegten Vertices (Index, Position)
    pub start_positions: Vec<(usize, Vec2)>,
    /// Wurde für diese Session schon ein Undo-Snapshot aufgezeichnet?
    /// Der Snapshot fällt erst bei der ersten tatsächlichen Bewegung an —
    /// eine armierte, aber unbewegte Session hinterlässt keinen Undo-Schritt.
    pub undo_recorded: bool,
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Laufende Drag-Session (höchstens eine)
    pub drag: Option<DragSession>,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Pan-Tool aktiv).
    pub fn new() -> Self {
        Self {
            active_tool: EditorTool::Pan,
            drag: None,
        }
    }
}

/// Auswahlbezogener Anwendungszustand.
///
/// Vertex- und Segment-Selektion sind unabhängige Mengen; `IndexSet`
/// garantiert Eindeutigkeit und deterministische Iterationsreihenfolge.
#[derive(Clone, Default)]
pub struct SelectionState {
    /// Selektierte Vertex-Indizes
    pub selected_vertices: IndexSet<usize>,
    /// Selektierte Segment-Indizes
    pub selected_segments: IndexSet<usize>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selektiert einen Vertex: ersetzend oder additiv (Toggle).
    pub fn select_vertex(&mut self, index: usize, additive: bool) {
        if additive {
            if !self.selected_vertices.shift_remove(&index) {
                self.selected_vertices.insert(index);
            }
        } else {
            self.selected_vertices.clear();
            self.selected_vertices.insert(index);
        }
    }

    /// Selektiert ein Segment: ersetzend oder additiv (Toggle).
    pub fn select_segment(&mut self, index: usize, additive: bool) {
        if additive {
            if !self.selected_segments.shift_remove(&index) {
                self.selected_segments.insert(index);
            }
        } else {
            self.selected_segments.clear();
            self.selected_segments.insert(index);
        }
    }

    /// Ersetzt die Vertex-Selektion durch alle Indizes `0..count`.
    /// Die Segment-Selektion bleibt unberührt.
    pub fn select_all_vertices(&mut self, count: usize) {
        self.selected_vertices = (0..count).collect();
    }

    /// Leert nur die Vertex-Selektion.
    pub fn clear_vertex_selection(&mut self) {
        self.selected_vertices.clear();
    }

    /// Leert nur die Segment-Selektion.
    pub fn clear_segment_selection(&mut self) {
        self.selected_segments.clear();
    }
}

/// Ziel eines Rechtsklicks für das Kontextmenü.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextTarget {
    /// Rechtsklick auf einen Vertex
    Vertex(usize),
    /// Rechtsklick auf ein Segment
    Segment(usize),
}

/// UI-spezifischer Zustand (Dialoge, Hover, Statuszeile)
#[derive(Default)]
pub struct UiState {
    /// Aktuell gehoverter Vertex (nur Anzeige)
    pub hovered_vertex: Option<usize>,
    /// Letzte bekannte Pointer-Weltposition (Statuszeile)
    pub cursor_world: Option<Vec2>,
    /// Ziel des zuletzt geöffneten Kontextmenüs
    pub context_target: Option<ContextTarget>,
    /// Pfad der aktuell geladenen Datei
    pub current_file_path: Option<String>,
    /// Open-Datei-Dialog anzeigen?
    pub show_file_dialog: bool,
    /// Export-Datei-Dialog anzeigen?
    pub show_export_dialog: bool,
    /// Hintergrundbild-Auswahldialog anzeigen?
    pub show_background_dialog: bool,
}

/// Kamera- und Darstellungszustand
pub struct ViewState {
    /// 2D-Kamera (Pan + Zoom)
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixeln
    pub viewport_size: [f32; 2],
    /// Deckungs-Niveau des Hintergrundbilds (0..1)
    pub background_opacity: f32,
    /// Hintergrundbild anzeigen?
    pub background_visible: bool,
    /// Hintergrundbild muss neu geladen werden (Pfad geändert)
    pub background_dirty: bool,
    /// Grid anzeigen?
    pub grid_visible: bool,
}

impl ViewState {
    fn new(options: &EditorOptions) -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
            background_opacity: options.background_opacity_default,
            background_visible: true,
            background_dirty: false,
            grid_visible: options.grid_visible,
        }
    }
}

/// Zentraler Anwendungszustand.
pub struct AppState {
    /// Die editierte Karte (Arc für O(1)-History-Snapshots, CoW-Mutation)
    pub map: Arc<TraceMap>,
    /// Kamera und Darstellung
    pub view: ViewState,
    /// Selektion
    pub selection: SelectionState,
    /// Werkzeug + Drag-Session
    pub editor: EditorToolState,
    /// UI-Zustand (Dialoge, Hover, Statuszeile)
    pub ui: UiState,
    /// Undo/Redo-History
    pub history: EditHistory,
    /// Log ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Anwendung beenden?
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt den Startzustand mit leerer Karte.
    pub fn new() -> Self {
        let options = EditorOptions::default();
        Self {
            map: Arc::new(TraceMap::default()),
            view: ViewState::new(&options),
            selection: SelectionState::new(),
            editor: EditorToolState::new(),
            ui: UiState::default(),
            history: EditHistory::new_with_capacity(HISTORY_MAX_DEPTH),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt eine mutable Referenz auf die Karte zurück (CoW: klont nur,
    /// wenn ein History-Snapshot den Arc noch teilt).
    #[inline]
    pub fn map_mut(&mut self) -> &mut TraceMap {
        Arc::make_mut(&mut self.map)
    }

    /// Nimmt einen Undo-Snapshot des aktuellen Zustands auf.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Welt-Pick-Radius aus Options-Pixelradius und aktuellem Zoom.
    pub fn pick_radius_world(&self) -> f32 {
        self.view
            .camera
            .pick_radius_world(self.options.selection_pick_radius_px)
    }
}
