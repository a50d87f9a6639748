//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use super::state::{ContextTarget, EditorTool};
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neues, leeres Projekt anlegen
    NewProjectRequested,
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Karte exportieren (zeigt Dateidialog)
    ExportRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: String },
    /// Exportpfad wurde im Dialog ausgewählt
    ExportPathSelected { path: String },
    /// Hintergrundbild-Auswahldialog öffnen
    BackgroundImageSelectionRequested,
    /// Hintergrundbild wurde im Dialog ausgewählt
    BackgroundImageSelected { path: String },
    /// Hintergrundbild entfernen
    BackgroundImageCleared,

    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Pan-Geste beginnt an einer Screen-Position
    CameraPanStarted { screen: Vec2 },
    /// Pan-Geste bewegt sich zu einer Screen-Position
    CameraPanMoved { screen: Vec2 },
    /// Pan-Geste beendet (Pointer-Up oder -Leave)
    CameraPanEnded,
    /// Pointer-Weltposition für die Statuszeile
    CursorMoved { world_pos: Vec2 },
    /// Gehoverter Vertex hat sich geändert
    HoverChanged { vertex: Option<usize> },
    /// Deckungs-Niveau des Hintergrundbilds geändert
    BackgroundOpacityChanged { opacity: f32 },
    /// Hintergrundbild ein-/ausblenden
    BackgroundVisibilityToggled,
    /// Grid ein-/ausblenden
    GridToggled,

    /// Vertex per Klick selektieren (ersetzend oder additiv)
    VertexPickRequested { index: usize, additive: bool },
    /// Segment per Klick selektieren (ersetzend oder additiv)
    SegmentPickRequested { index: usize, additive: bool },
    /// Vertex-Selektion leeren
    ClearVertexSelectionRequested,
    /// Segment-Selektion leeren
    ClearSegmentSelectionRequested,
    /// Alle Vertices selektieren (Ctrl+A)
    SelectAllRequested,
    /// Marquee aufgelöst: Vertices im Welt-Rechteck additiv selektieren
    MarqueeResolved { min_world: Vec2, max_world: Vec2 },

    /// Drag-Session auf einem Vertex beginnen
    DragStartRequested { vertex_index: usize, world_pos: Vec2 },
    /// Pointer bewegt sich während einer Drag-Session
    DragMoved { world_pos: Vec2 },
    /// Drag-Session beendet (Pointer-Up oder -Leave)
    DragEnded,

    /// Vertex an der Weltposition anlegen (Vertex-Tool, leere Fläche)
    AddVertexRequested { world_pos: Vec2 },
    /// Segment-Tool: Vertex angeklickt (Selektion oder Segment-Erstellung)
    SegmentToolVertexPicked { index: usize },
    /// Kontextmenü: einzelnen Vertex duplizieren
    DuplicateVertexRequested { index: usize },
    /// Kontextmenü: einzelnen Vertex löschen
    DeleteVertexRequested { index: usize },
    /// Kontextmenü: einzelnes Segment duplizieren
    DuplicateSegmentRequested { index: usize },
    /// Kontextmenü: einzelnes Segment löschen
    DeleteSegmentRequested { index: usize },
    /// Selektierte Elemente duplizieren (Ctrl+D; Vertices vor Segmenten)
    DuplicateSelectedRequested,
    /// Selektierte Elemente löschen (Entf; Vertices vor Segmenten)
    DeleteSelectedRequested,

    /// Rechtsklick-Ziel für das Kontextmenü hat sich geändert.
    /// `press_world` ist die Pointer-Weltposition beim Rechtsklick — sie
    /// dient als Drag-Anker, wenn das Ziel eine Mehrfachselektion armiert.
    ContextTargetChanged {
        target: Option<ContextTarget>,
        press_world: Option<Vec2>,
    },

    /// Letzte Änderung rückgängig machen
    UndoRequested,
    /// Rückgängig gemachte Änderung wiederherstellen
    RedoRequested,

    /// Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },
}

/// Commands mutieren den AppState und werden von Handlern ausgeführt.
#[derive(Debug, Clone)]
pub enum AppCommand {
    NewProject,
    RequestOpenFileDialog,
    RequestExportFileDialog,
    RequestBackgroundDialog,
    LoadFile { path: String },
    ExportFile { path: String },
    SetBackgroundImage { path: String },
    ClearBackgroundImage,
    RequestExit,

    ZoomIn,
    ZoomOut,
    SetViewportSize { size: [f32; 2] },
    BeginCameraPan { screen: Vec2 },
    UpdateCameraPan { screen: Vec2 },
    EndCameraPan,
    SetCursorWorld { world_pos: Vec2 },
    SetHoveredVertex { vertex: Option<usize> },
    SetBackgroundOpacity { opacity: f32 },
    ToggleBackgroundVisibility,
    ToggleGrid,

    SelectVertex { index: usize, additive: bool },
    SelectSegment { index: usize, additive: bool },
    ClearVertexSelection,
    ClearSegmentSelection,
    SelectAllVertices,
    SelectVerticesInRect { min: Vec2, max: Vec2 },

    BeginDrag { vertex_index: usize, world_pos: Vec2 },
    UpdateDrag { world_pos: Vec2 },
    EndDrag,

    AddVertexAt { world_pos: Vec2 },
    SegmentToolPick { index: usize },
    DuplicateVertex { index: usize },
    DeleteVertex { index: usize },
    DuplicateSegment { index: usize },
    /// Löscht ein Segment über den Selektions-Pfad: ein nicht selektiertes
    /// Ziel wird erst zur alleinigen Selektion, dann gelöscht.
    DeleteSegmentViaSelection { index: usize },
    DuplicateSelectedVertices,
    DuplicateSelectedSegments,
    DeleteSelectedVertices,
    DeleteSelectedSegments,

    SetContextTarget { target: Option<ContextTarget> },

    Undo,
    Redo,

    SetEditorTool { tool: EditorTool },
}
