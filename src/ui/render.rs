//! Szenen-Rendering im Viewport über den egui-Painter.
//!
//! Zeichenreihenfolge: Hintergrundfarbe, Hintergrundbild, Spielfeldrahmen,
//! Grid, Segmente, Vertices. Alle Geometrie wird pro Frame von Welt- in
//! Panel-Koordinaten transformiert.

use crate::app::AppState;
use crate::core::{sample_segment_points, Camera2D};
use glam::Vec2;

/// Cache für die Hintergrundbild-Texture.
///
/// Das Bild wird nur neu geladen, wenn sich der Pfad in der Karte geändert
/// hat (`background_dirty`).
#[derive(Default)]
pub struct BackgroundTexture {
    path: Option<String>,
    texture: Option<egui::TextureHandle>,
}

impl BackgroundTexture {
    /// Erstellt einen leeren Texture-Cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gleicht den Cache mit dem Karten-Hintergrund ab.
    pub fn sync(&mut self, ctx: &egui::Context, state: &mut AppState) {
        if !state.view.background_dirty && self.path == state.map.background.image {
            return;
        }
        state.view.background_dirty = false;

        match state.map.background.image.clone() {
            None => {
                self.path = None;
                self.texture = None;
            }
            Some(path) => {
                match load_color_image(&path) {
                    Ok(color_image) => {
                        log::info!(
                            "Hintergrundbild geladen: {} ({}x{})",
                            path,
                            color_image.width(),
                            color_image.height()
                        );
                        self.texture = Some(ctx.load_texture(
                            "background_image",
                            color_image,
                            egui::TextureOptions::LINEAR,
                        ));
                    }
                    Err(err) => {
                        log::warn!("Hintergrundbild konnte nicht geladen werden: {err:#}");
                        self.texture = None;
                    }
                }
                self.path = Some(path);
            }
        }
    }
}

fn load_color_image(path: &str) -> anyhow::Result<egui::ColorImage> {
    use anyhow::Context as _;

    let image = image::open(path).with_context(|| format!("Bild laden: {path}"))?;
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_raw(),
    ))
}

/// `[r, g, b, a]` in 0..1 → `Color32`.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

/// Parst eine Hintergrundfarbe wie `"718C5A"` oder `"#718C5A"`.
fn parse_hex_color(value: &str) -> Option<egui::Color32> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(egui::Color32::from_rgb(r, g, b))
}

fn world_to_panel(camera: &Camera2D, rect: egui::Rect, world: Vec2) -> egui::Pos2 {
    let screen = camera.world_to_screen(world);
    rect.min + egui::vec2(screen.x, screen.y)
}

/// Zeichnet die komplette Szene in das Viewport-Rechteck.
pub fn draw_scene(
    ui: &egui::Ui,
    rect: egui::Rect,
    state: &AppState,
    background: &BackgroundTexture,
) {
    let painter = ui.painter().with_clip_rect(rect);
    let camera = &state.view.camera;
    let map = &state.map;
    let options = &state.options;

    // Hintergrundfarbe (Kartenfarbe oder neutrales Dunkelgrau)
    let bg_color = map
        .background
        .color
        .as_deref()
        .and_then(parse_hex_color)
        .unwrap_or(egui::Color32::from_gray(30));
    painter.rect_filled(rect, 0.0, bg_color);

    // Spielfeld: width/height sind Halbachsen um den Welt-Ursprung
    let field_min = world_to_panel(camera, rect, Vec2::new(-map.width, -map.height));
    let field_max = world_to_panel(camera, rect, Vec2::new(map.width, map.height));
    let field_rect = egui::Rect::from_two_pos(field_min, field_max);

    // Hintergrundbild über das Spielfeld gelegt
    if state.view.background_visible && state.view.background_opacity > 0.0 {
        if let Some(texture) = &background.texture {
            let tint = egui::Color32::WHITE
                .gamma_multiply(state.view.background_opacity.clamp(0.0, 1.0));
            painter.image(
                texture.id(),
                field_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                tint,
            );
        }
    }

    painter.rect_stroke(
        field_rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(90)),
        egui::StrokeKind::Inside,
    );

    if state.view.grid_visible {
        draw_grid(&painter, rect, camera, options.grid_size_world);
    }

    // Segmente unter den Vertices
    let segment_color = color32(options.segment_color_default);
    let segment_selected_color = color32(options.segment_color_selected);
    for (index, segment) in map.segments().iter().enumerate() {
        let (Some(v0), Some(v1)) = (
            map.vertices().get(segment.v0),
            map.vertices().get(segment.v1),
        ) else {
            continue;
        };

        let points: Vec<egui::Pos2> = sample_segment_points(v0.position, v1.position, segment.curve)
            .into_iter()
            .map(|p| world_to_panel(camera, rect, p))
            .collect();

        let color = if state.selection.selected_segments.contains(&index) {
            segment_selected_color
        } else {
            segment_color
        };
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(options.segment_thickness_px, color),
        ));
    }

    let vertex_color = color32(options.vertex_color_default);
    let vertex_selected_color = color32(options.vertex_color_selected);
    let vertex_hover_color = color32(options.vertex_color_hover);
    for (index, vertex) in map.vertices().iter().enumerate() {
        let center = world_to_panel(camera, rect, vertex.position);
        let color = if state.selection.selected_vertices.contains(&index) {
            vertex_selected_color
        } else if state.ui.hovered_vertex == Some(index) {
            vertex_hover_color
        } else {
            vertex_color
        };
        painter.circle_filled(center, options.vertex_radius_px, color);
    }
}

/// Zeichnet das Welt-Grid über den sichtbaren Ausschnitt.
fn draw_grid(painter: &egui::Painter, rect: egui::Rect, camera: &Camera2D, grid_size: f32) {
    if grid_size <= 0.0 {
        return;
    }
    // Bei starkem Herauszoomen auf ein gröberes Raster wechseln, damit die
    // Liniendichte auf dem Bildschirm begrenzt bleibt
    let mut step = grid_size;
    while step * camera.zoom() < 8.0 {
        step *= 4.0;
    }

    let stroke = egui::Stroke::new(0.5, color32(crate::shared::options::GRID_COLOR));

    let world_min = camera.screen_to_world(Vec2::ZERO);
    let world_max = camera.screen_to_world(Vec2::new(rect.width(), rect.height()));

    let mut x = (world_min.x / step).floor() * step;
    while x <= world_max.x {
        let top = world_to_panel(camera, rect, Vec2::new(x, world_min.y));
        let bottom = world_to_panel(camera, rect, Vec2::new(x, world_max.y));
        painter.line_segment([top, bottom], stroke);
        x += step;
    }

    let mut y = (world_min.y / step).floor() * step;
    while y <= world_max.y {
        let left = world_to_panel(camera, rect, Vec2::new(world_min.x, y));
        let right = world_to_panel(camera, rect, Vec2::new(world_max.x, y));
        painter.line_segment([left, right], stroke);
        y += step;
    }
}
