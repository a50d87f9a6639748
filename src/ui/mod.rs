//! UI-Layer mit egui
//!
//! Dieses Modul implementiert alle UI-Komponenten (Menü, Toolbar, Statusbar,
//! Viewport-Rendering, Dialoge). Modulare Aufteilung: Keyboard-Shortcuts,
//! Marquee und Kontextmenü sind in eigene Dateien extrahiert.

mod context_menu;
pub mod dialogs;
pub mod input;
mod keyboard;
mod marquee;
pub mod menu;
pub mod render;
pub mod status;
pub mod toolbar;

pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use menu::render_menu;
pub use render::{draw_scene, BackgroundTexture};
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
