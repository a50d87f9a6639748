//! Application-Layer: Zustand, Events, Controller, Handler, Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
pub mod intent_mapping;
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{
    AppState, ContextTarget, DragSession, EditorTool, EditorToolState, SelectionState, UiState,
    ViewState,
};
