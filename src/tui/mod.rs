//! TUI: App state, event loop, the contact screen, widgets.

pub mod action;
pub mod app;
pub mod contact;
pub mod error;
pub mod widgets;

pub use app::App;
pub use contact::{ContactScreen, draw_contact};
pub use error::AppError;
