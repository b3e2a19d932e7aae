//! Reusable TUI widgets.

pub mod banner;
pub mod form;

pub use banner::{Banner, draw_banner};
pub use form::{FormField, draw_form, form_height};
