//! UI layout and widget helpers.
//!
//! Pure functions only: they take data and produce sizes, rects or
//! widgets without touching app state.
//!
//! Submodules:
//! - layout: pane dimension algorithm and rect helpers
//! - text: line wrapping
//! - widgets: shared widget builders

mod layout;
mod text;
mod widgets;

pub use layout::{inset_horizontal, PaneLayout};
pub use text::wrap_preserve;
pub use widgets::content_frame;
