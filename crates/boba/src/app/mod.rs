//! Root controller and main event loop.
//!
//! This module owns the application lifecycle:
//! - Initialization (terminal setup, config loading, logging)
//! - Event loop (key input, resize, re-dispatched pane effects)
//! - Focus and tree visibility, global key bindings
//! - Frame composition
//!
//! The app is structured around a single `App` struct that holds the three
//! panes plus the focus/layout state. Events are processed sequentially in
//! the main loop.
//!
//! Submodules:
//! - state: App struct and Focus
//! - runner: main loop and terminal setup
//! - input: global bindings and routing to the focused pane
//! - render: frame composition

mod input;
mod render;
mod runner;
mod state;


pub use runner::run;
