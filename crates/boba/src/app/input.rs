//! Input event handling.
//!
//! Global bindings are checked first; everything else goes to the focused
//! pane. Pane effects are carried out here so that panes never touch each
//! other directly.

use std::path::PathBuf;

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::events::AppEvent;
use crate::keymap::GlobalAction;
use crate::panes::editor::EditorMode;
use crate::panes::Effect;
use crate::ui::PaneLayout;

use super::state::{App, Focus};

/// Main event dispatcher.
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Input(key) => handle_key(app, key),
        AppEvent::Resize(width, height) => {
            app.width = width;
            app.height = height;
            resize_panes(app);
        }
        AppEvent::OpenFile(path) => open_file(app, path),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    if let Some(action) = app.keys.action_for(&key) {
        // Tab-style cycling yields to the editor while typing.
        let typing = app.focus == Focus::Editor && app.editor.mode() == EditorMode::Insert;
        if !(action == GlobalAction::CycleFocus && typing) {
            handle_global(app, action);
            return;
        }
    }
    route_key(app, key);
}

fn handle_global(app: &mut App, action: GlobalAction) {
    match action {
        GlobalAction::Quit => app.should_quit = true,
        GlobalAction::CycleFocus => set_focus(app, app.focus.next()),
        GlobalAction::ToggleTree => {
            app.tree_visible = !app.tree_visible;
            log::debug!("tree visible: {}", app.tree_visible);
            resize_panes(app);
        }
        GlobalAction::FocusTree => {
            if app.focus == Focus::Tree {
                set_focus(app, Focus::Editor);
            } else {
                set_focus(app, Focus::Tree);
                if !app.tree_visible {
                    app.tree_visible = true;
                    resize_panes(app);
                }
            }
        }
        GlobalAction::FocusAgent => {
            let target = if app.focus == Focus::Agent {
                Focus::Editor
            } else {
                Focus::Agent
            };
            set_focus(app, target);
        }
    }
}

fn set_focus(app: &mut App, focus: Focus) {
    if app.focus != focus {
        log::debug!("focus: {:?} -> {:?}", app.focus, focus);
    }
    app.focus = focus;
}

fn route_key(app: &mut App, key: KeyEvent) {
    let effect = match app.focus {
        Focus::Tree => {
            if !app.tree_visible {
                return;
            }
            app.tree.handle_key(key, app.fs.as_ref())
        }
        Focus::Editor => app.editor.handle_key(key, app.fs.as_ref()),
        Focus::Agent => {
            app.agent.handle_key(key);
            Effect::None
        }
    };
    apply_effect(app, effect);
}

fn apply_effect(app: &mut App, effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::OpenFile(path) => handle_event(app, AppEvent::OpenFile(path)),
        Effect::Quit => app.should_quit = true,
    }
}

/// Recompute the layout from the window size and push it to every pane.
/// The tree keeps its last size while hidden.
fn resize_panes(app: &mut App) {
    app.layout = PaneLayout::compute(app.width, app.height, app.tree_visible);
    if app.tree_visible {
        app.tree
            .set_size(app.layout.tree_width, app.layout.tree_height);
    }
    let (width, height) = (app.layout.content_width, app.layout.content_height);
    app.editor.set_size(width, height);
    app.agent.set_size(width, height);
}

fn open_file(app: &mut App, path: PathBuf) {
    match app.fs.read_text(&path) {
        Ok(content) => {
            log::info!("opened {}", path.display());
            app.editor.set_content(&content, path);
            set_focus(app, Focus::Editor);
        }
        Err(err) => {
            log::warn!("failed to open {}: {err}", path.display());
            app.editor.report_error(format!("Error opening: {err}"));
        }
    }
}
