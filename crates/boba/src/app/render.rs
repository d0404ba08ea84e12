//! Frame composition.
//!
//! The tree (when visible) sits on the left; the content frame to its right
//! holds either the agent or the editor. The frame border tracks focus.

use ratatui::Frame;

use crate::ui::content_frame;

use super::state::{App, Focus};

/// Main render entry point. Called each frame by the event loop.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    if app.tree_visible {
        if let Some(tree_area) = app.layout.tree_area(area) {
            app.tree.render(frame, tree_area);
        }
    }

    let content_area = app.layout.content_area(area);
    if content_area.is_empty() {
        return;
    }
    let border = match app.focus {
        Focus::Agent => app.theme.success,
        Focus::Editor => app.theme.primary,
        Focus::Tree => app.theme.subtext,
    };
    let block = content_frame(border);
    let inner = block.inner(content_area);
    frame.render_widget(block, content_area);

    if app.focus == Focus::Agent {
        app.agent.render(frame, inner);
    } else {
        app.editor.render(frame, inner);
    }
}
