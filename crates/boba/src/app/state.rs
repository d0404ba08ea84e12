//! Application state types.
//!
//! Defines the App struct, which owns every pane, plus the focus enum the
//! root controller routes on.

use std::path::PathBuf;

use crate::config::Config;
use crate::filesystem::Fs;
use crate::keymap::Keybindings;
use crate::panes::agent::AgentPane;
use crate::panes::editor::Editor;
use crate::panes::tree::FileTree;
use crate::theme::Theme;
use crate::ui::PaneLayout;

/// Which pane receives non-global input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tree,
    Editor,
    Agent,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Tree => Focus::Editor,
            Focus::Editor => Focus::Agent,
            Focus::Agent => Focus::Tree,
        }
    }
}

/// Main application state container.
///
/// Methods are split across input.rs (event handling) and render.rs
/// (drawing). Panes only see the events routed to them and communicate
/// back through returned effects.
pub struct App {
    pub focus: Focus,
    pub tree_visible: bool,
    pub width: u16,
    pub height: u16,
    pub layout: PaneLayout,
    pub tree: FileTree,
    pub editor: Editor,
    pub agent: AgentPane,
    pub keys: Keybindings,
    pub theme: Theme,
    pub fs: Box<dyn Fs>,
    pub should_quit: bool,
}

impl App {
    /// Build the app rooted at `cwd`. Dimensions stay zero until the first
    /// resize event arrives.
    pub fn new(cwd: PathBuf, config: Config, fs: Box<dyn Fs>) -> Self {
        let theme = Theme::from_config(&config.colors);
        let tree = FileTree::new(cwd, fs.as_ref(), theme);
        let editor = Editor::new(config.commands.clone(), theme);
        let agent = AgentPane::new(&config.ai, theme);
        Self {
            focus: Focus::Tree,
            tree_visible: true,
            width: 0,
            height: 0,
            layout: PaneLayout::default(),
            tree,
            editor,
            agent,
            keys: Keybindings::from_config(&config.keys),
            theme,
            fs,
            should_quit: false,
        }
    }
}
