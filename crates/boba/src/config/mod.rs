//! Configuration loading and merging.
//!
//! Config is loaded from two sources with the local file taking precedence:
//! 1. User-level: `~/.boba-config.toml`
//! 2. Local: `<cwd>/config.toml`
//!
//! Every field is optional; anything missing falls back to the built-in
//! defaults, and a file that is missing, empty or fails to parse is
//! ignored. Uses TOML format with serde.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE: &str = "config.toml";
const USER_CONFIG_FILE: &str = ".boba-config.toml";

const DEFAULT_TOGGLE_TREE: &str = "ctrl+b";
const DEFAULT_FOCUS_TREE: &str = "ctrl+e";
const DEFAULT_FOCUS_AGENT: &str = "ctrl+a";
const DEFAULT_CYCLE_FOCUS: &str = "tab";
const DEFAULT_QUIT: &str = "ctrl+c";

const DEFAULT_AI_NAME: &str = "Agent";
const DEFAULT_AI_MODEL: &str = "default";

const DEFAULT_SAVE_COMMANDS: &[&str] = &["w", "s", "save", "write"];
const DEFAULT_QUIT_COMMANDS: &[&str] = &["q", "quit", "exit"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub colors: ColorsConfig,
    pub keys: KeysConfig,
    pub ai: AiConfig,
    pub commands: CommandsConfig,
}

/// Hex color strings (`#RRGGBB`). Parsed into a [`crate::theme::Theme`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorsConfig {
    pub text: String,
    pub subtext: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub dark: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            text: "#FAFAFA".to_string(),
            subtext: "#7D7D7D".to_string(),
            primary: "#F25D94".to_string(),
            secondary: "#A550DF".to_string(),
            accent: "#61AFEF".to_string(),
            success: "#98C379".to_string(),
            warning: "#E5C07B".to_string(),
            error: "#E06C75".to_string(),
            dark: "#1E1E1E".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeysConfig {
    pub toggle_tree: String,
    pub focus_tree: String,
    pub focus_agent: String,
    pub cycle_focus: String,
    pub quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            toggle_tree: DEFAULT_TOGGLE_TREE.to_string(),
            focus_tree: DEFAULT_FOCUS_TREE.to_string(),
            focus_agent: DEFAULT_FOCUS_AGENT.to_string(),
            cycle_focus: DEFAULT_CYCLE_FOCUS.to_string(),
            quit: DEFAULT_QUIT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiConfig {
    pub name: String,
    pub model: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_AI_NAME.to_string(),
            model: DEFAULT_AI_MODEL.to_string(),
        }
    }
}

/// Command-line tokens the editor recognizes. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandsConfig {
    pub save: Vec<String>,
    pub quit: Vec<String>,
}

impl CommandsConfig {
    pub fn is_save(&self, token: &str) -> bool {
        self.save.iter().any(|candidate| candidate == token)
    }

    pub fn is_quit(&self, token: &str) -> bool {
        self.quit.iter().any(|candidate| candidate == token)
    }
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            save: to_strings(DEFAULT_SAVE_COMMANDS),
            quit: to_strings(DEFAULT_QUIT_COMMANDS),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    colors: Option<RawColors>,
    keys: Option<RawKeys>,
    ai: Option<RawAi>,
    commands: Option<RawCommands>,
}

#[derive(Debug, Default, Deserialize)]
struct RawColors {
    text: Option<String>,
    #[serde(alias = "subText")]
    subtext: Option<String>,
    primary: Option<String>,
    secondary: Option<String>,
    accent: Option<String>,
    success: Option<String>,
    warning: Option<String>,
    error: Option<String>,
    dark: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawKeys {
    #[serde(alias = "toggleTree")]
    toggle_tree: Option<String>,
    #[serde(alias = "focusTree")]
    focus_tree: Option<String>,
    #[serde(alias = "focusAgent")]
    focus_agent: Option<String>,
    #[serde(alias = "cycleFocus")]
    cycle_focus: Option<String>,
    quit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawAi {
    name: Option<String>,
    model: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCommands {
    save: Option<Vec<String>>,
    quit: Option<Vec<String>>,
}

fn read_toml(path: &Path) -> Option<RawConfig> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }
    match toml::from_str::<RawConfig>(&contents) {
        Ok(raw) => Some(raw),
        Err(err) => {
            log::warn!("ignoring config {}: {err}", path.display());
            None
        }
    }
}

/// First value present in `local`, then `user`.
fn pick<R, T>(local: Option<&R>, user: Option<&R>, field: impl Fn(&R) -> Option<T>) -> Option<T> {
    local.and_then(&field).or_else(|| user.and_then(&field))
}

fn merge_config(user: Option<RawConfig>, local: Option<RawConfig>) -> Config {
    let defaults = Config::default();

    let local_colors = local.as_ref().and_then(|c| c.colors.as_ref());
    let user_colors = user.as_ref().and_then(|c| c.colors.as_ref());
    let color = |field: fn(&RawColors) -> Option<String>, fallback: String| {
        pick(local_colors, user_colors, field).unwrap_or(fallback)
    };
    let colors = ColorsConfig {
        text: color(|c| c.text.clone(), defaults.colors.text),
        subtext: color(|c| c.subtext.clone(), defaults.colors.subtext),
        primary: color(|c| c.primary.clone(), defaults.colors.primary),
        secondary: color(|c| c.secondary.clone(), defaults.colors.secondary),
        accent: color(|c| c.accent.clone(), defaults.colors.accent),
        success: color(|c| c.success.clone(), defaults.colors.success),
        warning: color(|c| c.warning.clone(), defaults.colors.warning),
        error: color(|c| c.error.clone(), defaults.colors.error),
        dark: color(|c| c.dark.clone(), defaults.colors.dark),
    };

    let local_keys = local.as_ref().and_then(|c| c.keys.as_ref());
    let user_keys = user.as_ref().and_then(|c| c.keys.as_ref());
    let key = |field: fn(&RawKeys) -> Option<String>, fallback: String| {
        pick(local_keys, user_keys, field).unwrap_or(fallback)
    };
    let keys = KeysConfig {
        toggle_tree: key(|k| k.toggle_tree.clone(), defaults.keys.toggle_tree),
        focus_tree: key(|k| k.focus_tree.clone(), defaults.keys.focus_tree),
        focus_agent: key(|k| k.focus_agent.clone(), defaults.keys.focus_agent),
        cycle_focus: key(|k| k.cycle_focus.clone(), defaults.keys.cycle_focus),
        quit: key(|k| k.quit.clone(), defaults.keys.quit),
    };

    let local_ai = local.as_ref().and_then(|c| c.ai.as_ref());
    let user_ai = user.as_ref().and_then(|c| c.ai.as_ref());
    let ai = AiConfig {
        name: pick(local_ai, user_ai, |a| a.name.clone()).unwrap_or(defaults.ai.name),
        model: pick(local_ai, user_ai, |a| a.model.clone()).unwrap_or(defaults.ai.model),
    };

    let local_commands = local.as_ref().and_then(|c| c.commands.as_ref());
    let user_commands = user.as_ref().and_then(|c| c.commands.as_ref());
    let commands = CommandsConfig {
        save: pick(local_commands, user_commands, |c| c.save.clone())
            .unwrap_or(defaults.commands.save),
        quit: pick(local_commands, user_commands, |c| c.quit.clone())
            .unwrap_or(defaults.commands.quit),
    };

    Config {
        colors,
        keys,
        ai,
        commands,
    }
}

pub fn local_config_path(root: &Path) -> PathBuf {
    root.join(LOCAL_CONFIG_FILE)
}

pub fn user_config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(USER_CONFIG_FILE))
}

pub fn load_config(root: &Path) -> Config {
    let local_config = read_toml(&local_config_path(root));
    let user_config = user_config_path().and_then(|path| read_toml(&path));

    merge_config(user_config, local_config)
}

#[cfg(test)]
mod tests;
