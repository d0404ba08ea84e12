use super::{load_config, local_config_path, user_config_path, Config};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::test_utils::{env_lock, EnvVarGuard};

fn write_config(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create config dir");
    }
    fs::write(path, contents).expect("write config");
}

#[test]
fn load_config_uses_defaults_when_empty() {
    let _guard = env_lock();
    let home = TempDir::new().expect("temp home");
    let _home = EnvVarGuard::set("HOME", home.path().to_string_lossy().to_string());

    let cwd = TempDir::new().expect("temp cwd");
    let config = load_config(cwd.path());

    assert_eq!(config, Config::default());
    assert_eq!(config.keys.toggle_tree, "ctrl+b");
    assert_eq!(config.keys.focus_tree, "ctrl+e");
    assert_eq!(config.keys.focus_agent, "ctrl+a");
    assert_eq!(config.keys.cycle_focus, "tab");
    assert_eq!(config.keys.quit, "ctrl+c");
    assert_eq!(config.ai.name, "Agent");
    assert_eq!(config.ai.model, "default");
    assert_eq!(config.commands.save, vec!["w", "s", "save", "write"]);
    assert_eq!(config.commands.quit, vec!["q", "quit", "exit"]);
    assert_eq!(config.colors.primary, "#F25D94");
}

#[test]
fn load_config_merges_user_and_local() {
    let _guard = env_lock();
    let home = TempDir::new().expect("temp home");
    let _home = EnvVarGuard::set("HOME", home.path().to_string_lossy().to_string());

    let user_path = user_config_path().expect("user config path");
    assert!(user_path.starts_with(home.path()));
    write_config(
        &user_path,
        r##"
[colors]
primary = "#111111"
dark = "#000000"

[keys]
toggle_tree = "ctrl+t"
quit = "ctrl+q"

[ai]
name = "Boba"

[commands]
save = ["w"]
"##,
    );

    let cwd = TempDir::new().expect("temp cwd");
    write_config(
        &local_config_path(cwd.path()),
        r##"
[colors]
primary = "#222222"

[keys]
toggleTree = "ctrl+y"

[ai]
model = "local-llm"

[commands]
quit = ["bye"]
"##,
    );

    let config = load_config(cwd.path());

    assert_eq!(config.colors.primary, "#222222");
    assert_eq!(config.colors.dark, "#000000");
    assert_eq!(config.colors.text, "#FAFAFA");
    assert_eq!(config.keys.toggle_tree, "ctrl+y");
    assert_eq!(config.keys.quit, "ctrl+q");
    assert_eq!(config.keys.cycle_focus, "tab");
    assert_eq!(config.ai.name, "Boba");
    assert_eq!(config.ai.model, "local-llm");
    assert_eq!(config.commands.save, vec!["w".to_string()]);
    assert_eq!(config.commands.quit, vec!["bye".to_string()]);
}

#[test]
fn load_config_ignores_invalid_toml() {
    let _guard = env_lock();
    let home = TempDir::new().expect("temp home");
    let _home = EnvVarGuard::set("HOME", home.path().to_string_lossy().to_string());

    let cwd = TempDir::new().expect("temp cwd");
    write_config(&local_config_path(cwd.path()), "[keys\nquit = ");

    assert_eq!(load_config(cwd.path()), Config::default());
}

#[test]
fn command_tokens_match_exactly() {
    let commands = Config::default().commands;

    assert!(commands.is_save("w"));
    assert!(commands.is_save("write"));
    assert!(!commands.is_save("W"));
    assert!(!commands.is_save("wq"));
    assert!(commands.is_quit("exit"));
    assert!(!commands.is_quit("Quit"));
}
