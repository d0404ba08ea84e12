//! Key chord parsing and matching.
//!
//! Parses key chord strings like "ctrl+b" or "tab" from config and matches
//! them against crossterm KeyEvents at runtime.
//!
//! Used for the global bindings the root controller intercepts before any
//! pane sees a key (quit, cycle focus, toggle tree, focus tree/agent).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::KeysConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub key: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

pub fn parse_key_chord(input: &str) -> Option<KeyChord> {
    let trimmed = input.trim().to_lowercase();
    if trimmed.is_empty() {
        return None;
    }

    let parts: Vec<&str> = trimmed
        .split('+')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        return None;
    }

    let mut chord = KeyChord {
        key: KeyCode::Null,
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    for part in parts {
        match part {
            "ctrl" | "control" => chord.ctrl = true,
            "alt" | "option" => chord.alt = true,
            "shift" => chord.shift = true,
            "meta" | "cmd" | "super" => chord.meta = true,
            key => {
                if chord.key != KeyCode::Null {
                    return None;
                }
                chord.key = parse_key(key)?;
            }
        }
    }

    if chord.key == KeyCode::Null {
        return None;
    }

    Some(chord)
}

fn parse_key(key: &str) -> Option<KeyCode> {
    match key {
        "esc" | "escape" => Some(KeyCode::Esc),
        "enter" | "return" => Some(KeyCode::Enter),
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "backspace" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pgup" | "pageup" => Some(KeyCode::PageUp),
        "pgdown" | "pagedown" => Some(KeyCode::PageDown),
        "space" | "spacebar" => Some(KeyCode::Char(' ')),
        _ => {
            if let Some(number) = key.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                return (1..=12).contains(&number).then_some(KeyCode::F(number));
            }
            let mut chars = key.chars();
            let first = chars.next()?;
            if chars.next().is_none() {
                Some(KeyCode::Char(first))
            } else {
                None
            }
        }
    }
}

pub fn matches_chord(event: &KeyEvent, chord: &KeyChord) -> bool {
    if event.code != chord.key {
        return false;
    }

    let modifiers = event.modifiers;
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let meta = modifiers.contains(KeyModifiers::SUPER) || modifiers.contains(KeyModifiers::META);

    ctrl == chord.ctrl && alt == chord.alt && shift == chord.shift && meta == chord.meta
}

/// Bindings the root controller handles itself instead of routing to a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    Quit,
    CycleFocus,
    ToggleTree,
    FocusTree,
    FocusAgent,
}

/// Parsed global bindings. A binding whose config string does not parse is
/// left unbound.
#[derive(Debug, Clone, Default)]
pub struct Keybindings {
    pub quit: Option<KeyChord>,
    pub cycle_focus: Option<KeyChord>,
    pub toggle_tree: Option<KeyChord>,
    pub focus_tree: Option<KeyChord>,
    pub focus_agent: Option<KeyChord>,
}

impl Keybindings {
    pub fn from_config(keys: &KeysConfig) -> Self {
        Self {
            quit: parse_key_chord(&keys.quit),
            cycle_focus: parse_key_chord(&keys.cycle_focus),
            toggle_tree: parse_key_chord(&keys.toggle_tree),
            focus_tree: parse_key_chord(&keys.focus_tree),
            focus_agent: parse_key_chord(&keys.focus_agent),
        }
    }

    /// Resolve a key to a global action. Ctrl+C always quits, whatever the
    /// configured quit binding is. When two bindings share a chord the first
    /// one in quit, cycle, toggle, focus-tree, focus-agent order wins.
    pub fn action_for(&self, event: &KeyEvent) -> Option<GlobalAction> {
        if is_interrupt(event) {
            return Some(GlobalAction::Quit);
        }
        [
            (&self.quit, GlobalAction::Quit),
            (&self.cycle_focus, GlobalAction::CycleFocus),
            (&self.toggle_tree, GlobalAction::ToggleTree),
            (&self.focus_tree, GlobalAction::FocusTree),
            (&self.focus_agent, GlobalAction::FocusAgent),
        ]
        .into_iter()
        .find_map(|(chord, action)| {
            chord
                .as_ref()
                .filter(|chord| matches_chord(event, chord))
                .map(|_| action)
        })
    }
}

fn is_interrupt(event: &KeyEvent) -> bool {
    event.code == KeyCode::Char('c') && event.modifiers == KeyModifiers::CONTROL
}

#[cfg(test)]
mod tests {
    use super::{matches_chord, parse_key_chord, GlobalAction, Keybindings};
    use crate::config::KeysConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn parse_key_chord_accepts_modifiers_and_named_keys() {
        let chord = parse_key_chord("Ctrl+B").expect("ctrl+b");
        assert_eq!(chord.key, KeyCode::Char('b'));
        assert!(chord.ctrl && !chord.alt && !chord.shift && !chord.meta);

        let chord = parse_key_chord("tab").expect("tab");
        assert_eq!(chord.key, KeyCode::Tab);
        assert!(!chord.ctrl);

        assert_eq!(parse_key_chord("f5").map(|c| c.key), Some(KeyCode::F(5)));
    }

    #[test]
    fn parse_key_chord_rejects_malformed_input() {
        assert!(parse_key_chord("").is_none());
        assert!(parse_key_chord("ctrl+").is_none());
        assert!(parse_key_chord("ctrl+ab").is_none());
        assert!(parse_key_chord("a+b").is_none());
        assert!(parse_key_chord("f13").is_none());
    }

    #[test]
    fn matches_chord_requires_exact_modifiers() {
        let chord = parse_key_chord("ctrl+e").expect("chord");
        assert!(matches_chord(
            &KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL),
            &chord
        ));
        assert!(!matches_chord(
            &KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE),
            &chord
        ));
        assert!(!matches_chord(
            &KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL | KeyModifiers::ALT),
            &chord
        ));
    }

    #[test]
    fn default_bindings_resolve_to_actions() {
        let bindings = Keybindings::from_config(&KeysConfig::default());
        let ctrl = |ch| KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL);

        assert_eq!(bindings.action_for(&ctrl('b')), Some(GlobalAction::ToggleTree));
        assert_eq!(bindings.action_for(&ctrl('e')), Some(GlobalAction::FocusTree));
        assert_eq!(bindings.action_for(&ctrl('a')), Some(GlobalAction::FocusAgent));
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            Some(GlobalAction::CycleFocus)
        );
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn ctrl_c_quits_even_when_quit_is_rebound() {
        let keys = KeysConfig {
            quit: "ctrl+q".to_string(),
            ..KeysConfig::default()
        };
        let bindings = Keybindings::from_config(&keys);
        let ctrl = |ch| KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL);

        assert_eq!(bindings.action_for(&ctrl('c')), Some(GlobalAction::Quit));
        assert_eq!(bindings.action_for(&ctrl('q')), Some(GlobalAction::Quit));
    }

    #[test]
    fn unparsable_binding_is_left_unbound() {
        let keys = KeysConfig {
            toggle_tree: "ctrl+nope".to_string(),
            ..KeysConfig::default()
        };
        let bindings = Keybindings::from_config(&keys);
        assert!(bindings.toggle_tree.is_none());
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL)),
            None
        );
    }
}
