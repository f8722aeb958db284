//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Commands that can be triggered by keybindings while an alert is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Move focus to the next enabled button
    FocusNext,
    /// Move focus to the previous enabled button
    FocusPrev,
    /// Tap the focused button
    Activate,
    /// Tap the cancel button, if the alert has one
    Cancel,
    /// Scroll the message up
    ScrollUp,
    /// Scroll the message down
    ScrollDown,
    /// Leave without choosing an action
    Quit,
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to commands (for serialization)
    bindings: HashMap<String, Command>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("Tab".to_string(), Command::FocusNext);
        bindings.insert("Down".to_string(), Command::FocusNext);
        bindings.insert("Right".to_string(), Command::FocusNext);
        bindings.insert("j".to_string(), Command::FocusNext);
        bindings.insert("Shift+BackTab".to_string(), Command::FocusPrev);
        bindings.insert("BackTab".to_string(), Command::FocusPrev);
        bindings.insert("Up".to_string(), Command::FocusPrev);
        bindings.insert("Left".to_string(), Command::FocusPrev);
        bindings.insert("k".to_string(), Command::FocusPrev);
        bindings.insert("Enter".to_string(), Command::Activate);
        bindings.insert(" ".to_string(), Command::Activate);
        bindings.insert("Esc".to_string(), Command::Cancel);
        bindings.insert("PageUp".to_string(), Command::ScrollUp);
        bindings.insert("PageDown".to_string(), Command::ScrollDown);
        bindings.insert("q".to_string(), Command::Quit);
        bindings.insert("Ctrl+c".to_string(), Command::Quit);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// This ensures that new keybindings added in updates are available
    /// even if the user has an older saved config.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, command) in defaults.bindings {
            self.bindings.entry(key).or_insert(command);
        }
    }

    /// Get the command for a key event
    #[must_use]
    pub fn get_command(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Get all bindings for a command
    #[must_use]
    pub fn keys_for_command(&self, command: Command) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == command { Some(k.clone()) } else { None })
            .collect()
    }

    /// Short hint line shown under the alert, e.g. `Tab next  Enter choose`
    #[must_use]
    pub fn hint_line(&self) -> String {
        let hints = [
            (Command::FocusNext, "next"),
            (Command::Activate, "choose"),
            (Command::Cancel, "cancel"),
            (Command::Quit, "quit"),
        ];

        hints
            .iter()
            .filter_map(|(command, label)| {
                // Named keys read better in a hint than letters
                let keys = self.keys_for_command(*command);
                let key = keys
                    .iter()
                    .filter(|k| k.chars().count() > 1)
                    .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
                    .or_else(|| keys.iter().min())?;
                Some(format!("{key} {label}"))
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keybindings() {
        let keys = KeyBindings::default();

        assert_eq!(
            keys.get_command(KeyCode::Tab, KeyModifiers::NONE),
            Some(Command::FocusNext)
        );
        assert_eq!(
            keys.get_command(KeyCode::Enter, KeyModifiers::NONE),
            Some(Command::Activate)
        );
        assert_eq!(
            keys.get_command(KeyCode::Esc, KeyModifiers::NONE),
            Some(Command::Cancel)
        );
    }

    #[test]
    fn test_back_tab_with_and_without_shift() {
        let keys = KeyBindings::default();

        assert_eq!(
            keys.get_command(KeyCode::BackTab, KeyModifiers::SHIFT),
            Some(Command::FocusPrev)
        );
        assert_eq!(
            keys.get_command(KeyCode::BackTab, KeyModifiers::NONE),
            Some(Command::FocusPrev)
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.get_command(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Command::Quit)
        );
        assert_eq!(keys.get_command(KeyCode::Char('c'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_hint_line_mentions_commands() {
        let hints = KeyBindings::default().hint_line();
        assert!(hints.contains("Tab next"));
        assert!(hints.contains("Enter choose"));
        assert!(hints.contains("Esc cancel"));
    }

    #[test]
    fn test_merge_defaults() {
        // Simulate an old config missing the scroll bindings
        let mut keys = KeyBindings {
            bindings: [
                ("Enter".to_string(), Command::Activate),
                ("z".to_string(), Command::Quit),
            ]
            .into_iter()
            .collect(),
        };

        assert_eq!(keys.get_command(KeyCode::PageDown, KeyModifiers::NONE), None);

        keys.merge_defaults();
        assert_eq!(
            keys.get_command(KeyCode::PageDown, KeyModifiers::NONE),
            Some(Command::ScrollDown)
        );
        // Existing bindings should be preserved
        assert_eq!(
            keys.get_command(KeyCode::Char('z'), KeyModifiers::NONE),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_key_to_string() {
        assert_eq!(key_to_string(KeyCode::Char('a'), KeyModifiers::NONE), "a");
        assert_eq!(
            key_to_string(KeyCode::Char('a'), KeyModifiers::CONTROL),
            "Ctrl+a"
        );
        assert_eq!(key_to_string(KeyCode::BackTab, KeyModifiers::SHIFT), "Shift+BackTab");
        assert_eq!(key_to_string(KeyCode::F(1), KeyModifiers::NONE), "F1");
    }

    #[test]
    fn test_serde_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let keys = KeyBindings::default();
        let json = serde_json::to_string(&keys)?;
        let parsed: KeyBindings = serde_json::from_str(&json)?;
        assert_eq!(keys, parsed);
        Ok(())
    }
}
