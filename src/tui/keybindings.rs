//! Keybinding definitions
//!
//! The keys the contact list responds to, used by the help dialog.

use crossterm::event::KeyCode;

use crate::models::RecordLayout;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Description of what the key does
    pub description: &'static str,
    /// Layout capability the key depends on
    pub requires: Requires,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// What a layout must support for a key to be offered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requires {
    Nothing,
    Transfer,
    Birthdays,
}

impl Requires {
    fn met_by(self, layout: RecordLayout) -> bool {
        match self {
            Requires::Nothing => true,
            Requires::Transfer => layout.supports_transfer(),
            Requires::Birthdays => layout.supports_birthdays(),
        }
    }
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// The contact list
    List,
    /// Form and path dialogs
    Dialog,
}

const fn bind(key: KeyCode, description: &'static str, context: KeyContext) -> Keybinding {
    Keybinding {
        key,
        description,
        requires: Requires::Nothing,
        context,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    bind(KeyCode::Char('j'), "Move down", KeyContext::List),
    bind(KeyCode::Char('k'), "Move up", KeyContext::List),
    bind(KeyCode::Char('/'), "Filter contacts", KeyContext::List),
    bind(KeyCode::Char('a'), "Add contact", KeyContext::List),
    bind(KeyCode::Char('e'), "Edit selected contact", KeyContext::List),
    bind(KeyCode::Char('d'), "Delete selected contact", KeyContext::List),
    Keybinding {
        key: KeyCode::Char('i'),
        description: "Import contacts",
        requires: Requires::Transfer,
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Char('x'),
        description: "Export contacts",
        requires: Requires::Transfer,
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Char('b'),
        description: "Today's birthdays",
        requires: Requires::Birthdays,
        context: KeyContext::List,
    },
    bind(KeyCode::Char('s'), "Save", KeyContext::List),
    bind(KeyCode::Char('?'), "Help", KeyContext::List),
    bind(KeyCode::Char('q'), "Quit", KeyContext::List),
    bind(KeyCode::Tab, "Next field", KeyContext::Dialog),
    bind(KeyCode::Enter, "Confirm", KeyContext::Dialog),
    bind(KeyCode::Esc, "Close dialog", KeyContext::Dialog),
];

/// Keybindings offered for a context and layout
pub fn get_keybindings(context: KeyContext, layout: RecordLayout) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context && kb.requires.met_by(layout))
        .collect()
}

/// Format a keybinding's key for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    match kb.key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(layout: RecordLayout) -> Vec<String> {
        get_keybindings(KeyContext::List, layout)
            .into_iter()
            .map(format_keybinding)
            .collect()
    }

    #[test]
    fn test_keys_follow_layout() {
        let basic = keys(RecordLayout::Basic);
        assert!(basic.contains(&"a".to_string()));
        assert!(!basic.contains(&"i".to_string()));
        assert!(!basic.contains(&"b".to_string()));

        let full = keys(RecordLayout::Full);
        assert!(full.contains(&"x".to_string()));
        assert!(full.contains(&"b".to_string()));
    }

    #[test]
    fn test_dialog_keys() {
        let dialog = get_keybindings(KeyContext::Dialog, RecordLayout::Basic);
        assert_eq!(format_keybinding(dialog[0]), "Tab");
    }
}
