use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::Action;

/// Shortcut key definition with key matching capability
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key_display: &'static str,
    pub description: &'static str,
    pub action: Action,
    pub matcher: fn(&KeyEvent) -> bool,
}

impl Shortcut {
    pub fn matches(&self, key: &KeyEvent) -> bool {
        (self.matcher)(key)
    }
}

/// Category of shortcuts
#[derive(Debug, Clone)]
pub struct ShortcutCategory {
    pub name: &'static str,
    pub shortcuts: Vec<Shortcut>,
}

/// Get all Normal-mode shortcut definitions organized by category
pub fn get_shortcuts() -> Vec<ShortcutCategory> {
    vec![
        ShortcutCategory {
            name: "Navigation",
            shortcuts: vec![
                Shortcut {
                    key_display: "↑/↓ or j/k",
                    description: "Move through providers",
                    action: Action::CursorNext, // Represents both directions
                    matcher: |key| {
                        matches!(
                            key.code,
                            KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('k') | KeyCode::Up
                        )
                    },
                },
                Shortcut {
                    key_display: "Tab",
                    description: "Jump to the next channel section",
                    action: Action::NextChannelTab,
                    matcher: |key| {
                        matches!(key.code, KeyCode::Tab)
                            && !key.modifiers.contains(KeyModifiers::SHIFT)
                    },
                },
                Shortcut {
                    key_display: "Shift+Tab",
                    description: "Jump to the previous channel section",
                    action: Action::PrevChannelTab,
                    matcher: |key| {
                        matches!(key.code, KeyCode::BackTab)
                            || (matches!(key.code, KeyCode::Tab)
                                && key.modifiers.contains(KeyModifiers::SHIFT))
                    },
                },
            ],
        },
        ShortcutCategory {
            name: "Selection",
            shortcuts: vec![
                Shortcut {
                    key_display: "Enter",
                    description: "Select the highlighted provider",
                    action: Action::AcceptUnderCursor,
                    matcher: |key| matches!(key.code, KeyCode::Enter),
                },
                Shortcut {
                    key_display: "n",
                    description: "Next: continue to the creation flow",
                    action: Action::Confirm,
                    matcher: |key| {
                        matches!(key.code, KeyCode::Char('n'))
                            && !key.modifiers.contains(KeyModifiers::CONTROL)
                    },
                },
            ],
        },
        ShortcutCategory {
            name: "Search",
            shortcuts: vec![Shortcut {
                key_display: "/",
                description: "Search providers (type to filter, Enter/Esc to leave)",
                action: Action::EnterSearchMode,
                matcher: |key| matches!(key.code, KeyCode::Char('/')),
            }],
        },
        ShortcutCategory {
            name: "General",
            shortcuts: vec![
                Shortcut {
                    key_display: "?",
                    description: "Toggle this help",
                    action: Action::ToggleHelp,
                    matcher: |key| matches!(key.code, KeyCode::Char('?')),
                },
                Shortcut {
                    key_display: "` or ~",
                    description: "Toggle debug console",
                    action: Action::ToggleDebugConsole,
                    matcher: |key| matches!(key.code, KeyCode::Char('`') | KeyCode::Char('~')),
                },
                Shortcut {
                    key_display: "Esc or q",
                    description: "Cancel and close the picker",
                    action: Action::Cancel,
                    matcher: |key| matches!(key.code, KeyCode::Esc | KeyCode::Char('q')),
                },
            ],
        },
    ]
}

/// Get all shortcuts in a flat list for easy iteration
pub fn get_all_shortcuts_flat() -> Vec<Shortcut> {
    get_shortcuts()
        .into_iter()
        .flat_map(|category| category.shortcuts)
        .collect()
}

/// Find the action for a Normal-mode key press
pub fn find_action_for_key(key: &KeyEvent) -> Action {
    // Up/down map to different actions, handled before the table lookup
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => return Action::CursorPrev,
        KeyCode::Down | KeyCode::Char('j') => return Action::CursorNext,
        _ => {}
    }

    for shortcut in get_all_shortcuts_flat() {
        if shortcut.matches(key) {
            return shortcut.action.clone();
        }
    }

    Action::None
}
