//! Context menu shortcut descriptors.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

use serde::{Deserialize, Serialize};

/// One context menu row: the item name and the hint shown beside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub name: String,
    pub shortcut: String,
}

impl Shortcut {
    #[must_use]
    pub fn new(name: impl Into<String>, shortcut: impl Into<String>) -> Self {
        Self { name: name.into(), shortcut: shortcut.into() }
    }

    /// The action this row dispatches to, if its name is known.
    #[must_use]
    pub fn action(&self) -> Option<ContextAction> {
        ContextAction::from_name(&self.name)
    }
}

/// What a context menu selection does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Open the cursor chat box.
    Chat,
    /// Open the reaction picker.
    Reactions,
    /// Undo on the drawing surface.
    Undo,
    /// Redo on the drawing surface.
    Redo,
}

impl ContextAction {
    /// Dispatch by item name, exactly as the menu labels them.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Chat" => Some(Self::Chat),
            "Reactions" => Some(Self::Reactions),
            "Undo" => Some(Self::Undo),
            "Redo" => Some(Self::Redo),
            _ => None,
        }
    }
}

/// The stock menu: chat, undo, redo, reactions.
#[must_use]
pub fn default_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Chat", "/"),
        Shortcut::new("Undo", "⌘ + Z"),
        Shortcut::new("Redo", "⌘ + Y"),
        Shortcut::new("Reactions", "E"),
    ]
}
