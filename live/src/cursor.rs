//! Cursor interaction mode.
//!
//! Exactly one mode is active at a time. The transitions themselves live on
//! [`crate::engine::SurfaceCore`], which also owns the side effects each
//! transition publishes; this module only describes the states.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

/// Local-only cursor mode. Never shared with other participants.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CursorState {
    /// Plain pointer; nothing is drawn at the local cursor.
    #[default]
    Hidden,
    /// Composing a chat message anchored at the cursor.
    Chat {
        /// Message committed with Enter, shown above the input.
        previous_message: Option<String>,
        /// Text currently in the input.
        message: String,
    },
    /// The reaction palette is open.
    ReactionSelector,
    /// A reaction glyph is armed; while pressed it streams at the cursor.
    Reaction {
        /// Glyph to emit.
        reaction: String,
        /// Whether the pointer has been pressed since the glyph was chosen.
        is_pressed: bool,
    },
}

impl CursorState {
    /// Fresh chat state with an empty input.
    #[must_use]
    pub fn chat() -> Self {
        Self::Chat { previous_message: None, message: String::new() }
    }

    /// Newly armed reaction, not yet pressed.
    #[must_use]
    pub fn reaction(glyph: impl Into<String>) -> Self {
        Self::Reaction { reaction: glyph.into(), is_pressed: false }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    #[must_use]
    pub fn is_chat(&self) -> bool {
        matches!(self, Self::Chat { .. })
    }

    #[must_use]
    pub fn is_reaction_selector(&self) -> bool {
        matches!(self, Self::ReactionSelector)
    }

    /// The armed glyph, only when the reaction is currently pressed.
    #[must_use]
    pub fn pressed_reaction(&self) -> Option<&str> {
        match self {
            Self::Reaction { reaction, is_pressed: true } => Some(reaction),
            _ => None,
        }
    }

    /// Mark an armed reaction as pressed. No-op in every other mode.
    pub fn press(&mut self) {
        if let Self::Reaction { is_pressed, .. } = self {
            *is_pressed = true;
        }
    }

    /// Short name used in log records.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Chat { .. } => "chat",
            Self::ReactionSelector => "reaction-selector",
            Self::Reaction { .. } => "reaction",
        }
    }
}
