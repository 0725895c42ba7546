//! Interaction core for the live surface.
//!
//! ARCHITECTURE
//! ============
//! `SurfaceCore` is the single owner of the cursor mode, the local mirror of
//! this participant's presence, and the reaction log. Pointer, keyboard,
//! menu, and timer events go in; [`Action`]s come out. The host performs the
//! actions (presence updates and broadcasts to the room, undo/redo to the
//! drawing surface) and never mutates the core's state directly.
//!
//! Every handler runs on the UI thread, so the reaction log has exactly one
//! writer even though both timers and inbound broadcasts append to it.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::config::SurfaceConfig;
use crate::consts::{ENTER_KEY, ESCAPE_KEY};
use crate::cursor::CursorState;
use crate::presence::{Point, Presence, PresencePatch};
use crate::reaction::{ReactionEvent, ReactionLog, ReactionRecord};
use crate::shortcuts::ContextAction;

/// Side effects requested by the core for the host to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Merge a patch into the local participant's shared presence.
    UpdatePresence(PresencePatch),
    /// Send a reaction to every other participant.
    Broadcast(ReactionEvent),
    /// Undo on the drawing surface.
    Undo,
    /// Redo on the drawing surface.
    Redo,
}

#[derive(Debug, Clone)]
pub struct SurfaceCore {
    config: SurfaceConfig,
    cursor: CursorState,
    presence: Presence,
    reactions: ReactionLog,
}

impl Default for SurfaceCore {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}

impl SurfaceCore {
    #[must_use]
    pub fn new(config: SurfaceConfig) -> Self {
        let reactions = ReactionLog::new(config.reaction_ttl_ms);
        Self { config, cursor: CursorState::Hidden, presence: Presence::default(), reactions }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    #[must_use]
    pub fn cursor_state(&self) -> &CursorState {
        &self.cursor
    }

    /// The local participant's presence as last published.
    #[must_use]
    pub fn presence(&self) -> &Presence {
        &self.presence
    }

    #[must_use]
    pub fn local_cursor(&self) -> Option<Point> {
        self.presence.cursor
    }

    #[must_use]
    pub fn reactions(&self) -> &ReactionLog {
        &self.reactions
    }

    /// Reaction records to draw at `now_ms`.
    #[must_use]
    pub fn visible_reactions(&self, now_ms: f64) -> Vec<ReactionRecord> {
        self.reactions.visible(now_ms).cloned().collect()
    }

    // --- Pointer ---

    /// Pointer moved over the surface.
    ///
    /// Publishes the position on every call, except while the reaction
    /// picker is open over an existing cursor. A move with a button held
    /// presses an armed reaction.
    pub fn on_pointer_move(&mut self, point: Point, button_held: bool) -> Vec<Action> {
        if button_held {
            self.cursor.press();
        }
        if self.presence.cursor.is_some() && self.cursor.is_reaction_selector() {
            return Vec::new();
        }
        vec![self.publish(PresencePatch::cursor(point))]
    }

    /// Pointer pressed on the surface.
    pub fn on_pointer_down(&mut self, point: Point) -> Vec<Action> {
        let action = self.publish(PresencePatch::cursor(point));
        self.cursor.press();
        vec![action]
    }

    /// Pointer left the surface: hide everything, locally and remotely.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.set_state(CursorState::Hidden);
        vec![self.publish(PresencePatch::clear_all())]
    }

    // --- Keyboard ---

    /// Whether the browser default for this key-down should be suppressed.
    #[must_use]
    pub fn on_key_down(&self, key: &str) -> bool {
        key == self.config.chat_key
    }

    /// Apply the mode transition bound to a released key.
    pub fn on_key_up(&mut self, key: &str) -> Vec<Action> {
        if key == ESCAPE_KEY {
            return self.leave_to_hidden();
        }
        if key == self.config.chat_key {
            self.open_chat();
        } else if key == self.config.reaction_key {
            self.open_reaction_selector();
        }
        Vec::new()
    }

    // --- Menu / picker ---

    pub fn on_context_menu(&mut self, action: ContextAction) -> Vec<Action> {
        match action {
            ContextAction::Chat => {
                self.open_chat();
                Vec::new()
            }
            ContextAction::Reactions => {
                self.open_reaction_selector();
                Vec::new()
            }
            ContextAction::Undo => vec![Action::Undo],
            ContextAction::Redo => vec![Action::Redo],
        }
    }

    /// Dispatch a context menu item by its label. Unknown labels do nothing.
    pub fn on_context_menu_item(&mut self, name: &str) -> Vec<Action> {
        match ContextAction::from_name(name) {
            Some(action) => self.on_context_menu(action),
            None => {
                log::warn!("ignoring unknown context menu item {name:?}");
                Vec::new()
            }
        }
    }

    pub fn open_chat(&mut self) {
        self.set_state(CursorState::chat());
    }

    pub fn open_reaction_selector(&mut self) {
        self.set_state(CursorState::ReactionSelector);
    }

    /// Arm a reaction glyph, unpressed. Re-selecting resets the press.
    pub fn select_reaction(&mut self, glyph: &str) {
        self.set_state(CursorState::reaction(glyph));
    }

    // --- Chat box ---

    /// The chat input changed. Publishes the (length-capped) text.
    pub fn chat_input(&mut self, text: &str) -> Vec<Action> {
        if !self.cursor.is_chat() {
            return Vec::new();
        }
        let message: String = text.chars().take(self.config.chat_max_len).collect();
        self.cursor = CursorState::Chat { previous_message: None, message: message.clone() };
        vec![self.publish(PresencePatch::message(message))]
    }

    /// Key pressed inside the chat input.
    ///
    /// `Enter` commits the message above the input; `Escape` closes chat.
    pub fn chat_key(&mut self, key: &str) -> Vec<Action> {
        if key == ESCAPE_KEY {
            return self.leave_to_hidden();
        }
        if key != ENTER_KEY {
            return Vec::new();
        }
        if let CursorState::Chat { previous_message, message } = &mut self.cursor {
            if !message.is_empty() {
                *previous_message = Some(std::mem::take(message));
            }
        }
        Vec::new()
    }

    // --- Timers ---

    /// Decay sweep. Returns the number of records dropped.
    pub fn decay_tick(&mut self, now_ms: f64) -> usize {
        self.reactions.prune(now_ms)
    }

    /// Broadcast tick: emit the pressed reaction at the local cursor.
    ///
    /// Produces exactly one record and one broadcast when a reaction is
    /// pressed and the cursor is on the surface, nothing otherwise.
    pub fn broadcast_tick(&mut self, now_ms: f64) -> Vec<Action> {
        let (Some(glyph), Some(point)) = (self.cursor.pressed_reaction(), self.presence.cursor) else {
            return Vec::new();
        };
        let glyph = glyph.to_owned();
        self.reactions.push(point, glyph.clone(), now_ms);
        vec![Action::Broadcast(ReactionEvent::new(point, glyph))]
    }

    // --- Room input ---

    /// A reaction arrived from another participant. Stamped with local time.
    pub fn receive_broadcast(&mut self, event: &ReactionEvent, now_ms: f64) {
        self.reactions.receive(event, now_ms);
    }

    /// Full presence, for republishing after a reconnect.
    #[must_use]
    pub fn presence_snapshot(&self) -> Action {
        Action::UpdatePresence(PresencePatch::from_presence(&self.presence))
    }

    // --- Internals ---

    fn leave_to_hidden(&mut self) -> Vec<Action> {
        if self.cursor.is_hidden() {
            return Vec::new();
        }
        self.set_state(CursorState::Hidden);
        vec![self.publish(PresencePatch::clear_message())]
    }

    fn publish(&mut self, patch: PresencePatch) -> Action {
        self.presence.apply(&patch);
        Action::UpdatePresence(patch)
    }

    fn set_state(&mut self, next: CursorState) {
        if self.cursor.label() != next.label() {
            log::debug!("cursor mode {} -> {}", self.cursor.label(), next.label());
        }
        self.cursor = next;
    }
}
