//! Room session state: who else is here and whether we are connected.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use live::presence::{ConnectionId, CursorView, Other, visible_cursors};
use live::protocol::ServerMessage;
use live::reaction::ReactionEvent;
use live::room::Roster;

/// WebSocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; socket is closed or not yet opened.
    #[default]
    Disconnected,
    /// WebSocket handshake is in progress.
    Connecting,
    /// WebSocket is open.
    Connected,
}

#[derive(Clone, Debug, Default)]
pub struct RoomState {
    /// Other participants as last reported by the service.
    pub roster: Roster,
    pub connection_status: ConnectionStatus,
}

impl RoomState {
    #[must_use]
    pub fn self_id(&self) -> Option<ConnectionId> {
        self.roster.self_id()
    }

    #[must_use]
    pub fn others(&self) -> Vec<Other> {
        self.roster.others()
    }

    /// Remote cursors to draw, colored from `palette`.
    #[must_use]
    pub fn cursor_views<S: AsRef<str>>(&self, palette: &[S]) -> Vec<CursorView> {
        visible_cursors(&self.roster.others(), self.roster.self_id(), palette)
    }

    /// Fold a service message into the roster, returning any reaction it carries.
    pub fn apply(&mut self, message: ServerMessage) -> Option<ReactionEvent> {
        self.roster.apply(message)
    }

    pub fn mark_connecting(&mut self) {
        self.connection_status = ConnectionStatus::Connecting;
    }

    /// A fresh socket starts from an empty roster; the service resends it.
    pub fn mark_connected(&mut self) {
        self.connection_status = ConnectionStatus::Connected;
        self.roster.reset();
    }

    /// Peers from a dead connection are stale and must not keep rendering.
    pub fn mark_disconnected(&mut self) {
        self.connection_status = ConnectionStatus::Disconnected;
        self.roster.reset();
    }
}
