//! JSON messages exchanged with the realtime service.
//!
//! DESIGN
//! ======
//! One websocket text frame carries one message, tagged by `type`. The
//! client only ever publishes its own presence patches and reaction
//! broadcasts; everything about other participants arrives from the service.

#[cfg(test)]
#[path = "protocol_test.rs"]
mod protocol_test;

use serde::{Deserialize, Serialize};

pub use crate::error::ProtocolError;
use crate::presence::{ConnectionId, Other, Presence, PresencePatch};
use crate::reaction::ReactionEvent;

/// Messages sent from this client to the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Merge a partial update into the local participant's presence.
    Presence { patch: PresencePatch },
    /// Fan a reaction out to every other participant.
    Broadcast { event: ReactionEvent },
}

/// Messages delivered by the service to this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Sent once per connection with this client's identifier.
    Welcome { connection_id: ConnectionId },
    /// Full list of the other participants.
    Roster {
        #[serde(default)]
        others: Vec<Other>,
    },
    /// One participant's complete presence after an update.
    Presence { connection_id: ConnectionId, presence: Presence },
    /// A participant left the room.
    Leave { connection_id: ConnectionId },
    /// A broadcast from another participant.
    Event { connection_id: ConnectionId, event: ReactionEvent },
}

impl ClientMessage {
    /// Serialize to a websocket text frame.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl ServerMessage {
    /// Parse a websocket text frame.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Decode`] for anything that is not a known
    /// message.
    pub fn decode(raw: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(raw)?)
    }
}
