//! Presence records and the remote cursor projection.
//!
//! A participant's presence is owned by the realtime service. Remote
//! presence is read-only here; the local participant edits its own presence
//! only through [`PresencePatch`] values, which merge field by field.

#[cfg(test)]
#[path = "presence_test.rs"]
mod presence_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A 2D point in surface-relative CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Per-participant session identifier assigned by the realtime service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(pub u32);

/// Ephemeral, externally synchronized state of one participant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Presence {
    /// Pointer position on the surface, or `None` when off-surface.
    #[serde(default)]
    pub cursor: Option<Point>,
    /// Chat message shown next to the cursor.
    #[serde(default)]
    pub message: Option<String>,
}

impl Presence {
    /// Merge a partial update into this presence.
    pub fn apply(&mut self, patch: &PresencePatch) {
        if let Some(cursor) = patch.cursor {
            self.cursor = cursor;
        }
        if let Some(message) = &patch.message {
            self.message.clone_from(message);
        }
    }

    /// The message to draw in a cursor bubble, if it has any text.
    #[must_use]
    pub fn visible_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

/// Partial presence update.
///
/// For each field, `None` keeps the current value, `Some(None)` clears it,
/// and `Some(Some(v))` sets it. On the wire an absent key keeps, `null`
/// clears.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PresencePatch {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_present")]
    pub cursor: Option<Option<Point>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_present")]
    pub message: Option<Option<String>>,
}

impl PresencePatch {
    #[must_use]
    pub fn cursor(point: Point) -> Self {
        Self { cursor: Some(Some(point)), message: None }
    }

    #[must_use]
    pub fn message(text: impl Into<String>) -> Self {
        Self { cursor: None, message: Some(Some(text.into())) }
    }

    #[must_use]
    pub fn clear_message() -> Self {
        Self { cursor: None, message: Some(None) }
    }

    /// Patch that hides the cursor and its message together.
    #[must_use]
    pub fn clear_all() -> Self {
        Self { cursor: Some(None), message: Some(None) }
    }

    /// A patch that replaces every field with the values of `presence`.
    #[must_use]
    pub fn from_presence(presence: &Presence) -> Self {
        Self { cursor: Some(presence.cursor), message: Some(presence.message.clone()) }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursor.is_none() && self.message.is_none()
    }
}

// Only called when the key is present, so a JSON `null` becomes `Some(None)`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// One entry of the live roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Other {
    pub connection_id: ConnectionId,
    #[serde(default)]
    pub presence: Presence,
}

/// Everything needed to draw one remote cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorView {
    pub connection_id: ConnectionId,
    pub color: String,
    pub point: Point,
    pub message: Option<String>,
}

/// Pick the cursor color for a connection: `palette[id mod len]`.
///
/// Returns `None` only for an empty palette.
#[must_use]
pub fn color_for_connection<S: AsRef<str>>(connection_id: ConnectionId, palette: &[S]) -> Option<&str> {
    if palette.is_empty() {
        return None;
    }
    let index = connection_id.0 as usize % palette.len();
    palette.get(index).map(AsRef::as_ref)
}

/// Project the roster into drawable remote cursors.
///
/// Participants without a cursor produce nothing, and `self_id` is skipped so
/// the local pointer is never drawn as a remote one.
#[must_use]
pub fn visible_cursors<S: AsRef<str>>(
    others: &[Other],
    self_id: Option<ConnectionId>,
    palette: &[S],
) -> Vec<CursorView> {
    others
        .iter()
        .filter(|other| Some(other.connection_id) != self_id)
        .filter_map(|other| {
            let point = other.presence.cursor?;
            let color = color_for_connection(other.connection_id, palette)?;
            Some(CursorView {
                connection_id: other.connection_id,
                color: color.to_owned(),
                point,
                message: other.presence.visible_message().map(str::to_owned),
            })
        })
        .collect()
}
