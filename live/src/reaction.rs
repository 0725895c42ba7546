//! Reaction records, broadcast events, and the decaying reaction log.
//!
//! DESIGN
//! ======
//! Records are stamped with the local clock when they enter the log, whether
//! they were produced here or received from another participant. Decay is
//! therefore measured on the receiver's clock; sender timestamps are never
//! consulted.

#[cfg(test)]
#[path = "reaction_test.rs"]
mod reaction_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{REACTION_ANIMATION_VARIANTS, REACTION_TTL_MS};
use crate::presence::Point;

/// Wire payload broadcast to every other participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionEvent {
    pub x: f64,
    pub y: f64,
    pub value: String,
}

impl ReactionEvent {
    #[must_use]
    pub fn new(point: Point, value: impl Into<String>) -> Self {
        Self { x: point.x, y: point.y, value: value.into() }
    }

    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One flying reaction on the local surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionRecord {
    /// Render key; timestamps alone may collide within a millisecond.
    pub id: Uuid,
    pub point: Point,
    pub value: String,
    /// Local time the record entered the log, in milliseconds.
    pub timestamp_ms: f64,
}

impl ReactionRecord {
    /// Which of the rise animations this record plays.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn animation_variant(&self) -> u64 {
        (self.timestamp_ms.max(0.0) as u64) % REACTION_ANIMATION_VARIANTS
    }
}

/// Time-ordered list of live reaction records.
#[derive(Debug, Clone)]
pub struct ReactionLog {
    records: Vec<ReactionRecord>,
    ttl_ms: f64,
}

impl Default for ReactionLog {
    fn default() -> Self {
        Self::new(REACTION_TTL_MS)
    }
}

impl ReactionLog {
    #[must_use]
    pub fn new(ttl_ms: f64) -> Self {
        Self { records: Vec::new(), ttl_ms }
    }

    #[must_use]
    pub fn ttl_ms(&self) -> f64 {
        self.ttl_ms
    }

    /// Append a record stamped with `now_ms`.
    pub fn push(&mut self, point: Point, value: impl Into<String>, now_ms: f64) -> &ReactionRecord {
        self.records.push(ReactionRecord { id: Uuid::new_v4(), point, value: value.into(), timestamp_ms: now_ms });
        &self.records[self.records.len() - 1]
    }

    /// Append a record for an event received from another participant.
    pub fn receive(&mut self, event: &ReactionEvent, now_ms: f64) -> &ReactionRecord {
        self.push(event.point(), event.value.clone(), now_ms)
    }

    /// Drop every record at or past its lifetime. Returns how many went.
    pub fn prune(&mut self, now_ms: f64) -> usize {
        let before = self.records.len();
        let ttl_ms = self.ttl_ms;
        self.records.retain(|record| is_alive(record, now_ms, ttl_ms));
        before - self.records.len()
    }

    /// Records young enough to draw at `now_ms`.
    ///
    /// Filters independently of [`Self::prune`], so anything computed
    /// between two sweeps skips records that have since expired. A view that
    /// only recomputes on sweeps still holds an expired record until the
    /// next sweep drops it.
    pub fn visible(&self, now_ms: f64) -> impl Iterator<Item = &ReactionRecord> {
        let ttl_ms = self.ttl_ms;
        self.records.iter().filter(move |record| is_alive(record, now_ms, ttl_ms))
    }

    #[must_use]
    pub fn records(&self) -> &[ReactionRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn is_alive(record: &ReactionRecord, now_ms: f64, ttl_ms: f64) -> bool {
    record.timestamp_ms > now_ms - ttl_ms
}
