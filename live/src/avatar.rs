//! Placeholder avatars and the header avatar stack.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::consts::{AVATAR_BASE_URL, AVATAR_COUNT};
use crate::presence::ConnectionId;

/// Number of other participants shown before collapsing into `+N`.
pub const STACK_VISIBLE: usize = 3;

/// Hosted placeholder image for `index`, wrapped into the fixed set.
#[must_use]
pub fn avatar_url(index: u32) -> String {
    format!("{AVATAR_BASE_URL}/avatar-{}.png", index % AVATAR_COUNT)
}

pub fn random_index<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(0..AVATAR_COUNT)
}

/// Source of placeholder picks for one page.
///
/// Seeded once by the caller; the browser has no OS entropy to draw from.
#[derive(Debug, Clone)]
pub struct AvatarPicker {
    rng: StdRng,
}

impl AvatarPicker {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn next_index(&mut self) -> u32 {
        random_index(&mut self.rng)
    }
}

/// Tooltip name for a participant.
#[must_use]
pub fn display_name(connection_id: ConnectionId) -> String {
    format!("User {}", connection_id.0)
}

/// What the header stack draws: the first few others and an overflow count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackLayout {
    pub shown: Vec<ConnectionId>,
    pub overflow: usize,
}

#[must_use]
pub fn stack_layout(ids: &[ConnectionId]) -> StackLayout {
    let shown: Vec<ConnectionId> = ids.iter().copied().take(STACK_VISIBLE).collect();
    let overflow = ids.len() - shown.len();
    StackLayout { shown, overflow }
}
