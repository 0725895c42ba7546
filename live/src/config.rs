//! Surface configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! The browser build may override any subset from a JSON block embedded in
//! the host page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BROADCAST_INTERVAL_MS, CHAT_MAX_LEN, CURSOR_COLORS, DECAY_INTERVAL_MS, DEFAULT_CHAT_KEY, DEFAULT_REACTION_KEY,
    REACTION_GLYPHS, REACTION_TTL_MS,
};
use crate::error::ConfigError;
use crate::shortcuts::{Shortcut, default_shortcuts};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Key that opens chat on key-up.
    pub chat_key: String,
    /// Key that opens the reaction picker on key-up.
    pub reaction_key: String,
    /// Reaction lifetime in milliseconds.
    pub reaction_ttl_ms: f64,
    /// Decay sweep period in milliseconds.
    pub decay_interval_ms: u32,
    /// Pressed-reaction broadcast period in milliseconds.
    pub broadcast_interval_ms: u32,
    /// Maximum chat message length in characters.
    pub chat_max_len: usize,
    /// Remote cursor colors.
    pub palette: Vec<String>,
    /// Glyphs offered by the reaction picker.
    pub reactions: Vec<String>,
    /// Context menu rows.
    pub shortcuts: Vec<Shortcut>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            chat_key: DEFAULT_CHAT_KEY.to_owned(),
            reaction_key: DEFAULT_REACTION_KEY.to_owned(),
            reaction_ttl_ms: REACTION_TTL_MS,
            decay_interval_ms: DECAY_INTERVAL_MS,
            broadcast_interval_ms: BROADCAST_INTERVAL_MS,
            chat_max_len: CHAT_MAX_LEN,
            palette: CURSOR_COLORS.iter().map(|c| (*c).to_owned()).collect(),
            reactions: REACTION_GLYPHS.iter().map(|g| (*g).to_owned()).collect(),
            shortcuts: default_shortcuts(),
        }
    }
}

impl SurfaceConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the matching
    /// validation variant for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the surface relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.reactions.is_empty() {
            return Err(ConfigError::EmptyReactions);
        }
        if self.decay_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval { field: "decay_interval_ms" });
        }
        if self.broadcast_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval { field: "broadcast_interval_ms" });
        }
        if !self.reaction_ttl_ms.is_finite() || self.reaction_ttl_ms <= 0.0 {
            return Err(ConfigError::InvalidTtl(self.reaction_ttl_ms));
        }
        if self.chat_key.is_empty() {
            return Err(ConfigError::EmptyKey { field: "chat_key" });
        }
        if self.reaction_key.is_empty() {
            return Err(ConfigError::EmptyKey { field: "reaction_key" });
        }
        if self.chat_key == self.reaction_key {
            return Err(ConfigError::KeyConflict { key: self.chat_key.clone() });
        }
        Ok(())
    }
}
