//! Error types for configuration loading and wire decoding.

/// Configuration rejected during parsing or validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be deserialized.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// No cursor colors were configured.
    #[error("cursor palette is empty")]
    EmptyPalette,

    /// No reaction glyphs were configured.
    #[error("reaction list is empty")]
    EmptyReactions,

    /// A timer period was zero.
    #[error("{field} must be greater than zero")]
    ZeroInterval { field: &'static str },

    /// The reaction lifetime was zero, negative, or not finite.
    #[error("reaction_ttl_ms must be a positive number, got {0}")]
    InvalidTtl(f64),

    /// A key binding was blank.
    #[error("{field} must not be empty")]
    EmptyKey { field: &'static str },

    /// Two actions were bound to the same key.
    #[error("key {key:?} is bound to both chat and reactions")]
    KeyConflict { key: String },
}

/// A websocket text frame that is not a known service message.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The frame was not valid JSON or did not match any message shape.
    #[error("failed to decode service message: {0}")]
    Decode(#[from] serde_json::Error),
}
