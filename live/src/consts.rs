//! Shared defaults for the live surface.

// ── Keys ────────────────────────────────────────────────────────

/// Key that opens the cursor chat box.
pub const DEFAULT_CHAT_KEY: &str = "/";

/// Key that opens the reaction picker.
pub const DEFAULT_REACTION_KEY: &str = "e";

/// Key that leaves chat (and any other active mode).
pub const ESCAPE_KEY: &str = "Escape";

/// Key that commits the current chat message.
pub const ENTER_KEY: &str = "Enter";

// ── Timing ──────────────────────────────────────────────────────

/// Lifetime of a reaction record before it stops rendering.
pub const REACTION_TTL_MS: f64 = 4000.0;

/// Period of the reaction decay sweep.
pub const DECAY_INTERVAL_MS: u32 = 1000;

/// Period of the pressed-reaction broadcast.
pub const BROADCAST_INTERVAL_MS: u32 = 100;

// ── Chat ────────────────────────────────────────────────────────

/// Maximum number of characters in a cursor chat message.
pub const CHAT_MAX_LEN: usize = 60;

// ── Palettes ────────────────────────────────────────────────────

/// Cursor colors, indexed by connection id modulo length.
pub const CURSOR_COLORS: [&str; 5] = ["#DC2626", "#D97706", "#059669", "#7C3AED", "#DB2777"];

/// Glyphs offered by the reaction picker.
pub const REACTION_GLYPHS: [&str; 6] = ["👍", "🔥", "😍", "👀", "😱", "🙁"];

/// Number of rise animations a flying reaction chooses between.
pub const REACTION_ANIMATION_VARIANTS: u64 = 3;

// ── Avatars ─────────────────────────────────────────────────────

/// Number of hosted placeholder avatars.
pub const AVATAR_COUNT: u32 = 30;

/// Base URL of the hosted placeholder avatars.
pub const AVATAR_BASE_URL: &str = "https://liveblocks.io/avatars";
