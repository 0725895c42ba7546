//! Browser-independent core of the live board surface.
//!
//! Everything here is plain Rust with no DOM dependency, so the interaction
//! rules can be exercised by ordinary unit tests. The Leptos crate at the
//! repository root owns the DOM, timers, and websocket; it feeds events into
//! [`engine::SurfaceCore`] and carries out the [`engine::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | `SurfaceCore`: pointer/key/timer handlers returning actions |
//! | [`cursor`] | The cursor interaction mode (`CursorState`) |
//! | [`reaction`] | Reaction records, broadcast events, and the decaying log |
//! | [`presence`] | Presence records, partial patches, remote cursor views |
//! | [`room`] | Room contract, local roster, in-process hub |
//! | [`protocol`] | JSON wire messages exchanged with the realtime service |
//! | [`shortcuts`] | Context menu shortcut descriptors |
//! | [`avatar`] | Placeholder avatar selection |
//! | [`config`] | `SurfaceConfig` and its validation |
//! | [`error`] | Configuration and wire decode errors |
//! | [`consts`] | Shared defaults (timings, palette, glyphs) |

pub mod avatar;
pub mod config;
pub mod consts;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod presence;
pub mod protocol;
pub mod reaction;
pub mod room;
pub mod shortcuts;
