//! Page-supplied configuration.
//!
//! The host page may embed
//! `<script type="application/json" id="live-board-config">{...}</script>`.
//! Anything missing or invalid falls back to defaults with a console warning
//! so a bad config never blanks the surface.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use live::config::SurfaceConfig;

/// DOM id of the optional JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "live-board-config";

/// Path appended to the page host when no room URL was baked in.
pub const ROOM_PATH: &str = "/room";

/// Parse the embedded config text, falling back to defaults.
#[must_use]
pub fn config_from_text(raw: Option<&str>) -> SurfaceConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return SurfaceConfig::default();
    };
    match SurfaceConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("ignoring live-board config: {e}");
            SurfaceConfig::default()
        }
    }
}

/// Websocket URL for the room.
///
/// An explicit override wins; otherwise the page's own host is used, with
/// `wss` when the page was served over `https`.
#[must_use]
pub fn room_url(override_url: Option<&str>, page_protocol: &str, host: &str) -> String {
    if let Some(url) = override_url.filter(|url| !url.is_empty()) {
        return url.to_owned();
    }
    let scheme = if page_protocol.starts_with("https") { "wss" } else { "ws" };
    format!("{scheme}://{host}{ROOM_PATH}")
}

/// Read the config element from the current document.
#[cfg(feature = "csr")]
pub fn load_config() -> SurfaceConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    config_from_text(text.as_deref())
}

/// Room URL from the `LIVE_ROOM_URL` build variable or the page location.
#[cfg(feature = "csr")]
pub fn load_room_url() -> String {
    let location = web_sys::window().map(|w| w.location());
    let protocol = location
        .as_ref()
        .and_then(|l| l.protocol().ok())
        .unwrap_or_default();
    let host = location
        .as_ref()
        .and_then(|l| l.host().ok())
        .unwrap_or_else(|| "localhost:3000".to_owned());
    room_url(option_env!("LIVE_ROOM_URL"), &protocol, &host)
}
