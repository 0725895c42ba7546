//! Wall-clock milliseconds for reaction timestamps.

/// Milliseconds since the Unix epoch on this client.
#[cfg(feature = "csr")]
#[must_use]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the Unix epoch on this client.
#[cfg(not(feature = "csr"))]
#[must_use]
pub fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0.0, |elapsed| elapsed.as_secs_f64() * 1000.0)
}
