//! Pointer coordinate mapping for the live surface.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use live::presence::Point;

/// Convert viewport coordinates into coordinates relative to the surface's
/// top-left corner.
#[must_use]
pub fn relative_point(client_x: f64, client_y: f64, origin_left: f64, origin_top: f64) -> Point {
    Point::new(client_x - origin_left, client_y - origin_top)
}

/// Whether any button is down according to a `PointerEvent::buttons` mask.
#[must_use]
pub fn button_held(buttons: u16) -> bool {
    buttons != 0
}

/// Surface-relative position of a mouse/pointer event.
#[cfg(feature = "csr")]
pub fn event_point(ev: &web_sys::MouseEvent, surface: &web_sys::Element) -> Point {
    let rect = surface.get_bounding_client_rect();
    relative_point(f64::from(ev.client_x()), f64::from(ev.client_y()), rect.left(), rect.top())
}
