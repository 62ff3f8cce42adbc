use backdrop_core::Size;
use glam::Vec2;

/// Backing-buffer size for an element measured in CSS pixels.
///
/// Fractional sizes are floored; negative or non-finite sizes give an empty
/// buffer rather than a bogus one.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64) -> Size {
    let px = |v: f64| {
        if v.is_finite() && v > 0.0 {
            v.floor().min(u32::MAX as f64) as u32
        } else {
            0
        }
    };
    Size::new(px(css_width), px(css_height))
}

/// Map a client-space pointer position into backing-buffer pixels, given the
/// canvas's on-screen rectangle.
#[inline]
pub fn client_to_canvas(client: Vec2, rect_origin: Vec2, rect_size: Vec2, backing: Size) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 && !backing.is_empty() {
        local * (backing.extent() / rect_size)
    } else {
        local
    }
}
