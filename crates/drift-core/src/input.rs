use glam::Vec2;

/// Map a viewport-space pointer position into surface (backing-pixel)
/// coordinates.
///
/// `rect_origin` and `rect_size` describe the surface's rendered box in
/// viewport space; `backing_size` is its pixel buffer. The per-axis scale
/// (backing / rendered) corrects for high-density displays where the two
/// differ. A degenerate rendered box maps to the origin.
#[inline]
pub fn pointer_to_surface(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    backing_size: Vec2,
) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    (client - rect_origin) * backing_size / rect_size
}
