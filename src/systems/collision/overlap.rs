use crate::rigid_body::Body;

/// AABB overlap test. Edges that exactly touch count as overlapping.
#[inline]
pub fn overlaps(a: &Body, b: &Body) -> bool {
    !(a.bottom() < b.top() || a.top() > b.bottom() || a.right() < b.left() || a.left() > b.right())
}

/// Strict interior overlap: true only when the rectangles share area.
#[inline]
pub fn penetrates(a: &Body, b: &Body) -> bool {
    a.bottom() > b.top() && a.top() < b.bottom() && a.right() > b.left() && a.left() < b.right()
}
