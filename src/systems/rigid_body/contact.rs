use serde::Serialize;

use super::vec2::Axis;

/// A side of a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// The side facing this one on a neighbouring body.
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }

    /// Side lying on `axis`, at its max end when `max` is set (right / bottom).
    pub fn on_axis(axis: Axis, max: bool) -> Side {
        match (axis, max) {
            (Axis::X, false) => Side::Left,
            (Axis::X, true) => Side::Right,
            (Axis::Y, false) => Side::Top,
            (Axis::Y, true) => Side::Bottom,
        }
    }
}

/// Per-side contact markers, valid for the current step only.
///
/// `none` is true exactly when no side is marked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactFlags {
    pub none: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

pub const FLAG_NONE: u8 = 1;
pub const FLAG_TOP: u8 = 1 << 1;
pub const FLAG_RIGHT: u8 = 1 << 2;
pub const FLAG_BOTTOM: u8 = 1 << 3;
pub const FLAG_LEFT: u8 = 1 << 4;

impl ContactFlags {
    pub fn clear() -> Self {
        Self { none: true, top: false, right: false, bottom: false, left: false }
    }

    pub fn reset(&mut self) {
        *self = Self::clear();
    }

    pub fn mark(&mut self, side: Side) {
        match side {
            Side::Top => self.top = true,
            Side::Right => self.right = true,
            Side::Bottom => self.bottom = true,
            Side::Left => self.left = true,
        }
        self.none = false;
    }

    pub fn is_set(&self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Packed form for the JS side, see the `FLAG_*` constants.
    pub fn bits(&self) -> u8 {
        let mut bits = 0;
        if self.none { bits |= FLAG_NONE; }
        if self.top { bits |= FLAG_TOP; }
        if self.right { bits |= FLAG_RIGHT; }
        if self.bottom { bits |= FLAG_BOTTOM; }
        if self.left { bits |= FLAG_LEFT; }
        bits
    }
}

impl Default for ContactFlags {
    fn default() -> Self {
        Self::clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marking_a_side_clears_none() {
        let mut flags = ContactFlags::clear();
        assert_eq!(flags.bits(), FLAG_NONE);

        flags.mark(Side::Bottom);
        assert!(!flags.none);
        assert!(flags.is_set(Side::Bottom));
        assert_eq!(flags.bits(), FLAG_BOTTOM);

        flags.mark(Side::Left);
        assert_eq!(flags.bits(), FLAG_BOTTOM | FLAG_LEFT);

        flags.reset();
        assert_eq!(flags, ContactFlags::clear());
    }

    #[test]
    fn opposite_sides_pair_up() {
        assert_eq!(Side::Right.opposite(), Side::Left);
        assert_eq!(Side::Top.opposite(), Side::Bottom);
        assert_eq!(Side::on_axis(Axis::Y, true), Side::Bottom);
    }
}
