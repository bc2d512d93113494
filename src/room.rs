//! Axis-aligned rectangular rooms.

use serde::Serialize;

use crate::coords::Point;

/// A placed room. `width` and `height` are always odd so the room's
/// interior lines up with the odd maze lattice (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub const fn left(&self) -> i32 {
        self.x
    }
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }
    pub const fn top(&self) -> i32 {
        self.y
    }
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// True if the plain rectangles overlap (no inflation).
    pub const fn intersects(&self, other: &Room) -> bool {
        !(self.right() <= other.left()
            || other.right() <= self.left()
            || self.bottom() <= other.top()
            || other.bottom() <= self.top())
    }

    /// True when `self` and `other`, each inflated by 1 tile on every side,
    /// overlap — i.e. there would be no 1-wide wall separating them
    /// (spec §3 I5, §4.4 step 7).
    pub fn touches(&self, other: &Room) -> bool {
        let inflated = Room::new(self.x - 1, self.y - 1, self.width + 2, self.height + 2);
        inflated.intersects(other)
    }

    /// True if `p` lies within this room's interior.
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// Iterates over every interior coordinate, row-major.
    pub fn interior(&self) -> impl Iterator<Item = Point> + '_ {
        (self.top()..self.bottom())
            .flat_map(move |y| (self.left()..self.right()).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_wall_gap_does_not_touch() {
        // b starts exactly one tile past a's right edge: a real 1-wide wall
        // fits between them, so touches() must allow it even though they
        // don't intersect.
        let a = Room::new(1, 1, 3, 3);
        let b = Room::new(5, 1, 3, 3);
        assert!(!a.intersects(&b));
        assert!(!a.touches(&b));
    }

    #[test]
    fn zero_gap_rooms_touch() {
        // b starts immediately at a's right edge: no room for a wall between
        // them, so touches() must catch it even though intersects() would
        // not (the rectangles share a border, not an area).
        let a = Room::new(1, 1, 3, 3);
        let b = Room::new(4, 1, 3, 3);
        assert!(!a.intersects(&b));
        assert!(a.touches(&b));
    }

    #[test]
    fn distant_rooms_do_not_touch() {
        let a = Room::new(1, 1, 3, 3);
        let b = Room::new(10, 10, 3, 3);
        assert!(!a.touches(&b));
    }

    #[test]
    fn contains_checks_interior_bounds() {
        let r = Room::new(1, 1, 3, 3);
        assert!(r.contains(Point::new(1, 1)));
        assert!(r.contains(Point::new(3, 3)));
        assert!(!r.contains(Point::new(4, 1)));
        assert!(!r.contains(Point::new(0, 1)));
    }

    #[test]
    fn interior_yields_width_times_height_points() {
        let r = Room::new(1, 1, 3, 5);
        assert_eq!(r.interior().count(), 15);
    }
}
