//! Grid coordinates, cardinal offsets, and the eight compass directions.

use std::fmt;
use std::str::FromStr;

/// The four cardinal unit offsets, in the fixed order north, east, south,
/// west. Several stages (maze growth, connector search, dead-end removal)
/// depend on this exact order for draw-count parity across refactors.
pub const CARDINAL_OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// One of the eight compass directions a tile may have a neighbor in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl Direction {
    /// All eight directions, in compass order starting at north.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::Ne,
        Direction::E,
        Direction::Se,
        Direction::S,
        Direction::Sw,
        Direction::W,
        Direction::Nw,
    ];

    /// The four cardinal directions, in the fixed n/e/s/w order.
    pub const CARDINAL: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    /// The four intercardinal (diagonal) directions.
    pub const INTERCARDINAL: [Direction; 4] =
        [Direction::Ne, Direction::Se, Direction::Sw, Direction::Nw];

    /// Unit `(dx, dy)` offset for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::N => (0, -1),
            Direction::Ne => (1, -1),
            Direction::E => (1, 0),
            Direction::Se => (1, 1),
            Direction::S => (0, 1),
            Direction::Sw => (-1, 1),
            Direction::W => (-1, 0),
            Direction::Nw => (-1, -1),
        }
    }

    /// True for the four cardinal directions (n/e/s/w).
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Direction::N | Direction::E | Direction::S | Direction::W)
    }
}

/// A grid coordinate. Never negative once placed on the grid, but kept as
/// `i32` so intermediate arithmetic (offsets, lattice math) can go negative
/// without wrapping before a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point offset by `(dx, dy)` scaled by `steps`.
    pub const fn step(self, dx: i32, dy: i32, steps: i32) -> Point {
        Point::new(self.x + dx * steps, self.y + dy * steps)
    }

    /// Returns the neighboring point in `dir`, one step away.
    pub fn neighbor(self, dir: Direction) -> Point {
        let (dx, dy) = dir.offset();
        self.step(dx, dy, 1)
    }
}

impl fmt::Display for Point {
    /// The tile string form from spec §6: `"x,y"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Error returned when a string does not parse as `"x,y"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePointError;

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a point in \"x,y\" form")
    }
}

impl std::error::Error for ParsePointError {}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x_str, y_str) = s.split_once(',').ok_or(ParsePointError)?;
        let x = x_str.trim().parse().map_err(|_| ParsePointError)?;
        let y = y_str.trim().parse().map_err(|_| ParsePointError)?;
        Ok(Point::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_order_is_fixed() {
        assert_eq!(CARDINAL_OFFSETS, [(0, -1), (1, 0), (0, 1), (-1, 0)]);
        assert_eq!(
            Direction::CARDINAL.map(Direction::offset),
            [(0, -1), (1, 0), (0, 1), (-1, 0)]
        );
    }

    #[test]
    fn point_parses_and_displays() {
        let p: Point = "3,7".parse().unwrap();
        assert_eq!(p, Point::new(3, 7));
        assert_eq!(p.to_string(), "3,7");
    }

    #[test]
    fn point_parse_rejects_garbage() {
        assert!("nope".parse::<Point>().is_err());
        assert!("3".parse::<Point>().is_err());
    }

    #[test]
    fn neighbor_uses_direction_offset() {
        let p = Point::new(5, 5);
        assert_eq!(p.neighbor(Direction::N), Point::new(5, 4));
        assert_eq!(p.neighbor(Direction::Se), Point::new(6, 6));
    }
}
