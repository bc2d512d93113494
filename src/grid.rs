//! The tile matrix: a flat arena plus index-derived neighbor lookup.
//!
//! Per DESIGN.md, neighbor "back-references" are never stored on a tile;
//! they are computed from `(x, y)` against `width`/`height` each time they
//! are asked for. This keeps the grid a plain `Vec<Tile>` with no interior
//! cycles, while still presenting the same neighbor semantics the spec
//! describes (a direction is absent iff the neighbor would fall outside the
//! grid, and mutating a tile is observed by anyone re-fetching it by
//! coordinate, since there is exactly one canonical tile per coordinate).

use crate::coords::{Direction, Point};
use crate::error::DungeonError;
use crate::tile::{Tile, TileType};

/// `width x height` matrix of tiles, indexed `tiles[y * width + x]`.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Allocates a `width x height` grid with every tile set to `tile_type`.
    pub fn fill(width: i32, height: i32, tile_type: TileType) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        let mut tiles = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let mut t = Tile::wall(x, y);
                t.tile_type = tile_type;
                tiles.push(t);
            }
        }
        Self { width, height, tiles }
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    fn index(&self, p: Point) -> Option<usize> {
        self.in_bounds(p).then(|| (p.y * self.width + p.x) as usize)
    }

    /// Fetches a tile by coordinate, or `None` if out of bounds.
    pub fn get(&self, p: Point) -> Option<&Tile> {
        self.index(p).map(|i| &self.tiles[i])
    }

    /// Fetches a tile mutably by coordinate, or `None` if out of bounds.
    pub fn get_mut(&mut self, p: Point) -> Option<&mut Tile> {
        self.index(p).map(move |i| &mut self.tiles[i])
    }

    /// The `getTile(x, y)` accessor from spec §6: fails instead of panicking
    /// on out-of-range coordinates.
    pub fn get_tile(&self, x: i32, y: i32) -> Result<&Tile, DungeonError> {
        self.get(Point::new(x, y))
            .ok_or(DungeonError::OutOfRangeTile { x, y })
    }

    /// The neighboring point in `dir`, if it lies within the grid.
    pub fn neighbor_point(&self, p: Point, dir: Direction) -> Option<Point> {
        let n = p.neighbor(dir);
        self.in_bounds(n).then_some(n)
    }

    /// The in-bounds subset of `p`'s neighbors among `dirs`, paired with the
    /// direction that produced them.
    pub fn neighbors<'a>(
        &'a self,
        p: Point,
        dirs: &'a [Direction],
    ) -> impl Iterator<Item = (Direction, Point)> + 'a {
        dirs.iter()
            .filter_map(move |&d| self.neighbor_point(p, d).map(|n| (d, n)))
    }

    /// Iterates over every tile in the grid, row-major.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Iterates over every point on the odd lattice (spec §3 I6): the
    /// coordinates maze growth is allowed to start from or carve onto.
    pub fn odd_lattice_points(&self) -> impl Iterator<Item = Point> + '_ {
        (1..self.height)
            .step_by(2)
            .flat_map(move |y| (1..self.width).step_by(2).map(move |x| Point::new(x, y)))
    }
}
