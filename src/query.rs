//! Fluent neighbor query: an immutable filter descripter over a grid,
//! materialized in one `get()` call (spec §4.2, design note in spec §9).
//!
//! Each builder method consumes `self` and returns a new descriptor rather
//! than mutating hidden state, so a query can be built up, branched, and
//! reused without surprises. The result never includes the start tile,
//! never repeats a tile, and never leaves the grid.

use crate::coords::{Direction, Point};
use crate::grid::Grid;
use crate::tile::TileType;
use std::collections::{HashSet, VecDeque};

#[derive(Clone, Copy)]
enum TypeFilter {
    Is(TileType),
    IsNot(TileType),
}

#[derive(Clone, Copy)]
enum RegionFilter {
    Is(i32),
    IsNot(i32),
}

/// A fluent, immutable descriptor for a neighbor traversal.
#[derive(Clone)]
pub struct NeighborQuery<'a> {
    grid: &'a Grid,
    start: Point,
    dirs: &'static [Direction],
    levels: usize,
    type_filter: Option<TypeFilter>,
    region_filter: Option<RegionFilter>,
    unique_by_region: bool,
}

impl<'a> NeighborQuery<'a> {
    /// A new query rooted at `start`, defaulting to cardinal neighbors at
    /// level 1 (spec §4.2's stated default).
    pub fn new(grid: &'a Grid, start: Point) -> Self {
        Self {
            grid,
            start,
            dirs: &Direction::CARDINAL,
            levels: 1,
            type_filter: None,
            region_filter: None,
            unique_by_region: false,
        }
    }

    /// Restrict traversal to the four cardinal directions (the default).
    pub fn cardinal(mut self) -> Self {
        self.dirs = &Direction::CARDINAL;
        self
    }

    /// Restrict traversal to the four diagonal directions.
    pub fn intercardinal(mut self) -> Self {
        self.dirs = &Direction::INTERCARDINAL;
        self
    }

    /// Sets the BFS radius. `0` means unlimited: flood outward through
    /// tiles that keep matching the active filters.
    pub fn levels(mut self, k: usize) -> Self {
        self.levels = k;
        self
    }

    /// Keep only tiles whose type is exactly `t`.
    pub fn type_is(mut self, t: TileType) -> Self {
        self.type_filter = Some(TypeFilter::Is(t));
        self
    }

    /// Keep only tiles whose type differs from `t`.
    pub fn not_type(mut self, t: TileType) -> Self {
        self.type_filter = Some(TypeFilter::IsNot(t));
        self
    }

    /// Keep only tiles whose region is exactly `r`.
    pub fn region(mut self, r: i32) -> Self {
        self.region_filter = Some(RegionFilter::Is(r));
        self
    }

    /// Keep only tiles whose region differs from `r`.
    pub fn not_region(mut self, r: i32) -> Self {
        self.region_filter = Some(RegionFilter::IsNot(r));
        self
    }

    /// Collapse the result to at most one tile per distinct region id.
    pub fn unique_region(mut self) -> Self {
        self.unique_by_region = true;
        self
    }

    /// Overrides the start tile.
    pub fn start(mut self, p: Point) -> Self {
        self.start = p;
        self
    }

    fn passes_filters(&self, p: Point) -> bool {
        let Some(tile) = self.grid.get(p) else {
            return false;
        };
        let type_ok = match self.type_filter {
            None => true,
            Some(TypeFilter::Is(t)) => tile.tile_type == t,
            Some(TypeFilter::IsNot(t)) => tile.tile_type != t,
        };
        let region_ok = match self.region_filter {
            None => true,
            Some(RegionFilter::Is(r)) => tile.region == r,
            Some(RegionFilter::IsNot(r)) => tile.region != r,
        };
        type_ok && region_ok
    }

    /// Materializes the query into the matching points, in traversal order.
    pub fn get(&self) -> Vec<Point> {
        let mut visited: HashSet<Point> = HashSet::new();
        visited.insert(self.start);
        let mut queue: VecDeque<(Point, usize)> = VecDeque::new();
        queue.push_back((self.start, 0));

        let mut result = Vec::new();
        let mut seen_regions: HashSet<i32> = HashSet::new();
        let unbounded = self.levels == 0;

        while let Some((p, depth)) = queue.pop_front() {
            for (_, n) in self.grid.neighbors(p, self.dirs) {
                if visited.contains(&n) {
                    continue;
                }
                visited.insert(n);

                let matches = self.passes_filters(n);
                let within_radius = unbounded || depth + 1 <= self.levels;

                if matches && within_radius {
                    if self.unique_by_region {
                        let region = self.grid.get(n).map(|t| t.region).unwrap_or(-1);
                        if seen_regions.contains(&region) {
                            continue;
                        }
                        seen_regions.insert(region);
                    }
                    result.push(n);
                }

                // Unbounded flood only keeps expanding through tiles that
                // themselves matched; a bounded radius keeps expanding
                // regardless, since `levels` is a pure distance bound.
                let should_expand = if unbounded {
                    matches
                } else {
                    depth + 1 < self.levels
                };
                if should_expand {
                    queue.push_back((n, depth + 1));
                }
            }
        }

        result
    }
}
