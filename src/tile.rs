//! Tile and region-type definitions.
//!
//! A [`Tile`] only stores its own attributes (position, type, region); its
//! neighborhood is a derived view computed by [`crate::grid::Grid`] from
//! `(x, y)`, not an owned back-reference map. Storing real references would
//! make the grid a cyclic structure; computing neighbor coordinates on
//! demand from the flat arena avoids that entirely (see DESIGN.md).

use serde::Serialize;

/// Sentinel region id meaning "no region".
pub const NO_REGION: i32 = -1;

/// The kind of cell a tile is.
///
/// Only `Wall`, `Floor`, and `Door` are produced by this pipeline; `Shaft`
/// and `Stairs` exist for downstream annotation and are never assigned here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TileType {
    Wall,
    Floor,
    Door,
    Shaft,
    Stairs,
}

impl TileType {
    /// Non-wall tiles carry a region; walls (outside transient connector
    /// tagging) never do. Doors are the one produced non-wall type left
    /// without a region id (spec §4.6) — callers that need "is this an
    /// open passage" should use this predicate rather than region presence.
    pub const fn is_passable(self) -> bool {
        matches!(self, TileType::Floor | TileType::Door)
    }
}

/// Whether a region originated from a room or from maze growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionType {
    Room,
    Corridor,
}

/// A single grid cell.
#[derive(Debug, Clone, Serialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "type")]
    pub tile_type: TileType,
    pub region: i32,
    pub region_type: Option<RegionType>,
}

impl Tile {
    /// A fresh wall tile at `(x, y)`, belonging to no region.
    pub const fn wall(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            tile_type: TileType::Wall,
            region: NO_REGION,
            region_type: None,
        }
    }

    /// Carves this tile to `Floor` and tags it with `region`/`region_type`.
    /// Asserts invariant I1: a floor tile always has a region.
    pub fn carve(&mut self, tile_type: TileType, region: i32, region_type: RegionType) {
        debug_assert!(region >= 0, "carved tiles must have a real region id");
        self.tile_type = tile_type;
        self.region = region;
        self.region_type = Some(region_type);
    }

    /// Resets this tile back to an untagged wall (used by dead-end removal).
    pub fn reset_to_wall(&mut self) {
        self.tile_type = TileType::Wall;
        self.region = NO_REGION;
        self.region_type = None;
    }

    /// Marks this tile as a door without assigning it a region, per
    /// spec §4.6 / DESIGN.md open question (c).
    pub fn make_door(&mut self) {
        self.tile_type = TileType::Door;
    }

    pub const fn is_wall(&self) -> bool {
        matches!(self.tile_type, TileType::Wall)
    }

    /// The `{ x, y, type }` shape described for serialization collaborators.
    pub fn to_tile_json(&self) -> TileJson {
        TileJson {
            x: self.x,
            y: self.y,
            tile_type: self.tile_type,
        }
    }
}

/// The minimal `{ x, y, type }` wire shape for serialization collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct TileJson {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "type")]
    pub tile_type: TileType,
}
