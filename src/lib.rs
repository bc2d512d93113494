//! # dungeon-grid
//!
//! Seeded procedural generation of 2D grid dungeons: a rectangular tile
//! matrix partitioned into rooms connected by winding maze corridors and
//! joined through doors, reproducible bit-for-bit from a seed string.
//!
//! ## Quick start
//!
//! ```rust
//! use dungeon_grid::{generate, GeneratorOptions, StageRequest};
//!
//! let stage = StageRequest::new(41, 21).with_seed("west-tower");
//! let results = generate(&stage, &GeneratorOptions::default()).unwrap();
//! println!("placed {} rooms", results.rooms.len());
//! ```
//!
//! ## Pipeline
//!
//! `fill -> add_rooms -> grow_maze * N -> connect_regions -> remove_dead_ends?`
//!
//! Room placement rejects overlapping candidates, maze growth fills the
//! remaining odd-coordinate lattice with winding corridors, region
//! connection carves doors so every region is reachable, and dead-end
//! pruning (opt-in) trims corridor stubs that lead nowhere.
//!
//! Out of scope for this core: public option-defaulting factories, result
//! serialization formats beyond the documented tile shape, logging sinks,
//! and a caller-facing fluent neighbor-query surface beyond the predicates
//! the pipeline itself uses (see [`query`]).

#[cfg(feature = "cli")]
pub mod cli;

pub mod coords;
pub mod dungeon;
pub mod error;
pub mod grid;
pub mod query;
pub mod region;
pub mod render;
pub mod rng;
pub mod room;
pub mod tile;

pub use coords::{Direction, Point};
pub use dungeon::{generate, GeneratorOptions, Results, StageRequest};
pub use error::{DungeonError, Result};
pub use query::NeighborQuery;
pub use region::{Region, RegionRegistry};
pub use render::to_ascii;
pub use room::Room;
pub use tile::{RegionType, Tile, TileType};
