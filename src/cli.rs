//! Command-line arguments for the `dungeon-grid` binary.

use clap::Parser;
use std::path::PathBuf;

use crate::dungeon::GeneratorOptions;

/// Command-line arguments for the dungeon generator.
#[derive(Debug, Parser, Clone)]
#[command(name = "dungeon-grid", version, about = "Seeded 2D grid dungeon generator")]
pub struct Args {
    /// Overall map width in tiles (before odd-rounding and multiplier)
    #[arg(long = "width", short = 'w', default_value_t = 51, help = "Overall map width in tiles")]
    pub width: i32,

    // Note: avoid -h because it's reserved for help
    /// Overall map height in tiles (before odd-rounding and multiplier)
    #[arg(long = "height", short = 'H', default_value_t = 31, help = "Overall map height in tiles")]
    pub height: i32,

    /// Seed string for reproducible dungeons
    #[arg(long = "seed", short = 's', help = "Seed string for reproducible dungeons")]
    pub seed: Option<String>,

    /// Chance, 1-in-N, that a borderline connector becomes a door
    #[arg(long = "door-chance", default_value_t = 50, help = "1-in-N chance a connector becomes a door")]
    pub door_chance: i32,

    /// Maximum doors carved per connector bucket
    #[arg(long = "max-doors", default_value_t = 5, help = "Max doors per connector bucket")]
    pub max_doors: i32,

    /// Number of room placement attempts
    #[arg(long = "room-tries", short = 'r', default_value_t = 50, help = "Number of room placement attempts")]
    pub room_tries: i32,

    /// Extra room size bias (larger values allow bigger rooms)
    #[arg(long = "room-extra-size", default_value_t = 0, help = "Extra room size bias")]
    pub room_extra_size: i32,

    /// Chance (0-100) that maze growth turns instead of keeping its
    /// previous direction: higher values produce windier corridors
    #[arg(
        long = "winding-percent",
        default_value_t = 50,
        help = "Chance (0-100) a corridor turns instead of going straight; higher = windier"
    )]
    pub winding_percent: i32,

    /// Scales both effective dimensions after odd-rounding
    #[arg(long = "multiplier", default_value_t = 1, help = "Dimension multiplier")]
    pub multiplier: i32,

    /// Prune corridor dead ends after generation
    #[arg(long = "remove-dead-ends", default_value_t = false, help = "Prune corridor dead ends")]
    pub remove_dead_ends: bool,

    /// File path to write the generated dungeon as JSON
    #[arg(long = "json-path", short = 'o', help = "Write dungeon to JSON file path")]
    pub json_path: Option<PathBuf>,

    /// Also print JSON to stdout
    #[arg(long = "print-json", default_value_t = false, help = "Print JSON to stdout")]
    pub print_json: bool,

    /// Disable the ASCII preview in stdout
    #[arg(long = "no-ascii", default_value_t = false, help = "Disable ASCII preview")]
    pub no_ascii: bool,
}

impl From<&Args> for GeneratorOptions {
    fn from(args: &Args) -> Self {
        Self {
            door_chance: args.door_chance,
            max_doors: args.max_doors,
            room_tries: args.room_tries,
            room_extra_size: args.room_extra_size,
            winding_percent: args.winding_percent,
            multiplier: args.multiplier,
            remove_dead_ends: args.remove_dead_ends,
        }
    }
}
