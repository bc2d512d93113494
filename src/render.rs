//! ASCII preview of a generated dungeon.
//!
//! Grounded on the teacher's one-line `visualize::to_ascii` — a trivial
//! preview utility, not a rendering system. `shaft`/`stairs` are included
//! only for completeness; this pipeline never produces them.

use crate::dungeon::Results;
use crate::tile::TileType;

fn tile_char(t: TileType) -> char {
    match t {
        TileType::Wall => '#',
        TileType::Floor => '.',
        TileType::Door => '+',
        TileType::Shaft => '>',
        TileType::Stairs => '<',
    }
}

/// Renders `results` as a newline-separated ASCII grid.
pub fn to_ascii(results: &Results) -> String {
    let mut out = String::with_capacity(((results.width() + 1) * results.height()) as usize);
    for y in 0..results.height() {
        for x in 0..results.width() {
            let tile = results.get_tile(x, y).expect("in-bounds coordinate");
            out.push(tile_char(tile.tile_type));
        }
        if y + 1 < results.height() {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{generate, GeneratorOptions, StageRequest};

    #[test]
    fn renders_one_line_per_row() {
        let results =
            generate(&StageRequest::new(11, 7).with_seed("ascii"), &GeneratorOptions::default()).unwrap();
        let ascii = to_ascii(&results);
        let lines: Vec<&str> = ascii.lines().collect();
        assert_eq!(lines.len() as i32, results.height());
        assert!(lines.iter().all(|l| l.chars().count() as i32 == results.width()));
    }
}
