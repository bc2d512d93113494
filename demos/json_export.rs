use dungeon_grid::{generate, GeneratorOptions, StageRequest};
use std::fs;

fn main() {
    let stage = StageRequest::new(61, 41).with_seed("12345");
    let options = GeneratorOptions {
        multiplier: 2,
        ..Default::default()
    };

    let results = generate(&stage, &options).expect("valid stage");

    let json = serde_json::to_string_pretty(&results.to_json()).expect("serialize results");
    fs::write("dungeon_level.json", &json).expect("failed to write JSON");

    let ascii = dungeon_grid::to_ascii(&results);
    fs::write("dungeon_level.txt", &ascii).expect("failed to write ASCII map");

    println!("Generated dungeon with {} rooms", results.rooms.len());
    println!("Outputs: dungeon_level.json, dungeon_level.txt");
}
