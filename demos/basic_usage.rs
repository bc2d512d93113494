use dungeon_grid::{generate, GeneratorOptions, StageRequest};

fn main() {
    let stage = StageRequest::new(51, 31).with_seed("42");
    let results = generate(&stage, &GeneratorOptions::default()).expect("valid stage");

    println!("Dungeon ({}x{}):", results.width(), results.height());
    println!("{}", dungeon_grid::to_ascii(&results));
    println!("\nRooms: {}", results.rooms.len());
}
