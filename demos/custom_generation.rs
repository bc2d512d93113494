use dungeon_grid::{generate, GeneratorOptions, StageRequest, TileType};

fn main() {
    let stage = StageRequest::new(81, 41).with_seed("rectangular-rooms");
    let options = GeneratorOptions {
        room_tries: 150,
        room_extra_size: 4,
        winding_percent: 20,
        max_doors: 3,
        remove_dead_ends: true,
        ..Default::default()
    };

    let results = generate(&stage, &options).expect("valid stage");

    let mut tile_counts = std::collections::HashMap::new();
    for tile in results.tiles() {
        *tile_counts.entry(format!("{:?}", tile.tile_type)).or_insert(0) += 1;
    }

    println!("Tile distribution:");
    for (tile_type, count) in tile_counts {
        println!("  {tile_type}: {count}");
    }

    let door_count = results
        .tiles()
        .filter(|t| t.tile_type == TileType::Door)
        .count();
    println!("\nDoors connecting regions: {door_count}");
    println!("Rooms placed: {}", results.rooms.len());
}

