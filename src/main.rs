#[cfg(not(feature = "cli"))]
compile_error!("The binary requires the 'cli' feature. Run with: cargo build --features cli");

use clap::Parser;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use dungeon_grid::cli::Args;
use dungeon_grid::dungeon::{generate, GeneratorOptions, StageRequest};
use dungeon_grid::render::to_ascii;

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut stage = StageRequest::new(args.width, args.height);
    if let Some(seed) = args.seed.clone() {
        stage = stage.with_seed(seed);
    }
    let options: GeneratorOptions = (&args).into();

    let results = match generate(&stage, &options) {
        Ok(results) => results,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if !args.no_ascii {
        println!("{}", to_ascii(&results));
    }

    let json = serde_json::to_string_pretty(&results.to_json()).expect("serialize results");
    if args.print_json {
        println!("{json}");
    }
    if let Some(path) = args.json_path.as_ref() {
        let p: &Path = path.as_path();
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = fs::create_dir_all(parent);
            }
        }
        fs::write(p, json).expect("write json file");
    }

    println!("seed: {} | rooms: {}", results.seed, results.rooms.len());
    ExitCode::SUCCESS
}
