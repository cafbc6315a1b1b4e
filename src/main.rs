//! Sparse Life CLI - Run headless simulations from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use sparse_life::{GenerationStats, GridStore, Seed, SimulatorConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Run a headless Game of Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulator configuration file");
        eprintln!("  generations  Number of generations to advance (default: 100)");
        eprintln!();
        eprintln!("Flags:");
        eprintln!("  --example    Print an example config and seed, then exit");
        eprintln!("  --version    Print version and license info, then exit");

        std::process::exit(1);
    }

    if args[1] == "--version" {
        println!("sparse-life {}", env!("CARGO_PKG_VERSION"));
        println!("MIT licensed; see the LICENSE file in the source distribution.");
        return;
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: SimulatorConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    }

    // Load or create seed
    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        })
    } else {
        Seed::default()
    };

    println!("Sparse Life Simulation");
    println!("======================");
    println!(
        "View: {}x{} px, {} px cells",
        config.width, config.height, config.cell_size
    );
    println!("Generations: {}", generations);
    println!();

    // Initialize
    let mut store = GridStore::from_cells(seed.generate());
    let initial = GenerationStats::from_store(&store);

    println!("Initial board:");
    println!("  Population: {}", initial.population);
    println!(
        "  Extent: {}x{} cells",
        initial.extent_width, initial.extent_height
    );
    println!();

    // Run simulation
    println!("Running simulation...");
    let start = Instant::now();

    for i in 0..generations {
        store.step();

        // Print progress every 10%
        if (i + 1) % (generations / 10).max(1) == 0 {
            let stats = GenerationStats::from_store(&store);
            let elapsed = start.elapsed().as_secs_f32();
            let gens_per_sec = (i + 1) as f32 / elapsed;
            println!(
                "  Generation {}/{}: population={}, extent={}x{}, {:.1} gens/s",
                i + 1,
                generations,
                stats.population,
                stats.extent_width,
                stats.extent_height,
                gens_per_sec
            );
        }
    }

    let elapsed = start.elapsed();
    let final_stats = GenerationStats::from_store(&store);

    println!();
    println!("Final board:");
    println!("  Population: {}", final_stats.population);
    println!(
        "  Extent: {}x{} cells",
        final_stats.extent_width, final_stats.extent_height
    );
    println!();
    println!(
        "Time: {:.2}s ({:.1} gens/s)",
        elapsed.as_secs_f32(),
        generations as f32 / elapsed.as_secs_f32()
    );
}

fn print_example_config() {
    let config = SimulatorConfig::default();
    let seed = Seed::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
    println!();
    println!("Example seed (config.seed.json):");
    println!("{}", serde_json::to_string_pretty(&seed).unwrap());
}
