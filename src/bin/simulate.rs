//! Difficulty simulator CLI.
//!
//! Plays seeded headless episodes with a scripted pilot.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # 100 runs, standard tunables
//!   cargo run --bin simulate -- -n 500 --easy  # 500 runs, easy tunables
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use flappy::simulator::{run_simulation, SimConfig};
use flappy::Difficulty;
use std::env;

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let args: Vec<String> = env::args().collect();
    let (config, json) = parse_args(&args);

    if config.verbosity >= 1 {
        print_banner(&config);
    }

    let report = run_simulation(&config);

    if json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
}

fn print_banner(config: &SimConfig) {
    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              FLAPPY DIFFICULTY SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Difficulty:     {}", config.difficulty.name());
    println!("  Max Frames:     {}", config.max_frames_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--frames" => {
                if i + 1 < args.len() {
                    config.max_frames_per_run = args[i + 1].parse().unwrap_or(20_000);
                    i += 1;
                }
            }
            "--easy" => {
                config.difficulty = Difficulty::Easy;
            }
            "--json" => {
                json = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (config, json)
}

fn print_help() {
    println!("Usage: simulate [OPTIONS]\n");
    println!("Options:");
    println!("  -n, --runs <N>     Number of episodes (default 100)");
    println!("  -s, --seed <SEED>  Seed for reproducible runs");
    println!("  -t, --frames <N>   Frame limit per episode (default 20000)");
    println!("      --easy         Use the touch/mobile tunables");
    println!("      --json         Print the report as JSON");
    println!("  -v, --verbose      Print every run");
    println!("  -q, --quiet        Print only the report");
}
