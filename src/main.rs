//! Hookline -- a minimax player for the two-boat fishing game.
//!
//! Reads one JSON game-state message per line from stdin and answers each
//! with the chosen action on stdout. Search diagnostics go to stderr.
//!
//! Usage:
//!   hookline [--depth N] [--importance W] [--width W] [--height H]
//!            [--seed N] [--config FILE]

use std::env;
use std::io::{self, BufWriter};
use std::path::Path;

use hookline::config::SearchConfig;
use hookline::engine::Engine;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SearchConfig::default();
    let mut seed: u64 = 0;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config = match args.get(i).map(|p| SearchConfig::load(Path::new(p))) {
                    Some(Ok(c)) => c,
                    Some(Err(e)) => fail(&format!("{}", e)),
                    None => fail("--config needs a file path"),
                };
            }
            "--depth" => {
                i += 1;
                config.depth = parse_arg(&args, i, "--depth");
            }
            "--importance" => {
                i += 1;
                config.importance = parse_arg(&args, i, "--importance");
            }
            "--width" => {
                i += 1;
                config.board_width = parse_arg(&args, i, "--width");
            }
            "--height" => {
                i += 1;
                config.board_height = parse_arg(&args, i, "--height");
            }
            "--seed" => {
                i += 1;
                seed = parse_arg(&args, i, "--seed");
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => fail(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    let engine = if seed != 0 {
        Engine::with_seed(config, seed)
    } else {
        Engine::new(config)
    };
    let mut engine = match engine {
        Ok(e) => e,
        Err(e) => fail(&format!("invalid configuration: {}", e)),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut info = io::stderr();
    if let Err(e) = engine.run(stdin.lock(), &mut out, &mut info) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn parse_arg<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).map(|v| v.parse::<T>()) {
        Some(Ok(v)) => v,
        _ => fail(&format!("invalid {} value", flag)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    print_usage();
    std::process::exit(2);
}

fn print_usage() {
    eprintln!("Usage: hookline [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --depth N        Search depth in plies (default: 3)");
    eprintln!("  --importance W   Weight of the positional term (default: 1.0)");
    eprintln!("  --width W        Board width, the X wrap period (default: 20)");
    eprintln!("  --height H       Board height (default: 20)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --config FILE    Load settings from a JSON file");
    eprintln!("  --help           Show this help");
}
