//! Self-play game generation CLI.
//!
//! Plays fishing games between two minimax players and outputs the game
//! records as JSONL.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N        Number of games to play (default: 10)
//!   --depth N        Search depth in plies (default: 3)
//!   --importance W   Weight of the positional term (default: 1.0)
//!   --fish N         Fish per board (default: 8)
//!   --plies N        Game length in plies (default: 200)
//!   --threads N      Number of parallel threads (default: 4)
//!   --seed N         Random seed, 0 for entropy (default: 0)
//!   --output FILE    Output file path (default: stdout)
//!   --quiet          Suppress summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;

use hookline::selfplay::{self, SelfPlayConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = parse_arg(&args, i, "--games");
            }
            "--depth" => {
                i += 1;
                config.search.depth = parse_arg(&args, i, "--depth");
            }
            "--importance" => {
                i += 1;
                config.search.importance = parse_arg(&args, i, "--importance");
            }
            "--fish" => {
                i += 1;
                config.fish_count = parse_arg(&args, i, "--fish");
            }
            "--plies" => {
                i += 1;
                config.max_plies = parse_arg(&args, i, "--plies");
            }
            "--threads" => {
                i += 1;
                config.threads = parse_arg(&args, i, "--threads");
            }
            "--seed" => {
                i += 1;
                config.seed = parse_arg(&args, i, "--seed");
            }
            "--output" => {
                i += 1;
                match args.get(i) {
                    Some(path) => output_path = Some(path.clone()),
                    None => fail("--output needs a file path"),
                }
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => fail(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    config.quiet = quiet;

    if !quiet {
        eprintln!(
            "Self-play: {} games, depth {}, importance {:.2}, {} fish, {} plies, {} threads",
            config.num_games,
            config.search.depth,
            config.search.importance,
            config.fish_count,
            config.max_plies,
            config.threads
        );
    }

    let start = Instant::now();
    let games = match selfplay::run_self_play(&config) {
        Ok(g) => g,
        Err(e) => fail(&format!("invalid configuration: {}", e)),
    };
    let elapsed = start.elapsed();

    if !quiet {
        eprintln!(
            "Completed {} games in {:.1}s",
            games.len(),
            elapsed.as_secs_f64()
        );
        selfplay::print_summary(&games);
    }

    match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            let mut writer = BufWriter::new(file);
            selfplay::write_jsonl(&games, &mut writer).expect("failed to write output");
            if !quiet {
                eprintln!("Wrote {} games to {}", games.len(), path);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer).expect("failed to write output");
        }
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
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N        Number of games to play (default: 10)");
    eprintln!("  --depth N        Search depth in plies (default: 3)");
    eprintln!("  --importance W   Weight of the positional term (default: 1.0)");
    eprintln!("  --fish N         Fish per board (default: 8)");
    eprintln!("  --plies N        Game length in plies (default: 200)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --quiet          Suppress summary output");
    eprintln!("  --help           Show this help");
}
