//! Self-play game generation.
//!
//! Plays full games between two copies of the minimax player on random
//! boards. Player 1 searches on the swapped state so the same selector
//! serves both sides. Records every move with its search value.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::{Action, FishingState, Player};
use crate::config::{ConfigError, SearchConfig};
use crate::eval::EvalError;
use crate::movegen::apply_action;
use crate::search::MoveSelector;
use crate::tree::GameNode;

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Search settings shared by both players.
    pub search: SearchConfig,
    /// Fish placed on each random board.
    pub fish_count: usize,
    /// Game length in plies.
    pub max_plies: u32,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            search: SearchConfig::default(),
            fish_count: 8,
            max_plies: 200,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// A single recorded move.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRecord {
    pub ply: u32,
    pub player: usize,
    pub action: Action,
    /// Root value from the mover's perspective; `None` at a terminal root.
    pub value: Option<f64>,
    pub randomized: bool,
}

/// A complete self-play game record.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    /// Index of the player with the higher final score, `None` on a tie.
    pub winner: Option<usize>,
    pub final_scores: [i32; 2],
    pub plies: u32,
    pub moves: Vec<MoveRecord>,
}

fn seeded_rng(seed: u64, game_id: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Plays one game until the plies run out or every fish is landed.
pub fn play_game(
    config: &SelfPlayConfig,
    selector: &MoveSelector,
    game_id: usize,
    rng: &mut SmallRng,
) -> Result<GameRecord, EvalError> {
    let board = config.search.board();
    let mut state = FishingState::random(board, config.fish_count, config.max_plies, rng);
    let mut moves = Vec::new();
    let mut ply = 0;

    while state.remaining_plies > 0 && !state.is_exhausted() {
        let mover = state.to_move;
        let view = match mover {
            Player::Max => state.clone(),
            Player::Min => state.swapped(),
        };
        let root = GameNode::root(view, board);
        let result = selector.select(&root, rng, &mut io::sink())?;

        moves.push(MoveRecord {
            ply,
            player: mover.index(),
            action: result.action,
            value: result.value,
            randomized: result.randomized,
        });
        state = apply_action(&state, result.action, &board);
        ply += 1;
    }

    let winner = match state.scores[0].cmp(&state.scores[1]) {
        std::cmp::Ordering::Greater => Some(0),
        std::cmp::Ordering::Less => Some(1),
        std::cmp::Ordering::Equal => None,
    };

    Ok(GameRecord {
        game_id,
        winner,
        final_scores: state.scores,
        plies: ply,
        moves,
    })
}

/// Runs self-play generation, producing multiple game records.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
/// Games that fail with an evaluation error are reported and dropped.
pub fn run_self_play(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, ConfigError> {
    let selector = MoveSelector::new(&config.search)?;
    let mut games = Vec::with_capacity(config.num_games);
    if config.threads > 1 {
        run_self_play_parallel(config, selector, |game| games.push(game));
    } else {
        run_self_play_sequential(config, selector, |game| games.push(game));
    }
    games.sort_by_key(|g| g.game_id);
    Ok(games)
}

fn report(config: &SelfPlayConfig, n: usize, game: &GameRecord, elapsed: f64) {
    if config.quiet {
        return;
    }
    let outcome = match game.winner {
        Some(w) => format!("player {} wins", w),
        None => "draw".to_string(),
    };
    eprintln!(
        "Game {}/{}: {} {}-{} after {} plies ({:.1}s)",
        n,
        config.num_games,
        outcome,
        game.final_scores[0],
        game.final_scores[1],
        game.plies,
        elapsed,
    );
}

/// Sequential self-play: plays games one at a time.
fn run_self_play_sequential<F>(config: &SelfPlayConfig, selector: MoveSelector, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    for i in 0..config.num_games {
        let mut rng = seeded_rng(config.seed, i);
        let game_start = Instant::now();
        match play_game(config, &selector, i, &mut rng) {
            Ok(game) => {
                report(config, i + 1, &game, game_start.elapsed().as_secs_f64());
                on_game(game);
            }
            Err(e) => eprintln!("Game {}: {}", i + 1, e),
        }
    }
}

/// Parallel self-play: plays games concurrently using rayon.
/// Uses a channel to deliver completed games to the callback from worker threads.
fn run_self_play_parallel<F>(config: &SelfPlayConfig, selector: MoveSelector, mut on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let completed = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<GameRecord>();

    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
    {
        Ok(p) => p,
        Err(e) => {
            eprintln!("failed to build thread pool ({}), playing sequentially", e);
            run_self_play_sequential(config, selector, on_game);
            return;
        }
    };

    std::thread::scope(|scope| {
        scope.spawn(move || {
            pool.install(|| {
                (0..config.num_games)
                    .into_par_iter()
                    .for_each_with(tx, |tx, i| {
                        let mut rng = seeded_rng(config.seed, i);
                        let game_start = Instant::now();
                        match play_game(config, &selector, i, &mut rng) {
                            Ok(game) => {
                                let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                                report(config, n, &game, game_start.elapsed().as_secs_f64());
                                let _ = tx.send(game);
                            }
                            Err(e) => eprintln!("Game {}: {}", i + 1, e),
                        }
                    });
            });
        });

        for game in rx {
            on_game(game);
        }
    });
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints aggregate results to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let total = games.len();
    let wins0 = games.iter().filter(|g| g.winner == Some(0)).count();
    let wins1 = games.iter().filter(|g| g.winner == Some(1)).count();
    let draws = total - wins0 - wins1;
    let random_moves: usize = games
        .iter()
        .map(|g| g.moves.iter().filter(|m| m.randomized).count())
        .sum();
    let all_moves: usize = games.iter().map(|g| g.moves.len()).sum();

    eprintln!("=== Self-Play Summary ===");
    eprintln!("Games: {}", total);
    eprintln!("Player 0 wins: {}", wins0);
    eprintln!("Player 1 wins: {}", wins1);
    eprintln!("Draws: {}", draws);
    if all_moves > 0 {
        eprintln!(
            "Random tie-break moves: {} of {} ({:.1}%)",
            random_moves,
            all_moves,
            100.0 * random_moves as f64 / all_moves as f64
        );
    }
}
