//! Engine state management.
//!
//! Holds the search configuration, the move selector and the random source,
//! and runs one fresh search per game-state message. Nothing carries over
//! between turns except the random generator.

use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Action, FishingState};
use crate::config::{ConfigError, SearchConfig};
use crate::eval::EvalError;
use crate::protocol::{format_response, parse_message, Message, ProtocolError, Response};
use crate::search::{MoveSelector, SearchResult};
use crate::tree::GameNode;

/// Errors that can abort a single turn.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// A minimax player driven by game-state messages.
pub struct Engine {
    config: SearchConfig,
    selector: MoveSelector,
    rng: SmallRng,
}

impl Engine {
    /// Creates an engine seeded from entropy.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Creates an engine with a fixed seed, for reproducible tie-breaks.
    pub fn with_seed(config: SearchConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: SearchConfig, rng: SmallRng) -> Result<Self, ConfigError> {
        Ok(Engine {
            selector: MoveSelector::new(&config)?,
            config,
            rng,
        })
    }

    /// Searches a fresh tree rooted at `state` and returns player 0's move.
    pub fn choose_move<W: Write>(
        &mut self,
        state: FishingState,
        info: &mut W,
    ) -> Result<SearchResult, EvalError> {
        let root = GameNode::root(state, self.config.board());
        self.selector.select(&root, &mut self.rng, info)
    }

    /// Handles one game-state message.
    pub fn handle_message<W: Write>(
        &mut self,
        msg: &Message,
        info: &mut W,
    ) -> Result<Response, EngineError> {
        let state = msg.to_state(&self.config.board())?;
        let result = self.choose_move(state, info)?;
        Ok(Response::new(result.action))
    }

    /// Runs the message loop until `game_over` or end of input.
    ///
    /// The first line is the host's start-up message and is skipped without
    /// an answer, as are blank lines and lines that are not valid JSON
    /// (those are reported on `info`). Every other line before `game_over`
    /// gets exactly one response on `out`, which is `stay` when the state is
    /// rejected or the search fails.
    pub fn run<R: BufRead, W: Write, I: Write>(
        &mut self,
        input: R,
        out: &mut W,
        info: &mut I,
    ) -> io::Result<()> {
        let mut lines = input.lines();
        match lines.next() {
            Some(first) => {
                first?;
            }
            None => return Ok(()),
        }

        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let msg = match parse_message(&line) {
                Ok(m) => m,
                Err(e) => {
                    writeln!(info, "info string {}", e)?;
                    continue;
                }
            };
            if msg.game_over {
                break;
            }

            let response = match self.handle_message(&msg, info) {
                Ok(r) => r,
                Err(e) => {
                    writeln!(info, "info string error: {}, playing stay", e)?;
                    Response::new(Action::Stay)
                }
            };
            let encoded = format_response(&response).map_err(io::Error::other)?;
            writeln!(out, "{}", encoded)?;
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::single_fish_state;

    const FIRST: &str = r#"{"start": true}"#;
    const SINGLE_FISH: &str = r#"{"game_over": false, "hooks_positions": {"0": [0, 0], "1": [5, 0]}, "fish_positions": {"7": [10, 0]}, "fish_scores": {"7": 5}, "caught": {"0": null, "1": null}, "player_scores": {"0": 0, "1": 0}}"#;
    const GAME_OVER: &str = r#"{"game_over": true}"#;

    fn engine(depth: u32) -> Engine {
        let config = SearchConfig {
            depth,
            ..Default::default()
        };
        Engine::with_seed(config, 11).unwrap()
    }

    fn run(engine: &mut Engine, lines: &[&str]) -> (Vec<String>, String) {
        let input = lines.join("\n");
        let mut out = Vec::new();
        let mut info = Vec::new();
        engine.run(input.as_bytes(), &mut out, &mut info).unwrap();
        let out = String::from_utf8(out).unwrap();
        let info = String::from_utf8(info).unwrap();
        (out.lines().map(String::from).collect(), info)
    }

    #[test]
    fn rejects_invalid_config() {
        let config = SearchConfig {
            depth: 0,
            ..Default::default()
        };
        assert!(matches!(Engine::new(config), Err(ConfigError::ZeroDepth)));
    }

    #[test]
    fn choose_move_is_reproducible() {
        let mut a = engine(2);
        let mut b = engine(2);
        let ra = a.choose_move(single_fish_state(20), &mut io::sink()).unwrap();
        let rb = b.choose_move(single_fish_state(20), &mut io::sink()).unwrap();
        assert_eq!(ra, rb);
        assert_eq!(ra.action, Action::Left);
    }

    #[test]
    fn first_line_is_skipped() {
        let mut e = engine(2);
        let (out, _) = run(&mut e, &[SINGLE_FISH, GAME_OVER]);
        assert!(out.is_empty());
    }

    #[test]
    fn answers_each_state_until_game_over() {
        let mut e = engine(2);
        let (out, info) = run(&mut e, &[FIRST, SINGLE_FISH, SINGLE_FISH, GAME_OVER, SINGLE_FISH]);
        assert_eq!(out.len(), 2);
        for line in &out {
            let response: Response = serde_json::from_str(line).unwrap();
            assert_eq!(response.action, Action::Left);
            assert_eq!(response.search_time, None);
        }
        assert!(info.contains("info move left eval"));
        assert!(info.contains("info depth 2 nodes 31"));
    }

    #[test]
    fn malformed_line_is_skipped() {
        let mut e = engine(1);
        let (out, info) = run(&mut e, &[FIRST, "not json", SINGLE_FISH]);
        assert_eq!(out.len(), 1);
        assert!(info.contains("malformed message"));
    }

    #[test]
    fn inconsistent_state_answers_stay() {
        let mut e = engine(1);
        let bad = r#"{"hooks_positions": {"0": [0, 0], "1": [5, 0]}, "fish_positions": {"7": [10, 0]}, "caught": {"0": 7}}"#;
        let (out, info) = run(&mut e, &[FIRST, bad]);
        assert_eq!(out, vec![r#"{"action":"stay","search_time":null}"#.to_string()]);
        assert!(info.contains("inconsistent state"));
    }

    #[test]
    fn off_board_hook_answers_stay() {
        let mut e = engine(2);
        let far = r#"{"hooks_positions": {"0": [2147483647, 0], "1": [5, 0]}, "fish_positions": {"7": [10, 0]}, "fish_scores": {"7": 5}}"#;
        let (out, info) = run(&mut e, &[FIRST, far, SINGLE_FISH]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], r#"{"action":"stay","search_time":null}"#);
        assert!(info.contains("off the board"));
        let response: Response = serde_json::from_str(&out[1]).unwrap();
        assert_eq!(response.action, Action::Left);
    }

    #[test]
    fn extreme_scores_are_searched() {
        let mut e = engine(2);
        let rich = r#"{"hooks_positions": {"0": [0, 0], "1": [5, 0]}, "fish_positions": {"7": [10, 0]}, "fish_scores": {"7": 5}, "player_scores": {"0": 2000000000, "1": -2000000000}}"#;
        let (out, info) = run(&mut e, &[FIRST, rich]);
        assert_eq!(out.len(), 1);
        let response: Response = serde_json::from_str(&out[0]).unwrap();
        assert_eq!(response.action, Action::Left);
        assert!(!info.contains("error"));
    }

    #[test]
    fn missing_hook_answers_stay() {
        let mut e = engine(1);
        let (out, info) = run(&mut e, &[FIRST, r#"{"hooks_positions": {"1": [5, 0]}}"#]);
        assert_eq!(out, vec![r#"{"action":"stay","search_time":null}"#.to_string()]);
        assert!(info.contains("missing hook position for player 0"));
    }
}
