//! Search strategies for picking a move.

mod greedy;
mod minimax;
mod negamax;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rookery_core::{GameState, Move};
use tracing::debug;

/// Default search depth for the depth-limited strategies.
pub const MAX_DEPTH: u8 = 3;

/// How a [`Searcher`] picks its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniform random choice among the legal moves.
    Random,
    /// One ply of minimax over raw material.
    Greedy,
    /// Minimax over the positional evaluation.
    Minimax { depth: u8 },
    /// Negamax over the positional evaluation.
    Negamax { depth: u8 },
    /// Negamax with alpha-beta pruning. The strongest option per node
    /// searched, and the default choice.
    NegamaxAlphaBeta { depth: u8 },
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::NegamaxAlphaBeta { depth: MAX_DEPTH }
    }
}

/// A move picker bound to one strategy.
///
/// The searcher explores by making and undoing moves on the caller's
/// [`GameState`]; every position visited is restored before `find_move`
/// returns. Equal-best root moves are chosen among uniformly at random,
/// so repeated games diverge.
pub struct Searcher {
    strategy: Strategy,
    rng: SmallRng,
}

impl Searcher {
    /// Create a searcher seeded from system entropy.
    pub fn new(strategy: Strategy) -> Searcher {
        Searcher {
            strategy,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a searcher with a fixed seed for reproducible games.
    pub fn with_seed(strategy: Strategy, seed: u64) -> Searcher {
        Searcher {
            strategy,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Return the strategy this searcher plays.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Pick one legal move for the side to move.
    ///
    /// Returns `None` when the position has no legal moves; drivers check
    /// `checkmate`/`stalemate` before asking for a move. The state's cached
    /// analysis is regenerated for the root position before returning.
    pub fn find_move(&mut self, state: &mut GameState) -> Option<Move> {
        let root_moves = state.generate_valid_moves();
        let chosen = match self.strategy {
            Strategy::Random => {
                let moves: Vec<Move> = root_moves.iter().copied().collect();
                moves.choose(&mut self.rng).copied()
            }
            Strategy::Greedy => greedy::find_move(state, &root_moves, &mut self.rng),
            Strategy::Minimax { depth } => {
                minimax::find_move(state, &root_moves, depth, &mut self.rng)
            }
            Strategy::Negamax { depth } => {
                negamax::find_move(state, &root_moves, depth, &mut self.rng)
            }
            Strategy::NegamaxAlphaBeta { depth } => {
                negamax::find_move_alpha_beta(state, &root_moves, depth, &mut self.rng)
            }
        };
        // The search left the cached flags describing deep positions;
        // regenerate so callers observe the root again.
        let _ = state.generate_valid_moves();
        let notation = chosen.map(|m| m.chess_notation());
        debug!(strategy = ?self.strategy, chosen = ?notation, "search finished");
        chosen
    }
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher").field("strategy", &self.strategy).finish()
    }
}
