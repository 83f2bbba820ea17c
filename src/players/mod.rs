pub mod human;
pub mod robot;

/// a source of moves. the engine is agnostic to where they come from,
/// which keeps interactive input and randomness out of the core.
pub trait Player {
    fn choose(&mut self, past: &Match) -> Move;
}

use crate::game::choice::Move;
use crate::game::engine::Match;
