/// a single exchange, immutable once resolved. match-scoped,
/// never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub user: Move,
    pub computer: Move,
    pub outcome: Outcome,
}

impl Round {
    pub fn new(user: Move, computer: Move) -> Self {
        Self {
            user,
            computer,
            outcome: Outcome::of(user, computer),
        }
    }
}

/// one row of the match history table
impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<12} | {:<12} | {}",
            self.user.to_string(),
            self.computer.to_string(),
            self.outcome
        )
    }
}

use super::choice::Move;
use super::outcome::Outcome;
