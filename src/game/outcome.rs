#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Outcome {
    User,
    Computer,
    Tie,
}

impl Outcome {
    /// resolve one exchange of moves. total over the 3x3 move space
    pub fn of(user: Move, computer: Move) -> Self {
        match (user == computer, user.beats() == computer) {
            (true, _) => Outcome::Tie,
            (false, true) => Outcome::User,
            (false, false) => Outcome::Computer,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::User => write!(f, "{}", "🎉 You".green()),
            Outcome::Computer => write!(f, "{}", "🤖 CPU".red()),
            Outcome::Tie => write!(f, "🤝 Tie"),
        }
    }
}

use super::choice::Move;
use colored::Colorize;
