const WIN_TAUNTS: [&str; 7] = [
    "🤖 Got to try harder than that!",
    "🤖 Too easy! I saw that coming!",
    "🤖 My circuits are superior!",
    "🤖 Better luck next time, human!",
    "🤖 That's how it's done!",
    "🤖 I'm programmed to win!",
    "🤖 Nice try, but I'm faster!",
];

const LOSS_TAUNTS: [&str; 7] = [
    "🤖 You got me this round!",
    "🤖 Not bad... for a human.",
    "🤖 Lucky shot!",
    "🤖 I'll get you next time!",
    "🤖 My algorithms need updating...",
    "🤖 Impressive! But I'm learning!",
    "🤖 You're getting better at this!",
];

const TIE_TAUNTS: [&str; 7] = [
    "🤖 Great minds think alike!",
    "🤖 We're perfectly matched!",
    "🤖 Looks like we're both smart!",
    "🤖 A draw? Impossible!",
    "🤖 We think the same way!",
    "🤖 Tied again? What are the odds?",
    "🤖 Copy cat! Stop reading my mind!",
];

const FINAL_DEFEATED: [&str; 5] = [
    "🤖 Well played, human! You've earned this victory!",
    "🤖 I admit defeat... this time!",
    "🤖 You're better than I calculated!",
    "🤖 Congratulations! But I demand a rematch!",
    "🤖 My programming didn't account for your skill!",
];

const FINAL_VICTORIOUS: [&str; 5] = [
    "🤖 Victory is mine! As calculated!",
    "🤖 Better luck next time, human!",
    "🤖 My superior logic wins again!",
    "🤖 Maybe you should upgrade your brain!",
    "🤖 I am the ultimate rock-paper-scissors machine!",
];

/// the scripted opponent. owns its rng so deterministic
/// sequences can be injected in tests.
pub struct Robot(SmallRng);

impl Robot {
    pub fn new() -> Self {
        Self(SmallRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// a jab after each round, keyed by who took it
    pub fn taunt(&mut self, outcome: Outcome) -> &'static str {
        let lines: &[&str] = match outcome {
            Outcome::Computer => &WIN_TAUNTS,
            Outcome::User => &LOSS_TAUNTS,
            Outcome::Tie => &TIE_TAUNTS,
        };
        lines[self.0.random_range(0..lines.len())]
    }

    /// parting words once the match is decided
    pub fn sendoff(&mut self, defeated: bool) -> &'static str {
        let lines: &[&str] = match defeated {
            true => &FINAL_DEFEATED,
            false => &FINAL_VICTORIOUS,
        };
        lines[self.0.random_range(0..lines.len())]
    }
}

impl Player for Robot {
    /// uniform and memoryless. each round is an independent
    /// draw over the 3 moves.
    fn choose(&mut self, _: &Match) -> Move {
        Move::from(self.0.random_range(0..3u8))
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Robot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Robot")
    }
}

use super::Player;
use crate::game::choice::Move;
use crate::game::engine::Match;
use crate::game::outcome::Outcome;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;
use std::fmt::{Debug, Formatter};
