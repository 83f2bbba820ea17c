/// lifetime counters. two identities hold after every update:
/// total_matches == matches_won + matches_lost and
/// total_rounds == rounds_won + rounds_lost + rounds_tied.
/// nothing ever decrements except reset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub matches_won: u64,
    pub matches_lost: u64,
    pub total_matches: u64,
    pub rounds_won: u64,
    pub rounds_lost: u64,
    pub rounds_tied: u64,
    pub total_rounds: u64,
}

impl Statistics {
    /// exactly once per resolved round, in round order
    pub fn record_round(&mut self, outcome: Outcome) {
        self.total_rounds += 1;
        match outcome {
            Outcome::User => self.rounds_won += 1,
            Outcome::Computer => self.rounds_lost += 1,
            Outcome::Tie => self.rounds_tied += 1,
        }
    }

    /// exactly once per completed match, after its rounds
    pub fn record_match(&mut self, result: &Match) {
        self.total_matches += 1;
        match result.won() {
            true => self.matches_won += 1,
            false => self.matches_lost += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// match win percentage, None before the first match
    pub fn match_rate(&self) -> Option<f64> {
        match self.total_matches {
            0 => None,
            n => Some(self.matches_won as f64 / n as f64 * 100.),
        }
    }

    /// round win percentage, None before the first round
    pub fn round_rate(&self) -> Option<f64> {
        match self.total_rounds {
            0 => None,
            n => Some(self.rounds_won as f64 / n as f64 * 100.),
        }
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rate = |r: Option<f64>| match r {
            Some(pct) => format!("{:.1}%", pct),
            None => "N/A".to_string(),
        };
        writeln!(f, "{}", "=".repeat(45))?;
        writeln!(f, "🏆 ALL-TIME STATISTICS")?;
        writeln!(f, "{}", "=".repeat(45))?;
        writeln!(f, "Matches Won:     {}", self.matches_won)?;
        writeln!(f, "Matches Lost:    {}", self.matches_lost)?;
        writeln!(f, "Total Matches:   {}", self.total_matches)?;
        writeln!(f, "Win Rate:        {}", rate(self.match_rate()))?;
        writeln!(f)?;
        writeln!(f, "Rounds Won:      {}", self.rounds_won)?;
        writeln!(f, "Rounds Lost:     {}", self.rounds_lost)?;
        writeln!(f, "Rounds Tied:     {}", self.rounds_tied)?;
        writeln!(f, "Total Rounds:    {}", self.total_rounds)?;
        writeln!(f, "Round Win Rate:  {}", rate(self.round_rate()))?;
        write!(f, "{}", "=".repeat(45))
    }
}

use crate::game::engine::Match;
use crate::game::outcome::Outcome;
use serde::Deserialize;
use serde::Serialize;
