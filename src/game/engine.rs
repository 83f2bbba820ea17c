/// round wins that end a match
pub const NEEDED: Wins = 2;

/// the best-of-three state machine. ties advance neither side,
/// so a match always settles in two or three scoring exchanges.
#[derive(Debug, Clone, Default)]
pub struct Match {
    user: Wins,
    computer: Wins,
    history: Vec<Round>,
}

impl Match {
    pub fn new() -> Self {
        Self::default()
    }

    /// run a full match between two move sources
    pub fn play(user: &mut dyn Player, computer: &mut dyn Player) -> Self {
        let mut game = Self::new();
        while !game.over() {
            let u = user.choose(&game);
            let c = computer.choose(&game);
            game.apply(u, c);
        }
        game
    }

    /// resolve one exchange and fold it into the score.
    /// must not be called once the match is over.
    pub fn apply(&mut self, user: Move, computer: Move) -> Round {
        debug_assert!(!self.over());
        let round = Round::new(user, computer);
        match round.outcome {
            Outcome::User => self.user += 1,
            Outcome::Computer => self.computer += 1,
            Outcome::Tie => {}
        }
        self.history.push(round);
        round
    }

    pub fn over(&self) -> bool {
        self.user == NEEDED || self.computer == NEEDED
    }

    /// decided winner, None while in progress
    pub fn winner(&self) -> Option<Outcome> {
        match (self.user == NEEDED, self.computer == NEEDED) {
            (true, _) => Some(Outcome::User),
            (_, true) => Some(Outcome::Computer),
            _ => None,
        }
    }

    pub fn won(&self) -> bool {
        self.user == NEEDED
    }

    pub fn score(&self) -> (Wins, Wins) {
        (self.user, self.computer)
    }

    pub fn rounds(&self) -> &[Round] {
        &self.history
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Score: You {} - {} Computer", self.user, self.computer)
    }
}

use super::choice::Move;
use super::outcome::Outcome;
use super::round::Round;
use crate::players::Player;
use crate::Wins;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::robot::Robot;

    /// replays a fixed sequence of moves
    struct Scripted(std::vec::IntoIter<Move>);

    impl Scripted {
        fn new(moves: &[Move]) -> Self {
            Self(moves.to_vec().into_iter())
        }
    }

    impl Player for Scripted {
        fn choose(&mut self, _: &Match) -> Move {
            self.0.next().expect("script long enough")
        }
    }

    #[test]
    fn split_rounds_continue() {
        let mut game = Match::new();
        game.apply(Move::Rock, Move::Scissors);
        game.apply(Move::Scissors, Move::Rock);
        assert_eq!(game.rounds()[0].outcome, Outcome::User);
        assert_eq!(game.rounds()[1].outcome, Outcome::Computer);
        assert_eq!(game.score(), (1, 1));
        assert!(!game.over());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn sweep_ends_after_two() {
        let mut user = Scripted::new(&[Move::Rock, Move::Rock]);
        let mut computer = Scripted::new(&[Move::Scissors, Move::Scissors]);
        let game = Match::play(&mut user, &mut computer);
        assert!(game.over());
        assert_eq!(game.rounds().len(), 2);
        assert_eq!(game.score(), (2, 0));
        assert!(game.won());
        assert_eq!(game.winner(), Some(Outcome::User));
    }

    #[test]
    fn ties_advance_neither() {
        let mut game = Match::new();
        game.apply(Move::Paper, Move::Paper);
        game.apply(Move::Rock, Move::Rock);
        game.apply(Move::Scissors, Move::Scissors);
        assert_eq!(game.score(), (0, 0));
        assert!(!game.over());
        assert_eq!(game.rounds().len(), 3);
    }

    #[test]
    fn three_rounds_iff_first_two_split() {
        let mut user = Scripted::new(&[Move::Rock, Move::Scissors, Move::Paper]);
        let mut computer = Scripted::new(&[Move::Scissors, Move::Rock, Move::Rock]);
        let game = Match::play(&mut user, &mut computer);
        assert_eq!(game.rounds().len(), 3);
        assert_eq!(game.score(), (2, 1));
        assert!(game.won());
    }

    #[test]
    fn loss_recorded_for_computer_sweep() {
        let mut user = Scripted::new(&[Move::Scissors, Move::Scissors]);
        let mut computer = Scripted::new(&[Move::Rock, Move::Rock]);
        let game = Match::play(&mut user, &mut computer);
        assert!(game.over());
        assert!(!game.won());
        assert_eq!(game.winner(), Some(Outcome::Computer));
    }

    #[test]
    fn random_matches_always_settle() {
        for seed in 0..64 {
            let mut a = Robot::seeded(seed);
            let mut b = Robot::seeded(seed.wrapping_add(1 << 32));
            let game = Match::play(&mut a, &mut b);
            let (u, c) = game.score();
            assert!(game.over());
            assert!((u == NEEDED) ^ (c == NEEDED));
            let scoring = game
                .rounds()
                .iter()
                .filter(|r| r.outcome != Outcome::Tie)
                .count();
            assert!((2..=3).contains(&scoring));
        }
    }
}
