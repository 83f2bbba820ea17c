/// the exact token the second reset confirmation must match
const RESET_TOKEN: &str = "RESET";

/// phases of one interactive sitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    MainMenu,
    InMatch,
    ViewingStats,
    ConfirmingReset,
    Exiting,
}

/// synchronous session loop. one match in flight at a time; the only
/// blocking points are the menu and the move prompt.
pub struct Session {
    store: Store,
    robot: Robot,
    phase: Phase,
}

impl Session {
    pub fn new(path: PathBuf) -> Self {
        Self {
            store: Store::load(path),
            robot: Robot::new(),
            phase: Phase::MainMenu,
        }
    }

    pub fn run(&mut self) {
        println!("🎮 Welcome to Rock Paper Scissors!");
        while self.phase != Phase::Exiting {
            self.phase = match self.phase {
                Phase::MainMenu => self.menu(),
                Phase::InMatch => self.play(),
                Phase::ViewingStats => self.view(),
                Phase::ConfirmingReset => self.confirm(),
                Phase::Exiting => unreachable!(),
            };
        }
        self.goodbye();
    }

    fn menu(&mut self) -> Phase {
        let selection = Select::new()
            .with_prompt("🎮 MAIN MENU")
            .items(&[
                "🎯 Play Game",
                "📊 View Statistics",
                "🔄 Reset Statistics",
                "🚪 Quit",
            ])
            .default(0)
            .interact()
            .unwrap();
        match selection {
            0 => Phase::InMatch,
            1 => Phase::ViewingStats,
            2 => Phase::ConfirmingReset,
            _ => Phase::Exiting,
        }
    }

    /// drive one best-of-three match round by round, recording each
    /// round as it resolves and the match at its boundary.
    fn play(&mut self) -> Phase {
        println!("=== Best 2 out of 3 Rock Paper Scissors ===");
        println!("🤖 Prepare to face my superior algorithms!");
        let mut human = Human;
        let mut game = Match::new();
        while !game.over() {
            display::banner(&game);
            let user = human.choose(&game);
            let computer = self.robot.choose(&game);
            let round = game.apply(user, computer);
            self.store.record_round(round.outcome);
            display::history(game.rounds());
            display::announce(round.outcome);
            println!("{}", self.robot.taunt(round.outcome));
        }
        self.store.record_match(&game);
        display::conclusion(&game);
        println!("{}", self.robot.sendoff(game.won()));
        println!("{}", "=".repeat(40));
        Phase::MainMenu
    }

    fn view(&self) -> Phase {
        match self.store.stats().total_matches {
            0 => println!("\n📊 No statistics yet - play your first game!"),
            _ => println!("\n{}", self.store.stats()),
        }
        Phase::MainMenu
    }

    /// two-stage confirmation: a yes/no gate, then an exact
    /// case-sensitive token. only both passing reaches the store.
    fn confirm(&mut self) -> Phase {
        display::forewarn(self.store.stats());
        let sure = Confirm::new()
            .with_prompt("Are you sure you want to reset?")
            .default(false)
            .interact()
            .unwrap();
        if !sure {
            println!("❌ Reset cancelled.");
            return Phase::MainMenu;
        }
        let token: String = Input::new()
            .with_prompt(format!("Type '{}' to confirm (case-sensitive)", RESET_TOKEN))
            .allow_empty(true)
            .interact()
            .unwrap();
        match token.trim() == RESET_TOKEN {
            true => {
                self.store.reset();
                println!("\n✅ Statistics have been reset!");
                println!("🤖 Fresh start, human! Let's see if you can do better this time!");
            }
            false => println!("❌ Reset cancelled - confirmation text didn't match."),
        }
        Phase::MainMenu
    }

    fn goodbye(&self) {
        println!("\nThanks for playing! Goodbye! 👋");
        if self.store.stats().total_matches > 0 {
            println!("Your stats have been saved!");
        }
    }
}

use crate::display;
use crate::game::engine::Match;
use crate::players::human::Human;
use crate::players::robot::Robot;
use crate::players::Player;
use crate::stats::store::Store;
use dialoguer::Confirm;
use dialoguer::Input;
use dialoguer::Select;
use std::path::PathBuf;
