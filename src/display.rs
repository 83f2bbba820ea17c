const TROPHY: &str = r#"
    🏆 CONGRATULATIONS! YOU ARE THE CHAMPION! 🏆

                       ___________
                      '._==_==_=_.'
                      .-\:      /-.
                     | (|:.     |) |
                      '-|:.     |-'
                        \::.    /
                         '::. .'
                           ) (
                         _.' '._
                        `"""""""`

          ╔══════════════════════════════════════╗
          ║        🎉 VICTORY ACHIEVED! 🎉       ║
          ║                                      ║
          ║    You have defeated the computer    ║
          ║       in this epic battle of         ║
          ║       Rock, Paper, Scissors!         ║
          ╚══════════════════════════════════════╝
"#;

/// round header with the running score
pub fn banner(game: &Match) {
    println!("\n--- Round {} ---", game.rounds().len() + 1);
    println!("{}", game);
}

/// table of every round so far in the current match
pub fn history(rounds: &[Round]) {
    if rounds.is_empty() {
        return;
    }
    println!("\n{}", "=".repeat(35));
    println!("📊 CURRENT MATCH HISTORY:");
    println!("{}", "=".repeat(35));
    println!("{:<12} | {:<12} | Result", "You", "Computer");
    println!("{}", "-".repeat(35));
    for round in rounds {
        println!("{}", round);
    }
    println!("{}", "=".repeat(35));
}

/// one line announcing who took the round
pub fn announce(outcome: Outcome) {
    match outcome {
        Outcome::User => println!("{}", "🎉 You win this round!".green()),
        Outcome::Computer => println!("{}", "🤖 Computer wins this round!".red()),
        Outcome::Tie => println!("🤝 It's a tie!"),
    }
}

/// end-of-match banner, trophy art on a user win
pub fn conclusion(game: &Match) {
    let (user, computer) = game.score();
    println!("\n{}", "=".repeat(40));
    match game.won() {
        true => {
            println!("{}", TROPHY);
            println!("{}", "🏆 VICTORY! You won the best 2 out of 3!".green().bold());
        }
        false => println!("{}", "🤖 Computer won the best 2 out of 3!".red()),
    }
    println!("Final Score: You {} - {} Computer", user, computer);
}

/// what a reset would throw away, shown before confirmation
pub fn forewarn(stats: &Statistics) {
    println!("\n{}", "=".repeat(50));
    println!("{}", "⚠️  RESET ALL-TIME STATISTICS".bold());
    println!("{}", "=".repeat(50));
    println!("This will permanently delete all your game statistics:");
    println!("• {} total matches played", stats.total_matches);
    println!("• {} matches won", stats.matches_won);
    println!("• {} total rounds played", stats.total_rounds);
    println!("• All win rates and progress");
    println!("\n{}", "🚨 This action CANNOT be undone!".red());
}

use crate::game::engine::Match;
use crate::game::outcome::Outcome;
use crate::game::round::Round;
use crate::stats::statistics::Statistics;
use colored::Colorize;
