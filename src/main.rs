use clap::Parser;
use roshambo::session::Session;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Best-of-three rock paper scissors with all-time statistics")]
struct Args {
    /// where the statistics record lives
    #[arg(long, default_value = "rps_stats.json")]
    stats: PathBuf,
}

fn main() {
    roshambo::log();
    let args = Args::parse();
    Session::new(args.stats).run();
}
