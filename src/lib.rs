pub mod display;
pub mod game;
pub mod players;
pub mod session;
pub mod stats;

/// round wins within a single match
pub type Wins = u8;

/// initialize terminal logging. storage failures surface here
/// as warnings rather than aborting play.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .set_time_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
