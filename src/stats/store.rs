/// the one owned binding between in-memory statistics and their
/// durable record on disk. loaded once at startup, written at
/// match boundaries and on reset.
pub struct Store {
    path: PathBuf,
    stats: Statistics,
}

impl Store {
    /// read the record at path. missing or mangled records fall
    /// back to zero with a warning, never an abort.
    pub fn load(path: PathBuf) -> Self {
        let stats = match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(stats) => stats,
                Err(e) => {
                    log::warn!("could not parse stats file, starting fresh ({})", e);
                    Statistics::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("no stats file at {}, starting fresh", path.display());
                Statistics::default()
            }
            Err(e) => {
                log::warn!("could not read stats file, starting fresh ({})", e);
                Statistics::default()
            }
        };
        Self { path, stats }
    }

    /// write the full snapshot. temp file plus rename, so a reader
    /// never observes a half-written record.
    pub fn save(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&self.stats)?;
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, json)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }

    pub fn record_round(&mut self, outcome: Outcome) {
        self.stats.record_round(outcome);
    }

    /// match boundaries are the persistence points. a failed write
    /// keeps the in-memory counters, so the next successful write
    /// still reflects every accumulated change.
    pub fn record_match(&mut self, result: &Match) {
        self.stats.record_match(result);
        if let Err(e) = self.save() {
            log::warn!("could not save stats file ({})", e);
        }
    }

    /// accepts only an already-confirmed call. gathering the two
    /// confirmations is the session's job.
    pub fn reset(&mut self) {
        self.stats.reset();
        if let Err(e) = self.save() {
            log::warn!("could not save stats file ({})", e);
        }
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }
}

use super::statistics::Statistics;
use crate::game::engine::Match;
use crate::game::outcome::Outcome;
use std::path::PathBuf;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::choice::Move;

    fn scratch(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("roshambo-{}-{}.json", std::process::id(), name));
        let _ = std::fs::remove_file(&path);
        path
    }

    fn sweep() -> Match {
        let mut game = Match::new();
        game.apply(Move::Rock, Move::Scissors);
        game.apply(Move::Rock, Move::Scissors);
        game
    }

    #[test]
    fn round_trips_exactly() {
        let path = scratch("roundtrip");
        let mut store = Store::load(path.clone());
        store.record_round(Outcome::User);
        store.record_round(Outcome::User);
        store.record_round(Outcome::Tie);
        store.record_match(&sweep());
        let reloaded = Store::load(path.clone());
        assert_eq!(reloaded.stats(), store.stats());
        let _ = std::fs::remove_file(&path);
    }

    /// an absent record warns but still yields a playable all-zero
    /// store, so first launch is never fatal
    #[test]
    fn missing_record_loads_zeroed() {
        let store = Store::load(scratch("missing"));
        assert_eq!(store.stats(), &Statistics::default());
    }

    #[test]
    fn corrupt_record_loads_zeroed() {
        let path = scratch("corrupt");
        std::fs::write(&path, "{ not json").unwrap();
        let store = Store::load(path.clone());
        assert_eq!(store.stats(), &Statistics::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn failed_write_keeps_memory_and_prior_record() {
        let path = scratch("prior");
        let mut store = Store::load(path.clone());
        store.record_match(&sweep());
        let persisted = *store.stats();
        // rebind to an unwritable location and accumulate more
        let mut doomed = Store {
            path: PathBuf::from("/nonexistent/dir/stats.json"),
            stats: persisted,
        };
        doomed.record_round(Outcome::Computer);
        doomed.record_match(&sweep());
        assert!(doomed.save().is_err());
        assert_eq!(doomed.stats().total_matches, 2);
        assert_eq!(doomed.stats().rounds_lost, 1);
        assert_eq!(Store::load(path.clone()).stats(), &persisted);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn reset_persists_zeroes() {
        let path = scratch("reset");
        let mut store = Store::load(path.clone());
        store.record_round(Outcome::User);
        store.record_match(&sweep());
        store.reset();
        assert_eq!(store.stats(), &Statistics::default());
        assert_eq!(Store::load(path.clone()).stats(), &Statistics::default());
        let _ = std::fs::remove_file(&path);
    }
}
