//! Lifetime game statistics

use super::round::RoundResult;
use serde::{Deserialize, Serialize};

/// Totals across all completed rounds
///
/// Persisted as `{"gamesPlayed": .., "highScore": .., "bestTime": ..}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameStats {
    pub games_played: u32,
    pub high_score: u32,
    /// Fastest completion in whole seconds
    pub best_time: Option<u64>,
}

impl GameStats {
    /// Fold in a completed round
    pub fn record(&mut self, result: &RoundResult) {
        self.games_played += 1;
        self.high_score = self.high_score.max(result.score);

        // A zero best time is treated as unset
        let improved = match self.best_time {
            Some(best) if best > 0 => result.seconds < best,
            _ => true,
        };
        if improved {
            self.best_time = Some(result.seconds);
        }
    }
}

/// `m:ss`, or `--` when there is no time yet
#[must_use]
pub fn format_time(seconds: Option<u64>) -> String {
    match seconds {
        Some(secs) if secs > 0 => format!("{}:{:02}", secs / 60, secs % 60),
        _ => "--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: u32, seconds: u64) -> RoundResult {
        RoundResult {
            score,
            matched: 5,
            seconds,
            words_per_minute: 0,
        }
    }

    #[test]
    fn first_round_sets_everything() {
        let mut stats = GameStats::default();
        stats.record(&result(40, 35));

        assert_eq!(
            stats,
            GameStats {
                games_played: 1,
                high_score: 40,
                best_time: Some(35)
            }
        );
    }

    #[test]
    fn keeps_best_values() {
        let mut stats = GameStats::default();
        stats.record(&result(40, 35));
        stats.record(&result(30, 50));
        stats.record(&result(50, 20));

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.high_score, 50);
        assert_eq!(stats.best_time, Some(20));
    }

    #[test]
    fn zero_best_time_is_replaced() {
        let mut stats = GameStats {
            best_time: Some(0),
            ..GameStats::default()
        };
        stats.record(&result(10, 42));
        assert_eq!(stats.best_time, Some(42));
    }

    #[test]
    fn serializes_camel_case() {
        let stats = GameStats {
            games_played: 2,
            high_score: 45,
            best_time: None,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"gamesPlayed":2,"highScore":45,"bestTime":null}"#);

        let loaded: GameStats = serde_json::from_str(r#"{"gamesPlayed":3}"#).unwrap();
        assert_eq!(loaded.games_played, 3);
        assert_eq!(loaded.best_time, None);
    }

    #[test]
    fn time_formatting() {
        assert_eq!(format_time(None), "--");
        assert_eq!(format_time(Some(0)), "--");
        assert_eq!(format_time(Some(7)), "0:07");
        assert_eq!(format_time(Some(75)), "1:15");
        assert_eq!(format_time(Some(600)), "10:00");
    }
}
