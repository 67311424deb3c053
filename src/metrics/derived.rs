// src/metrics/derived.rs
use crate::gamelog::GameRecord;
use serde::Serialize;

/// Per-game metrics, one per record and in the same order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub point_differential: i64,
    /// `None` when the game had no field goal attempts.
    pub effective_fg_pct: Option<f64>,
    pub free_throw_rate: Option<f64>,
    pub rolling_win_pct: f64,
}

/// Result of the left-to-right win percentage scan.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingWinPct {
    pub per_game: Vec<f64>,
    pub wins: u32,
    pub games: u32,
}

/// Rounds to two decimal places, ties to even (3.125 -> 3.12).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

pub fn point_differential(game: &GameRecord) -> i64 {
    game.points - game.opponent_score
}

/// `((FGM + 0.5 * 3FGM) / FGA) * 100`, rounded.
pub fn effective_fg_pct(game: &GameRecord) -> Option<f64> {
    if game.fga == 0 {
        return None;
    }
    Some(round2((game.fgm as f64 + 0.5 * game.fg3m as f64) / game.fga as f64 * 100.0))
}

/// `(FTM / FGA) * 100`, rounded.
pub fn free_throw_rate(game: &GameRecord) -> Option<f64> {
    if game.fga == 0 {
        return None;
    }
    Some(round2(game.ftm as f64 / game.fga as f64 * 100.0))
}

/// Cumulative win percentage after each game, in game order.
///
/// The counters live in the fold accumulator, so every call starts from zero.
pub fn rolling_win_percentage(games: &[GameRecord]) -> RollingWinPct {
    let init = RollingWinPct { per_game: Vec::with_capacity(games.len()), wins: 0, games: 0 };

    games.iter().fold(init, |mut acc, game| {
        acc.games += 1;
        if game.is_win() {
            acc.wins += 1;
        }
        acc.per_game.push(round2(100.0 * acc.wins as f64 / acc.games as f64));
        acc
    })
}

/// Computes every per-game metric.
pub fn derive_all(games: &[GameRecord]) -> Vec<DerivedMetrics> {
    let rolling = rolling_win_percentage(games);
    tracing::debug!("Rolling scan finished: {} wins in {} games", rolling.wins, rolling.games);

    games
        .iter()
        .zip(rolling.per_game)
        .map(|(game, rolling_win_pct)| {
            let metrics = DerivedMetrics {
                point_differential: point_differential(game),
                effective_fg_pct: effective_fg_pct(game),
                free_throw_rate: free_throw_rate(game),
                rolling_win_pct,
            };
            if metrics.effective_fg_pct.is_none() {
                tracing::warn!("Game on {} has no field goal attempts; EFG% and FTR not applicable", game.date);
            }
            metrics
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::gamelog::{GameResult, Venue};

    pub(crate) fn game(result: GameResult, venue: Venue) -> GameRecord {
        GameRecord {
            date: "10/10".to_string(),
            opponent: "Boston Celtics".to_string(),
            own_score: 110,
            opponent_score: 104,
            fgm: 40,
            fga: 85,
            fg_pct: 47.1,
            ftm: 18,
            fta: 22,
            ft_pct: 81.8,
            fg3m: 12,
            fg3a: 30,
            fg3_pct: 40.0,
            points: 110,
            result,
            venue,
        }
    }

    #[test]
    fn test_rolling_win_percentage() {
        let games = [
            game(GameResult::Win, Venue::Home),
            game(GameResult::Loss, Venue::Away),
            game(GameResult::Win, Venue::Home),
        ];
        let rolling = rolling_win_percentage(&games);
        assert_eq!(rolling.per_game, vec![100.0, 50.0, 66.67]);
        assert_eq!((rolling.wins, rolling.games), (2, 3));

        // A second scan starts from zero again
        assert_eq!(rolling_win_percentage(&games), rolling);
        assert!(rolling_win_percentage(&[]).per_game.is_empty());
    }

    #[test]
    fn test_rolling_win_percentage_rounds_ties_to_even() {
        let mut games = vec![game(GameResult::Win, Venue::Home)];
        games.extend((0..31).map(|_| game(GameResult::Loss, Venue::Away)));

        // 1 win in 32 games is exactly 3.125
        let rolling = rolling_win_percentage(&games);
        assert_eq!(rolling.per_game[31], 3.12);
        assert_eq!(round2(15.625), 15.62);
    }

    #[test]
    fn test_effective_fg_pct() {
        let mut g = game(GameResult::Win, Venue::Home);
        g.fgm = 5;
        g.fg3m = 2;
        g.fga = 10;
        assert_eq!(effective_fg_pct(&g), Some(60.0));

        g.fga = 0;
        assert_eq!(effective_fg_pct(&g), None);
        assert_eq!(free_throw_rate(&g), None);
    }

    #[test]
    fn test_free_throw_rate_and_differential() {
        let g = game(GameResult::Win, Venue::Home);
        // 18 / 85 * 100 = 21.176...
        assert_eq!(free_throw_rate(&g), Some(21.18));
        assert_eq!(point_differential(&g), 6);
    }

    #[test]
    fn test_derive_all_keeps_order() {
        let mut away_loss = game(GameResult::Loss, Venue::Away);
        away_loss.points = 95;
        away_loss.opponent_score = 100;
        let derived = derive_all(&[game(GameResult::Win, Venue::Home), away_loss]);

        assert_eq!(derived.len(), 2);
        assert_eq!(derived[0].point_differential, 6);
        assert_eq!(derived[1].point_differential, -5);
        assert_eq!(derived[1].rolling_win_pct, 50.0);
    }
}
