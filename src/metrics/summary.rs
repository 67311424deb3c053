// src/metrics/summary.rs
use crate::gamelog::{GameRecord, GameResult, Venue};
use crate::metrics::derived::{round2, DerivedMetrics};
use serde::Serialize;

/// Shown wherever a value is undefined (no games, no attempts).
pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WinLoss {
    pub wins: u32,
    pub losses: u32,
}

impl WinLoss {
    fn tally<'a>(games: impl Iterator<Item = &'a GameRecord>) -> Self {
        games.fold(Self::default(), |mut acc, game| {
            match game.result {
                GameResult::Win => acc.wins += 1,
                GameResult::Loss => acc.losses += 1,
            }
            acc
        })
    }

    /// "W-L", e.g. "30-20".
    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }

    /// Win percentage rounded to two decimals; `None` without decided games.
    pub fn win_pct(&self) -> Option<f64> {
        let decided = self.wins + self.losses;
        if decided == 0 {
            return None;
        }
        Some(round2(self.wins as f64 / decided as f64 * 100.0))
    }

    pub fn win_pct_display(&self) -> String {
        self.win_pct()
            .map(|pct| format!("{}%", python_float(pct)))
            .unwrap_or_else(|| NOT_APPLICABLE.to_string())
    }
}

/// Season-level aggregates, computed once over every played game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonSummary {
    pub overall: WinLoss,
    pub home: WinLoss,
    pub away: WinLoss,
    pub home_games: usize,
    pub away_games: usize,
    pub mean_fg_pct: Option<f64>,
    pub mean_ft_pct: Option<f64>,
    pub mean_fg3_pct: Option<f64>,
    pub mean_efg_pct: Option<f64>,
}

impl SeasonSummary {
    pub fn compute(games: &[GameRecord], derived: &[DerivedMetrics]) -> Self {
        let at = |venue: Venue| games.iter().filter(move |g| g.venue == venue);

        let summary = Self {
            overall: WinLoss::tally(games.iter()),
            home: WinLoss::tally(at(Venue::Home)),
            away: WinLoss::tally(at(Venue::Away)),
            home_games: at(Venue::Home).count(),
            away_games: at(Venue::Away).count(),
            mean_fg_pct: mean(games.iter().map(|g| g.fg_pct)),
            mean_ft_pct: mean(games.iter().map(|g| g.ft_pct)),
            mean_fg3_pct: mean(games.iter().map(|g| g.fg3_pct)),
            mean_efg_pct: mean(derived.iter().filter_map(|d| d.effective_fg_pct)),
        };

        tracing::info!(
            "Season summary: overall {}, home {}, away {}",
            summary.overall.record(),
            summary.home.record(),
            summary.away.record()
        );
        summary
    }

    pub fn three_pt_display(&self) -> String {
        kpi_display(self.mean_fg3_pct)
    }

    pub fn efg_display(&self) -> String {
        kpi_display(self.mean_efg_pct)
    }

    pub fn ft_display(&self) -> String {
        kpi_display(self.mean_ft_pct)
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

fn kpi_display(value: Option<f64>) -> String {
    value
        .map(|v| format!("{} %", python_float(round2(v))))
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

/// Formats like Python's `str(float)`: whole numbers keep one decimal ("60.0").
pub fn python_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
