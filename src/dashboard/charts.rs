// src/dashboard/charts.rs
use crate::gamelog::{GameRecord, Venue};
use crate::metrics::{DerivedMetrics, SeasonSummary};
use serde::Serialize;

pub const PRIMARY_COLOR: &str = "#002B5C";
pub const ACCENT_COLOR: &str = "#E31837";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// A single line series, drawn in point order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x_title: String,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub count: usize,
    pub color: String,
}

/// Share of a whole split into categories (drawn as a pie).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChart {
    pub title: String,
    pub slices: Vec<Slice>,
}

impl CategoryChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}

/// Rolling win percentage keyed by the game's date token.
pub fn rolling_win_chart(games: &[GameRecord], derived: &[DerivedMetrics]) -> LineChart {
    LineChart {
        title: "Rolling Win Percentage".to_string(),
        x_title: "Season Start to End".to_string(),
        points: games
            .iter()
            .zip(derived)
            .map(|(game, metrics)| ChartPoint { label: game.date.clone(), value: metrics.rolling_win_pct })
            .collect(),
    }
}

/// Home against away game counts.
pub fn venue_chart(summary: &SeasonSummary) -> CategoryChart {
    let slice = |venue: Venue, count: usize, color: &str| Slice {
        label: venue.label().to_string(),
        count,
        color: color.to_string(),
    };
    CategoryChart {
        title: "Proportion of Home Games".to_string(),
        slices: vec![
            slice(Venue::Home, summary.home_games, PRIMARY_COLOR),
            slice(Venue::Away, summary.away_games, ACCENT_COLOR),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamelog::GameResult;
    use crate::metrics::derive_all;
    use crate::metrics::derived::tests::game;

    #[test]
    fn test_chart_specs() {
        let mut games = vec![
            game(GameResult::Win, Venue::Home),
            game(GameResult::Loss, Venue::Away),
            game(GameResult::Win, Venue::Away),
        ];
        games[1].date = "10/12".to_string();
        let derived = derive_all(&games);
        let summary = SeasonSummary::compute(&games, &derived);

        let line = rolling_win_chart(&games, &derived);
        let values: Vec<f64> = line.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![100.0, 50.0, 66.67]);
        assert_eq!(line.points[1].label, "10/12");

        let pie = venue_chart(&summary);
        assert_eq!(pie.total(), 3);
        assert_eq!(pie.slices[0].label, "Home");
        assert_eq!(pie.slices[0].count, 1);
        assert_eq!(pie.slices[1].count, 2);
    }
}
