// src/pipeline.rs
use crate::dashboard::charts::{rolling_win_chart, venue_chart};
use crate::dashboard::DashboardData;
use crate::gamelog::normalize_rows;
use crate::metrics::{derive_all, SeasonSummary};
use crate::source::TableSource;
use crate::utils::AppError;

/// Runs extract -> normalize -> metrics -> chart specs over one table.
///
/// Holds no state between calls; every run recomputes from the source rows.
pub fn run_pipeline(source: &dyn TableSource) -> Result<DashboardData, AppError> {
    let rows = source.rows()?;

    // First row is the header
    let data_rows = rows.get(1..).unwrap_or_default();
    tracing::debug!("Normalizing {} data rows", data_rows.len());

    let games = normalize_rows(data_rows)?;
    let derived = derive_all(&games);
    let summary = SeasonSummary::compute(&games, &derived);

    Ok(DashboardData {
        rolling_win: rolling_win_chart(&games, &derived),
        venues: venue_chart(&summary),
        summary,
        games,
        derived,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamelog::{RawRow, Venue};
    use crate::source::{HtmlTableSource, StaticTableSource};

    fn raw(cells: &[&str]) -> RawRow {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn season_rows() -> Vec<RawRow> {
        vec![
            raw(&[]),
            raw(&["10/10\n", "vs Boston Celtics", "\nW 120-110", "44", "88", "50.0", "20", "25", "80.0", "12", "30", "40.0", "120"]),
            raw(&["10/12\n", "@ New York Knicks", "\nL 95-100", "35", "90", "38.9", "15", "20", "75.0", "10", "35", "28.6", "95"]),
            raw(&["10/14\n", "vs Miami Heat", "", "", "", "", "", "", "", "", "", "", ""]),
        ]
    }

    #[test]
    fn test_end_to_end_drops_unplayed_game() {
        let data = run_pipeline(&StaticTableSource::new(season_rows())).unwrap();

        assert_eq!(data.games.len(), 2);
        assert_eq!(data.summary.overall.record(), "1-1");
        assert_eq!(data.summary.overall.win_pct_display(), "50.0%");
        assert_eq!(data.summary.home.record(), "1-0");
        assert_eq!(data.summary.away.record(), "0-1");
        assert_eq!(data.games[1].venue, Venue::Away);
        assert_eq!(data.derived[0].point_differential, 10);
        assert_eq!(data.derived[1].point_differential, -5);
        assert_eq!(data.rolling_win.points.len(), 2);
        assert_eq!(data.venues.total(), 2);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let source = StaticTableSource::new(season_rows());
        let first = run_pipeline(&source).unwrap();
        let second = run_pipeline(&source).unwrap();

        assert_eq!(first.games, second.games);
        assert_eq!(first.derived, second.derived);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn test_empty_table() {
        let data = run_pipeline(&StaticTableSource::new(vec![])).unwrap();
        assert!(data.games.is_empty());
        assert_eq!(data.summary.overall.win_pct(), None);
    }

    #[test]
    fn test_html_source_without_table_fails() {
        let source = HtmlTableSource::new("<html><body>maintenance</body></html>".to_string());
        let err = run_pipeline(&source).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_html_source_end_to_end() {
        let html = r#"<table>
            <tr><th>Date</th><th>Opp</th><th>Score</th></tr>
            <tr><td>10/10</td><td>vs Boston Celtics</td><td>W 120-110</td><td>44</td><td>88</td><td>50.0</td><td>20</td><td>25</td><td>80.0</td><td>12</td><td>30</td><td>40.0</td><td>120</td></tr>
            <tr><td>10/12</td><td>@ Boston Celtics</td><td>W 101-99</td><td>40</td><td>80</td><td>50.0</td><td>11</td><td>15</td><td>73.3</td><td>10</td><td>30</td><td>33.3</td><td>101</td></tr>
        </table>"#;
        let data = run_pipeline(&HtmlTableSource::new(html.to_string())).unwrap();

        assert_eq!(data.summary.overall.record(), "2-0");
        assert_eq!(data.summary.away.win_pct_display(), "100.0%");
        // (44 + 6) / 88 and (40 + 5) / 80
        assert_eq!(data.derived[0].effective_fg_pct, Some(56.82));
        assert_eq!(data.derived[1].effective_fg_pct, Some(56.25));
    }
}
