// src/dashboard/mod.rs
pub mod charts;
pub mod render;

use crate::gamelog::GameRecord;
use crate::metrics::{DerivedMetrics, SeasonSummary};
use charts::{CategoryChart, LineChart};
use serde::Serialize;

/// Everything the dashboard shows, computed in one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub summary: SeasonSummary,
    pub rolling_win: LineChart,
    pub venues: CategoryChart,
    pub games: Vec<GameRecord>,
    pub derived: Vec<DerivedMetrics>,
}

impl DashboardData {
    pub fn render_html(&self, team: &str, generated_at: &str) -> String {
        render::render_dashboard(team, &self.summary, &self.rolling_win, &self.venues, generated_at)
    }
}
