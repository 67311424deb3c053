// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use crate::dashboard::DashboardData;
use crate::utils::error::StorageError;

const DASHBOARD_FILE: &str = "dashboard.html";
const SUMMARY_FILE: &str = "summary.json";

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified output directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Writes the rendered dashboard page
    pub fn save_dashboard(&self, html: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(DASHBOARD_FILE);
        fs::write(&file_path, html)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved dashboard to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves the season summary, chart data and per-game metrics as JSON
    pub fn save_summary(&self, team: &str, data: &DashboardData, generated_at: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(SUMMARY_FILE);

        let document = serde_json::json!({
            "team": team,
            "generated_at": generated_at,
            "games_played": data.games.len(),
            "display": {
                "overall_record": data.summary.overall.record(),
                "overall_win_pct": data.summary.overall.win_pct_display(),
                "home_record": data.summary.home.record(),
                "home_win_pct": data.summary.home.win_pct_display(),
                "away_record": data.summary.away.record(),
                "away_win_pct": data.summary.away.win_pct_display(),
                "three_pt_pct": data.summary.three_pt_display(),
                "efg_pct": data.summary.efg_display(),
                "ft_pct": data.summary.ft_display(),
            },
            "data": data,
        });

        let document_str = serde_json::to_string_pretty(&document)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, document_str)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved summary to {}", file_path.display());
        Ok(file_path)
    }

    /// Writes an arbitrary debug artifact under `debug/`
    pub fn save_debug(&self, filename: &str, contents: &str) -> Result<PathBuf, StorageError> {
        let debug_dir = self.base_dir.join("debug");
        fs::create_dir_all(&debug_dir)
            .map_err(StorageError::IoError)?;

        let file_path = debug_dir.join(filename);
        fs::write(&file_path, contents)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved debug file {}", file_path.display());
        Ok(file_path)
    }
}
