// src/gamelog/models.rs
use serde::Serialize;

/// Column layout of the game log table, in page order.
pub const COLUMNS: [&str; 13] = [
    "Date", "Opponent", "Score", "FGM", "FGA", "FG%", "FTM", "FTA", "FT%", "3FGM", "3FGA", "3FG%", "PTS",
];

// Column indices into a RawRow
pub const DATE: usize = 0;
pub const OPPONENT: usize = 1;
pub const SCORE: usize = 2;
pub const FGM: usize = 3;
pub const FGA: usize = 4;
pub const FG_PCT: usize = 5;
pub const FTM: usize = 6;
pub const FTA: usize = 7;
pub const FT_PCT: usize = 8;
pub const FG3M: usize = 9;
pub const FG3A: usize = 10;
pub const FG3_PCT: usize = 11;
pub const PTS: usize = 12;

/// Unparsed text cells of one table row, exactly as scraped.
pub type RawRow = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameResult {
    Win,
    Loss,
}

impl GameResult {
    /// Parses the leading token of the score cell ("W" / "L").
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "W" => Some(GameResult::Win),
            "L" => Some(GameResult::Loss),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    pub fn label(&self) -> &'static str {
        match self {
            Venue::Home => "Home",
            Venue::Away => "Away",
        }
    }
}

/// One played game, normalized and typed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    pub date: String,
    pub opponent: String,
    pub own_score: i64,
    pub opponent_score: i64,
    pub fgm: i64,
    pub fga: i64,
    pub fg_pct: f64,
    pub ftm: i64,
    pub fta: i64,
    pub ft_pct: f64,
    pub fg3m: i64,
    pub fg3a: i64,
    pub fg3_pct: f64,
    pub points: i64,
    pub result: GameResult,
    pub venue: Venue,
}

impl GameRecord {
    pub fn is_win(&self) -> bool {
        self.result == GameResult::Win
    }
}
