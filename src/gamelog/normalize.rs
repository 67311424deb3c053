// src/gamelog/normalize.rs

use crate::gamelog::models::*;
use crate::utils::error::NormalizeError;

/// Cell contents that mark a game which has not been played yet.
const PLACEHOLDERS: [&str; 4] = ["-", "--", "—", "N/A"];

// Tokens that mark the venue inside the opponent cell.
const AWAY_MARKER: &str = "@";
const VENUE_TOKENS: [&str; 3] = ["@", "vs", "vs."];

/// A row after text cleanup (steps 1-5), before the completeness filter.
/// `None` means the value is missing for this row.
#[derive(Debug, Clone, PartialEq)]
struct CleanRow {
    row: usize,
    date: Option<String>,
    opponent: Option<String>,
    result: Option<String>,
    own_score: Option<String>,
    opponent_score: Option<String>,
    venue: Venue,
    stats: Vec<Option<String>>, // FGM..PTS, page order
}

/// A complete row (step 6 passed), every value present as text.
#[derive(Debug, Clone)]
struct CompleteRow {
    row: usize,
    date: String,
    opponent: String,
    result: String,
    own_score: String,
    opponent_score: String,
    venue: Venue,
    stats: Vec<String>,
}

/// Maps raw table rows (header already removed) onto typed game records.
///
/// Rows of unplayed games are dropped silently; a row that looks complete but
/// cannot be coerced is reported as a data integrity error.
pub fn normalize_rows(rows: &[RawRow]) -> Result<Vec<GameRecord>, NormalizeError> {
    let cleaned = rows
        .iter()
        .enumerate()
        .map(|(i, raw)| clean_row(i + 1, raw))
        .collect::<Result<Vec<_>, _>>()?;

    let total = cleaned.len();
    let complete: Vec<CompleteRow> = cleaned.into_iter().filter_map(into_complete).collect();
    tracing::info!("Kept {} of {} rows ({} unplayed or incomplete dropped)", complete.len(), total, total - complete.len());

    complete
        .into_iter()
        .map(|row| coerce(row).map(strip_venue_tokens))
        .collect()
}

/// What normalization does with a single raw row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    Kept,
    Dropped,
    /// The row would fail the run with a data integrity error.
    Invalid,
}

impl RowStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RowStatus::Kept => "kept",
            RowStatus::Dropped => "dropped",
            RowStatus::Invalid => "error",
        }
    }
}

/// Classifies one raw row the same way `normalize_rows` treats it.
pub fn row_status(raw: &RawRow) -> RowStatus {
    let cleaned = match clean_row(0, raw) {
        Ok(row) => row,
        Err(_) => return RowStatus::Invalid,
    };
    match into_complete(cleaned) {
        None => RowStatus::Dropped,
        Some(row) if coerce(row.clone()).is_ok() => RowStatus::Kept,
        Some(_) => RowStatus::Invalid,
    }
}

/// Steps 1-5: text cleanup, result/score split and venue derivation.
fn clean_row(row: usize, raw: &RawRow) -> Result<CleanRow, NormalizeError> {
    if raw.len() > COLUMNS.len() {
        return Err(NormalizeError::DataIntegrity {
            row,
            column: "<row>",
            value: format!("{} cells", raw.len()),
            reason: format!("expected at most {} columns", COLUMNS.len()),
        });
    }

    let date = raw.get(DATE).map(|d| d.replace('\n', ""));
    let opponent = raw.get(OPPONENT).map(|o| o.replace('\n', " "));
    let score = raw.get(SCORE).map(|s| s.replace('\n', "").trim_start().to_string());

    let (result, own_score, opponent_score) = match score.as_deref().and_then(|s| s.split_once(' ')) {
        Some((result, rest)) => {
            let mut parts = rest.split('-');
            let own = parts.next().map(str::to_string);
            let opp = parts.next().map(str::to_string);
            (Some(result.to_string()), own, opp)
        }
        // No space: blank score of an unplayed game, or a bare token with no score
        None => (score.filter(|s| !s.is_empty()), None, None),
    };

    let venue = opponent.as_deref().map(venue_of).unwrap_or(Venue::Home);

    let stats = (FGM..=PTS).map(|idx| raw.get(idx).cloned()).collect();

    Ok(CleanRow {
        row,
        date: present(date),
        opponent: present(opponent),
        result: present(result),
        own_score: present(own_score),
        opponent_score: present(opponent_score),
        venue,
        stats: stats_present(stats),
    })
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let t = v.trim();
        !t.is_empty() && !PLACEHOLDERS.contains(&t)
    })
}

fn stats_present(values: Vec<Option<String>>) -> Vec<Option<String>> {
    values.into_iter().map(present).collect()
}

/// Venue from the first marker token of the opponent cell.
pub fn venue_of(opponent: &str) -> Venue {
    match opponent.split_whitespace().next() {
        Some(AWAY_MARKER) => Venue::Away,
        _ => Venue::Home,
    }
}

/// Step 6: drop rows with any missing value.
fn into_complete(row: CleanRow) -> Option<CompleteRow> {
    let complete = complete_values(&row);
    if complete.is_none() {
        tracing::debug!("Dropping row {} (missing values): {:?}", row.row, row);
    }
    complete
}

fn complete_values(row: &CleanRow) -> Option<CompleteRow> {
    Some(CompleteRow {
        row: row.row,
        date: row.date.clone()?,
        opponent: row.opponent.clone()?,
        result: row.result.clone()?,
        own_score: row.own_score.clone()?,
        opponent_score: row.opponent_score.clone()?,
        venue: row.venue,
        stats: row.stats.iter().cloned().collect::<Option<Vec<String>>>()?,
    })
}

/// Step 7: type coercion and sanity checks.
fn coerce(row: CompleteRow) -> Result<GameRecord, NormalizeError> {
    let n = row.row;
    let stat = |idx: usize| row.stats[idx - FGM].as_str();

    let result = GameResult::from_token(row.result.trim()).ok_or_else(|| NormalizeError::DataIntegrity {
        row: n,
        column: "Result",
        value: row.result.clone(),
        reason: "expected W or L".to_string(),
    })?;

    let record = GameRecord {
        date: row.date.clone(),
        opponent: row.opponent.clone(),
        own_score: parse_int(n, "Score", &row.own_score)?,
        opponent_score: parse_int(n, "OpponentScore", &row.opponent_score)?,
        fgm: parse_int(n, COLUMNS[FGM], stat(FGM))?,
        fga: parse_int(n, COLUMNS[FGA], stat(FGA))?,
        fg_pct: parse_pct(n, COLUMNS[FG_PCT], stat(FG_PCT))?,
        ftm: parse_int(n, COLUMNS[FTM], stat(FTM))?,
        fta: parse_int(n, COLUMNS[FTA], stat(FTA))?,
        ft_pct: parse_pct(n, COLUMNS[FT_PCT], stat(FT_PCT))?,
        fg3m: parse_int(n, COLUMNS[FG3M], stat(FG3M))?,
        fg3a: parse_int(n, COLUMNS[FG3A], stat(FG3A))?,
        fg3_pct: parse_pct(n, COLUMNS[FG3_PCT], stat(FG3_PCT))?,
        points: parse_int(n, COLUMNS[PTS], stat(PTS))?,
        result,
        venue: row.venue,
    };

    for (makes_col, makes, attempts_col, attempts) in [
        (FGM, record.fgm, FGA, record.fga),
        (FTM, record.ftm, FTA, record.fta),
        (FG3M, record.fg3m, FG3A, record.fg3a),
    ] {
        if attempts < makes {
            return Err(NormalizeError::DataIntegrity {
                row: n,
                column: COLUMNS[attempts_col],
                value: attempts.to_string(),
                reason: format!("fewer attempts than {} ({})", COLUMNS[makes_col], makes),
            });
        }
    }

    // The page's W/L label is trusted; a disagreeing score is only flagged.
    let disagrees = match record.result {
        GameResult::Win => record.own_score < record.opponent_score,
        GameResult::Loss => record.own_score > record.opponent_score,
    };
    if disagrees {
        tracing::warn!(
            "Row {}: result {:?} disagrees with score {}-{}; keeping the page's result",
            n, record.result, record.own_score, record.opponent_score
        );
    }

    Ok(record)
}

fn parse_int(row: usize, column: &'static str, value: &str) -> Result<i64, NormalizeError> {
    value.trim().parse::<i64>().map_err(|e| NormalizeError::DataIntegrity {
        row,
        column,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_pct(row: usize, column: &'static str, value: &str) -> Result<f64, NormalizeError> {
    let pct = value.trim().parse::<f64>().map_err(|e| NormalizeError::DataIntegrity {
        row,
        column,
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    if !(0.0..=100.0).contains(&pct) {
        return Err(NormalizeError::DataIntegrity {
            row,
            column,
            value: value.to_string(),
            reason: "percentage outside 0-100".to_string(),
        });
    }
    Ok(pct)
}

/// Step 8: leave only the opponent's name.
fn strip_venue_tokens(mut record: GameRecord) -> GameRecord {
    record.opponent = record
        .opponent
        .split_whitespace()
        .filter(|token| !VENUE_TOKENS.contains(token))
        .collect::<Vec<_>>()
        .join(" ");
    record
}
