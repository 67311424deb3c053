// src/source/mod.rs
pub mod client;

use crate::extractors::TableExtractor;
use crate::gamelog::RawRow;
use crate::utils::error::ExtractError;

/// Anything that can produce ordered rows of ordered cells.
pub trait TableSource {
    fn rows(&self) -> Result<Vec<RawRow>, ExtractError>;
}

/// Rows taken from the first table of an HTML page.
pub struct HtmlTableSource {
    html: String,
}

impl HtmlTableSource {
    pub fn new(html: String) -> Self {
        Self { html }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

impl TableSource for HtmlTableSource {
    fn rows(&self) -> Result<Vec<RawRow>, ExtractError> {
        TableExtractor::new().extract_first_table(&self.html)
    }
}

/// Rows held in memory, header row included.
#[cfg(test)]
pub struct StaticTableSource {
    rows: Vec<RawRow>,
}

#[cfg(test)]
impl StaticTableSource {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }
}

#[cfg(test)]
impl TableSource for StaticTableSource {
    fn rows(&self) -> Result<Vec<RawRow>, ExtractError> {
        Ok(self.rows.clone())
    }
}
