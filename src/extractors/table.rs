// src/extractors/table.rs

// --- Imports ---
use crate::gamelog::RawRow;
use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

// --- CSS Selectors (Lazy Static) ---
static TABLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("table").expect("Failed to compile TABLE_SELECTOR")
});

static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("tr").expect("Failed to compile ROW_SELECTOR")
});

// Header cells (<th>) are deliberately not matched: a header row yields no cells.
static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("td").expect("Failed to compile CELL_SELECTOR")
});

/// Turns the first table of a page into ordered rows of cell text.
pub struct TableExtractor;

impl TableExtractor {
    pub fn new() -> Self { Self {} }

    /// Extracts every row of the first `<table>` in document order.
    ///
    /// The header row is included (usually as an empty row); callers drop it.
    /// Cell text is returned untouched, including surrounding newlines.
    pub fn extract_first_table(&self, html_content: &str) -> Result<Vec<RawRow>, ExtractError> {
        let document = Html::parse_document(html_content);

        let table = document
            .select(&TABLE_SELECTOR)
            .next()
            .ok_or(ExtractError::NoTableFound)?;
        tracing::debug!("Found first table: {:?}", table.value().attr("class"));

        let rows: Vec<RawRow> = table.select(&ROW_SELECTOR).map(|row| self.row_cells(row)).collect();

        tracing::info!("Extracted {} rows from first table", rows.len());
        Ok(rows)
    }

    fn row_cells(&self, row: ElementRef) -> RawRow {
        row.select(&CELL_SELECTOR)
            .map(|cell| cell.text().collect::<String>())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_first_table_rows() {
        let html = r#"
            <!DOCTYPE html>
            <html><body>
            <h1>Game Log</h1>
            <table class="data-table">
              <thead><tr><th>Date</th><th>Opponent</th><th>Score</th></tr></thead>
              <tbody>
                <tr><td>10/10
</td><td><span>vs</span> <a href="/celtics">Boston Celtics</a></td><td>
W 120-110</td></tr>
                <tr><td>10/12</td><td>@ New York Knicks</td><td>L 95-100</td></tr>
              </tbody>
            </table>
            <table><tr><td>second table</td></tr></table>
            </body></html>
        "#;

        let rows = TableExtractor::new().extract_first_table(html).unwrap();

        assert_eq!(rows.len(), 3, "header plus two data rows expected");
        assert!(rows[0].is_empty(), "header row should carry no td cells");
        assert_eq!(rows[1], vec!["10/10\n", "vs Boston Celtics", "\nW 120-110"]);
        assert_eq!(rows[2][1], "@ New York Knicks");
        assert!(!rows.iter().flatten().any(|c| c.contains("second table")));
    }

    #[test]
    fn test_no_table_found() {
        let html = "<html><body><p>Nothing to see</p></body></html>";
        let err = TableExtractor::new().extract_first_table(html).unwrap_err();
        assert!(matches!(err, ExtractError::NoTableFound));
    }
}
