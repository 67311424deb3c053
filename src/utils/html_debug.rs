// src/utils/html_debug.rs
use crate::dashboard::render::escape;
use crate::gamelog::normalize::row_status;
use crate::gamelog::RawRow;
use crate::utils::error::AppError;
use regex::Regex;

/// Table structure markers highlighted in the annotated page.
pub const TABLE_PATTERNS: [(&str, &str); 4] = [
    (r"(?i)</?table\b[^>]*>", "table"),
    (r"(?i)</?tr\b[^>]*>", "row"),
    (r"(?i)<td\b[^>]*>", "cell"),
    (r"(?i)<th\b[^>]*>", "header"),
];

/// Renders raw markup as escaped source text with highlighted spans.
pub fn annotate_source(html: &str, highlights: &[(usize, usize, &str)]) -> String {
    let mut debug_html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<style>\n");

    debug_html.push_str(".highlight-table { background-color: #FFFF00; }\n");
    debug_html.push_str(".highlight-row { background-color: #90EE90; }\n");
    debug_html.push_str(".highlight-cell { background-color: #ADD8E6; }\n");
    debug_html.push_str(".highlight-header { background-color: #FFA500; }\n");
    debug_html.push_str("</style>\n</head>\n<body>\n<pre>\n");

    let mut sorted_highlights = highlights.to_vec();
    sorted_highlights.sort_by_key(|h| h.0);

    let mut last_pos = 0;
    for (start, end, highlight_type) in sorted_highlights {
        // Patterns never overlap in practice, but skip any that would
        if start < last_pos {
            continue;
        }
        debug_html.push_str(&escape(&html[last_pos..start]));
        debug_html.push_str(&format!(
            "<span class=\"highlight-{}\" title=\"Position: {}-{}\">",
            highlight_type, start, end
        ));
        debug_html.push_str(&escape(&html[start..end]));
        debug_html.push_str("</span>");
        last_pos = end;
    }

    if last_pos < html.len() {
        debug_html.push_str(&escape(&html[last_pos..]));
    }

    debug_html.push_str("\n</pre>\n</body>\n</html>");
    debug_html
}

/// Builds the annotated page, highlighting every match of the given patterns
pub fn create_debug_html(html: &str, patterns: &[(&str, &str)]) -> Result<String, AppError> {
    let mut highlights = Vec::new();

    for (pattern, highlight_type) in patterns {
        let re = Regex::new(pattern).map_err(|e| {
            AppError::Config(format!("Invalid regex pattern '{}': {}", pattern, e))
        })?;

        for mat in re.find_iter(html) {
            highlights.push((mat.start(), mat.end(), *highlight_type));
        }
    }

    tracing::debug!("Annotating page with {} table markers", highlights.len());
    Ok(annotate_source(html, &highlights))
}

/// One line per extracted row: its cells (newlines shown as "\n") and whether it was kept.
pub fn row_report(rows: &[RawRow]) -> String {
    let mut report = String::from("<!DOCTYPE html>\n<html>\n<head>\n<style>\n");
    report.push_str(".dropped { color: #999999; }\n .error { color: #E31837; font-weight: bold; }\n td { border: 1px solid #cccccc; padding: 2px; }\n");
    report.push_str("</style>\n</head>\n<body>\n<table>\n");

    for (i, row) in rows.iter().enumerate() {
        let status = if i == 0 { "header" } else { row_status(row).label() };
        report.push_str(&format!("<tr class=\"{}\"><td>{}</td><td>{}</td>", status, i, status));
        for cell in row {
            report.push_str(&format!("<td>{}</td>", escape(&cell.replace('\n', "\\n"))));
        }
        report.push_str("</tr>\n");
    }

    report.push_str("</table>\n</body>\n</html>");
    report
}
