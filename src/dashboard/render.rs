// src/dashboard/render.rs
use crate::dashboard::charts::{CategoryChart, LineChart, PRIMARY_COLOR};
use crate::metrics::SeasonSummary;
use std::f64::consts::PI;

const CHART_WIDTH: f64 = 560.0;
const CHART_HEIGHT: f64 = 340.0;
const CHART_MARGIN: f64 = 50.0;
const PIE_RADIUS: f64 = 120.0;

/// Escapes text for HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders the whole dashboard as one self-contained HTML document.
pub fn render_dashboard(
    team: &str,
    summary: &SeasonSummary,
    line: &LineChart,
    pie: &CategoryChart,
    generated_at: &str,
) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{} Performance</title>\n", escape(team)));

    html.push_str("<style>\n");
    html.push_str(&format!("body {{ font-family: sans-serif; text-align: center; color: {}; }}\n", PRIMARY_COLOR));
    html.push_str(".row { display: flex; justify-content: space-around; }\n");
    html.push_str(".row > div { flex: 1; padding: 4px; }\n");
    html.push_str(".label { font-weight: bold; }\n");
    html.push_str(".charts { display: flex; flex-wrap: wrap; justify-content: center; }\n");
    html.push_str("footer { font-size: small; margin-top: 20px; }\n");
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str(&format!("<h1>{} Performance</h1>\n<hr>\n", escape(team)));

    // Record block: Overall / Home / Away
    html.push_str("<div class=\"row\"><div><h3>Overall</h3></div><div><h3>Home</h3></div><div><h3>Away</h3></div></div>\n");
    html.push_str("<div class=\"row label\">");
    for _ in 0..3 {
        html.push_str("<div>Record</div><div>Win Percentage</div>");
    }
    html.push_str("</div>\n<div class=\"row\">");
    for record in [&summary.overall, &summary.home, &summary.away] {
        html.push_str(&format!(
            "<div>{}</div><div>{}</div>",
            escape(&record.record()),
            escape(&record.win_pct_display())
        ));
    }
    html.push_str("</div>\n<hr>\n");

    html.push_str("<h3>Key Performance Indicators</h3>\n");
    html.push_str("<div class=\"row label\"><div>3 Point Percentage</div><div>Effective Field Goal Percentage</div><div>Free Throw Percentage</div></div>\n");
    html.push_str(&format!(
        "<div class=\"row\"><div>{}</div><div>{}</div><div>{}</div></div>\n<hr>\n",
        escape(&summary.three_pt_display()),
        escape(&summary.efg_display()),
        escape(&summary.ft_display())
    ));

    html.push_str("<div class=\"charts\">\n");
    html.push_str(&render_line_chart(line));
    html.push_str(&render_pie_chart(pie));
    html.push_str("</div>\n");

    html.push_str(&format!("<footer>Generated {}</footer>\n", escape(generated_at)));
    html.push_str("</body>\n</html>\n");
    html
}

/// Line chart on a fixed 0-100 y axis; x positions are spaced evenly by game.
pub fn render_line_chart(chart: &LineChart) -> String {
    let plot_w = CHART_WIDTH - 2.0 * CHART_MARGIN;
    let plot_h = CHART_HEIGHT - 2.0 * CHART_MARGIN;
    let n = chart.points.len();

    let x_at = |i: usize| {
        if n <= 1 {
            CHART_MARGIN + plot_w / 2.0
        } else {
            CHART_MARGIN + plot_w * i as f64 / (n - 1) as f64
        }
    };
    let y_at = |v: f64| CHART_MARGIN + plot_h * (1.0 - v.clamp(0.0, 100.0) / 100.0);

    let mut svg = format!(
        "<svg class=\"line-chart\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = CHART_WIDTH,
        h = CHART_HEIGHT
    );
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"24\" text-anchor=\"middle\" font-weight=\"bold\" font-size=\"18\" fill=\"{}\">{}</text>\n",
        CHART_WIDTH / 2.0,
        PRIMARY_COLOR,
        escape(&chart.title)
    ));

    // Axes and y gridlines every 25%
    for tick in [0.0, 25.0, 50.0, 75.0, 100.0] {
        let y = y_at(tick);
        svg.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"#dddddd\"/>\
             <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"12\">{}</text>\n",
            CHART_MARGIN,
            CHART_MARGIN + plot_w,
            CHART_MARGIN - 6.0,
            y + 4.0,
            tick,
            y = y
        ));
    }
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"14\">{}</text>\n",
        CHART_WIDTH / 2.0,
        CHART_HEIGHT - 12.0,
        escape(&chart.x_title)
    ));

    if n > 0 {
        let path: Vec<String> = chart
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{:.1},{:.1}", x_at(i), y_at(p.value)))
            .collect();
        svg.push_str(&format!(
            "<polyline fill=\"none\" stroke=\"{}\" stroke-width=\"2\" points=\"{}\"/>\n",
            PRIMARY_COLOR,
            path.join(" ")
        ));
        for (i, p) in chart.points.iter().enumerate() {
            svg.push_str(&format!(
                "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"3\" fill=\"{}\"><title>{}: {}</title></circle>\n",
                x_at(i),
                y_at(p.value),
                PRIMARY_COLOR,
                escape(&p.label),
                p.value
            ));
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Pie chart with "label percent" text inside each slice.
pub fn render_pie_chart(chart: &CategoryChart) -> String {
    let cx = CHART_WIDTH / 2.0;
    let cy = CHART_HEIGHT / 2.0 + 15.0;
    let total = chart.total();

    let mut svg = format!(
        "<svg class=\"pie-chart\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = CHART_WIDTH,
        h = CHART_HEIGHT
    );
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"24\" text-anchor=\"middle\" font-weight=\"bold\" font-size=\"18\" fill=\"{}\">{}</text>\n",
        cx,
        PRIMARY_COLOR,
        escape(&chart.title)
    ));

    if total == 0 {
        svg.push_str(&format!("<text x=\"{}\" y=\"{}\" text-anchor=\"middle\">No games</text>\n</svg>\n", cx, cy));
        return svg;
    }

    // Angles measured clockwise from 12 o'clock
    let point = |angle: f64, r: f64| (cx + r * angle.sin(), cy - r * angle.cos());
    let mut start = 0.0_f64;

    for slice in chart.slices.iter().filter(|s| s.count > 0) {
        let share = slice.count as f64 / total as f64;
        let end = start + share * 2.0 * PI;

        if slice.count == total {
            svg.push_str(&format!(
                "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"{}\"/>\n",
                cx, cy, PIE_RADIUS, slice.color
            ));
        } else {
            let (x1, y1) = point(start, PIE_RADIUS);
            let (x2, y2) = point(end, PIE_RADIUS);
            let large_arc = if share > 0.5 { 1 } else { 0 };
            svg.push_str(&format!(
                "<path d=\"M {:.1} {:.1} L {:.1} {:.1} A {r:.1} {r:.1} 0 {} 1 {:.1} {:.1} Z\" fill=\"{}\"/>\n",
                cx, cy, x1, y1, large_arc, x2, y2, slice.color,
                r = PIE_RADIUS
            ));
        }

        let (lx, ly) = point((start + end) / 2.0, PIE_RADIUS * 0.6);
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" fill=\"#ffffff\" font-size=\"14\">{} {:.1}%</text>\n",
            lx,
            ly,
            escape(&slice.label),
            share * 100.0
        ));
        start = end;
    }

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::charts::{ChartPoint, Slice, ACCENT_COLOR};
    use crate::metrics::summary::WinLoss;

    fn summary() -> SeasonSummary {
        SeasonSummary {
            overall: WinLoss { wins: 1, losses: 1 },
            home: WinLoss { wins: 1, losses: 0 },
            away: WinLoss { wins: 0, losses: 1 },
            home_games: 1,
            away_games: 1,
            mean_fg_pct: Some(47.1),
            mean_ft_pct: Some(81.8),
            mean_fg3_pct: Some(40.0),
            mean_efg_pct: None,
        }
    }

    fn pie(home: usize, away: usize) -> CategoryChart {
        CategoryChart {
            title: "Proportion of Home Games".to_string(),
            slices: vec![
                Slice { label: "Home".to_string(), count: home, color: PRIMARY_COLOR.to_string() },
                Slice { label: "Away".to_string(), count: away, color: ACCENT_COLOR.to_string() },
            ],
        }
    }

    #[test]
    fn test_render_dashboard_contents() {
        let line = LineChart {
            title: "Rolling Win Percentage".to_string(),
            x_title: "Season Start to End".to_string(),
            points: vec![
                ChartPoint { label: "10/10".to_string(), value: 100.0 },
                ChartPoint { label: "10/12".to_string(), value: 50.0 },
            ],
        };
        let html = render_dashboard("Washington <Wizards>", &summary(), &line, &pie(1, 1), "2024-01-01T00:00:00Z");

        assert!(html.contains("<h1>Washington &lt;Wizards&gt; Performance</h1>"));
        assert!(html.contains("<div>1-1</div><div>50.0%</div>"));
        assert!(html.contains("<div>0-1</div><div>0.0%</div>"));
        assert!(html.contains("40.0 %"));
        assert!(html.contains("<div>N/A</div>"), "undefined EFG mean should render N/A");
        assert!(html.contains("<polyline"));
        assert!(html.contains("Home 50.0%"));
    }

    #[test]
    fn test_pie_edge_cases() {
        assert!(render_pie_chart(&pie(0, 0)).contains("No games"));

        let all_home = render_pie_chart(&pie(4, 0));
        assert!(all_home.contains("<circle"));
        assert!(all_home.contains("Home 100.0%"));
        assert!(!all_home.contains("Away"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & b <c> \"d\" 'e'"), "a &amp; b &lt;c&gt; &quot;d&quot; &#39;e&#39;");
    }
}
