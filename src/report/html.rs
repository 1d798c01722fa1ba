use html_escape::encode_text;

use crate::model::metrics::Direction;
use crate::model::pillars::PillarDef;
use crate::model::scores::RankedTable;
use crate::report::{ScoreSummary, format_score, summarize};

/// Standalone HTML report: summary cards, the ranking table with the top
/// three rows highlighted, and a methodology section.
pub fn render_report_html(table: &RankedTable, defs: &[PillarDef]) -> String {
    let summary = summarize(&table.entries);
    let mut html = String::new();

    html.push_str(&render_head());
    html.push_str("<body>\n<div class=\"container\">\n");
    html.push_str(&render_header(table.entries.len()));
    html.push_str("<div class=\"content\">\n");
    html.push_str(&render_summary(&summary));
    html.push_str(&render_rankings(table, defs));
    html.push_str(&render_methodology(defs));
    html.push_str("</div>\n");
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_head() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>City Sustainability Index</title>
    <style>
{CSS}
    </style>
</head>
"#
    )
}

fn render_header(n_cities: usize) -> String {
    format!(
        r#"<div class="header">
    <h1>City Sustainability Index</h1>
    <p class="subtitle">Composite ranking of {n_cities} cities</p>
</div>
"#
    )
}

fn render_summary(summary: &ScoreSummary) -> String {
    format!(
        r#"<div class="section">
    <h2 class="section-title">Summary</h2>
    <div class="stats-grid">
        <div class="stat-item">
            <div class="stat-value">{}</div>
            <div class="stat-label">Best: {}</div>
        </div>
        <div class="stat-item">
            <div class="stat-value">{}</div>
            <div class="stat-label">Worst: {}</div>
        </div>
        <div class="stat-item">
            <div class="stat-value">{}</div>
            <div class="stat-label">Average</div>
        </div>
    </div>
</div>
"#,
        format_score(summary.best),
        encode_text(&summary.best_city),
        format_score(summary.worst),
        encode_text(&summary.worst_city),
        format_score(summary.mean),
    )
}

fn render_rankings(table: &RankedTable, defs: &[PillarDef]) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"section\">\n");
    out.push_str("<h2 class=\"section-title\">Rankings</h2>\n");
    out.push_str("<table class=\"rankings\">\n<thead>\n<tr>");
    out.push_str("<th>Rank</th><th>City</th><th>Score</th>");
    for def in defs {
        out.push_str(&format!("<th>{}</th>", encode_text(&def.name)));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for entry in &table.entries {
        if entry.rank <= 3 {
            out.push_str(&format!("<tr class=\"rank-{}\">", entry.rank));
        } else {
            out.push_str("<tr>");
        }
        out.push_str(&format!(
            "<td>{}</td><td>{}</td><td class=\"score\">{}</td>",
            entry.rank,
            encode_text(&entry.city),
            format_score(entry.composite)
        ));
        for &score in &entry.pillar_scores {
            out.push_str(&format!("<td>{}</td>", format_score(score)));
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n</div>\n");
    out
}

fn render_methodology(defs: &[PillarDef]) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"section\">\n");
    out.push_str("<h2 class=\"section-title\">Methodology</h2>\n");
    out.push_str(
        "<p>Each pillar is the mean of its raw fields, min-max normalized to a 0-100 \
         scale across the scored cities. The sustainability score is the weighted mean \
         of the pillar scores.</p>\n",
    );
    out.push_str("<ul class=\"methodology\">\n");
    for def in defs {
        let orientation = match def.direction {
            Direction::HigherIsBetter => "higher is better",
            Direction::LowerIsBetter => "lower is better",
        };
        out.push_str(&format!(
            "<li><strong>{}</strong> (weight {:.2}): {}; {}</li>\n",
            encode_text(&def.name),
            def.weight,
            encode_text(&def.fields.join(", ")),
            orientation
        ));
    }
    out.push_str("</ul>\n</div>\n");
    out
}

const CSS: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: #1e293b;
    background: #f0f4f0;
    padding: 2rem;
}

.container {
    max-width: 960px;
    margin: 0 auto;
    background: white;
    border-radius: 12px;
    box-shadow: 0 4px 6px -1px rgba(0,0,0,0.1);
    overflow: hidden;
}

.header {
    background: linear-gradient(135deg, #15803d 0%, #22c55e 100%);
    color: white;
    padding: 2.5rem 2rem;
    text-align: center;
}

.header h1 { font-size: 2.2rem; margin-bottom: 0.5rem; }
.header .subtitle { opacity: 0.9; font-size: 0.95rem; }

.content { padding: 2rem; }

.section { margin-bottom: 2rem; }
.section-title {
    font-size: 1.3rem;
    margin-bottom: 1rem;
    border-bottom: 2px solid #e2e8f0;
    padding-bottom: 0.4rem;
}

.stats-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
    gap: 1rem;
}

.stat-item {
    background: #f8fafc;
    border: 1px solid #e2e8f0;
    border-radius: 8px;
    padding: 1rem;
    text-align: center;
}

.stat-value { font-size: 1.6rem; font-weight: 700; color: #15803d; }
.stat-label { font-size: 0.9rem; color: #475569; }

table.rankings {
    width: 100%;
    border-collapse: collapse;
}

table.rankings th, table.rankings td {
    padding: 0.5rem 0.75rem;
    text-align: left;
    border-bottom: 1px solid #e2e8f0;
}

table.rankings th { background: #f1f5f9; }
table.rankings td.score { font-weight: 700; }

tr.rank-1 { background: #fef9c3; }
tr.rank-2 { background: #f1f5f9; }
tr.rank-3 { background: #ffedd5; }

ul.methodology { margin: 0.5rem 0 0 1.2rem; }
ul.methodology li { margin-bottom: 0.3rem; }
"#;

#[cfg(test)]
#[path = "../../tests/src_inline/report/html.rs"]
mod tests;
