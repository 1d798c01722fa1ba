use crate::model::scores::RankedTable;
use crate::report::format_score_full;

/// Render the ranking as CSV, one row per city in rank order. Pillar score
/// columns are named `<pillar_id>_score` and follow the configured pillar
/// order.
pub fn render_rankings_csv(table: &RankedTable) -> String {
    let mut out = String::new();

    let mut header: Vec<String> = vec![
        "rank".to_string(),
        "city".to_string(),
        "sustainability_score".to_string(),
    ];
    for id in &table.pillars {
        header.push(format!("{id}_score"));
    }
    out.push_str(&header.join(","));
    out.push('\n');

    for entry in &table.entries {
        let mut row: Vec<String> = vec![
            entry.rank.to_string(),
            csv_field(&entry.city),
            format_score_full(entry.composite),
        ];
        for &score in &entry.pillar_scores {
            row.push(format_score_full(score));
        }
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
