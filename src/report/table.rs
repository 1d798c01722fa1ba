use crate::model::pillars::PillarDef;
use crate::model::scores::RankedTable;
use crate::report::{format_score, summarize};

pub fn render_rankings_text(table: &RankedTable, defs: &[PillarDef]) -> String {
    let summary = summarize(&table.entries);
    let mut out = String::new();

    out.push_str("City Sustainability Index\n");
    out.push_str("=========================\n\n");

    out.push_str(&format!("1. Rankings ({} cities)\n", table.entries.len()));
    out.push_str(&render_table(table, defs));
    out.push('\n');

    out.push_str("2. Summary\n");
    out.push_str(&format!(
        "Best: {} ({})\n",
        summary.best_city,
        format_score(summary.best)
    ));
    out.push_str(&format!(
        "Worst: {} ({})\n",
        summary.worst_city,
        format_score(summary.worst)
    ));
    out.push_str(&format!("Average: {}\n\n", format_score(summary.mean)));

    out.push_str("3. Top 3\n");
    for entry in table.entries.iter().take(3) {
        out.push_str(&format!(
            "{}. {} - {}\n",
            entry.rank,
            entry.city,
            format_score(entry.composite)
        ));
    }

    out
}

fn render_table(table: &RankedTable, defs: &[PillarDef]) -> String {
    let mut header: Vec<String> = vec!["Rank".to_string(), "City".to_string(), "Score".to_string()];
    for def in defs {
        header.push(def.name.clone());
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(table.entries.len());
    for entry in &table.entries {
        let mut row = vec![
            entry.rank.to_string(),
            entry.city.clone(),
            format_score(entry.composite),
        ];
        for &score in &entry.pillar_scores {
            row.push(format_score(score));
        }
        rows.push(row);
    }

    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for row in &rows {
        for (cell, width) in row.iter().zip(widths.iter_mut()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        if i + 1 == cells.len() {
            out.push_str(cell);
        } else {
            out.push_str(&format!("{cell:<width$}"));
        }
    }
    out.push('\n');
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/table.rs"]
mod tests;
