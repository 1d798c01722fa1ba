use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::model::pillars::PillarDef;
use crate::model::scores::RankedTable;
use crate::report::csv::render_rankings_csv;
use crate::report::html::render_report_html;
use crate::report::json::{SummaryDoc, render_summary_json};
use crate::report::summarize;
use crate::report::table::render_rankings_text;

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub table: &'a RankedTable,
    pub defs: &'a [PillarDef],
    pub input_source: String,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let csv_path = out_dir.join("rankings.csv");
    write_text(&csv_path, &render_rankings_csv(input.table))?;

    let summary_path = out_dir.join("summary.json");
    let summary = build_summary(input);
    let json = render_summary_json(&summary).map_err(std::io::Error::other)?;
    write_text(&summary_path, &json)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_rankings_text(input.table, input.defs))?;

    let html_path = out_dir.join("report.html");
    write_text(&html_path, &render_report_html(input.table, input.defs))?;

    info!(
        "wrote rankings.csv, summary.json, report.txt, report.html to {}",
        out_dir.display()
    );
    Ok(())
}

fn build_summary(input: &Stage5Input<'_>) -> SummaryDoc {
    SummaryDoc {
        tool_name: input.tool_name.clone(),
        tool_version: input.tool_version.clone(),
        input_source: input.input_source.clone(),
        n_cities: input.table.entries.len(),
        pillars: input.defs.to_vec(),
        normalization: input.table.stats.clone(),
        composite: summarize(&input.table.entries),
        rankings: input.table.entries.clone(),
    }
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
