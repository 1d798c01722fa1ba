mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use crate::input::{InputBundle, InputSourceKind, load_input_builtin, load_input_dir};
use crate::model::pillars::{PillarDef, builtin_pillars, load_pillar_defs};
use crate::pipeline::run_scoring;
use crate::pipeline::stage5_report::{Stage5Input, write_reports};
use crate::report::table::render_rankings_text;

#[derive(Parser, Debug)]
#[command(
    name = "urbanscore",
    version,
    about = "Composite sustainability scoring and ranking for cities"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score and rank cities from per-pillar metric tables
    Run {
        /// Directory of per-pillar JSON tables; uses the bundled reference
        /// dataset when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output directory for rankings.csv, summary.json, report.txt and
        /// report.html
        #[arg(long)]
        out: PathBuf,
        /// JSON file of pillar definitions replacing the built-in set
        #[arg(long)]
        pillars: Option<PathBuf>,
        /// Comma-separated weight overrides in pillar order; must sum to 1.0
        #[arg(long, value_delimiter = ',')]
        weights: Option<Vec<f64>>,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Run {
            input,
            out,
            pillars,
            weights,
        } => run_scoring_command(input, out, pillars, weights),
    }
}

fn run_scoring_command(
    input: Option<PathBuf>,
    out: PathBuf,
    pillars: Option<PathBuf>,
    weights: Option<Vec<f64>>,
) -> Result<(), String> {
    let mut defs = match &pillars {
        Some(path) => load_pillar_defs(path).map_err(|e| e.to_string())?,
        None => builtin_pillars(),
    };
    if let Some(weights) = &weights {
        apply_weight_overrides(&mut defs, weights)?;
    }

    let bundle = match &input {
        Some(dir) => load_input_dir(dir, &defs).map_err(|e| e.to_string())?,
        None => load_input_builtin(&defs).map_err(|e| e.to_string())?,
    };

    let table = run_scoring(&defs, &bundle.tables).map_err(|e| e.to_string())?;

    print!("{}", render_rankings_text(&table, &defs));

    let stage5 = Stage5Input {
        table: &table,
        defs: &defs,
        input_source: input_source_label(&bundle, input.as_deref()),
        tool_name: "urbanscore".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&stage5, &out).map_err(|e| e.to_string())?;
    info!("reports written to {}", out.display());

    Ok(())
}

fn apply_weight_overrides(defs: &mut [PillarDef], weights: &[f64]) -> Result<(), String> {
    if weights.len() != defs.len() {
        return Err(format!(
            "validation error: expected {} weights, got {}",
            defs.len(),
            weights.len()
        ));
    }
    for (def, &weight) in defs.iter_mut().zip(weights) {
        def.weight = weight;
    }
    Ok(())
}

fn input_source_label(bundle: &InputBundle, input_dir: Option<&Path>) -> String {
    match bundle.source {
        InputSourceKind::Directory => input_dir
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "directory".to_string()),
        InputSourceKind::Builtin => "builtin".to_string(),
    }
}
