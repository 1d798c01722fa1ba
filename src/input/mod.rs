use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub mod fixture;
pub mod tables;

use crate::model::metrics::PillarTable;
use crate::model::pillars::PillarDef;
use tables::parse_table;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSourceKind {
    Directory,
    Builtin,
}

/// Per-pillar tables in pillar definition order.
#[derive(Debug, Clone)]
pub struct InputBundle {
    pub tables: Vec<PillarTable>,
    pub source: InputSourceKind,
}

pub fn load_input_dir(input_dir: &Path, defs: &[PillarDef]) -> Result<InputBundle, InputError> {
    let mut tables = Vec::with_capacity(defs.len());
    for def in defs {
        let path = find_table_path(input_dir, &def.id)?;
        info!("discovered {} table: {}", def.id, path.display());
        tables.push(parse_table(&def.id, &path)?);
    }
    Ok(InputBundle {
        tables,
        source: InputSourceKind::Directory,
    })
}

pub fn load_input_builtin(defs: &[PillarDef]) -> Result<InputBundle, InputError> {
    let mut tables = Vec::with_capacity(defs.len());
    for def in defs {
        let table = fixture::fixture_table(&def.id).ok_or_else(|| {
            InputError::MissingInput(format!(
                "no built-in table for pillar {}; supply --input",
                def.id
            ))
        })?;
        tables.push(table);
    }
    info!("using built-in reference dataset for {} pillars", defs.len());
    Ok(InputBundle {
        tables,
        source: InputSourceKind::Builtin,
    })
}

fn find_table_path(input_dir: &Path, pillar_id: &str) -> Result<PathBuf, InputError> {
    let mut candidates = vec![format!("{pillar_id}.json"), format!("{pillar_id}.json.gz")];
    for alias in pillar_aliases(pillar_id) {
        candidates.push(format!("{alias}.json"));
        candidates.push(format!("{alias}.json.gz"));
    }
    for name in &candidates {
        let path = input_dir.join(name);
        if path.exists() {
            return Ok(path);
        }
    }
    Err(InputError::MissingInput(format!(
        "missing {pillar_id}.json(.gz) in {}",
        input_dir.display()
    )))
}

/// Alternate file stems accepted for a pillar's table, matching names the
/// upstream dataset dumps have shipped under.
fn pillar_aliases(pillar_id: &str) -> &'static [&'static str] {
    match pillar_id {
        "green_space" => &["green_spaces"],
        "waste" => &["waste_management"],
        _ => &[],
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
