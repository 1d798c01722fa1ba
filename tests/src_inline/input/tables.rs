use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("urbanscore_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_parse_table_plain() {
    let dir = make_temp_dir();
    let path = dir.join("air_quality.json");
    write_file(
        &path,
        r#"[
            {"city": "Dublin", "pm25": 9.2, "no2": 18.5, "source": "EPA Ireland", "year": 2023},
            {"city": "Cork", "pm25": 7.8, "no2": 15.2}
        ]"#,
    );
    let table = parse_table("air_quality", &path).unwrap();
    assert_eq!(table.pillar_id, "air_quality");
    assert_eq!(table.records.len(), 2);

    let dublin = &table.records[0];
    assert_eq!(dublin.city, "Dublin");
    assert_eq!(dublin.values["pm25"], 9.2);
    assert_eq!(dublin.values["no2"], 18.5);
    // numeric extras ride along, string provenance fields do not
    assert_eq!(dublin.values["year"], 2023.0);
    assert!(!dublin.values.contains_key("source"));
}

#[test]
fn test_parse_table_gz() {
    let dir = make_temp_dir();
    let path = dir.join("waste.json.gz");
    write_gz(&path, r#"[{"city": "Sligo", "recycling_rate": 50.2}]"#);
    let table = parse_table("waste", &path).unwrap();
    assert_eq!(table.records.len(), 1);
    assert_eq!(table.records[0].values["recycling_rate"], 50.2);
}

#[test]
fn test_parse_table_trims_city() {
    let dir = make_temp_dir();
    let path = dir.join("t.json");
    write_file(&path, r#"[{"city": "  Bray ", "v": 1.0}]"#);
    let table = parse_table("t", &path).unwrap();
    assert_eq!(table.records[0].city, "Bray");
}

#[test]
fn test_parse_table_not_an_array() {
    let dir = make_temp_dir();
    let path = dir.join("t.json");
    write_file(&path, r#"{"city": "Dublin"}"#);
    assert!(parse_table("t", &path).is_err());
}

#[test]
fn test_parse_table_row_not_object() {
    let dir = make_temp_dir();
    let path = dir.join("t.json");
    write_file(&path, r#"[42]"#);
    let err = parse_table("t", &path).unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
    assert!(err.to_string().contains("row 1"));
}

#[test]
fn test_parse_table_missing_city() {
    let dir = make_temp_dir();
    let path = dir.join("t.json");
    write_file(&path, r#"[{"pm25": 9.2}]"#);
    let err = parse_table("t", &path).unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
}

#[test]
fn test_parse_table_empty_city() {
    let dir = make_temp_dir();
    let path = dir.join("t.json");
    write_file(&path, r#"[{"city": "   ", "pm25": 9.2}]"#);
    let err = parse_table("t", &path).unwrap_err();
    assert!(err.to_string().contains("empty city"));
}

#[test]
fn test_parse_table_missing_file_is_io() {
    let dir = make_temp_dir();
    let err = parse_table("t", &dir.join("absent.json")).unwrap_err();
    assert!(matches!(err, InputError::Io(_)));
}
