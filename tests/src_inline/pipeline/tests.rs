use std::collections::BTreeMap;

use super::*;
use crate::input::fixture::fixture_table;
use crate::model::metrics::{CityRecord, Direction};
use crate::model::pillars::{CombineRule, builtin_pillars};

fn def(id: &str, direction: Direction, weight: f64) -> PillarDef {
    PillarDef {
        id: id.to_string(),
        name: id.to_string(),
        fields: vec!["v".to_string()],
        direction,
        combine: CombineRule::Mean,
        weight,
    }
}

fn table(id: &str, rows: &[(&str, f64)]) -> PillarTable {
    let records = rows
        .iter()
        .map(|&(city, value)| {
            let mut values = BTreeMap::new();
            values.insert("v".to_string(), value);
            CityRecord {
                city: city.to_string(),
                values,
            }
        })
        .collect();
    PillarTable {
        pillar_id: id.to_string(),
        records,
    }
}

fn builtin_tables() -> Vec<PillarTable> {
    builtin_pillars()
        .iter()
        .map(|d| fixture_table(&d.id).unwrap())
        .collect()
}

#[test]
fn test_two_pillar_worked_example() {
    let defs = vec![
        def("air", Direction::HigherIsBetter, 0.5),
        def("green", Direction::HigherIsBetter, 0.5),
    ];
    let tables = vec![
        table("air", &[("A", 10.0), ("B", 20.0), ("C", 30.0)]),
        table("green", &[("A", 5.0), ("B", 5.0), ("C", 5.0)]),
    ];
    let ranked = run_scoring(&defs, &tables).unwrap();

    let by_city = |name: &str| ranked.entries.iter().find(|e| e.city == name).unwrap();
    assert_eq!(by_city("A").pillar_scores, vec![0.0, 50.0]);
    assert_eq!(by_city("B").pillar_scores, vec![50.0, 50.0]);
    assert_eq!(by_city("C").pillar_scores, vec![100.0, 50.0]);

    assert_eq!(by_city("C").rank, 1);
    assert_eq!(by_city("B").rank, 2);
    assert_eq!(by_city("A").rank, 3);
    assert_eq!(by_city("C").composite, 75.0);
    assert_eq!(by_city("A").composite, 25.0);

    assert!(!ranked.stats[0].degenerate);
    assert!(ranked.stats[1].degenerate);
}

#[test]
fn test_builtin_dataset_full_run() {
    let defs = builtin_pillars();
    let ranked = run_scoring(&defs, &builtin_tables()).unwrap();

    assert_eq!(ranked.entries.len(), 10);
    assert_eq!(ranked.pillars, ["air_quality", "green_space", "transport", "waste"]);

    for (i, entry) in ranked.entries.iter().enumerate() {
        assert_eq!(entry.rank, (i + 1) as u32);
        for &score in &entry.pillar_scores {
            assert!((0.0..=100.0).contains(&score));
        }
        // equal weights: composite is the plain mean of the pillar scores
        let mean: f64 = entry.pillar_scores.iter().sum::<f64>() / 4.0;
        assert!((entry.composite - mean).abs() < 1e-9);
    }
    for pair in ranked.entries.windows(2) {
        assert!(pair[0].composite >= pair[1].composite);
    }

    let top = &ranked.entries[0];
    assert_eq!(top.city, "Sligo");
    // Sligo has the cleanest air and the most green space
    assert_eq!(top.pillar_scores[0], 100.0);
    assert_eq!(top.pillar_scores[1], 100.0);

    let last = &ranked.entries[9];
    assert_eq!(last.city, "Dublin");
    // Dublin bottoms out three pillars and tops transport
    assert_eq!(last.pillar_scores[0], 0.0);
    assert_eq!(last.pillar_scores[1], 0.0);
    assert_eq!(last.pillar_scores[2], 100.0);
    assert_eq!(last.pillar_scores[3], 0.0);
    assert_eq!(last.composite, 25.0);
}

#[test]
fn test_input_order_does_not_change_scores() {
    let defs = builtin_pillars();
    let forward = run_scoring(&defs, &builtin_tables()).unwrap();

    let reversed_tables: Vec<PillarTable> = builtin_tables()
        .into_iter()
        .map(|mut t| {
            t.records.reverse();
            t
        })
        .collect();
    let reversed = run_scoring(&defs, &reversed_tables).unwrap();

    for entry in &forward.entries {
        let other = reversed
            .entries
            .iter()
            .find(|e| e.city == entry.city)
            .unwrap();
        assert_eq!(entry.composite.to_bits(), other.composite.to_bits());
        assert_eq!(entry.rank, other.rank);
    }
}

#[test]
fn test_determinism_bits() {
    let defs = builtin_pillars();
    let a = run_scoring(&defs, &builtin_tables()).unwrap();
    let b = run_scoring(&defs, &builtin_tables()).unwrap();
    for (x, y) in a.entries.iter().zip(&b.entries) {
        assert_eq!(x.city, y.city);
        assert_eq!(x.composite.to_bits(), y.composite.to_bits());
        for (p, q) in x.pillar_scores.iter().zip(&y.pillar_scores) {
            assert_eq!(p.to_bits(), q.to_bits());
        }
    }
}

#[test]
fn test_missing_city_aborts_run() {
    let defs = builtin_pillars();
    let mut tables = builtin_tables();
    tables[3].records.retain(|r| r.city != "Bray");
    let err = run_scoring(&defs, &tables).unwrap_err();
    match err {
        ScoreError::MissingData { pillar, city } => {
            assert_eq!(pillar, "waste");
            assert_eq!(city, "Bray");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_bad_weights_abort_run() {
    let mut defs = builtin_pillars();
    defs[3].weight = 0.15;
    let err = run_scoring(&defs, &builtin_tables()).unwrap_err();
    assert!(matches!(err, ScoreError::WeightSum { .. }));
    assert!(err.to_string().starts_with("validation error"));
}

#[test]
fn test_single_city_all_pillars_degenerate() {
    let defs = builtin_pillars();
    let tables: Vec<PillarTable> = builtin_tables()
        .into_iter()
        .map(|mut t| {
            t.records.truncate(1);
            t
        })
        .collect();
    let ranked = run_scoring(&defs, &tables).unwrap();
    assert_eq!(ranked.entries.len(), 1);
    let only = &ranked.entries[0];
    assert_eq!(only.rank, 1);
    assert_eq!(only.city, "Dublin");
    assert_eq!(only.pillar_scores, vec![50.0, 50.0, 50.0, 50.0]);
    assert_eq!(only.composite, 50.0);
    for stat in &ranked.stats {
        assert!(stat.degenerate);
    }
}
