use super::*;
use crate::model::pillars::CombineRule;
use crate::model::scores::RankedCity;

fn def(id: &str, name: &str, fields: &[&str], direction: Direction, weight: f64) -> PillarDef {
    PillarDef {
        id: id.to_string(),
        name: name.to_string(),
        fields: fields.iter().map(|f| f.to_string()).collect(),
        direction,
        combine: CombineRule::Mean,
        weight,
    }
}

fn entry(rank: u32, city: &str, composite: f64, scores: &[f64]) -> RankedCity {
    RankedCity {
        rank,
        city: city.to_string(),
        composite,
        pillar_scores: scores.to_vec(),
    }
}

fn sample() -> (Vec<PillarDef>, RankedTable) {
    let defs = vec![
        def("air_quality", "Air Quality", &["pm25", "no2"], Direction::LowerIsBetter, 0.4),
        def("waste", "Waste Management", &["recycling_rate"], Direction::HigherIsBetter, 0.6),
    ];
    let table = RankedTable {
        pillars: defs.iter().map(|d| d.id.clone()).collect(),
        entries: vec![
            entry(1, "Galway", 85.0, &[90.0, 80.0]),
            entry(2, "Cork", 60.0, &[55.0, 65.0]),
            entry(3, "Dublin", 45.0, &[30.0, 60.0]),
            entry(4, "Bray", 20.0, &[25.0, 15.0]),
        ],
        stats: vec![],
    };
    (defs, table)
}

#[test]
fn test_report_structure() {
    let (defs, table) = sample();
    let html = render_report_html(&table, &defs);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>City Sustainability Index</title>"));
    assert!(html.contains("Composite ranking of 4 cities"));
    assert!(html.contains("<th>Rank</th><th>City</th><th>Score</th><th>Air Quality</th><th>Waste Management</th>"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn test_top_three_highlighted() {
    let (defs, table) = sample();
    let html = render_report_html(&table, &defs);
    assert!(html.contains("<tr class=\"rank-1\"><td>1</td><td>Galway</td>"));
    assert!(html.contains("<tr class=\"rank-2\"><td>2</td>"));
    assert!(html.contains("<tr class=\"rank-3\"><td>3</td>"));
    assert!(html.contains("<tr><td>4</td><td>Bray</td>"));
    assert!(!html.contains("rank-4"));
}

#[test]
fn test_city_names_escaped() {
    let (defs, mut table) = sample();
    table.entries[0].city = "Naas <& Sallins>".to_string();
    let html = render_report_html(&table, &defs);
    assert!(html.contains("Naas &lt;&amp; Sallins&gt;"));
    assert!(!html.contains("Naas <&"));
}

#[test]
fn test_summary_cards() {
    let (defs, table) = sample();
    let html = render_report_html(&table, &defs);
    assert!(html.contains("Best: Galway"));
    assert!(html.contains("Worst: Bray"));
    assert!(html.contains("<div class=\"stat-value\">85.0</div>"));
}

#[test]
fn test_methodology_lists_pillars() {
    let (defs, table) = sample();
    let html = render_report_html(&table, &defs);
    assert!(html.contains(
        "<li><strong>Air Quality</strong> (weight 0.40): pm25, no2; lower is better</li>"
    ));
    assert!(html.contains(
        "<li><strong>Waste Management</strong> (weight 0.60): recycling_rate; higher is better</li>"
    ));
}
