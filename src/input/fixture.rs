use std::collections::BTreeMap;

use crate::model::metrics::{CityRecord, PillarTable};

type FixtureRow = (&'static str, &'static [(&'static str, f64)]);

const AIR_QUALITY: &[FixtureRow] = &[
    ("Dublin", &[("pm25", 9.2), ("no2", 18.5), ("o3", 45.2)]),
    ("Cork", &[("pm25", 7.8), ("no2", 15.2), ("o3", 42.1)]),
    ("Galway", &[("pm25", 6.5), ("no2", 12.8), ("o3", 38.9)]),
    ("Limerick", &[("pm25", 8.1), ("no2", 16.3), ("o3", 41.5)]),
    ("Waterford", &[("pm25", 7.2), ("no2", 14.1), ("o3", 39.8)]),
    ("Kilkenny", &[("pm25", 6.8), ("no2", 13.5), ("o3", 40.2)]),
    ("Wexford", &[("pm25", 6.1), ("no2", 11.9), ("o3", 37.6)]),
    ("Sligo", &[("pm25", 5.9), ("no2", 11.2), ("o3", 36.8)]),
    ("Drogheda", &[("pm25", 8.5), ("no2", 17.1), ("o3", 43.2)]),
    ("Bray", &[("pm25", 7.9), ("no2", 15.8), ("o3", 42.6)]),
];

const GREEN_SPACE: &[FixtureRow] = &[
    ("Dublin", &[("green_percent", 23.5), ("parks_count", 45.0), ("area_km2", 115.0)]),
    ("Cork", &[("green_percent", 28.2), ("parks_count", 32.0), ("area_km2", 37.0)]),
    ("Galway", &[("green_percent", 31.8), ("parks_count", 28.0), ("area_km2", 50.0)]),
    ("Limerick", &[("green_percent", 26.4), ("parks_count", 25.0), ("area_km2", 51.0)]),
    ("Waterford", &[("green_percent", 29.1), ("parks_count", 18.0), ("area_km2", 42.0)]),
    ("Kilkenny", &[("green_percent", 32.5), ("parks_count", 15.0), ("area_km2", 26.0)]),
    ("Wexford", &[("green_percent", 30.2), ("parks_count", 12.0), ("area_km2", 32.0)]),
    ("Sligo", &[("green_percent", 33.8), ("parks_count", 14.0), ("area_km2", 18.0)]),
    ("Drogheda", &[("green_percent", 27.6), ("parks_count", 16.0), ("area_km2", 15.0)]),
    ("Bray", &[("green_percent", 25.3), ("parks_count", 8.0), ("area_km2", 20.0)]),
];

const TRANSPORT: &[FixtureRow] = &[
    ("Dublin", &[("bus_score", 8.5), ("rail_score", 7.2), ("frequency", 4.2), ("coverage", 85.0)]),
    ("Cork", &[("bus_score", 6.8), ("rail_score", 5.1), ("frequency", 3.8), ("coverage", 72.0)]),
    ("Galway", &[("bus_score", 5.2), ("rail_score", 4.8), ("frequency", 3.2), ("coverage", 68.0)]),
    ("Limerick", &[("bus_score", 6.1), ("rail_score", 5.5), ("frequency", 3.5), ("coverage", 71.0)]),
    ("Waterford", &[("bus_score", 5.8), ("rail_score", 4.2), ("frequency", 3.1), ("coverage", 65.0)]),
    ("Kilkenny", &[("bus_score", 4.5), ("rail_score", 3.8), ("frequency", 2.8), ("coverage", 58.0)]),
    ("Wexford", &[("bus_score", 4.2), ("rail_score", 3.5), ("frequency", 2.6), ("coverage", 55.0)]),
    ("Sligo", &[("bus_score", 4.8), ("rail_score", 4.1), ("frequency", 2.9), ("coverage", 62.0)]),
    ("Drogheda", &[("bus_score", 5.5), ("rail_score", 6.2), ("frequency", 3.3), ("coverage", 69.0)]),
    ("Bray", &[("bus_score", 7.2), ("rail_score", 8.1), ("frequency", 4.5), ("coverage", 78.0)]),
];

const WASTE: &[FixtureRow] = &[
    ("Dublin", &[("recycling_rate", 42.5), ("waste_per_capita", 380.0), ("landfill_rate", 15.2)]),
    ("Cork", &[("recycling_rate", 48.2), ("waste_per_capita", 365.0), ("landfill_rate", 12.8)]),
    ("Galway", &[("recycling_rate", 51.8), ("waste_per_capita", 342.0), ("landfill_rate", 10.5)]),
    ("Limerick", &[("recycling_rate", 45.6), ("waste_per_capita", 368.0), ("landfill_rate", 13.2)]),
    ("Waterford", &[("recycling_rate", 49.1), ("waste_per_capita", 355.0), ("landfill_rate", 11.8)]),
    ("Kilkenny", &[("recycling_rate", 52.3), ("waste_per_capita", 338.0), ("landfill_rate", 9.8)]),
    ("Wexford", &[("recycling_rate", 47.8), ("waste_per_capita", 348.0), ("landfill_rate", 12.1)]),
    ("Sligo", &[("recycling_rate", 50.2), ("waste_per_capita", 345.0), ("landfill_rate", 10.8)]),
    ("Drogheda", &[("recycling_rate", 46.5), ("waste_per_capita", 362.0), ("landfill_rate", 13.5)]),
    ("Bray", &[("recycling_rate", 44.8), ("waste_per_capita", 375.0), ("landfill_rate", 14.2)]),
];

/// Built-in reference table for a pillar id, if one is bundled.
pub fn fixture_table(pillar_id: &str) -> Option<PillarTable> {
    let rows = match pillar_id {
        "air_quality" => AIR_QUALITY,
        "green_space" => GREEN_SPACE,
        "transport" => TRANSPORT,
        "waste" => WASTE,
        _ => return None,
    };
    Some(table_from(pillar_id, rows))
}

fn table_from(pillar_id: &str, rows: &[FixtureRow]) -> PillarTable {
    let records = rows
        .iter()
        .map(|&(city, fields)| {
            let values: BTreeMap<String, f64> = fields
                .iter()
                .map(|&(key, value)| (key.to_string(), value))
                .collect();
            CityRecord {
                city: city.to_string(),
                values,
            }
        })
        .collect();
    PillarTable {
        pillar_id: pillar_id.to_string(),
        records,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/fixture.rs"]
mod tests;
