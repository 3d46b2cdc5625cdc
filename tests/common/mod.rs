// Shared test helpers
#![allow(dead_code)]

use energy_chart::models::{Reading, Series};
use std::collections::HashMap;

pub fn series(source: &str, points: &[(&str, Reading)]) -> Series {
    Series {
        metric: "energy".into(),
        tags: HashMap::from([("source".to_string(), source.to_string())]),
        aggregate_tags: vec![],
        dps: points.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
    }
}

pub fn int_series(source: &str, points: &[(&str, i64)]) -> Series {
    let points: Vec<(&str, Reading)> = points.iter().map(|(k, v)| (*k, Reading::Int(*v))).collect();
    series(source, &points)
}

/// Response body in the shape OpenTSDB sends for the energy query.
pub const THREE_SOURCE_RESPONSE: &str = r#"[
  {"metric":"energy","tags":{"source":"GDSP1"},"aggregateTags":[],"dps":{"1477299600":10,"1477303200":1}},
  {"metric":"energy","tags":{"source":"GDSP2"},"aggregateTags":[],"dps":{"1477299600":20,"1477303200":2}},
  {"metric":"energy","tags":{"source":"GDSP3"},"aggregateTags":[],"dps":{"1477299600":5,"1477303200":3}}
]"#;

pub const ENERGY_QUERY_M: &str = "sum:1h-avg:rate:energy{source=GDSP1|GDSP2|GDSP3}";
