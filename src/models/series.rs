// OpenTSDB query response models

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::ops::Add;

/// One data point value as returned by OpenTSDB.
/// Integers stay integers so a sum of `10 + 20 + 5` serializes as `35`, not `35.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Int(i64),
    Float(f64),
}

impl Reading {
    pub fn as_f64(self) -> f64 {
        match self {
            Reading::Int(v) => v as f64,
            Reading::Float(v) => v,
        }
    }
}

impl Default for Reading {
    fn default() -> Self {
        Reading::Int(0)
    }
}

impl Add for Reading {
    type Output = Reading;

    /// Int + Int stays Int (Float on overflow); anything involving a Float is a Float.
    fn add(self, rhs: Reading) -> Reading {
        match (self, rhs) {
            (Reading::Int(a), Reading::Int(b)) => match a.checked_add(b) {
                Some(sum) => Reading::Int(sum),
                None => Reading::Float(a as f64 + b as f64),
            },
            (a, b) => Reading::Float(a.as_f64() + b.as_f64()),
        }
    }
}

/// One series of an `/api/query` response.
/// `dps` is keyed by the epoch-seconds string exactly as sent; map order is lexicographic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(default)]
    pub metric: String,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(default)]
    pub aggregate_tags: Vec<String>,
    pub dps: BTreeMap<String, Reading>,
}

/// Timestamp string -> reading summed across all series.
pub type AggregatedReadings = BTreeMap<String, Reading>;
