use serde::Serialize;
use std::collections::BTreeMap;

/// The measurements computed for a single topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub topic: i64,
    pub measurement: BTreeMap<String, f64>,
}

/// Index by topic id for fast lookup after parsing.
pub type Runs = BTreeMap<i64, Run>;

/// Summary of an experiment: the run identifier plus the measurements
/// reported for the `all` pseudo-topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub run_id: String,
    pub measurement: BTreeMap<String, f64>,
}

/// The parsed run file: per-topic runs plus the aggregate summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunFile {
    pub runs: Runs,
    pub summary: Summary,
}

impl Run {
    pub fn new(topic: i64) -> Self {
        Self {
            topic,
            measurement: BTreeMap::new(),
        }
    }

    /// Record a measurement value; a repeated name overwrites.
    pub fn add(&mut self, measurement: &str, value: f64) {
        self.measurement.insert(measurement.to_string(), value);
    }
}

impl Summary {
    /// Record an aggregate measurement value; a repeated name overwrites.
    pub fn add(&mut self, measurement: &str, value: f64) {
        self.measurement.insert(measurement.to_string(), value);
    }
}
