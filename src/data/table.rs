use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub algorithm: String,
    pub target: u64,
    pub runtime: u64,
}

/// Flat table of penalized runtimes, one row per (algorithm, trial, target).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, algorithm: &str, target: u64, runtime: u64) {
        self.rows.push(ResultRow { algorithm: algorithm.to_string(), target, runtime });
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Algorithm names in order of first appearance
    pub fn algorithms(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.algorithm.as_str()).unique().collect()
    }

    /// Distinct target values, ascending
    pub fn targets(&self) -> Vec<u64> {
        self.rows.iter().map(|r| r.target).sorted().dedup().collect()
    }

    /// Runtimes recorded for one (algorithm, target) cell, in insertion order.
    pub fn runtimes(&self, algorithm: &str, target: u64) -> Vec<u64> {
        self.rows
            .iter()
            .filter(|r| r.algorithm == algorithm && r.target == target)
            .map(|r| r.runtime)
            .collect()
    }

    pub fn column_runtime(&self) -> Vec<u64> {
        self.rows.iter().map(|r| r.runtime).collect()
    }
}

impl FromIterator<ResultRow> for ResultTable {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        Self { rows: iter.into_iter().collect() }
    }
}
