use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// An algorithm as shown in the legend, and the subdirectory holding its trials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Algorithm {
    pub name: String,
    pub dir: String,
}

impl Algorithm {
    pub fn new(name: &str, dir: &str) -> Self {
        Self { name: name.to_string(), dir: dir.to_string() }
    }
}

/// `start..end` in steps of `step`; `end` is exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRange {
    pub start: u64,
    pub end: u64,
    pub step: u64,
}

impl TargetRange {
    pub fn new(start: u64, end: u64, step: u64) -> Self {
        Self { start, end, step }
    }

    pub fn expand(&self) -> Vec<u64> {
        if self.step == 0 {
            return Vec::new();
        }
        (self.start..self.end).step_by(self.step as usize).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemConfig {
    /// Used for the progress line and the output file name.
    pub name: String,
    /// Directory under the data root holding one subdirectory per algorithm.
    pub dir: String,
    pub targets: Vec<u64>,
}

impl ProblemConfig {
    pub fn new(name: &str, targets: TargetRange) -> Self {
        Self { name: name.to_string(), dir: name.to_string(), targets: targets.expand() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    Html,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Html => "html",
        }
    }
}

/// Everything one run of the tool needs to know.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    pub data_root: PathBuf,
    pub output_dir: PathBuf,
    pub algorithms: Vec<Algorithm>,
    pub num_trials: usize,
    pub max_budget: u64,
    pub problems: Vec<ProblemConfig>,
    pub formats: Vec<OutputFormat>,
    /// Side length of the square figure.
    pub size_inches: f64,
    pub dpi: f64,
}

impl StudyConfig {
    /// The cgEA vs. cGA comparison on the three benchmark problems.
    pub fn paper() -> Self {
        Self {
            data_root: PathBuf::from("Output"),
            output_dir: PathBuf::from("."),
            algorithms: vec![
                Algorithm::new("partial-restart cgEA", "cgEA"),
                Algorithm::new("smart-restart cGA", "cGA"),
            ],
            num_trials: 100,
            max_budget: 10_000_000,
            problems: vec![
                ProblemConfig::new("IsingRing", TargetRange::new(50, 101, 2)),
                ProblemConfig::new("IsingTorus", TargetRange::new(100, 201, 4)),
                ProblemConfig::new("Mivs", TargetRange::new(20, 51, 2)),
            ],
            formats: vec![OutputFormat::Svg, OutputFormat::Html],
            size_inches: 2.268,
            dpi: 96.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.algorithms.is_empty() {
            bail!("no algorithms configured");
        }
        if self.problems.is_empty() {
            bail!("no problems configured");
        }
        if self.num_trials == 0 {
            bail!("num_trials must be at least 1");
        }
        if let Some(p) = self.problems.iter().find(|p| p.targets.is_empty()) {
            bail!("problem {} has no targets to display", p.name);
        }
        if !(self.size_inches > 0.0 && self.dpi > 0.0) {
            bail!("figure size and dpi must be positive");
        }
        Ok(())
    }

    /// Figure side length in pixels (CSS pixels are 1/96 inch).
    pub fn size_px(&self) -> u32 {
        (self.size_inches * self.dpi).round() as u32
    }
}
