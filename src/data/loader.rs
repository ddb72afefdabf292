use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::{Algorithm, ProblemConfig, StudyConfig};
use crate::data::record::TrialRecord;
use crate::data::table::ResultTable;
use crate::metrics::runtime::trial_runtimes;

/// `<data_root>/<problem>/<algorithm>/trial-<i>.json`, with `i` counted from 1.
pub fn trial_path(data_root: &Path, problem_dir: &str, algorithm_dir: &str, trial: usize) -> PathBuf {
    data_root
        .join(problem_dir)
        .join(algorithm_dir)
        .join(format!("trial-{}.json", trial))
}

/// Load and validate one trial file
pub fn load_trial(path: &Path) -> Result<TrialRecord> {
    let json = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    TrialRecord::from_json_str(&json).with_context(|| format!("failed to parse {}", path.display()))
}

/// Penalized runtimes of every algorithm and trial on one problem.
///
/// Files are read in algorithm order, then trial order. Any unreadable or
/// malformed file aborts the whole problem.
pub fn load_problem(
    data_root: &Path,
    problem_dir: &str,
    algorithms: &[Algorithm],
    num_trials: usize,
    targets_to_display: &[u64],
    max_budget: u64,
) -> Result<ResultTable> {
    let mut table = ResultTable::new();
    for algorithm in algorithms {
        for trial in 1..=num_trials {
            let path = trial_path(data_root, problem_dir, &algorithm.dir, trial);
            debug!(path = %path.display(), "loading trial");
            let record = load_trial(&path)?;
            let runtimes = trial_runtimes(&record, targets_to_display, max_budget);
            for (&target, runtime) in targets_to_display.iter().zip(runtimes) {
                table.push(&algorithm.name, target, runtime);
            }
        }
    }
    Ok(table)
}

/// [`load_problem`] with the study-wide settings taken from `config`.
pub fn load_data(config: &StudyConfig, problem: &ProblemConfig) -> Result<ResultTable> {
    load_problem(
        &config.data_root,
        &problem.dir,
        &config.algorithms,
        config.num_trials,
        &problem.targets,
        config.max_budget,
    )
    .with_context(|| format!("failed to aggregate results for {}", problem.name))
}
