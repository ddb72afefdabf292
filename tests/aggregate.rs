use std::fs;
use std::path::Path;

use runtime_plots::config::{Algorithm, OutputFormat, ProblemConfig, StudyConfig, TargetRange};
use runtime_plots::data::loader::{load_problem, trial_path};
use runtime_plots::pipeline::run_study;

fn write_trial(root: &Path, problem: &str, algorithm: &str, trial: usize, hitting_times: &[u64], targets: &[u64]) {
    let path = trial_path(root, problem, algorithm, trial);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    // same shape the experiment driver writes: every number quoted
    let quote = |v: &[u64]| v.iter().map(|x| format!("\"{}\"", x)).collect::<Vec<_>>().join(",");
    let json = format!(
        "{{\n  \"hitting_times\": [{}],\n  \"targets\": [{}]\n}}",
        quote(hitting_times),
        quote(targets)
    );
    fs::write(path, json).unwrap();
}

fn algorithms() -> Vec<Algorithm> {
    vec![Algorithm::new("partial-restart cgEA", "cgEA"), Algorithm::new("smart-restart cGA", "cGA")]
}

fn populate(root: &Path, problem: &str, num_trials: usize) {
    for trial in 1..=num_trials {
        let shift = trial as u64 * 10;
        write_trial(root, problem, "cgEA", trial, &[100 + shift, 250 + shift, 400 + shift], &[10, 20, 30]);
        write_trial(root, problem, "cGA", trial, &[300 + shift, 900 + shift], &[10, 20]);
    }
}

fn study(root: &Path, out: &Path, formats: Vec<OutputFormat>) -> StudyConfig {
    StudyConfig {
        data_root: root.to_path_buf(),
        output_dir: out.to_path_buf(),
        algorithms: algorithms(),
        num_trials: 3,
        max_budget: 500,
        problems: vec![
            ProblemConfig::new("IsingRing", TargetRange::new(10, 41, 5)),
            ProblemConfig::new("Mivs", TargetRange::new(10, 31, 10)),
        ],
        formats,
        size_inches: 2.268,
        dpi: 96.0,
    }
}

#[test]
fn one_row_per_algorithm_trial_and_target() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path(), "IsingRing", 4);
    let targets = [15, 35, 10, 20];
    let table = load_problem(dir.path(), "IsingRing", &algorithms(), 4, &targets, 500).unwrap();
    assert_eq!(table.len(), 2 * 4 * targets.len());
    assert_eq!(table.algorithms(), vec!["partial-restart cgEA", "smart-restart cGA"]);

    // algorithm order, then trial order, then query order
    let first: Vec<(u64, u64)> = table.rows()[..4].iter().map(|r| (r.target, r.runtime)).collect();
    assert_eq!(first, vec![(15, 260), (35, 500), (10, 110), (20, 260)]);
}

#[test]
fn worked_example_runtimes() {
    let dir = tempfile::tempdir().unwrap();
    write_trial(dir.path(), "P", "cgEA", 1, &[100, 250, 400], &[10, 20, 30]);
    let algos = vec![Algorithm::new("cgEA", "cgEA")];

    let table = load_problem(dir.path(), "P", &algos, 1, &[15, 35], 500).unwrap();
    assert_eq!(table.column_runtime(), vec![250, 500]);

    let table = load_problem(dir.path(), "P", &algos, 1, &[15], 200).unwrap();
    assert_eq!(table.column_runtime(), vec![200]);
}

#[test]
fn loading_twice_gives_same_table() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path(), "IsingRing", 3);
    let a = load_problem(dir.path(), "IsingRing", &algorithms(), 3, &[5, 15, 25], 500).unwrap();
    let b = load_problem(dir.path(), "IsingRing", &algorithms(), 3, &[5, 15, 25], 500).unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_trial_aborts_the_problem() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path(), "IsingRing", 2);
    let err = load_problem(dir.path(), "IsingRing", &algorithms(), 3, &[10], 500).unwrap_err();
    assert!(format!("{:#}", err).contains("trial-3.json"));
}

#[test]
fn malformed_trial_aborts_the_problem() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path(), "IsingRing", 1);
    fs::write(trial_path(dir.path(), "IsingRing", "cGA", 1), "{\"hitting_times\": [1]").unwrap();
    assert!(load_problem(dir.path(), "IsingRing", &algorithms(), 1, &[10], 500).is_err());
}

#[test]
fn study_writes_charts_and_progress() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    populate(data.path(), "IsingRing", 3);
    populate(data.path(), "Mivs", 3);

    let config = study(data.path(), out.path(), vec![OutputFormat::Svg, OutputFormat::Html]);
    let mut progress = Vec::new();
    let written = run_study(&config, &mut progress).unwrap();

    assert_eq!(
        String::from_utf8(progress).unwrap(),
        "Generating plot for IsingRing\nGenerating plot for Mivs\nDone\n"
    );
    assert_eq!(
        written,
        vec![
            out.path().join("IsingRing.svg"),
            out.path().join("IsingRing.html"),
            out.path().join("Mivs.svg"),
            out.path().join("Mivs.html"),
        ]
    );

    let svg = fs::read_to_string(out.path().join("IsingRing.svg")).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("width=\"218\""));
    assert!(svg.contains("Target"));
    assert!(svg.contains("1-Penalized Runtime"));
    assert!(svg.contains("smart-restart cGA"));
}

#[test]
fn bad_file_leaves_no_charts() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    populate(data.path(), "IsingRing", 3);
    // Mivs has no trial files at all

    let config = study(data.path(), out.path(), vec![OutputFormat::Svg]);
    let mut progress = Vec::new();
    let err = run_study(&config, &mut progress).unwrap_err();

    assert!(format!("{:#}", err).contains("Mivs"));
    assert!(progress.is_empty());
    assert!(!out.path().join("IsingRing.svg").exists());
}
