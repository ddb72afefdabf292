use crate::data::record::TrialRecord;

/// Penalized runtime for one query target.
///
/// `targets` and `hitting_times` must each be sorted ascending. The entry at
/// the left insertion point of `target` is taken as the first time the target
/// was met; a missing entry or one past `budget` reports `budget` instead.
pub fn penalized_runtime(hitting_times: &[u64], targets: &[u64], target: u64, budget: u64) -> u64 {
    let k = targets.partition_point(|&t| t < target);
    match hitting_times.get(k) {
        Some(&time) if k < targets.len() && time <= budget => time,
        _ => budget,
    }
}

/// Penalized runtimes of one trial for every query target, in query order.
pub fn trial_runtimes(record: &TrialRecord, query_targets: &[u64], budget: u64) -> Vec<u64> {
    let (hitting_times, targets) = record.sorted();
    query_targets
        .iter()
        .map(|&t| penalized_runtime(&hitting_times, &targets, t, budget))
        .collect()
}
