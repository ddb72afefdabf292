use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::data::table::ResultTable;

/// Median and 50% prediction interval of one (algorithm, target) cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryPoint {
    pub target: u64,
    pub median: f64,
    pub lower: f64,
    pub upper: f64,
}

/// One line of the chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub algorithm: String,
    pub points: Vec<SummaryPoint>,
}

/// Interpolated percentile of already sorted values, `q` in [0, 1].
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    let m = sorted.len();
    if m == 0 {
        return f64::NAN;
    }
    if m == 1 {
        return sorted[0];
    }
    let h = (m - 1) as f64 * q.clamp(0.0, 1.0);
    let i0 = h.floor() as usize;
    let i1 = h.ceil() as usize;
    let frac = h - i0 as f64;
    (1.0 - frac) * sorted[i0] + frac * sorted[i1]
}

/// Median plus the central `width` share of the values.
pub fn median_interval(values: &[u64], width: f64) -> (f64, f64, f64) {
    let mut sorted: Vec<f64> = values.iter().map(|&v| v as f64).collect();
    sorted.sort_by_key(|&v| OrderedFloat(v));
    let tail = (1.0 - width) / 2.0;
    (
        percentile(&sorted, 0.5),
        percentile(&sorted, tail),
        percentile(&sorted, 1.0 - tail),
    )
}

/// Per algorithm, per target summary of a result table.
///
/// Algorithms keep their table order; targets are ascending. Cells with no
/// rows are left out.
pub fn summarize(table: &ResultTable) -> Vec<SeriesSummary> {
    let targets = table.targets();
    table
        .algorithms()
        .into_iter()
        .map(|algorithm| {
            let points = targets
                .iter()
                .filter_map(|&target| {
                    let runtimes = table.runtimes(algorithm, target);
                    if runtimes.is_empty() {
                        return None;
                    }
                    let (median, lower, upper) = median_interval(&runtimes, 0.5);
                    Some(SummaryPoint { target, median, lower, upper })
                })
                .collect();
            SeriesSummary { algorithm: algorithm.to_string(), points }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_interpolates_between_ranks() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&v, 0.5), 2.5);
        assert_eq!(percentile(&v, 0.25), 1.75);
        assert_eq!(percentile(&v, 0.75), 3.25);
        assert_eq!(percentile(&v, 0.0), 1.0);
        assert_eq!(percentile(&v, 1.0), 4.0);
    }

    #[test]
    fn percentile_of_single_value() {
        assert_eq!(percentile(&[7.0], 0.25), 7.0);
        assert!(percentile(&[], 0.5).is_nan());
    }

    #[test]
    fn median_interval_sorts_input() {
        assert_eq!(median_interval(&[5, 1, 3], 0.5), (3.0, 2.0, 4.0));
    }

    #[test]
    fn summarize_groups_by_algorithm_and_target() {
        let mut table = ResultTable::new();
        for (t, r) in [(20, 10), (10, 4), (20, 30), (10, 2)] {
            table.push("cgEA", t, r);
        }
        table.push("cGA", 10, 100);
        table.push("cGA", 10, 200);

        let summary = summarize(&table);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].algorithm, "cgEA");
        assert_eq!(
            summary[0].points,
            vec![
                SummaryPoint { target: 10, median: 3.0, lower: 2.5, upper: 3.5 },
                SummaryPoint { target: 20, median: 20.0, lower: 15.0, upper: 25.0 },
            ]
        );
        assert_eq!(summary[1].points.len(), 1);
        assert_eq!(summary[1].points[0].median, 150.0);
    }
}
