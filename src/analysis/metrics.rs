//! Per-algorithm aggregation
//!
//! Everything here is pure: tables in, summaries out.

use std::collections::HashMap;

use crate::config::GroupOrder;
use crate::models::{Metric, ResultRow, ResultTable, SummaryRow, SummaryTable};

/// Group rows by algorithm label.
///
/// Every distinct label appears exactly once, in the requested order.
pub fn group_rows(rows: &[ResultRow], order: GroupOrder) -> Vec<(&str, Vec<&ResultRow>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&ResultRow>)> = Vec::new();

    for row in rows {
        let slot = *index.entry(row.algorithm.as_str()).or_insert_with(|| {
            groups.push((row.algorithm.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(row);
    }

    if order == GroupOrder::Sorted {
        groups.sort_by(|a, b| a.0.cmp(b.0));
    }

    groups
}

/// Mean and sample standard deviation of `select` per algorithm.
///
/// Missing values are excluded from both sum and count. A group without any
/// values gets NaN for both statistics.
pub fn aggregate<F>(rows: &[ResultRow], order: GroupOrder, select: F) -> Vec<SummaryRow>
where
    F: Fn(&ResultRow) -> Option<f64>,
{
    group_rows(rows, order)
        .into_iter()
        .map(|(algorithm, group)| {
            let values: Vec<f64> = group.iter().filter_map(|&r| select(r)).collect();

            SummaryRow {
                algorithm: algorithm.to_string(),
                mean: mean(&values),
                std: sample_std(&values),
                samples: values.len(),
                missing: group.len() - values.len(),
            }
        })
        .collect()
}

/// Summarize one metric of the table
pub fn summarize(table: &ResultTable, metric: Metric, order: GroupOrder) -> SummaryTable {
    let rows = aggregate(&table.rows, order, |r| metric.value(r));

    for row in &rows {
        tracing::debug!(
            %metric,
            algorithm = %row.algorithm,
            mean = row.mean,
            std = row.std,
            samples = row.samples,
            missing = row.missing,
            "Summarized algorithm"
        );
    }

    SummaryTable { metric, rows }
}

/// Non-missing values of one metric per algorithm, in input order within
/// each group. Algorithms with no values keep an empty entry.
pub fn distribution(table: &ResultTable, metric: Metric, order: GroupOrder) -> Vec<(String, Vec<f64>)> {
    group_rows(&table.rows, order)
        .into_iter()
        .map(|(algorithm, group)| {
            let values = group.iter().filter_map(|&r| metric.value(r)).collect();
            (algorithm.to_string(), values)
        })
        .collect()
}

/// Arithmetic mean, NaN for no values
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator), NaN for fewer than two values
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }

    let avg = mean(values);
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::coerce::coerce_table;
    use crate::models::RawResultRow;

    fn table(rows: &[(&str, &str, &str)]) -> ResultTable {
        coerce_table(
            rows.iter()
                .enumerate()
                .map(|(i, (algorithm, stabilization, total))| RawResultRow {
                    line: i as u64 + 2,
                    algorithm: algorithm.to_string(),
                    stabilization_time: stabilization.to_string(),
                    total_time: total.to_string(),
                })
                .collect(),
        )
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    /// Equal within tolerance, treating two NaNs as equal
    fn same(a: f64, b: f64) -> bool {
        (a.is_nan() && b.is_nan()) || close(a, b)
    }

    #[test]
    fn test_scenario_with_timeout() {
        let table = table(&[("X", "1.0", "2.0"), ("X", "timeout", "3.0"), ("Y", "5.0", "5.0")]);

        let stabilization = summarize(&table, Metric::Stabilization, GroupOrder::Sorted);
        let total = summarize(&table, Metric::Total, GroupOrder::Sorted);

        let x = stabilization.get("X").unwrap();
        assert!(close(x.mean, 1.0));
        assert!(x.std.is_nan());
        assert_eq!(x.samples, 1);
        assert_eq!(x.missing, 1);
        assert!(close(stabilization.get("Y").unwrap().mean, 5.0));

        let x = total.get("X").unwrap();
        assert!(close(x.mean, 2.5));
        assert!(close(x.std, 0.5f64.sqrt()));
        assert!(close(total.get("Y").unwrap().mean, 5.0));
    }

    #[test]
    fn test_every_algorithm_appears_once() {
        let table = table(&[
            ("B", "1", "1"),
            ("A", "2", "2"),
            ("B", "3", "3"),
            ("C", "timeout", "4"),
        ]);

        for metric in Metric::ALL {
            let summary = summarize(&table, metric, GroupOrder::Sorted);
            let names: Vec<&str> = summary.algorithms().collect();
            assert_eq!(names, vec!["A", "B", "C"]);
        }
    }

    #[test]
    fn test_all_missing_group_is_nan() {
        let table = table(&[("X", "timeout", "1"), ("X", "timeout", "2"), ("Y", "1", "1")]);

        let summary = summarize(&table, Metric::Stabilization, GroupOrder::Sorted);

        let x = summary.get("X").unwrap();
        assert!(x.mean.is_nan());
        assert!(x.std.is_nan());
        assert_eq!(x.samples, 0);
        assert_eq!(x.missing, 2);
    }

    #[test]
    fn test_first_seen_order() {
        let table = table(&[("Genetic", "1", "1"), ("Fuzzy", "1", "1"), ("Genetic", "2", "2")]);

        let summary = summarize(&table, Metric::Total, GroupOrder::FirstSeen);

        let names: Vec<&str> = summary.algorithms().collect();
        assert_eq!(names, vec!["Genetic", "Fuzzy"]);
    }

    #[test]
    fn test_grouping_is_order_insensitive() {
        let forward = table(&[("X", "1", "1"), ("Y", "2", "2"), ("X", "3", "3")]);
        let backward = table(&[("X", "3", "3"), ("Y", "2", "2"), ("X", "1", "1")]);

        let a = summarize(&forward, Metric::Total, GroupOrder::Sorted);
        let b = summarize(&backward, Metric::Total, GroupOrder::Sorted);

        assert_eq!(a.rows.len(), 2);
        assert!(a.get("Y").unwrap().std.is_nan());
        for (left, right) in a.rows.iter().zip(&b.rows) {
            assert_eq!(left.algorithm, right.algorithm);
            assert!(same(left.mean, right.mean));
            assert!(same(left.std, right.std));
        }
    }

    #[test]
    fn test_distribution_excludes_missing() {
        let table = table(&[("X", "1.0", "2.0"), ("X", "timeout", "3.0"), ("Y", "timeout", "5.0")]);

        let stabilization = distribution(&table, Metric::Stabilization, GroupOrder::Sorted);
        let total = distribution(&table, Metric::Total, GroupOrder::Sorted);

        assert_eq!(
            stabilization,
            vec![("X".to_string(), vec![1.0]), ("Y".to_string(), vec![])]
        );
        assert_eq!(
            total,
            vec![("X".to_string(), vec![2.0, 3.0]), ("Y".to_string(), vec![5.0])]
        );
        // The timed-out rows are still in the raw table
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_sample_std() {
        assert!(close(sample_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), (32.0f64 / 7.0).sqrt()));
        assert!(sample_std(&[1.0]).is_nan());
        assert!(mean(&[]).is_nan());
    }
}
