use crate::core::overlap::overlap_days;
use crate::domain::model::{Interval, PairResult};
use std::collections::HashSet;

/// Every positive-overlap employee pair of one project, in enumeration order.
///
/// Pairs are visited outer index ascending, inner index descending. Intervals of the
/// same employee are never compared. Once an employee pair has produced a candidate,
/// later interval combinations of the same two employees are not looked at again, so
/// an employee with several spans only counts with the first span that matches.
pub fn candidates(project_id: &str, intervals: &[Interval]) -> Vec<PairResult> {
    let mut recorded: HashSet<(&str, &str)> = HashSet::new();
    let mut found = Vec::new();

    for first in intervals {
        for second in intervals.iter().rev() {
            if first.employee_id == second.employee_id {
                continue;
            }

            let key = pair_key(&first.employee_id, &second.employee_id);
            if recorded.contains(&key) {
                continue;
            }

            let days = overlap_days(first, second);
            if days > 0 {
                recorded.insert(key);
                found.push(PairResult {
                    project_id: project_id.to_string(),
                    employee_id_1: first.employee_id.clone(),
                    employee_id_2: second.employee_id.clone(),
                    days_overlap: days,
                });
            }
        }
    }

    found
}

/// The pair with the most shared days. Ties keep the earlier candidate.
pub fn best_pair(project_id: &str, intervals: &[Interval]) -> Option<PairResult> {
    candidates(project_id, intervals)
        .into_iter()
        .fold(None, |best: Option<PairResult>, candidate| match best {
            Some(current) if current.days_overlap >= candidate.days_overlap => Some(current),
            _ => Some(candidate),
        })
}

fn pair_key<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn interval(emp: &str, from: &str, to: &str) -> Interval {
        Interval::new(
            emp,
            NaiveDate::parse_from_str(from, "%Y-%m-%d").unwrap(),
            NaiveDate::parse_from_str(to, "%Y-%m-%d").unwrap(),
        )
    }

    #[test]
    fn test_single_pair() {
        let intervals = vec![
            interval("1", "2020-01-01", "2020-01-10"),
            interval("2", "2020-01-05", "2020-01-20"),
        ];

        let best = best_pair("P1", &intervals).unwrap();
        assert_eq!(best.project_id, "P1");
        assert_eq!(best.employee_id_1, "1");
        assert_eq!(best.employee_id_2, "2");
        assert_eq!(best.days_overlap, 5);
    }

    #[test]
    fn test_no_overlap_is_absent() {
        let intervals = vec![
            interval("1", "2020-01-01", "2020-01-05"),
            interval("2", "2020-02-01", "2020-02-05"),
        ];
        assert!(best_pair("P1", &intervals).is_none());
        assert!(best_pair("P1", &[]).is_none());
        assert!(best_pair("P1", &intervals[..1]).is_none());
    }

    #[test]
    fn test_picks_longest_overlap() {
        let intervals = vec![
            interval("1", "2020-01-01", "2020-01-20"),
            interval("2", "2020-01-17", "2020-01-23"),
            interval("3", "2019-12-01", "2020-01-08"),
        ];

        let best = best_pair("P1", &intervals).unwrap();
        assert_eq!((best.employee_id_1.as_str(), best.employee_id_2.as_str()), ("1", "3"));
        assert_eq!(best.days_overlap, 7);
    }

    #[test]
    fn test_same_employee_never_paired() {
        let intervals = vec![
            interval("1", "2020-01-01", "2020-12-31"),
            interval("1", "2020-01-01", "2020-12-31"),
        ];
        assert!(candidates("P1", &intervals).is_empty());
    }

    #[test]
    fn test_tie_keeps_first_enumerated() {
        // 內層迴圈由尾端往前，所以 (1, 3) 比 (1, 2) 先出現
        let intervals = vec![
            interval("1", "2020-01-01", "2020-01-11"),
            interval("2", "2020-01-01", "2020-01-11"),
            interval("3", "2020-01-01", "2020-01-11"),
        ];

        let all = candidates("P1", &intervals);
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|c| c.days_overlap == 10));

        let best = best_pair("P1", &intervals).unwrap();
        assert_eq!(best.employee_id_1, "1");
        assert_eq!(best.employee_id_2, "3");
    }

    #[test]
    fn test_employee_pair_is_scored_once() {
        let intervals = vec![
            interval("1", "2020-01-01", "2020-01-03"),
            interval("1", "2020-01-01", "2020-12-31"),
            interval("2", "2020-01-01", "2020-12-31"),
        ];

        let all = candidates("P1", &intervals);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].days_overlap, 2);
        assert_eq!(best_pair("P1", &intervals).unwrap().days_overlap, 2);
    }

    #[test]
    fn test_non_overlapping_span_does_not_block_pair() {
        let intervals = vec![
            interval("1", "2019-01-01", "2019-01-05"),
            interval("1", "2020-01-01", "2020-01-11"),
            interval("2", "2020-01-01", "2020-01-31"),
        ];

        let best = best_pair("P1", &intervals).unwrap();
        assert_eq!(best.days_overlap, 10);
    }

    #[test]
    fn test_candidates_have_unique_employee_pairs() {
        let intervals = vec![
            interval("1", "2020-01-01", "2020-06-01"),
            interval("2", "2020-02-01", "2020-07-01"),
            interval("1", "2020-03-01", "2020-08-01"),
            interval("3", "2020-01-15", "2020-05-01"),
            interval("2", "2020-04-01", "2020-09-01"),
        ];

        let all = candidates("P1", &intervals);
        let mut seen = HashSet::new();
        for c in &all {
            let key = pair_key(&c.employee_id_1, &c.employee_id_2);
            assert!(seen.insert((key.0.to_string(), key.1.to_string())));
        }
        assert_eq!(all.len(), 3);
    }
}
