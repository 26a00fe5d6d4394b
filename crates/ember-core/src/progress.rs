//! Goal progress derivation.
//!
//! Progress is recomputed from the selection on demand, never stored.

use crate::selector::DailySelection;

/// Percentage of today's selection that is complete.
///
/// `round(100 * completed / total)` clamped to `[0, 100]`; an empty
/// selection is 0 percent, not a division failure.
pub fn goal_progress(selection: &DailySelection) -> u8 {
    let total = selection.len();
    if total == 0 {
        return 0;
    }
    let completed = selection.completed_count();
    let pct = (100.0 * completed as f64 / total as f64).round();
    pct.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{Activity, Impact};
    use chrono::NaiveDate;

    fn selection(total: usize, completed: usize) -> DailySelection {
        let activities = (0..total)
            .map(|i| {
                let mut a = Activity::new(
                    format!("a{i}"),
                    format!("Task {i}"),
                    10,
                    Impact::Medium,
                    "ops",
                );
                a.completed = i < completed;
                a
            })
            .collect();
        DailySelection {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            activities,
        }
    }

    #[test]
    fn test_empty_selection_is_zero() {
        assert_eq!(goal_progress(&selection(0, 0)), 0);
    }

    #[test]
    fn test_progress_rounds() {
        assert_eq!(goal_progress(&selection(3, 1)), 33);
        assert_eq!(goal_progress(&selection(3, 2)), 67);
    }

    #[test]
    fn test_progress_bounds() {
        assert_eq!(goal_progress(&selection(4, 0)), 0);
        assert_eq!(goal_progress(&selection(4, 4)), 100);
    }
}
