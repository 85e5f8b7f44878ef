//! Inclusive date-window filtering

use chrono::NaiveDate;

use crate::app::models::{DateWindow, RemoteEntry};

/// Anything tied to a single observation day
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for RemoteEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Keep items whose day lies in `window`, preserving input order
pub fn filter_window<T, I>(items: I, window: &DateWindow) -> Vec<T>
where
    T: Dated,
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .filter(|item| window.contains(item.date()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Version;

    fn entry(y: i32, m: u32, d: u32) -> RemoteEntry {
        RemoteEntry {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            version: Version::new(1, 0, 0),
            filename: format!("f_{:04}{:02}{:02}", y, m, d),
        }
    }

    fn window(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateWindow {
        DateWindow::new(
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        )
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let entries = vec![
            entry(2024, 12, 31),
            entry(2025, 1, 1),
            entry(2025, 1, 15),
            entry(2025, 1, 31),
            entry(2025, 2, 1),
        ];

        let kept = filter_window(entries, &window((2025, 1, 1), (2025, 1, 31)));
        let names: Vec<&str> = kept.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, vec!["f_20250101", "f_20250115", "f_20250131"]);
    }

    #[test]
    fn test_single_day_window() {
        let kept = filter_window(
            vec![entry(2025, 1, 1), entry(2025, 1, 2)],
            &window((2025, 1, 2), (2025, 1, 2)),
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].filename, "f_20250102");
    }

    #[test]
    fn test_reversed_window_is_empty_not_error() {
        let kept = filter_window(
            vec![entry(2025, 1, 1), entry(2025, 1, 2), entry(2025, 1, 3)],
            &window((2025, 1, 3), (2025, 1, 1)),
        );
        assert!(kept.is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let kept = filter_window(
            vec![entry(2025, 1, 3), entry(2025, 1, 1), entry(2025, 1, 2)],
            &window((2025, 1, 1), (2025, 1, 3)),
        );
        let names: Vec<&str> = kept.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, vec!["f_20250103", "f_20250101", "f_20250102"]);
    }
}
