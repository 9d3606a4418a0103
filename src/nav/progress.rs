//! Progress-tracker status derivation
//!
//! A tracker entry's status is a pure function of its step versus the
//! current step; every entry is recomputed on every navigation.

use super::step::Step;

/// Derived status of one progress-tracker entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStatus {
    /// Entry lies ahead of the current step
    Upcoming,
    /// Entry is the current step
    Active,
    /// Entry has been passed
    Completed,
}

impl ProgressStatus {
    /// Status of `entry` relative to `current`
    pub fn derive(entry: Step, current: Step) -> ProgressStatus {
        if entry < current {
            ProgressStatus::Completed
        } else if entry == current {
            ProgressStatus::Active
        } else {
            ProgressStatus::Upcoming
        }
    }

    /// CSS class the markup styles this status with. Upcoming entries
    /// carry no marker class.
    pub fn class(self) -> Option<&'static str> {
        match self {
            ProgressStatus::Upcoming => None,
            ProgressStatus::Active => Some("active"),
            ProgressStatus::Completed => Some("completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_exhaustive_pairs() {
        for current in 1..=12 {
            for entry in 1..=12 {
                let status = ProgressStatus::derive(
                    Step::new(entry).unwrap(),
                    Step::new(current).unwrap(),
                );
                let expected = if entry < current {
                    ProgressStatus::Completed
                } else if entry == current {
                    ProgressStatus::Active
                } else {
                    ProgressStatus::Upcoming
                };
                assert_eq!(status, expected, "entry {entry} vs current {current}");
            }
        }
    }

    #[test]
    fn test_hero_marks_everything_upcoming() {
        for entry in 1..=12 {
            assert_eq!(
                ProgressStatus::derive(Step::new(entry).unwrap(), Step::HERO),
                ProgressStatus::Upcoming
            );
        }
    }

    #[test]
    fn test_classes() {
        assert_eq!(ProgressStatus::Active.class(), Some("active"));
        assert_eq!(ProgressStatus::Completed.class(), Some("completed"));
        assert_eq!(ProgressStatus::Upcoming.class(), None);
    }
}
