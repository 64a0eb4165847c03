use chrono::NaiveDate;

/// Day-range selection gesture: pointer-down seeds an anchor, pointer-over
/// extends, release commits the normalized range.
///
/// The range exists only for the duration of one pointer gesture and is
/// destroyed on release regardless of outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selecting {
        anchor: NaiveDate,
        current: NaiveDate,
    },
}

impl Selection {
    /// Begin a selection on `day` (anchor and current coincide).
    pub fn pointer_down(&mut self, day: NaiveDate) {
        *self = Selection::Selecting {
            anchor: day,
            current: day,
        };
    }

    /// Extend the selection to `day`; no-op while idle.
    pub fn pointer_over(&mut self, day: NaiveDate) {
        if let Selection::Selecting { current, .. } = self {
            *current = day;
        }
    }

    /// End the gesture. Returns the committed `(min, max)` range, or None
    /// when no selection was in progress.
    pub fn release(&mut self) -> Option<(NaiveDate, NaiveDate)> {
        let committed = match *self {
            Selection::Idle => None,
            Selection::Selecting { anchor, current } => {
                Some((anchor.min(current), anchor.max(current)))
            }
        };
        *self = Selection::Idle;
        committed
    }

    /// Highlight query: is `day` inside the normalized live range?
    pub fn contains(&self, day: NaiveDate) -> bool {
        match *self {
            Selection::Idle => false,
            Selection::Selecting { anchor, current } => {
                day >= anchor.min(current) && day <= anchor.max(current)
            }
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Selection::Selecting { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn down_over_up_commits_normalized_range() {
        let mut sel = Selection::default();
        sel.pointer_down(d(10));
        sel.pointer_over(d(12));
        sel.pointer_over(d(14));
        assert_eq!(sel.release(), Some((d(10), d(14))));
        assert_eq!(sel, Selection::Idle);
    }

    #[test]
    fn backwards_drag_commits_the_same_range() {
        let mut sel = Selection::default();
        sel.pointer_down(d(14));
        sel.pointer_over(d(10));
        assert_eq!(sel.release(), Some((d(10), d(14))));
    }

    #[test]
    fn click_without_motion_commits_single_day() {
        let mut sel = Selection::default();
        sel.pointer_down(d(11));
        assert_eq!(sel.release(), Some((d(11), d(11))));
    }

    #[test]
    fn release_while_idle_emits_nothing() {
        let mut sel = Selection::default();
        assert_eq!(sel.release(), None);
        sel.pointer_over(d(10)); // ignored while idle
        assert_eq!(sel.release(), None);
    }

    #[test]
    fn contains_treats_both_orientations_alike() {
        let mut forward = Selection::default();
        forward.pointer_down(d(10));
        forward.pointer_over(d(14));

        let mut backward = Selection::default();
        backward.pointer_down(d(14));
        backward.pointer_over(d(10));

        for day in 8..=16 {
            assert_eq!(forward.contains(d(day)), backward.contains(d(day)));
        }
        assert!(forward.contains(d(10)));
        assert!(forward.contains(d(14)));
        assert!(!forward.contains(d(9)));
        assert!(!forward.contains(d(15)));
    }

    #[test]
    fn contains_is_false_while_idle() {
        let sel = Selection::default();
        assert!(!sel.contains(d(10)));
        assert!(!sel.is_active());
    }
}
