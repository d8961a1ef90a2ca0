//! In-memory bookkeeping of user feedback on predictions

/// Per-digit counters of confirmed-correct and confirmed-incorrect
/// predictions, plus running totals.
///
/// The tally only ever grows; it starts empty, is bumped once per explicit
/// piece of user feedback, and is never persisted. Clearing the drawing
/// surface does not touch it, so the counters describe the whole session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackTally {
    correct: [u64; 10],
    incorrect: [u64; 10],
    total_correct: u64,
    total_incorrect: u64,
}

impl FeedbackTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one piece of feedback for the given digit. Labels outside
    /// 0..=9 are ignored; classifiers validate their output before it can
    /// reach the tally, so that path only guards against misuse.
    pub fn record(&mut self, label: u8, was_correct: bool) {
        let slots = if was_correct {
            &mut self.correct
        } else {
            &mut self.incorrect
        };
        if let Some(slot) = slots.get_mut(label as usize) {
            *slot += 1;
            if was_correct {
                self.total_correct += 1;
            } else {
                self.total_incorrect += 1;
            }
        }
    }

    /// Confirmed-correct count for one digit.
    pub fn correct_count(&self, label: u8) -> u64 {
        self.correct.get(label as usize).copied().unwrap_or(0)
    }

    /// Confirmed-incorrect count for one digit.
    pub fn incorrect_count(&self, label: u8) -> u64 {
        self.incorrect.get(label as usize).copied().unwrap_or(0)
    }

    pub fn total_correct(&self) -> u64 {
        self.total_correct
    }

    pub fn total_incorrect(&self) -> u64 {
        self.total_incorrect
    }

    /// Per-digit correct counts, indexed by digit. Chart-friendly.
    pub fn correct_counts(&self) -> &[u64; 10] {
        &self.correct
    }

    /// Per-digit incorrect counts, indexed by digit.
    pub fn incorrect_counts(&self) -> &[u64; 10] {
        &self.incorrect
    }

    pub fn is_empty(&self) -> bool {
        self.total_correct == 0 && self.total_incorrect == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accumulate_per_label() {
        let mut tally = FeedbackTally::new();
        for _ in 0..4 {
            tally.record(7, true);
        }
        for _ in 0..2 {
            tally.record(7, false);
        }
        tally.record(3, false);

        assert_eq!(tally.correct_count(7), 4);
        assert_eq!(tally.incorrect_count(7), 2);
        assert_eq!(tally.incorrect_count(3), 1);
        assert_eq!(tally.correct_count(3), 0);
        assert_eq!(tally.total_correct(), 4);
        assert_eq!(tally.total_incorrect(), 3);
        assert_eq!(
            tally.total_correct() + tally.total_incorrect(),
            7,
            "totals must equal the number of record calls"
        );
        // The chart-facing tables agree with the per-label accessors.
        assert_eq!(tally.correct_counts()[7], 4);
        assert_eq!(tally.incorrect_counts()[7], 2);
        assert_eq!(tally.incorrect_counts()[3], 1);
        assert_eq!(tally.correct_counts().iter().sum::<u64>(), 4);
        assert_eq!(tally.incorrect_counts().iter().sum::<u64>(), 3);
    }

    #[test]
    fn starts_empty() {
        let tally = FeedbackTally::new();
        assert!(tally.is_empty());
        for label in 0..10 {
            assert_eq!(tally.correct_count(label), 0);
            assert_eq!(tally.incorrect_count(label), 0);
        }
    }

    #[test]
    fn out_of_range_labels_are_ignored() {
        let mut tally = FeedbackTally::new();
        tally.record(10, true);
        tally.record(200, false);
        assert!(tally.is_empty());
    }
}
