use serde::Serialize;
use std::fmt::{self, Display};

/// Number of correctly answered questions out of all questions of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 * 100.0 / self.total as f64
    }

    /// `threshold` is a percentage. Compared in integers so 3 of 5 passes a 60% threshold.
    #[must_use]
    pub fn passed(&self, threshold: u8) -> bool {
        self.correct * 100 >= usize::from(threshold) * self.total
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({:.1}%)", self.correct, self.total, self.percentage())
    }
}
