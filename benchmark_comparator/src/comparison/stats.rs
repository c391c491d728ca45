//!
//! The comparison session statistics.
//!

use super::verdict::Verdict;

///
/// Counts the verdicts of one comparison session.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatAccumulator {
    /// The number of regressions.
    regressions: usize,
    /// The number of improvements.
    improvements: usize,
    /// The number of results without significant changes.
    no_change: usize,
}

impl StatAccumulator {
    ///
    /// Records a verdict.
    ///
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Regression => self.regressions += 1,
            Verdict::Improvement => self.improvements += 1,
            Verdict::Ok => self.no_change += 1,
        }
    }

    pub fn regressions(&self) -> usize {
        self.regressions
    }

    pub fn improvements(&self) -> usize {
        self.improvements
    }

    pub fn no_change(&self) -> usize {
        self.no_change
    }

    ///
    /// The number of compared results.
    ///
    pub fn total(&self) -> usize {
        self.regressions + self.improvements + self.no_change
    }

    ///
    /// The three summary lines.
    ///
    pub fn summary_lines(&self) -> [String; 3] {
        let total = self.total();
        [
            format!("{}/{total} regressions", self.regressions),
            format!("{}/{total} improvements", self.improvements),
            format!("{}/{total} no significant changes", self.no_change),
        ]
    }
}

impl std::fmt::Display for StatAccumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Out of all compared results:")?;
        for line in self.summary_lines() {
            write!(f, "\n    {line}")?;
        }
        Ok(())
    }
}
