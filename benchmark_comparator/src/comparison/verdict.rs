//!
//! The comparison verdict.
//!

use colored::Colorize;

use crate::significance::classification::Classification;

///
/// The judgement on a new result relative to its base counterpart.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No significant change.
    Ok,
    /// The new result is slower.
    Regression,
    /// The new result is faster.
    Improvement,
}

impl Verdict {
    ///
    /// Decides on the verdict from the percent difference and the t-test classification.
    ///
    /// A directional change is reported whenever the test cannot rule it out,
    /// including the case when no critical value is known.
    ///
    pub fn decide(percent_diff: f64, classification: Classification) -> Self {
        if percent_diff == 0.0 || !classification.is_significant_or_undetermined() {
            Self::Ok
        } else if percent_diff > 0.0 {
            Self::Regression
        } else {
            Self::Improvement
        }
    }

    ///
    /// The report label.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Regression => "REG",
            Self::Improvement => "IMP",
        }
    }

    ///
    /// Colorizes the text according to the verdict.
    ///
    pub fn colorize(&self, text: &str) -> colored::ColoredString {
        match self {
            Self::Ok => text.white(),
            Self::Regression => text.bright_red(),
            Self::Improvement => text.green(),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
