//!
//! The classified comparison line.
//!

use crate::model::run::group::result::BenchmarkResult;
use crate::significance::SignificanceTest;

use super::verdict::Verdict;

///
/// The comparison of a new result against its base counterpart.
///
#[derive(Debug, Clone)]
pub struct ClassifiedLine<'a> {
    /// The verdict.
    pub verdict: Verdict,
    /// `(new / base - 1) * 100`.
    pub percent_diff: f64,
    /// The t-test, `None` if the averages are equal.
    pub significance: Option<SignificanceTest>,
    /// The new result.
    pub new: &'a BenchmarkResult,
    /// The base result.
    pub base: &'a BenchmarkResult,
}

impl ClassifiedLine<'_> {
    /// The width of the verdict column, shared by all judgement variants with a p-value.
    pub const JUDGEMENT_WIDTH: usize = 29;

    ///
    /// The percent difference with two decimals and an explicit sign.
    ///
    pub fn percent_diff_text(&self) -> String {
        if self.percent_diff == 0.0 {
            "0.00%".to_owned()
        } else {
            format!("{:+.2}%", self.percent_diff)
        }
    }

    ///
    /// Renders the line with a colorized verdict.
    ///
    pub fn to_colored_string(&self) -> String {
        self.render(true)
    }

    ///
    /// Renders the line.
    ///
    pub(crate) fn render(&self, colored: bool) -> String {
        let label = format!("{:<3}", self.verdict.label());
        let label = if colored {
            self.verdict.colorize(label.as_str()).to_string()
        } else {
            label
        };

        let judgement = match self.significance {
            None => format!("{label}{}", " ".repeat(Self::JUDGEMENT_WIDTH - 3)),
            Some(test) => match test.classification.p_value_relation() {
                Some(relation) => format!(
                    "{label} {:>+7.2}% (p-value {relation} 0.05)",
                    self.percent_diff
                ),
                None => format!(
                    "{label} {:>+7.2}% (df={}, t-stat={:.2})",
                    self.percent_diff, test.degrees_of_freedom, test.t_statistic
                ),
            },
        };

        format!(
            "  {judgement} | {:<6} {:<6}% | {:<6} {:>6}% | {}/{}",
            self.new.avg(),
            self.new.rel_std_dev(),
            self.base.avg(),
            self.base.rel_std_dev(),
            self.new.group_name(),
            self.new.test_name(),
        )
    }
}

impl std::fmt::Display for ClassifiedLine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(false))
    }
}
