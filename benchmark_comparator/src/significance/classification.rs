//!
//! The t-statistic classification.
//!

///
/// The position of the t-statistic relative to the critical value.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// `|t|` exceeds the critical value, p-value < 0.05.
    BelowThreshold,
    /// `|t|` equals the critical value, p-value = 0.05.
    AtThreshold,
    /// `|t|` is under the critical value, p-value > 0.05.
    AboveThreshold,
    /// No critical value is known for the degrees of freedom, or the standard error is zero.
    Undetermined,
}

impl Classification {
    ///
    /// The relation of the p-value to the significance level, if determined.
    ///
    pub fn p_value_relation(&self) -> Option<&'static str> {
        match self {
            Self::BelowThreshold => Some("<"),
            Self::AtThreshold => Some("="),
            Self::AboveThreshold => Some(">"),
            Self::Undetermined => None,
        }
    }

    ///
    /// Whether the difference is statistically significant or cannot be judged.
    ///
    pub fn is_significant_or_undetermined(&self) -> bool {
        !matches!(self, Self::AboveThreshold)
    }
}
