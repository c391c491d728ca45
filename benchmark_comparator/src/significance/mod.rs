//!
//! The two-sample Student's t-test.
//!

pub mod classification;
pub mod error;

use crate::model::run::group::result::BenchmarkResult;

use self::classification::Classification;
use self::error::Error;

///
/// The outcome of a pooled-variance two-sample t-test between a new and a base result.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignificanceTest {
    /// `n1 + n2 - 2`.
    pub degrees_of_freedom: i64,
    /// Positive when the new result is smaller than the base one.
    pub t_statistic: f64,
    /// The classification against the critical value.
    pub classification: Classification,
}

impl SignificanceTest {
    ///
    /// Two-tailed critical values at the 0.05 significance level by degrees of freedom.
    ///
    /// Only the harness default of 10 iterations per side is covered.
    ///
    pub const CRITICAL_VALUES: [(i64, f64); 1] = [(18, 2.101)];

    ///
    /// Runs the test.
    ///
    /// # Errors
    ///
    /// If there are no degrees of freedom left, i.e. both sides have a single iteration.
    ///
    pub fn evaluate(new: &BenchmarkResult, base: &BenchmarkResult) -> Result<Self, Error> {
        let n1 = base.iter_count() as i64;
        let n2 = new.iter_count() as i64;
        let degrees_of_freedom = n1 + n2 - 2;
        if degrees_of_freedom <= 0 {
            return Err(Error::DegreesOfFreedom {
                group_name: new.group_name().to_owned(),
                test_name: new.test_name().to_owned(),
                degrees_of_freedom,
            });
        }

        let pooled_variance = ((n1 - 1) as f64 * base.standard_deviation().powi(2)
            + (n2 - 1) as f64 * new.standard_deviation().powi(2))
            / degrees_of_freedom as f64;
        let standard_error =
            pooled_variance.sqrt() * (1.0 / n1 as f64 + 1.0 / n2 as f64).sqrt();
        if standard_error == 0.0 {
            return Ok(Self {
                degrees_of_freedom,
                t_statistic: 0.0,
                classification: Classification::Undetermined,
            });
        }

        let t_statistic = (base.average() - new.average()) / standard_error;
        let classification = match Self::critical_value(degrees_of_freedom) {
            Some(critical) if t_statistic.abs() > critical => Classification::BelowThreshold,
            Some(critical) if t_statistic.abs() == critical => Classification::AtThreshold,
            Some(_) => Classification::AboveThreshold,
            None => Classification::Undetermined,
        };

        Ok(Self {
            degrees_of_freedom,
            t_statistic,
            classification,
        })
    }

    ///
    /// Looks up the critical value for the degrees of freedom.
    ///
    pub fn critical_value(degrees_of_freedom: i64) -> Option<f64> {
        Self::CRITICAL_VALUES
            .iter()
            .find(|(df, _)| *df == degrees_of_freedom)
            .map(|(_, critical)| *critical)
    }
}
