//!
//! The benchmark result.
//!

use crate::model::error::Error;
use crate::util::parse_non_negative;

///
/// Timing statistics of a single benchmark test.
///
/// The average and the relative standard deviation are kept in their original
/// textual form, as they are reported and persisted verbatim.
///
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// The group name, empty until the result is added to a group.
    group_name: String,
    /// The test name.
    test_name: String,
    /// The average, as reported.
    avg: String,
    /// The relative standard deviation in percent, as reported.
    rel_std_dev: String,
    /// The number of iterations.
    iter_count: usize,
    /// The parsed average.
    average: f64,
    /// The parsed relative standard deviation.
    relative_deviation: f64,
}

impl BenchmarkResult {
    ///
    /// A shortcut constructor.
    ///
    /// # Errors
    ///
    /// If `avg` or `rel_std_dev` is not a non-negative decimal number, or `iter_count` is zero.
    ///
    pub fn new(
        group_name: String,
        test_name: String,
        avg: String,
        rel_std_dev: String,
        iter_count: usize,
    ) -> Result<Self, Error> {
        let invalid = |field: &'static str, value: &str| Error::InvalidNumber {
            group_name: group_name.clone(),
            test_name: test_name.clone(),
            field,
            value: value.to_owned(),
        };

        let average =
            parse_non_negative(avg.as_str()).ok_or_else(|| invalid("avg", avg.as_str()))?;
        let relative_deviation = parse_non_negative(rel_std_dev.as_str())
            .ok_or_else(|| invalid("rel_std_dev", rel_std_dev.as_str()))?;
        if iter_count == 0 {
            return Err(Error::NoIterations {
                group_name,
                test_name,
            });
        }

        Ok(Self {
            group_name,
            test_name,
            avg,
            rel_std_dev,
            iter_count,
            average,
            relative_deviation,
        })
    }

    pub fn group_name(&self) -> &str {
        self.group_name.as_str()
    }

    pub fn test_name(&self) -> &str {
        self.test_name.as_str()
    }

    pub fn avg(&self) -> &str {
        self.avg.as_str()
    }

    pub fn rel_std_dev(&self) -> &str {
        self.rel_std_dev.as_str()
    }

    pub fn iter_count(&self) -> usize {
        self.iter_count
    }

    ///
    /// The numeric average.
    ///
    pub fn average(&self) -> f64 {
        self.average
    }

    ///
    /// The absolute standard deviation, derived from the relative one.
    ///
    pub fn standard_deviation(&self) -> f64 {
        self.average * self.relative_deviation / 100.0
    }

    ///
    /// Assigns the group name unless one is already set.
    ///
    pub(crate) fn stamp_group_name(&mut self, group_name: &str) {
        if self.group_name.is_empty() {
            self.group_name = group_name.to_owned();
        }
    }
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            " {:<6} {:>6}%   {}/{}",
            self.avg, self.rel_std_dev, self.group_name, self.test_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::BenchmarkResult;

    fn result(avg: &str, rel_std_dev: &str, iter_count: usize) -> anyhow::Result<BenchmarkResult> {
        Ok(BenchmarkResult::new(
            "ByteReaderBenchmarks".to_owned(),
            "testByte".to_owned(),
            avg.to_owned(),
            rel_std_dev.to_owned(),
            iter_count,
        )?)
    }

    #[test]
    fn standard_deviation() {
        let result = result("10.0", "5.0", 10).expect("Valid result");
        assert!((result.standard_deviation() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_negative_average() {
        assert!(result("-1.0", "5.0", 10).is_err());
    }

    #[test]
    fn rejects_non_numeric_deviation() {
        assert!(result("1.0", "abc", 10).is_err());
        assert!(result("1.0", "NaN", 10).is_err());
    }

    #[test]
    fn rejects_zero_iterations() {
        assert!(result("1.0", "1.0", 0).is_err());
    }

    #[test]
    fn stamps_only_missing_group_name() {
        let mut unnamed = BenchmarkResult::new(
            String::new(),
            "testByte".to_owned(),
            "1.0".to_owned(),
            "1.0".to_owned(),
            10,
        )
        .expect("Valid result");
        unnamed.stamp_group_name("ByteReaderBenchmarks");
        assert_eq!(unnamed.group_name(), "ByteReaderBenchmarks");

        unnamed.stamp_group_name("OtherBenchmarks");
        assert_eq!(unnamed.group_name(), "ByteReaderBenchmarks");
    }

    #[test]
    fn display() {
        let result = result("0.123", "2.5", 10).expect("Valid result");
        assert_eq!(
            result.to_string(),
            " 0.123     2.5%   ByteReaderBenchmarks/testByte"
        );
    }
}
