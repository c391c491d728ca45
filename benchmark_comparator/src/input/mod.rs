//!
//! The benchmark harness console output.
//!

pub mod error;
pub mod listing;
pub mod platform;
pub mod requested;

use regex::Regex;

use crate::model::run::group::result::BenchmarkResult;

use self::error::Error;
use self::platform::Platform;

///
/// Extracts benchmark results from the harness console output.
///
#[derive(Debug, Clone)]
pub struct Parser {
    /// The result line pattern.
    result: Regex,
    /// The raw sample pattern.
    sample: Regex,
}

impl Parser {
    /// The raw sample pattern, used for counting iterations.
    pub const SAMPLE_PATTERN: &'static str = r"\d+\.\d+";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(platform: Platform) -> Self {
        Self {
            result: Regex::new(platform.result_pattern()).expect("Always valid"),
            sample: Regex::new(Self::SAMPLE_PATTERN).expect("Always valid"),
        }
    }

    ///
    /// Parses a line, returning `None` if it does not hold a benchmark result.
    ///
    /// The iteration count is the number of samples in the raw value list.
    ///
    pub fn parse_line(&self, line: &str) -> Result<Option<BenchmarkResult>, Error> {
        let captures = match self.result.captures(line.trim_end()) {
            Some(captures) => captures,
            None => return Ok(None),
        };

        let iter_count = self.sample.find_iter(&captures[5]).count();
        let result = BenchmarkResult::new(
            captures[1].to_owned(),
            captures[2].to_owned(),
            captures[3].to_owned(),
            captures[4].to_owned(),
            iter_count,
        )?;
        Ok(Some(result))
    }

    ///
    /// Parses the output of a harness invocation that has been requested to run
    /// only `group_name/test_name`.
    ///
    /// # Errors
    ///
    /// If any result line belongs to a different test.
    ///
    pub fn parse_requested<'l>(
        &self,
        lines: impl IntoIterator<Item = &'l str>,
        group_name: &str,
        test_name: &str,
    ) -> Result<Vec<BenchmarkResult>, Error> {
        let results = self.parse_all(lines)?;
        if let Some(result) = results
            .iter()
            .find(|result| result.group_name() != group_name || result.test_name() != test_name)
        {
            return Err(Error::WrongTest {
                requested_group: group_name.to_owned(),
                requested_test: test_name.to_owned(),
                found_group: result.group_name().to_owned(),
                found_test: result.test_name().to_owned(),
            });
        }
        Ok(results)
    }

    ///
    /// Parses the output of a harness invocation, accepting any test.
    ///
    pub fn parse_all<'l>(
        &self,
        lines: impl IntoIterator<Item = &'l str>,
    ) -> Result<Vec<BenchmarkResult>, Error> {
        let mut results = Vec::new();
        let mut skipped = 0;
        for line in lines.into_iter() {
            match self.parse_line(line)? {
                Some(result) => results.push(result),
                None => skipped += 1,
            }
        }
        tracing::debug!(
            "Parsed {} benchmark results, skipped {skipped} lines",
            results.len()
        );
        Ok(results)
    }
}
