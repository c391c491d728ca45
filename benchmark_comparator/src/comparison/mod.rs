//!
//! The comparison of a new benchmark run against a base run.
//!

pub mod line;
pub mod report;
pub mod stats;
pub mod verdict;

use crate::model::run::group::result::BenchmarkResult;
use crate::model::run::Run;
use crate::significance::classification::Classification;
use crate::significance::error::Error;
use crate::significance::SignificanceTest;

use self::line::ClassifiedLine;
use self::report::Entry;
use self::report::Report;
use self::stats::StatAccumulator;
use self::verdict::Verdict;

///
/// A comparison session.
///
/// Every compared result is counted in the session statistics exactly once.
///
#[derive(Debug, Default)]
pub struct Comparator {
    /// The session statistics.
    stats: StatAccumulator,
    /// Whether base results absent in the new run are not reported.
    ignore_missing: bool,
}

impl Comparator {
    ///
    /// Starts a new session.
    ///
    pub fn new(ignore_missing: bool) -> Self {
        Self {
            stats: StatAccumulator::default(),
            ignore_missing,
        }
    }

    ///
    /// Compares a new result against its base counterpart.
    ///
    /// # Errors
    ///
    /// If the results do not have enough samples for the t-test.
    ///
    pub fn compare<'a>(
        &mut self,
        new: &'a BenchmarkResult,
        base: &'a BenchmarkResult,
    ) -> Result<ClassifiedLine<'a>, Error> {
        let (percent_diff, significance) = if new.average() == base.average() {
            (0.0, None)
        } else {
            let percent_diff = (new.average() / base.average() - 1.0) * 100.0;
            (percent_diff, Some(SignificanceTest::evaluate(new, base)?))
        };

        let verdict = Verdict::decide(
            percent_diff,
            significance
                .map(|test| test.classification)
                .unwrap_or(Classification::AboveThreshold),
        );
        self.stats.record(verdict);

        Ok(ClassifiedLine {
            verdict,
            percent_diff,
            significance,
            new,
            base,
        })
    }

    ///
    /// Compares every group of the new run against the base run, ending the session.
    ///
    /// # Errors
    ///
    /// If any pair of results does not have enough samples for the t-test.
    ///
    pub fn compare_runs<'a>(mut self, new: &'a Run, base: &'a Run) -> Result<Report<'a>, Error> {
        let mut entries = Vec::new();

        for group in new.groups() {
            let base_group = match base.group(group.name.as_str()) {
                Some(base_group) => base_group,
                None => {
                    tracing::debug!("Group `{}` is missing in the base run", group.name);
                    entries.push(Entry::GroupNotInBase(group));
                    continue;
                }
            };

            for result in group.results() {
                let entry = match base_group.get(result.test_name()) {
                    Some(base_result) => Entry::Compared(self.compare(result, base_result)?),
                    None => Entry::Unmatched(result),
                };
                entries.push(entry);
            }

            if self.ignore_missing {
                continue;
            }
            let test_names: Vec<&str> = base_group
                .results()
                .map(BenchmarkResult::test_name)
                .filter(|test_name| !group.contains(test_name))
                .collect();
            if !test_names.is_empty() {
                entries.push(Entry::MissingInNew {
                    group_name: group.name.as_str(),
                    test_names,
                });
            }
        }

        tracing::debug!(
            "Compared {} results: {} regressions, {} improvements",
            self.stats.total(),
            self.stats.regressions(),
            self.stats.improvements(),
        );
        Ok(Report {
            entries,
            stats: self.stats,
        })
    }

    ///
    /// The statistics collected so far.
    ///
    pub fn stats(&self) -> &StatAccumulator {
        &self.stats
    }

    ///
    /// Ends the session.
    ///
    pub fn finish(self) -> StatAccumulator {
        self.stats
    }
}
