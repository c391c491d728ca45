//!
//! The run comparison report.
//!

use colored::Colorize;

use crate::model::run::group::result::BenchmarkResult;
use crate::model::run::group::Group;

use super::line::ClassifiedLine;
use super::stats::StatAccumulator;

///
/// A single report entry, in the order of the new run.
///
#[derive(Debug, Clone)]
pub enum Entry<'a> {
    /// A result compared against its base counterpart.
    Compared(ClassifiedLine<'a>),
    /// A result without a base counterpart.
    Unmatched(&'a BenchmarkResult),
    /// A whole group without a base counterpart.
    GroupNotInBase(&'a Group),
    /// Base results of a matched group that are absent in the new run.
    MissingInNew {
        /// The group name.
        group_name: &'a str,
        /// The absent test names, in base order.
        test_names: Vec<&'a str>,
    },
}

impl Entry<'_> {
    ///
    /// The warning message, if the entry is a missing-counterpart warning.
    ///
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::GroupNotInBase(group) => {
                Some(format!("{} not found in base benchmarks", group.name))
            }
            Self::MissingInNew { test_names, .. } => Some(format!(
                "following results were found in base benchmarks but not in new:\n{}",
                test_names.join(", ")
            )),
            Self::Compared(_) | Self::Unmatched(_) => None,
        }
    }

    ///
    /// Renders the entry with a trailing newline.
    ///
    fn render(&self, colored: bool) -> String {
        let warning = |text: String| {
            let prefix = if colored {
                "warning:".bright_yellow().to_string()
            } else {
                "warning:".to_owned()
            };
            format!("{prefix} {text}\n")
        };

        match self {
            Self::Compared(line) => format!("{}\n", line.render(colored)),
            Self::Unmatched(result) => format!("  {result} | N/A\n"),
            Self::GroupNotInBase(group) => {
                format!("{group}\n{}", warning(self.warning().unwrap_or_default()))
            }
            Self::MissingInNew { .. } => warning(self.warning().unwrap_or_default()),
        }
    }
}

///
/// The comparison of a new run against a base run.
///
#[derive(Debug, Clone)]
pub struct Report<'a> {
    /// The entries in the order of the new run.
    pub entries: Vec<Entry<'a>>,
    /// The session statistics.
    pub stats: StatAccumulator,
}

impl<'a> Report<'a> {
    ///
    /// The compared lines.
    ///
    pub fn lines(&self) -> impl Iterator<Item = &ClassifiedLine<'a>> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Compared(line) => Some(line),
            _ => None,
        })
    }

    ///
    /// The missing-counterpart warnings.
    ///
    pub fn warnings(&self) -> Vec<String> {
        self.entries.iter().filter_map(Entry::warning).collect()
    }

    ///
    /// Writes the colorized report.
    ///
    pub fn write_all<W>(&self, w: &mut W) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        for entry in self.entries.iter() {
            write!(w, "{}", entry.render(true))?;
        }
        writeln!(w, "{}", self.stats)?;
        Ok(())
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in self.entries.iter() {
            write!(f, "{}", entry.render(false))?;
        }
        writeln!(f, "{}", self.stats)
    }
}
