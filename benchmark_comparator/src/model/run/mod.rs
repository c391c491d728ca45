//!
//! The benchmark run.
//!

pub mod group;

use std::path::Path;

use crate::codec;
use crate::util::ordered_map::OrderedMap;

use self::group::result::BenchmarkResult;
use self::group::Group;

///
/// A snapshot of one benchmarking session.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    /// The toolchain version text, stored as reported by the toolchain.
    pub toolchain_version: String,
    /// The run timestamp.
    pub timestamp: String,
    /// The size of the benchmarked binary in bytes.
    pub binary_size: String,
    /// The optional free-text description.
    pub description: Option<String>,
    /// The groups by name.
    groups: OrderedMap<Group>,
}

impl Run {
    /// The timestamp format of newly created runs.
    pub const TIMESTAMP_FORMAT: &'static str = "%Y-%m-%d %H:%M UTC";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        toolchain_version: String,
        timestamp: String,
        binary_size: String,
        description: Option<String>,
    ) -> Self {
        Self {
            toolchain_version,
            timestamp,
            binary_size,
            description,
            groups: OrderedMap::default(),
        }
    }

    ///
    /// Formats the current UTC time as a run timestamp.
    ///
    pub fn timestamp_now() -> String {
        chrono::Utc::now()
            .format(Self::TIMESTAMP_FORMAT)
            .to_string()
    }

    ///
    /// Routes a result into its group, creating the group on first use.
    ///
    pub fn new_result(&mut self, result: BenchmarkResult) {
        let group_name = result.group_name().to_owned();
        self.groups
            .get_or_insert_with(group_name.as_str(), || {
                tracing::debug!("Creating group `{group_name}`");
                Group::new(group_name.clone())
            })
            .add_result(result);
    }

    ///
    /// Adds a whole group, replacing any group with the same name.
    ///
    pub fn add_group(&mut self, group: Group) {
        self.groups.insert(group.name.clone(), group);
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    ///
    /// Iterates over the groups in insertion order.
    ///
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    ///
    /// Renders the run metadata.
    ///
    pub fn header(&self) -> String {
        let mut header = self.toolchain_version.clone();
        if !header.is_empty() && !header.ends_with('\n') {
            header.push('\n');
        }
        header.push_str(format!("Timestamp: {}\n", self.timestamp).as_str());
        header.push_str(format!("Binary size: {}\n", self.binary_size).as_str());
        if let Some(description) = self.description.as_deref() {
            header.push_str(format!("Description: {description}\n").as_str());
        }
        header
    }

    ///
    /// Writes the run to a file in the persisted JSON format.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let contents = codec::encode(self)?;
        std::fs::write(path, contents)
            .map_err(|error| anyhow::anyhow!("Benchmark file {path:?} writing: {error}"))?;
        tracing::info!("Saved benchmark run to {path:?}");
        Ok(())
    }
}

impl TryFrom<&Path> for Run {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Benchmark file {path:?} reading: {error}"))?;
        let run = codec::decode(text.as_str())
            .map_err(|error| anyhow::anyhow!("Benchmark file {path:?} parsing: {error}"))?;
        tracing::debug!("Loaded {} benchmark groups from {path:?}", run.groups.len());
        Ok(run)
    }
}

impl std::fmt::Display for Run {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header())?;
        for group in self.groups() {
            write!(f, "\n{}:\n", group.name)?;
            for result in group.results() {
                writeln!(
                    f,
                    " {:<6} {:>6}%   {}",
                    result.avg(),
                    result.rel_std_dev(),
                    result.test_name()
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::group::result::BenchmarkResult;
    use super::Run;

    fn result(group_name: &str, test_name: &str) -> BenchmarkResult {
        BenchmarkResult::new(
            group_name.to_owned(),
            test_name.to_owned(),
            "1.5".to_owned(),
            "0.5".to_owned(),
            10,
        )
        .expect("Valid result")
    }

    fn run(description: Option<&str>) -> Run {
        Run::new(
            "Swift version 5.9\n".to_owned(),
            "2024-01-01 12:00 UTC".to_owned(),
            "123456".to_owned(),
            description.map(str::to_owned),
        )
    }

    #[test]
    fn new_result_creates_groups_in_order() {
        let mut run = run(None);
        run.new_result(result("MsbBitWriterBenchmarks", "testWriteBit"));
        run.new_result(result("ByteReaderBenchmarks", "testByte"));
        run.new_result(result("MsbBitWriterBenchmarks", "testWriteByte"));

        assert_eq!(
            run.groups().map(|group| group.name.as_str()).collect::<Vec<_>>(),
            vec!["MsbBitWriterBenchmarks", "ByteReaderBenchmarks"]
        );
        assert_eq!(
            run.group("MsbBitWriterBenchmarks").map(|group| group.len()),
            Some(2)
        );
    }

    #[test]
    fn header_without_description() {
        assert_eq!(
            run(None).header(),
            "Swift version 5.9\nTimestamp: 2024-01-01 12:00 UTC\nBinary size: 123456\n"
        );
    }

    #[test]
    fn header_terminates_toolchain_line() {
        let mut run = run(Some("baseline"));
        run.toolchain_version = "Swift version 5.9".to_owned();
        assert_eq!(
            run.header(),
            "Swift version 5.9\nTimestamp: 2024-01-01 12:00 UTC\nBinary size: 123456\nDescription: baseline\n"
        );
    }

    #[test]
    fn display_lists_groups() {
        let mut run = run(None);
        run.new_result(result("ByteReaderBenchmarks", "testByte"));

        let listing = run.to_string();
        assert!(listing.ends_with("\nByteReaderBenchmarks:\n 1.5       0.5%   testByte\n"));
    }

    #[test]
    fn file_round_trip() {
        let mut original = run(Some("before the refactoring"));
        original.new_result(result("ByteReaderBenchmarks", "testByte"));

        let directory = tempfile::tempdir().expect("Temporary directory");
        let path = directory.path().join("base.json");
        original.write_to_file(path.as_path()).expect("Writable file");

        let loaded = Run::try_from(path.as_path()).expect("Readable file");
        assert_eq!(loaded, original);
    }

    #[test]
    fn missing_file() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let path = directory.path().join("absent.json");

        assert!(Run::try_from(path.as_path()).is_err());
    }

    #[test]
    fn timestamp_now_format() {
        let timestamp = Run::timestamp_now();
        assert!(timestamp.ends_with(" UTC"));
        assert_eq!(timestamp.len(), "2024-01-01 12:00 UTC".len());
    }
}
