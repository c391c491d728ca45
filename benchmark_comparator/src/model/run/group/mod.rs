//!
//! The benchmark group.
//!

pub mod result;

use crate::util::ordered_map::OrderedMap;

use self::result::BenchmarkResult;

///
/// A named category of benchmark results, ordered by insertion.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// The group name.
    pub name: String,
    /// The results by test name.
    results: OrderedMap<BenchmarkResult>,
}

impl Group {
    ///
    /// Creates an empty group.
    ///
    pub fn new(name: String) -> Self {
        Self {
            name,
            results: OrderedMap::default(),
        }
    }

    ///
    /// Adds a result, replacing any previous result with the same test name.
    ///
    /// The result is stamped with the group name if it has none.
    ///
    pub fn add_result(&mut self, mut result: BenchmarkResult) {
        result.stamp_group_name(self.name.as_str());
        self.results.insert(result.test_name().to_owned(), result);
    }

    pub fn get(&self, test_name: &str) -> Option<&BenchmarkResult> {
        self.results.get(test_name)
    }

    pub fn contains(&self, test_name: &str) -> bool {
        self.results.contains_key(test_name)
    }

    ///
    /// Iterates over the results in insertion order.
    ///
    pub fn results(&self) -> impl Iterator<Item = &BenchmarkResult> {
        self.results.values()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}:", self.name)?;
        for result in self.results() {
            writeln!(f, "  {result}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::result::BenchmarkResult;
    use super::Group;

    fn result(test_name: &str, avg: &str) -> BenchmarkResult {
        BenchmarkResult::new(
            String::new(),
            test_name.to_owned(),
            avg.to_owned(),
            "1.0".to_owned(),
            10,
        )
        .expect("Valid result")
    }

    #[test]
    fn add_result_stamps_group_name() {
        let mut group = Group::new("LsbBitWriterBenchmarks".to_owned());
        group.add_result(result("testWriteBit", "1.0"));

        let stored = group.get("testWriteBit").expect("Always exists");
        assert_eq!(stored.group_name(), "LsbBitWriterBenchmarks");
    }

    #[test]
    fn add_result_last_write_wins() {
        let mut group = Group::new("LsbBitWriterBenchmarks".to_owned());
        group.add_result(result("testWriteBit", "1.0"));
        group.add_result(result("testWriteByte", "2.0"));
        group.add_result(result("testWriteBit", "3.0"));

        assert_eq!(group.len(), 2);
        assert_eq!(group.get("testWriteBit").map(|result| result.avg()), Some("3.0"));
        assert_eq!(
            group
                .results()
                .map(|result| result.test_name())
                .collect::<Vec<_>>(),
            vec!["testWriteBit", "testWriteByte"]
        );
    }
}
