//!
//! The harness test listing.
//!

use crate::util::ordered_map::OrderedMap;

///
/// Benchmark test names grouped by their group, in listing order.
///
#[derive(Debug, Default)]
pub struct Listing {
    /// The test names by group name.
    pub groups: OrderedMap<Vec<String>>,
    /// The warnings about skipped lines.
    pub warnings: Vec<String>,
}

impl Listing {
    /// The prefix of benchmark test identifiers.
    pub const PREFIX: &'static str = "BitByteDataBenchmarks.";

    ///
    /// Groups the `BitByteDataBenchmarks.<Group>/<test>` identifiers of a test listing.
    ///
    pub fn parse<'l>(lines: impl IntoIterator<Item = &'l str>) -> Self {
        let mut listing = Self::default();
        for line in lines.into_iter() {
            let identifier = match line.trim().strip_prefix(Self::PREFIX) {
                Some(identifier) => identifier,
                None => {
                    listing.warnings.push(
                        "non-benchmark test was returned by the listing, skipping.".to_owned(),
                    );
                    continue;
                }
            };

            let parts: Vec<&str> = identifier.split('/').collect();
            match parts.as_slice() {
                [group_name, test_name] => listing
                    .groups
                    .get_or_insert_with(group_name, Vec::new)
                    .push((*test_name).to_owned()),
                _ => listing
                    .warnings
                    .push(format!("unknown benchmark naming format `{identifier}`, skipping.")),
            }
        }
        listing
    }

    ///
    /// The harness filter selecting exactly one test.
    ///
    pub fn filter(group_name: &str, test_name: &str) -> String {
        format!("^{}{group_name}/{test_name}$", Self::PREFIX)
    }
}
