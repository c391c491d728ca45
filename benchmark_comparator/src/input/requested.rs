//!
//! The test requested from the harness.
//!

///
/// A single `<group>/<test>` pair the harness has been asked to run.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedTest {
    /// The benchmark group name.
    pub group_name: String,
    /// The test name.
    pub test_name: String,
}

impl std::str::FromStr for RequestedTest {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.split_once('/') {
            Some((group_name, test_name))
                if !group_name.is_empty() && !test_name.is_empty() && !test_name.contains('/') =>
            {
                Ok(Self {
                    group_name: group_name.to_owned(),
                    test_name: test_name.to_owned(),
                })
            }
            _ => anyhow::bail!("Expected `<group>/<test>`, found `{string}`"),
        }
    }
}

impl std::fmt::Display for RequestedTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.group_name, self.test_name)
    }
}
