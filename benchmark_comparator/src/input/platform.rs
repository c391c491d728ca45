//!
//! The harness output platform.
//!

///
/// The platform flavor of the harness console output.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// `Test Case '-[Module.GroupBenchmarks testName]' ...`
    Darwin,
    /// `Test Case 'GroupBenchmarks.testName' ...`
    Linux,
}

impl Platform {
    ///
    /// The platform the tool has been built for.
    ///
    pub fn host() -> Self {
        if cfg!(target_os = "macos") {
            Self::Darwin
        } else {
            Self::Linux
        }
    }

    ///
    /// The result line pattern.
    ///
    /// Captures the group, the test, the average, the relative standard deviation, and the raw samples.
    ///
    pub fn result_pattern(&self) -> &'static str {
        match self {
            Self::Darwin => {
                r"Test Case '-\[BitByteDataBenchmarks\.(.+Benchmarks) (test.+)\]'.+average: (\d+\.\d+), relative standard deviation: (\d+\.\d+)%, values: \[(.*)\]"
            }
            Self::Linux => {
                r"Test Case '(.+Benchmarks)\.(test.+)'.+average: (\d+\.\d+), relative standard deviation: (\d+\.\d+)%, values: \[(.*)\]"
            }
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "darwin" | "macos" => Ok(Self::Darwin),
            "linux" => Ok(Self::Linux),
            string => anyhow::bail!(
                "Unknown platform `{string}`. Supported platforms: {}",
                [Self::Darwin, Self::Linux]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Darwin => write!(f, "darwin"),
            Self::Linux => write!(f, "linux"),
        }
    }
}
