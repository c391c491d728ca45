//!
//! The persisted object shapes.
//!

use serde_json::Map;
use serde_json::Value;

///
/// The kind of a persisted object, recognized by its key set.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Exactly `name`, `avg`, `rel_std_dev` and `iter_count`.
    Result,
    /// Exactly `group_name` and `results`.
    Group,
    /// At least `BitByteDataBenchmarks`, `swift_ver`, `timestamp` and `binary_size`.
    Run,
}

impl Shape {
    /// The result keys.
    pub const RESULT_KEYS: [&'static str; 4] = ["name", "avg", "rel_std_dev", "iter_count"];

    /// The group keys.
    pub const GROUP_KEYS: [&'static str; 2] = ["group_name", "results"];

    /// The mandatory run keys.
    pub const RUN_KEYS: [&'static str; 4] =
        ["BitByteDataBenchmarks", "swift_ver", "timestamp", "binary_size"];

    ///
    /// Detects the shape, trying a result, a group and a run in that order.
    ///
    pub fn detect(object: &Map<String, Value>) -> Option<Self> {
        let has_all = |keys: &[&str]| keys.iter().all(|key| object.contains_key(*key));

        if object.len() == Self::RESULT_KEYS.len() && has_all(Self::RESULT_KEYS.as_slice()) {
            Some(Self::Result)
        } else if object.len() == Self::GROUP_KEYS.len() && has_all(Self::GROUP_KEYS.as_slice()) {
            Some(Self::Group)
        } else if has_all(Self::RUN_KEYS.as_slice()) {
            Some(Self::Run)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Result => write!(f, "result"),
            Self::Group => write!(f, "group"),
            Self::Run => write!(f, "run"),
        }
    }
}
