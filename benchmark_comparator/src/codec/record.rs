//!
//! The persisted records.
//!

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::model::run::group::result::BenchmarkResult;
use crate::model::run::group::Group;
use crate::model::run::Run;

///
/// The persisted run, borrowed from the model for encoding.
///
#[derive(Debug, Serialize)]
pub struct RunRecord<'a> {
    /// The toolchain version text.
    pub swift_ver: &'a str,
    /// The run timestamp.
    pub timestamp: &'a str,
    /// The binary size.
    pub binary_size: &'a str,
    /// The description, omitted if absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    /// The groups.
    #[serde(rename = "BitByteDataBenchmarks")]
    pub groups: Vec<GroupRecord<'a>>,
}

///
/// The persisted group, borrowed from the model for encoding.
///
#[derive(Debug, Serialize)]
pub struct GroupRecord<'a> {
    /// The group name.
    pub group_name: &'a str,
    /// The results.
    pub results: Vec<ResultRecord<'a>>,
}

///
/// The persisted result, borrowed from the model for encoding.
///
#[derive(Debug, Serialize)]
pub struct ResultRecord<'a> {
    /// The test name.
    pub name: &'a str,
    /// The average.
    pub avg: &'a str,
    /// The relative standard deviation.
    pub rel_std_dev: &'a str,
    /// The number of iterations.
    pub iter_count: usize,
}

impl<'a> From<&'a Run> for RunRecord<'a> {
    fn from(run: &'a Run) -> Self {
        Self {
            swift_ver: run.toolchain_version.as_str(),
            timestamp: run.timestamp.as_str(),
            binary_size: run.binary_size.as_str(),
            description: run.description.as_deref(),
            groups: run.groups().map(GroupRecord::from).collect(),
        }
    }
}

impl<'a> From<&'a Group> for GroupRecord<'a> {
    fn from(group: &'a Group) -> Self {
        Self {
            group_name: group.name.as_str(),
            results: group.results().map(ResultRecord::from).collect(),
        }
    }
}

impl<'a> From<&'a BenchmarkResult> for ResultRecord<'a> {
    fn from(result: &'a BenchmarkResult) -> Self {
        Self {
            name: result.test_name(),
            avg: result.avg(),
            rel_std_dev: result.rel_std_dev(),
            iter_count: result.iter_count(),
        }
    }
}

///
/// The run fields, with the groups left for the next decoding stage.
///
#[derive(Debug, Deserialize)]
pub struct RunFields {
    /// The toolchain version text.
    pub swift_ver: String,
    /// The run timestamp.
    pub timestamp: String,
    /// The binary size.
    pub binary_size: String,
    /// The optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// The undecoded groups.
    #[serde(rename = "BitByteDataBenchmarks")]
    pub groups: Vec<Value>,
}

///
/// The group fields, with the results left for the next decoding stage.
///
#[derive(Debug, Deserialize)]
pub struct GroupFields {
    /// The group name.
    pub group_name: String,
    /// The undecoded results.
    pub results: Vec<Value>,
}

///
/// The result fields.
///
#[derive(Debug, Deserialize)]
pub struct ResultFields {
    /// The test name.
    pub name: String,
    /// The average.
    pub avg: String,
    /// The relative standard deviation.
    pub rel_std_dev: String,
    /// The number of iterations.
    pub iter_count: usize,
}
