//!
//! The persisted run format.
//!
//! Decoding is staged: every object is recognized by its key set, results first,
//! then groups, then runs, and the tree is folded bottom-up.
//!

pub mod error;
pub mod record;
pub mod shape;

use serde_json::Map;
use serde_json::Value;

use crate::model::run::group::result::BenchmarkResult;
use crate::model::run::group::Group;
use crate::model::run::Run;

use self::error::Error;
use self::record::GroupFields;
use self::record::ResultFields;
use self::record::RunFields;
use self::record::RunRecord;
use self::shape::Shape;

///
/// A decoded object.
///
enum Node {
    Result(BenchmarkResult),
    Group(Group),
    Run(Run),
}

impl Node {
    fn shape(&self) -> Shape {
        match self {
            Self::Result(_) => Shape::Result,
            Self::Group(_) => Shape::Group,
            Self::Run(_) => Shape::Run,
        }
    }
}

///
/// Encodes the run as a pretty-printed JSON document.
///
pub fn encode(run: &Run) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(&RunRecord::from(run))?)
}

///
/// Decodes a run from a JSON document.
///
/// # Errors
///
/// If the document is malformed, or any object matches no shape expected at its position.
///
pub fn decode(document: &str) -> Result<Run, Error> {
    let value: Value = serde_json::from_str(document)?;
    match decode_value(value, "document")? {
        Node::Run(run) => Ok(run),
        node => Err(Error::UnexpectedShape {
            location: "document".to_owned(),
            expected: Shape::Run,
            found: node.shape(),
        }),
    }
}

fn decode_value(value: Value, location: &str) -> Result<Node, Error> {
    let object = match value {
        Value::Object(object) => object,
        _ => {
            return Err(Error::NotAnObject {
                location: location.to_owned(),
            })
        }
    };

    match Shape::detect(&object) {
        Some(Shape::Result) => decode_result(object).map(Node::Result),
        Some(Shape::Group) => decode_group(object, location).map(Node::Group),
        Some(Shape::Run) => decode_run(object).map(Node::Run),
        None => Err(Error::UnrecognizedShape {
            location: location.to_owned(),
            keys: object.keys().cloned().collect::<Vec<String>>().join(", "),
        }),
    }
}

fn decode_result(object: Map<String, Value>) -> Result<BenchmarkResult, Error> {
    let fields: ResultFields = serde_json::from_value(Value::Object(object))?;
    Ok(BenchmarkResult::new(
        String::new(),
        fields.name,
        fields.avg,
        fields.rel_std_dev,
        fields.iter_count,
    )?)
}

fn decode_group(object: Map<String, Value>, location: &str) -> Result<Group, Error> {
    let fields: GroupFields = serde_json::from_value(Value::Object(object))?;

    let mut group = Group::new(fields.group_name);
    for (index, value) in fields.results.into_iter().enumerate() {
        let location = format!("{location}.results[{index}]");
        match decode_value(value, location.as_str())? {
            Node::Result(result) => group.add_result(result),
            node => {
                return Err(Error::UnexpectedShape {
                    location,
                    expected: Shape::Result,
                    found: node.shape(),
                })
            }
        }
    }
    Ok(group)
}

fn decode_run(object: Map<String, Value>) -> Result<Run, Error> {
    let fields: RunFields = serde_json::from_value(Value::Object(object))?;

    let mut run = Run::new(
        fields.swift_ver,
        fields.timestamp,
        fields.binary_size,
        fields.description,
    );
    for (index, value) in fields.groups.into_iter().enumerate() {
        let location = format!("{}[{index}]", Shape::RUN_KEYS[0]);
        match decode_value(value, location.as_str())? {
            Node::Group(group) => run.add_group(group),
            node => {
                return Err(Error::UnexpectedShape {
                    location,
                    expected: Shape::Group,
                    found: node.shape(),
                })
            }
        }
    }
    Ok(run)
}

mod tests;
