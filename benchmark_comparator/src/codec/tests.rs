//!
//! The persisted run format unit tests.
//!

#![cfg(test)]

use crate::model::run::group::result::BenchmarkResult;
use crate::model::run::Run;

use super::error::Error;
use super::shape::Shape;

fn run(description: Option<&str>) -> Run {
    let mut run = Run::new(
        "Apple Swift version 5.9.2\nTarget: arm64-apple-macosx14.0\n".to_owned(),
        "2024-01-01 12:00 UTC".to_owned(),
        "482112".to_owned(),
        description.map(str::to_owned),
    );
    for (group_name, test_name, avg, rel_std_dev, iter_count) in [
        ("MsbBitWriterBenchmarks", "testWriteBit", "0.412", "1.203", 10),
        ("MsbBitWriterBenchmarks", "testAppend", "0.187", "0.950", 10),
        ("ByteReaderBenchmarks", "testByte", "1.005", "12.500", 7),
    ] {
        run.new_result(
            BenchmarkResult::new(
                group_name.to_owned(),
                test_name.to_owned(),
                avg.to_owned(),
                rel_std_dev.to_owned(),
                iter_count,
            )
            .expect("Valid result"),
        );
    }
    run
}

#[test]
fn round_trip() {
    let original = run(Some("after inlining the reader"));

    let document = super::encode(&original).expect("Always encodable");
    let decoded = super::decode(document.as_str()).expect("Valid document");

    assert_eq!(decoded, original);
}

#[test]
fn round_trip_without_description() {
    let original = run(None);

    let document = super::encode(&original).expect("Always encodable");
    assert!(!document.contains("description"));

    let decoded = super::decode(document.as_str()).expect("Valid document");
    assert_eq!(decoded.description, None);
    assert_eq!(decoded, original);
}

#[test]
fn round_trip_preserves_order() {
    let document = super::encode(&run(None)).expect("Always encodable");
    let decoded = super::decode(document.as_str()).expect("Valid document");

    assert_eq!(
        decoded
            .groups()
            .map(|group| group.name.as_str())
            .collect::<Vec<_>>(),
        vec!["MsbBitWriterBenchmarks", "ByteReaderBenchmarks"]
    );
    assert_eq!(
        decoded
            .group("MsbBitWriterBenchmarks")
            .expect("Always exists")
            .results()
            .map(|result| result.test_name())
            .collect::<Vec<_>>(),
        vec!["testWriteBit", "testAppend"]
    );
}

#[test]
fn encode_layout() {
    let document = super::encode(&run(Some("baseline"))).expect("Always encodable");

    let swift_ver = document.find("\"swift_ver\"").expect("Always present");
    let timestamp = document.find("\"timestamp\"").expect("Always present");
    let binary_size = document.find("\"binary_size\"").expect("Always present");
    let description = document.find("\"description\"").expect("Always present");
    let groups = document
        .find("\"BitByteDataBenchmarks\"")
        .expect("Always present");
    assert!(swift_ver < timestamp);
    assert!(timestamp < binary_size);
    assert!(binary_size < description);
    assert!(description < groups);

    assert!(document.contains("\n  \"timestamp\": \"2024-01-01 12:00 UTC\""));
    assert!(document.contains("\"iter_count\": 7"));
}

#[test]
fn decode_stamps_group_names() {
    let document = r#"{
        "swift_ver": "Swift version 5.9\n",
        "timestamp": "2024-01-01 12:00 UTC",
        "binary_size": "1024",
        "BitByteDataBenchmarks": [
            { "group_name": "LsbBitReaderBenchmarks", "results": [
                { "name": "testReadBit", "avg": "0.250", "rel_std_dev": "3.1", "iter_count": 10 }
            ] }
        ]
    }"#;

    let run = super::decode(document).expect("Valid document");
    let result = run
        .group("LsbBitReaderBenchmarks")
        .and_then(|group| group.get("testReadBit"))
        .expect("Always exists");
    assert_eq!(result.group_name(), "LsbBitReaderBenchmarks");
    assert_eq!(result.iter_count(), 10);
}

#[test]
fn decode_allows_extra_run_keys() {
    let document = r#"{
        "swift_ver": "Swift version 5.9\n",
        "timestamp": "2024-01-01 12:00 UTC",
        "binary_size": "1024",
        "machine": "ci-runner-3",
        "BitByteDataBenchmarks": []
    }"#;

    let run = super::decode(document).expect("Valid document");
    assert_eq!(run.groups().count(), 0);
}

#[test]
fn decode_rejects_result_without_iter_count() {
    let document = r#"{
        "swift_ver": "Swift version 5.9\n",
        "timestamp": "2024-01-01 12:00 UTC",
        "binary_size": "1024",
        "BitByteDataBenchmarks": [
            { "group_name": "LsbBitReaderBenchmarks", "results": [
                { "name": "testReadBit", "avg": "0.250", "rel_std_dev": "3.1" }
            ] }
        ]
    }"#;

    match super::decode(document) {
        Err(Error::UnrecognizedShape { location, .. }) => {
            assert_eq!(location, "BitByteDataBenchmarks[0].results[0]")
        }
        other => panic!("Unexpected outcome: {other:?}"),
    }
}

#[test]
fn decode_rejects_misplaced_group() {
    let document = r#"{
        "swift_ver": "Swift version 5.9\n",
        "timestamp": "2024-01-01 12:00 UTC",
        "binary_size": "1024",
        "BitByteDataBenchmarks": [
            { "name": "testReadBit", "avg": "0.250", "rel_std_dev": "3.1", "iter_count": 10 }
        ]
    }"#;

    match super::decode(document) {
        Err(Error::UnexpectedShape {
            expected, found, ..
        }) => {
            assert_eq!(expected, Shape::Group);
            assert_eq!(found, Shape::Result);
        }
        other => panic!("Unexpected outcome: {other:?}"),
    }
}

#[test]
fn decode_rejects_top_level_group() {
    let document = r#"{ "group_name": "LsbBitReaderBenchmarks", "results": [] }"#;

    assert!(matches!(
        super::decode(document),
        Err(Error::UnexpectedShape {
            expected: Shape::Run,
            found: Shape::Group,
            ..
        })
    ));
}

#[test]
fn decode_rejects_invalid_number() {
    let document = r#"{
        "swift_ver": "Swift version 5.9\n",
        "timestamp": "2024-01-01 12:00 UTC",
        "binary_size": "1024",
        "BitByteDataBenchmarks": [
            { "group_name": "LsbBitReaderBenchmarks", "results": [
                { "name": "testReadBit", "avg": "fast", "rel_std_dev": "3.1", "iter_count": 10 }
            ] }
        ]
    }"#;

    assert!(matches!(super::decode(document), Err(Error::Model(_))));
}

#[test]
fn decode_rejects_malformed_json() {
    assert!(matches!(
        super::decode("{ \"swift_ver\": "),
        Err(Error::Json(_))
    ));
    assert!(matches!(
        super::decode("[]"),
        Err(Error::NotAnObject { .. })
    ));
}
