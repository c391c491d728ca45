//!
//! The benchmark data model error.
//!

///
/// The benchmark data model error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A statistic is not a finite non-negative decimal number.
    #[error("Test `{group_name}/{test_name}`: {field} `{value}` is not a non-negative decimal number")]
    InvalidNumber {
        /// The group name.
        group_name: String,
        /// The test name.
        test_name: String,
        /// The offending field.
        field: &'static str,
        /// The offending value.
        value: String,
    },
    /// A result without iterations.
    #[error("Test `{group_name}/{test_name}`: the iteration count must be at least 1")]
    NoIterations {
        /// The group name.
        group_name: String,
        /// The test name.
        test_name: String,
    },
}
