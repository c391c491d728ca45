//!
//! The harness output error.
//!

///
/// The harness output error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The harness has run a different test than requested.
    #[error("The harness has run `{found_group}/{found_test}` instead of `{requested_group}/{requested_test}`")]
    WrongTest {
        /// The requested group.
        requested_group: String,
        /// The requested test.
        requested_test: String,
        /// The group found in the output.
        found_group: String,
        /// The test found in the output.
        found_test: String,
    },
    /// A matched line holds invalid statistics.
    #[error(transparent)]
    Model(#[from] crate::model::error::Error),
}
