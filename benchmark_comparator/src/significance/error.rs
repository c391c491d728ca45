//!
//! The significance test error.
//!

///
/// The significance test error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There are not enough samples to estimate the pooled variance.
    #[error("Test `{group_name}/{test_name}`: {degrees_of_freedom} degrees of freedom, at least 1 is required")]
    DegreesOfFreedom {
        /// The group name.
        group_name: String,
        /// The test name.
        test_name: String,
        /// The computed degrees of freedom.
        degrees_of_freedom: i64,
    },
}
