//!
//! The persisted run format error.
//!

use super::shape::Shape;

///
/// The persisted run format error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document is not valid JSON, or a field has an unexpected type.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A value where an object is expected.
    #[error("{location}: expected a JSON object")]
    NotAnObject {
        /// The position in the document.
        location: String,
    },
    /// An object whose keys match no persisted shape.
    #[error("{location}: an object with keys [{keys}] matches no benchmark schema")]
    UnrecognizedShape {
        /// The position in the document.
        location: String,
        /// The object keys.
        keys: String,
    },
    /// A recognized object at the wrong nesting level.
    #[error("{location}: expected a benchmark {expected}, found a benchmark {found}")]
    UnexpectedShape {
        /// The position in the document.
        location: String,
        /// The shape required at the position.
        expected: Shape,
        /// The shape found at the position.
        found: Shape,
    },
    /// A decoded result violates the data model.
    #[error(transparent)]
    Model(#[from] crate::model::error::Error),
}
