//!
//! The benchmark comparator library.
//!

pub mod codec;
pub mod comparison;
pub mod input;
pub mod model;
pub mod significance;
pub mod util;

pub use crate::codec::decode;
pub use crate::codec::encode;
pub use crate::codec::error::Error as CodecError;
pub use crate::comparison::line::ClassifiedLine;
pub use crate::comparison::report::Entry as ReportEntry;
pub use crate::comparison::report::Report;
pub use crate::comparison::stats::StatAccumulator;
pub use crate::comparison::verdict::Verdict;
pub use crate::comparison::Comparator;
pub use crate::input::error::Error as InputError;
pub use crate::input::listing::Listing;
pub use crate::input::platform::Platform;
pub use crate::input::requested::RequestedTest;
pub use crate::input::Parser as HarnessParser;
pub use crate::model::error::Error as ModelError;
pub use crate::model::run::group::result::BenchmarkResult;
pub use crate::model::run::group::Group as BenchmarkGroup;
pub use crate::model::run::Run as BenchmarkRun;
pub use crate::significance::classification::Classification;
pub use crate::significance::error::Error as SignificanceError;
pub use crate::significance::SignificanceTest;

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
