//!
//! The benchmark data model.
//!

pub mod error;
pub mod run;
