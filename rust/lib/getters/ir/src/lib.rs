//! Component Getters Intermediate Representation (IR)
//!
//! Data structures shared between:
//! - the host that hands over a parsed declaration forest (as JSON or literals)
//! - the codegen library (scan, aggregate, validate, emit)
//! - the `getters-gen` binary
//!
//! Two layers:
//! 1. Forest     — source files, namespaces, class declarations, attributes
//! 2. Output     — diagnostics and generated sources reported back to the host

pub mod forest;
pub mod diagnostic;
pub mod output;

pub use forest::*;
pub use diagnostic::*;
pub use output::*;
