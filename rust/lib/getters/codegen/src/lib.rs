//! Component Getters code generator.
//!
//! Scans a declaration forest for getter markers and emits lazily-resolving,
//! cached accessors for each container's required sub-objects.
//!
//! Pipeline (one pass, no state kept between passes):
//! 1. Scan      — find markers, group them by fully-qualified container name
//! 2. Aggregate — merge group markers, overrides and requirement declarations
//! 3. Validate  — suppress containers with blocking diagnostics
//! 4. Emit      — render imports, synthesized requirements and accessors

pub mod annotation;
pub mod codes;
pub mod config;
pub mod container;
pub mod emit;
pub mod error;
pub mod host;
pub mod naming;
pub mod pipeline;
pub mod scan;
pub mod validate;

pub use config::GeneratorConfig;
pub use error::{GeneratorError, Result};
pub use host::{DiagnosticSink, DirectorySink, SourceRegistry, SourceSink};
pub use pipeline::{generate, run, GenerationOutput, RunSummary};
