//! Compilation pipeline for settings containers.
//!
//! The [`Pipeline`] runs scan → resolve → reconstruct → emit for every
//! declaration. A failure in any step for one declaration is embedded into
//! that declaration's output and recorded as a [`Diagnostic`]; it never
//! stops the other declarations.
//!
//! # Example
//!
//! ```ignore
//! use setgen_codegen::pipeline::{Pipeline, PipelineOptions};
//!
//! let pipeline = Pipeline::new(PipelineOptions::from_manifest(&manifest), Emitter::new(..));
//! let compilation = pipeline.run(&declarations);
//!
//! for diag in &compilation.diagnostics {
//!     if diag.severity.is_error() {
//!         eprintln!("{diag}");
//!     }
//! }
//! ```

mod compilation;
mod diagnostic;
mod runner;

pub use compilation::{Compilation, GENERATED_SUFFIX, GeneratedFile, WrittenFile};
pub use diagnostic::{Diagnostic, Severity};
pub use runner::{Pipeline, PipelineOptions};
