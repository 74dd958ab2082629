//! C# code generation for setgen.
//!
//! [`Emitter`] implements [`SettingsCodegen`] and turns reconstructed
//! settings into partial C# types with one accessor per setting.

mod accessor;
mod emitter;
mod naming;

pub use emitter::{DEFAULT_LOOKUP, Emitter};
pub use naming::{file_name, type_header};
pub use setgen_codegen::language::{Emitted, SettingsCodegen};
