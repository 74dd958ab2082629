//! Core utilities and types for the setgen settings compiler.
//!
//! This crate provides the setting data model and the pure helpers
//! (name normalization, literal formatting, file writing) shared by the
//! rest of the setgen workspace.

mod file;
mod ident;
mod literal;
mod naming;
mod setting;

// File operations
pub use file::{File, GENERATED_HEADER, WriteResult};
// Identifier rules
pub use ident::{CSHARP_KEYWORDS, is_csharp_keyword, validate_identifier};
// Value formatting
pub use literal::{default_literal, format_literal};
// Name normalization
pub use naming::{normalize, split_words};
// Data model
pub use setting::{Setting, SettingKind, SettingsBatch};
