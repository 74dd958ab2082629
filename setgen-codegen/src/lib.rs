//! Shared code generation for the setgen settings compiler.
//!
//! This crate is independent of the target language:
//!
//! - [`builder`] - Indented text building ([`CodeBuilder`], [`Indent`])
//! - [`language`] - The [`SettingsCodegen`] trait implemented per target
//! - [`pipeline`] - The per-declaration compilation [`Pipeline`]
//!
//! [`CodeBuilder`]: builder::CodeBuilder
//! [`Indent`]: builder::Indent
//! [`SettingsCodegen`]: language::SettingsCodegen
//! [`Pipeline`]: pipeline::Pipeline

pub mod builder;
pub mod language;
pub mod pipeline;
