//! Language-agnostic code generation traits.

use std::path::Path;

use setgen_core::SettingsBatch;
use setgen_scan::DeclarationTarget;

use crate::pipeline::Diagnostic;

/// Trait for target-language settings emitters.
///
/// Implement this trait to generate accessors in a new language. The
/// pipeline calls exactly one of [`emit`](SettingsCodegen::emit) or
/// [`emit_failure`](SettingsCodegen::emit_failure) per declaration.
pub trait SettingsCodegen {
    /// Language identifier (e.g., "csharp")
    fn language(&self) -> &'static str;

    /// Output file name for a declaration, unique per declaration identity.
    fn file_name(&self, target: &DeclarationTarget) -> String;

    /// Generate the accessors for a reconstructed batch.
    ///
    /// `origin` is the settings-definition file the batch came from.
    /// Settings that cannot be emitted are reported in
    /// [`Emitted::diagnostics`] and replaced by an inline error comment.
    fn emit(&self, target: &DeclarationTarget, batch: &SettingsBatch, origin: &Path) -> Emitted;

    /// Generate a file that carries a declaration-level error instead of
    /// accessors.
    fn emit_failure(
        &self,
        target: &DeclarationTarget,
        origin: Option<&Path>,
        message: &str,
    ) -> String;
}

/// Output of [`SettingsCodegen::emit`].
#[derive(Debug, Clone, Default)]
pub struct Emitted {
    pub content: String,
    /// Number of accessors actually generated.
    pub accessors: usize,
    /// Per-setting problems, located by raw setting name.
    pub diagnostics: Vec<Diagnostic>,
}
