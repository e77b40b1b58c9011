//! # Block Compiler
//!
//! Transforms a [`ProgramStructure`] into Apps Script source text.
//!
//! ## Pipeline
//!
//! 1. **Scope tracking**: each function gets a fresh scope seeded with its
//!    parameters; nested bodies render against forked copies ([`scope`]).
//! 2. **Dispatch**: the block walker resolves each tag against the catalog
//!    and matches its closed operation variant, emitting structured
//!    statements ([`dispatch`], [`emit`]).
//! 3. **Assembly**: functions are wrapped and ordered, the entry point is
//!    emitted last under its fixed name, and the optional UI preamble and
//!    bootstrap are attached ([`assembler`]).
//!
//! Generation is total and best-effort. Missing parameters take documented
//! defaults and unknown tags degrade to annotation comments; the same input
//! always yields the same text. The only reported failures are an ambiguous
//! entry point and pathological block nesting.

use std::fmt;

use crate::program::ProgramStructure;

pub mod assembler;
pub mod dispatch;
pub mod emit;
pub mod scope;

#[cfg(test)]
mod tests;

/// Display name that marks a function as the program's entry point, and the
/// host-recognized name its wrapper is emitted under.
pub const ENTRY_POINT_NAME: &str = "main";

/// Container nesting beyond this depth is reported instead of recursed into.
pub const MAX_RENDER_DEPTH: usize = 64;

/// Reported generation failures. Everything else degrades to deterministic
/// fallback output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// More than one function carries the entry-point display name; picking
    /// one silently would be a guess.
    AmbiguousEntryPoint { count: usize },

    /// Block containers nest deeper than [`MAX_RENDER_DEPTH`].
    NestingTooDeep { limit: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::AmbiguousEntryPoint { count } => write!(
                f,
                "program defines {count} functions named '{ENTRY_POINT_NAME}'; expected at most one entry point"
            ),
            GenerateError::NestingTooDeep { limit } => {
                write!(f, "block nesting exceeds the supported depth of {limit} levels")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Generate Apps Script source for a complete visual program.
///
/// The input tree is never mutated; two calls with the same structure return
/// identical text.
pub fn generate(program: &ProgramStructure) -> Result<String, GenerateError> {
    tracing::info!(
        "CODEGEN: generating script for {} functions, {} ui components",
        program.functions.len(),
        program.html_components.len()
    );
    assembler::assemble(program)
}
