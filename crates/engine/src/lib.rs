//! # SheetScript Engine
//!
//! Compiles visual block programs into Google Apps Script source text.
//!
//! The external drag-and-drop editor authors a tree of typed, connected
//! blocks and submits it as a [`program::ProgramStructure`]. This crate turns
//! that tree into runnable script text:
//!
//! 1. **Catalog**: static registry of every operation the editor can place,
//!    with parameter defaults and connector metadata ([`catalog`]).
//! 2. **Compilation**: recursive block-sequence rendering with scope
//!    tracking, assembled into whole-program text ([`compiler`]).
//! 3. **Export**: wraps finished script text into a downloadable artifact
//!    ([`export`]).
//!
//! The editor UI itself, and the host hooks that open it, live outside this
//! crate; the compiler only promises to be total over any well-formed tree
//! it is handed.

pub mod catalog;
pub mod compiler;
pub mod export;
pub mod program;

pub use catalog::{catalog, component_templates};
pub use compiler::{generate, GenerateError};
pub use export::package;
pub use program::ProgramStructure;
