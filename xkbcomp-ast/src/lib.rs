//! Syntax tree for XKB keymap sources.
//!
//! The grammar actions of a keymap parser call the constructors in [`ast`] to
//! build statement chains, and the compiler stages walk and finally release
//! them with the routines in [`ast::free`].

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod options;

pub use ast::*;
pub use diagnostics::{Diagnostic, Diagnostics, Location, Severity};
pub use options::ParseOptions;

pub use xkbcomp_core::*;
