//! # Blockcraft HTML compiler
//!
//! Emits markup for a block forest, two spaces of indentation per nesting
//! level, BEM classes on every element.

mod compiler;

pub use compiler::{compile_to_html, compile_to_html_with_options, CompileOptions};
