//! # Blockcraft CSS compiler
//!
//! Turns a block forest into stylesheet text. One rule per block keyed by its
//! base class, kind defaults for unset properties, the shared advanced style
//! facets, header sub-element rules, modifier rules and media queries for
//! per-device overrides. Output is deterministic.

mod advanced;
mod compiler;
mod modifiers;
mod rules;

pub use advanced::{advanced_declarations, format_number};
pub use compiler::{compile_to_css, compile_to_css_with_options, CompileOptions};
pub use modifiers::modifier_declarations;
pub use rules::{CssRule, Declaration, Declarations, StyleSheet};
