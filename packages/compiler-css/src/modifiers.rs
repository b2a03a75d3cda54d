//! Known modifier → CSS table.
//!
//! Modifiers missing from the table still show up as classes in the markup
//! but get no generated rule.

use crate::rules::Declarations;
use blockcraft_model::BlockKind;

pub fn modifier_declarations(kind: &BlockKind, modifier: &str) -> Declarations {
    let mut decls = Declarations::new();

    match (kind, modifier) {
        (BlockKind::Button, "primary") => {
            decls.push("background-color", "#0066cc");
        }
        (BlockKind::Button, "secondary") => {
            decls.push("background-color", "#6c757d");
        }
        (_, "large") => {
            decls.push("font-size", "1.25rem");
            decls.push("padding", "0.75rem 1.5rem");
        }
        (_, "small") => {
            decls.push("font-size", "0.875rem");
            decls.push("padding", "0.25rem 0.75rem");
        }
        _ => {}
    }

    decls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_only_styles_buttons() {
        assert!(!modifier_declarations(&BlockKind::Button, "primary").is_empty());
        assert!(modifier_declarations(&BlockKind::Heading, "primary").is_empty());
    }

    #[test]
    fn test_size_modifiers_apply_to_any_kind() {
        assert!(modifier_declarations(&BlockKind::Text, "large").contains("font-size"));
        assert!(modifier_declarations(&BlockKind::Container, "small").contains("padding"));
    }

    #[test]
    fn test_unknown_modifier_has_no_styles() {
        assert!(modifier_declarations(&BlockKind::Button, "sparkly").is_empty());
    }
}
