//! BEM-style class naming: `block`, `block__element`, `block--modifier`.

use crate::block::Block;

/// `base__element`
pub fn element_class(base: &str, element: &str) -> String {
    format!("{}__{}", base, element)
}

/// `class--modifier`
pub fn modifier_class(class: &str, modifier: &str) -> String {
    format!("{}--{}", class, modifier)
}

/// Full class attribute for a block's root element: the base class followed
/// by one `base--modifier` token per active modifier, in declaration order.
pub fn class_list(block: &Block) -> String {
    let mut classes = vec![block.bem_name.clone()];
    classes.extend(
        block
            .active_modifiers()
            .map(|modifier| modifier_class(&block.bem_name, modifier)),
    );
    classes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;
    use indexmap::IndexMap;

    #[test]
    fn test_element_class() {
        assert_eq!(element_class("header", "nav-item"), "header__nav-item");
    }

    #[test]
    fn test_class_list_without_modifiers() {
        let block = Block::new("b", BlockKind::Button);
        assert_eq!(class_list(&block), "button");
    }

    #[test]
    fn test_class_list_skips_disabled_modifiers() {
        let mut block = Block::new("b", BlockKind::Button);
        let mut modifiers = IndexMap::new();
        modifiers.insert("primary".to_string(), true);
        modifiers.insert("disabled".to_string(), false);
        modifiers.insert("large".to_string(), true);
        block.properties.modifiers = Some(modifiers);

        assert_eq!(class_list(&block), "button button--primary button--large");
    }
}
