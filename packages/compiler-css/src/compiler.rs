use crate::advanced::advanced_declarations;
use crate::modifiers::modifier_declarations;
use crate::rules::{CssRule, Declarations, StyleSheet};
use blockcraft_model::bem::{element_class, modifier_class};
use blockcraft_model::{resolve, Block, BlockKind, Device, PropertyValue, ResponsiveKey};
use tracing::debug;

/// Options for stylesheet compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// `max-width` of the tablet media query, in px
    pub tablet_breakpoint: u32,
    /// `max-width` of the mobile media query, in px
    pub mobile_breakpoint: u32,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            tablet_breakpoint: Device::Tablet.breakpoint(),
            mobile_breakpoint: Device::Mobile.breakpoint(),
        }
    }
}

/// Compile a block forest to stylesheet text
pub fn compile_to_css(blocks: &[Block]) -> String {
    compile_to_css_with_options(blocks, &CompileOptions::default())
}

pub fn compile_to_css_with_options(blocks: &[Block], options: &CompileOptions) -> String {
    let mut sheet = StyleSheet::new();
    for block in blocks {
        compile_block(block, options, &mut sheet);
    }

    debug!(rules = sheet.len(), "compiled stylesheet");
    sheet.to_css()
}

fn compile_block(block: &Block, options: &CompileOptions, sheet: &mut StyleSheet) {
    if let BlockKind::Unknown(kind) = &block.kind {
        debug!(block_id = %block.id, kind = %kind, "skipping unsupported block kind");
        return;
    }

    let base = &block.bem_name;
    sheet.add_rule(CssRule::new(format!(".{}", base), base_declarations(block)));

    if block.kind == BlockKind::Header {
        header_element_rules(block, sheet);
    }

    for modifier in block.active_modifiers() {
        sheet.add_rule(CssRule::new(
            format!(".{}", modifier_class(base, modifier)),
            modifier_declarations(&block.kind, modifier),
        ));
    }

    media_rules(block, options, sheet);

    for child in block.children() {
        compile_block(child, options, sheet);
    }
}

/// Base rules describe the widest viewport; narrower devices are layered on
/// top with media queries.
fn desktop(value: Option<&PropertyValue>) -> Option<&str> {
    let resolved = resolve(value, Device::Desktop);
    (!resolved.is_empty()).then_some(resolved)
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

fn is_border_property(property: &str) -> bool {
    (property == "border" || property.starts_with("border-")) && !property.contains("radius")
}

fn is_radius_property(property: &str) -> bool {
    property.contains("radius")
}

fn base_declarations(block: &Block) -> Declarations {
    let props = &block.properties;
    let advanced = advanced_declarations(props);

    let background = non_empty(props.background_color.as_ref());
    let padding = desktop(props.padding.as_ref());
    let font_size = desktop(props.font_size.as_ref());
    let color = non_empty(props.color.as_ref());
    let margin_bottom = desktop(props.margin_bottom.as_ref());

    let mut decls = Declarations::new();
    decls.push_present("background-color", background);
    decls.push_present("padding", padding);
    decls.push_present("font-size", font_size);
    decls.push_present("color", color);

    match block.kind {
        BlockKind::Container => {
            if padding.is_none() {
                decls.push("padding", "1rem");
            }
            decls.push_present("margin-bottom", margin_bottom);
            decls.push_present("gap", desktop(props.gap.as_ref()));
        }
        BlockKind::Heading => {
            if font_size.is_none() {
                decls.push("font-size", "2rem");
            }
            if color.is_none() {
                decls.push("color", "#333");
            }
            decls.push("font-weight", "600");
            decls.push("margin-bottom", margin_bottom.unwrap_or("0.5rem"));
        }
        BlockKind::Text => {
            if font_size.is_none() {
                decls.push("font-size", "1rem");
            }
            if color.is_none() {
                decls.push("color", "#666");
            }
            decls.push("line-height", "1.5");
            decls.push_present("margin-bottom", margin_bottom);
        }
        BlockKind::Button => {
            if padding.is_none() {
                decls.push("padding", "0.5rem 1rem");
            }
            if background.is_none() {
                decls.push("background-color", "#0066cc");
            }
            if color.is_none() {
                decls.push("color", "white");
            }
            if !advanced.any(is_border_property) {
                decls.push("border", "none");
            }
            if !advanced.any(is_radius_property) {
                decls.push("border-radius", "0.25rem");
            }
            decls.push("cursor", "pointer");
            decls.push("font-weight", "500");
            decls.push_present("margin-bottom", margin_bottom);
        }
        BlockKind::Header => {
            if background.is_none() {
                decls.push("background-color", "#ffffff");
            }
            if padding.is_none() {
                decls.push("padding", "1rem 2rem");
            }
            decls.push("margin-bottom", margin_bottom.unwrap_or("0"));
        }
        BlockKind::Unknown(_) => {}
    }

    decls.extend(advanced);
    decls
}

fn header_element_rules(block: &Block, sheet: &mut StyleSheet) {
    let props = &block.properties;
    let selector = |element: &str| format!(".{}", element_class(&block.bem_name, element));

    let mut container = Declarations::new();
    container.push("display", "flex");
    container.push(
        "justify-content",
        non_empty(props.justify_content.as_ref()).unwrap_or("space-between"),
    );
    container.push("align-items", "center");
    sheet.add_rule(CssRule::new(selector("container"), container));

    let mut logo = Declarations::new();
    logo.push(
        "font-size",
        non_empty(props.logo_font_size.as_ref()).unwrap_or("24px"),
    );
    logo.push("color", non_empty(props.logo_color.as_ref()).unwrap_or("#333"));
    logo.push("font-weight", "bold");
    logo.push(
        "align-self",
        non_empty(props.alignment.as_ref()).unwrap_or("center"),
    );
    sheet.add_rule(CssRule::new(selector("logo"), logo));

    let mut nav = Declarations::new();
    nav.push("display", "flex");
    nav.push(
        "gap",
        desktop(props.gap.as_ref())
            .or_else(|| non_empty(props.menu_item_gap.as_ref()))
            .unwrap_or("1.5rem"),
    );
    nav.push("align-items", "center");
    sheet.add_rule(CssRule::new(selector("nav"), nav));

    let mut item = Declarations::new();
    item.push(
        "color",
        non_empty(props.menu_item_color.as_ref()).unwrap_or("#666"),
    );
    item.push("text-decoration", "none");
    item.push(
        "font-size",
        non_empty(props.menu_item_font_size.as_ref()).unwrap_or("14px"),
    );
    item.push(
        "padding",
        non_empty(props.menu_item_padding.as_ref()).unwrap_or("0.5rem 1rem"),
    );
    item.push("transition", "color 0.3s ease");
    sheet.add_rule(CssRule::new(selector("nav-item"), item));

    let mut hover = Declarations::new();
    hover.push(
        "color",
        non_empty(props.menu_item_hover_color.as_ref()).unwrap_or("#0066cc"),
    );
    sheet.add_rule(CssRule::new(format!("{}:hover", selector("nav-item")), hover));
}

/// Tablet and mobile layers. A declaration is emitted whenever the value
/// resolved for the device differs from what the wider layers already set,
/// so a desktop slot never leaks into narrower devices.
fn media_rules(block: &Block, options: &CompileOptions, sheet: &mut StyleSheet) {
    let is_header = block.kind == BlockKind::Header;
    let mut in_effect = ResponsiveKey::ALL.map(|key| desktop(block.properties.responsive(key)));

    for (device, max_width) in [
        (Device::Tablet, options.tablet_breakpoint),
        (Device::Mobile, options.mobile_breakpoint),
    ] {
        let query = format!("(max-width: {}px)", max_width);
        let mut base = Declarations::new();
        let mut nav = Declarations::new();

        for (slot, key) in ResponsiveKey::ALL.into_iter().enumerate() {
            let Some(responsive) = block
                .properties
                .responsive(key)
                .and_then(PropertyValue::as_responsive)
            else {
                continue;
            };

            let value = responsive.resolve(device);
            if value.is_empty() || in_effect[slot] == Some(value) {
                continue;
            }
            in_effect[slot] = Some(value);

            if is_header && key == ResponsiveKey::Gap {
                nav.push(key.css_name(), value);
            } else {
                base.push(key.css_name(), value);
            }
        }

        sheet.add_rule(
            CssRule::new(format!(".{}", block.bem_name), base).with_media_query(query.clone()),
        );
        if is_header {
            sheet.add_rule(
                CssRule::new(format!(".{}", element_class(&block.bem_name, "nav")), nav)
                    .with_media_query(query),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockcraft_model::{Properties, ResponsiveValue};

    #[test]
    fn test_empty_tree_compiles_to_empty_string() {
        assert_eq!(compile_to_css(&[]), "");
    }

    #[test]
    fn test_explicit_value_replaces_default() {
        let mut text = Block::new("t", BlockKind::Text);
        text.properties.color = Some("red".to_string());

        let css = compile_to_css(&[text]);
        assert!(css.contains("color: red;"));
        assert!(!css.contains("color: #666;"));
        assert!(css.contains("font-size: 1rem;"));
    }

    #[test]
    fn test_button_border_default_yields_to_advanced_border() {
        let mut button = Block::new("b", BlockKind::Button);
        button.properties.border = Some(blockcraft_model::style::Border::Shorthand(
            "1px solid #000".to_string(),
        ));

        let css = compile_to_css(&[button]);
        assert!(css.contains("border: 1px solid #000;"));
        assert!(!css.contains("border: none;"));
        assert!(css.contains("border-radius: 0.25rem;"));
    }

    #[test]
    fn test_media_queries_follow_base_rule() {
        let container = Block::new("c", BlockKind::Container).with_properties(Properties {
            padding: Some(
                ResponsiveValue {
                    default: Some("2rem".to_string()),
                    tablet: Some("1.5rem".to_string()),
                    mobile: Some("1rem".to_string()),
                    desktop: None,
                }
                .into(),
            ),
            ..Default::default()
        });

        let css = compile_to_css(&[container]);
        assert_eq!(
            css,
            ".container {\n  padding: 2rem;\n}\n\n\
             @media (max-width: 768px) {\n  .container {\n    padding: 1.5rem;\n  }\n}\n\n\
             @media (max-width: 375px) {\n  .container {\n    padding: 1rem;\n  }\n}"
        );
    }

    #[test]
    fn test_desktop_slot_does_not_leak_to_narrower_devices() {
        let container = Block::new("c", BlockKind::Container).with_properties(Properties {
            padding: Some(
                ResponsiveValue {
                    default: Some("1rem".to_string()),
                    desktop: Some("3rem".to_string()),
                    ..Default::default()
                }
                .into(),
            ),
            ..Default::default()
        });

        let css = compile_to_css(&[container]);
        assert_eq!(
            css,
            ".container {\n  padding: 3rem;\n}\n\n\
             @media (max-width: 768px) {\n  .container {\n    padding: 1rem;\n  }\n}"
        );
    }

    #[test]
    fn test_mobile_falls_back_past_tablet_override() {
        let mut text = Block::new("t", BlockKind::Text);
        let mut size = ResponsiveValue::promote("1rem");
        size.tablet = Some("1.25rem".to_string());
        text.properties.font_size = Some(size.into());

        let css = compile_to_css(&[text]);
        assert!(css.contains("@media (max-width: 768px) {\n  .text {\n    font-size: 1.25rem;\n  }\n}"));
        assert!(css.contains("@media (max-width: 375px) {\n  .text {\n    font-size: 1rem;\n  }\n}"));
    }

    #[test]
    fn test_custom_breakpoints() {
        let mut text = Block::new("t", BlockKind::Text);
        let mut size = ResponsiveValue::promote("1rem");
        size.mobile = Some("0.8rem".to_string());
        text.properties.font_size = Some(size.into());

        let options = CompileOptions {
            tablet_breakpoint: 900,
            mobile_breakpoint: 480,
        };
        let css = compile_to_css_with_options(&[text], &options);
        assert!(css.contains("@media (max-width: 480px)"));
        assert!(!css.contains("900px"));
    }

    #[test]
    fn test_unknown_kind_emits_nothing() {
        let block = Block::new("x", BlockKind::Unknown("carousel".to_string()));
        assert_eq!(compile_to_css(&[block]), "");
    }
}
