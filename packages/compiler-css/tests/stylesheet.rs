use blockcraft_compiler_css::{compile_to_css, compile_to_css_with_options, CompileOptions};
use blockcraft_model::{Block, BlockKind, IdGenerator, Properties, ResponsiveValue};

fn rule_count(css: &str) -> usize {
    if css.is_empty() {
        0
    } else {
        css.split("\n\n").count()
    }
}

#[test]
fn test_container_with_heading() {
    let page = vec![Block::new("c", BlockKind::Container)
        .with_properties(Properties {
            padding: Some("2rem".into()),
            ..Default::default()
        })
        .with_child(Block::new("h", BlockKind::Heading))];

    let css = compile_to_css(&page);

    println!("Generated CSS:\n{}", css);

    assert_eq!(rule_count(&css), 2);
    assert_eq!(
        css,
        ".container {\n  padding: 2rem;\n}\n\n\
         .heading {\n  font-size: 2rem;\n  color: #333;\n  font-weight: 600;\n  margin-bottom: 0.5rem;\n}"
    );
}

#[test]
fn test_header_always_gets_element_rules() {
    let css = compile_to_css(&[Block::new("h", BlockKind::Header)]);

    for selector in [
        ".header {",
        ".header__container {",
        ".header__logo {",
        ".header__nav {",
        ".header__nav-item {",
        ".header__nav-item:hover {",
    ] {
        assert!(css.contains(selector), "missing {}", selector);
    }
    assert_eq!(rule_count(&css), 6);
    assert!(css.contains("justify-content: space-between;"));
    assert!(css.contains("gap: 1.5rem;"));
}

#[test]
fn test_identical_siblings_share_one_rule() {
    let page = vec![
        Block::new("a", BlockKind::Text),
        Block::new("b", BlockKind::Text),
        Block::new("c", BlockKind::Text),
    ];

    let css = compile_to_css(&page);
    assert_eq!(rule_count(&css), 1);
    assert_eq!(css.matches(".text {").count(), 1);
}

#[test]
fn test_modifier_rules() {
    let mut button = Block::new("b", BlockKind::Button);
    button.properties.modifiers = Some(
        [("secondary".to_string(), true), ("large".to_string(), true)]
            .into_iter()
            .collect(),
    );

    let css = compile_to_css(&[button]);
    assert!(css.contains(".button--secondary {\n  background-color: #6c757d;\n}"));
    assert!(css.contains(".button--large {\n  font-size: 1.25rem;\n  padding: 0.75rem 1.5rem;\n}"));
}

#[test]
fn test_header_gap_override_targets_nav() {
    let mut gap = ResponsiveValue::promote("2rem");
    gap.mobile = Some("0.5rem".to_string());
    let header = Block::new("h", BlockKind::Header).with_properties(Properties {
        gap: Some(gap.into()),
        ..Default::default()
    });

    let css = compile_to_css(&[header]);
    assert!(css.contains(".header__nav {\n  display: flex;\n  gap: 2rem;"));
    assert!(css.contains("@media (max-width: 375px) {\n  .header__nav {\n    gap: 0.5rem;\n  }\n}"));
}

#[test]
fn test_output_is_deterministic() {
    let mut ids = IdGenerator::from_seed("det");
    let page = vec![
        Block::from_palette(BlockKind::Header, &mut ids),
        Block::from_palette(BlockKind::Container, &mut ids)
            .with_child(Block::from_palette(BlockKind::Heading, &mut ids))
            .with_child(Block::from_palette(BlockKind::Button, &mut ids)),
    ];

    let options = CompileOptions::default();
    let first = compile_to_css_with_options(&page, &options);
    let second = compile_to_css_with_options(&page.clone(), &options);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_compiles_exported_blocks() {
    let blocks: Vec<Block> = serde_json::from_str(
        r##"[{
            "id": "hero", "type": "container", "bemName": "hero",
            "properties": {
                "padding": { "default": "2rem", "mobile": "1rem" },
                "children": [{
                    "id": "cta", "type": "button", "bemName": "cta",
                    "properties": {
                        "text": "Go",
                        "fontSize": 18,
                        "modifiers": { "small": true, "primary": true }
                    }
                }]
            }
        }]"##,
    )
    .unwrap();

    let css = compile_to_css(&blocks);
    assert!(css.starts_with(".hero {\n  padding: 2rem;\n}"));
    assert!(css.contains("@media (max-width: 375px) {\n  .hero {\n    padding: 1rem;\n  }\n}"));
    assert!(css.contains("font-size: 18;"));

    let small = css.find(".cta--small {").unwrap();
    let primary = css.find(".cta--primary {").unwrap();
    assert!(small < primary);
}
