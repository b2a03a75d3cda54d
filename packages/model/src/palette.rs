//! Default blocks offered by the block palette.

use crate::block::{Block, BlockKind, HeadingTag, MenuItem};
use crate::id_generator::IdGenerator;
use crate::properties::Properties;
use crate::style::{Border, BorderRadius, BoxShadow};

impl Block {
    /// Create a new block of `kind` pre-filled with the palette defaults.
    pub fn from_palette(kind: BlockKind, ids: &mut IdGenerator) -> Block {
        let id = ids.new_id("block");
        let properties = match &kind {
            BlockKind::Container => Properties {
                background_color: Some("#f5f5f5".to_string()),
                padding: Some("2rem".into()),
                children: Some(Vec::new()),
                ..Default::default()
            },
            BlockKind::Heading => Properties {
                text: Some("New Heading".to_string()),
                tag: Some(HeadingTag::H1),
                font_size: Some("2rem".into()),
                color: Some("#333".to_string()),
                ..Default::default()
            },
            BlockKind::Text => Properties {
                text: Some(
                    "Lorem ipsum dolor sit amet, consectetur adipiscing elit.".to_string(),
                ),
                font_size: Some("1rem".into()),
                color: Some("#666".to_string()),
                ..Default::default()
            },
            BlockKind::Button => Properties {
                text: Some("Click Me".to_string()),
                background_color: Some("#0066cc".to_string()),
                color: Some("white".to_string()),
                padding: Some("0.5rem 1rem".into()),
                ..Default::default()
            },
            BlockKind::Header => header_defaults(ids),
            BlockKind::Unknown(_) => Properties::default(),
        };

        Block::new(id, kind).with_properties(properties)
    }
}

fn header_defaults(ids: &mut IdGenerator) -> Properties {
    let menu_items = [("Home", "#home"), ("About", "#about"), ("Contact", "#contact")]
        .into_iter()
        .map(|(label, href)| MenuItem::new(ids.new_id("menu"), label).with_href(href))
        .collect();

    Properties {
        logo_text: Some("Your Logo".to_string()),
        logo_color: Some("#333333".to_string()),
        logo_font_size: Some("24px".to_string()),
        background_color: Some("#ffffff".to_string()),
        padding: Some("1rem 2rem".into()),
        border_radius: Some(BorderRadius::Shorthand("0px".to_string())),
        box_shadow: Some(BoxShadow::Shorthand(
            "0 2px 8px rgba(0, 0, 0, 0.1)".to_string(),
        )),
        border: Some(Border::Shorthand("none".to_string())),
        margin_bottom: Some("1rem".into()),
        menu_items: Some(menu_items),
        menu_item_color: Some("#666666".to_string()),
        menu_item_hover_color: Some("#0066cc".to_string()),
        menu_item_font_size: Some("14px".to_string()),
        menu_item_padding: Some("0.5rem 1rem".to_string()),
        menu_item_gap: Some("1.5rem".to_string()),
        justify_content: Some("space-between".to_string()),
        alignment: Some("center".to_string()),
        ..Default::default()
    }
}
