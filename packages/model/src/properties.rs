//! Block properties.
//!
//! Every field is optional; absence means "use the kind's default" at code
//! generation time. Keys this build does not model are kept in `extra` so
//! imported documents round-trip untouched. Decoding is lenient: a known key
//! whose value has an unexpected shape is kept in `extra` as well, so a
//! structurally valid block is never rejected over one property.

use crate::block::{Block, HeadingTag, MenuItem};
use crate::responsive::{PropertyValue, ResponsiveKey};
use crate::style::{
    Border, BorderRadius, BoxShadow, Filters, Gradient, TextShadow, Transform, Transition,
};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<PropertyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<PropertyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Block>>,
    /// Modifier flags, kept in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<IndexMap<String, bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<HeadingTag>,

    // Advanced styling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<BoxShadow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_shadow: Option<TextShadow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Filters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,

    // Header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<PropertyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_items: Option<Vec<MenuItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item_hover_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item_font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item_padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item_gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<PropertyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,

    /// Unmodelled keys, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

macro_rules! known_fields {
    ($($field:ident => $key:literal),* $(,)?) => {
        impl Properties {
            /// Shallow merge: every field set in `patch` replaces the current
            /// value, everything else is left alone.
            pub fn merge(&mut self, patch: Properties) {
                $(
                    if patch.$field.is_some() {
                        self.extra.remove($key);
                        self.$field = patch.$field;
                    }
                )*
                if patch.opacity.is_some() {
                    self.extra.remove("opacity");
                    self.opacity = patch.opacity;
                }
                self.extra.extend(patch.extra);
            }

            /// Decode a raw properties object, keeping key order for `extra`.
            pub fn from_map(map: Map<String, Value>) -> Self {
                let mut props = Properties::default();
                for (key, raw) in map {
                    let decoded = match key.as_str() {
                        $(
                            $key => match serde_json::from_value(raw.clone()) {
                                Ok(value) => {
                                    props.$field = value;
                                    true
                                }
                                Err(_) => false,
                            },
                        )*
                        "opacity" => match lenient_number(&raw) {
                            Some(value) => {
                                props.opacity = Some(value);
                                true
                            }
                            None => raw.is_null(),
                        },
                        _ => false,
                    };
                    if !decoded {
                        props.extra.insert(key, raw);
                    }
                }
                props
            }
        }
    };
}

known_fields! {
    name => "name",
    text => "text",
    background_color => "backgroundColor",
    padding => "padding",
    font_size => "fontSize",
    color => "color",
    children => "children",
    modifiers => "modifiers",
    tag => "tag",
    border => "border",
    border_radius => "borderRadius",
    box_shadow => "boxShadow",
    gradient => "gradient",
    text_shadow => "textShadow",
    filters => "filters",
    transform => "transform",
    transition => "transition",
    logo_text => "logoText",
    logo_color => "logoColor",
    logo_font_size => "logoFontSize",
    margin_bottom => "marginBottom",
    menu_items => "menuItems",
    menu_item_color => "menuItemColor",
    menu_item_hover_color => "menuItemHoverColor",
    menu_item_font_size => "menuItemFontSize",
    menu_item_padding => "menuItemPadding",
    menu_item_gap => "menuItemGap",
    gap => "gap",
    alignment => "alignment",
    justify_content => "justifyContent",
}

/// A JSON number, or a string holding one
fn lenient_number(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(Properties::from_map)
    }
}

impl Properties {
    pub fn responsive(&self, key: ResponsiveKey) -> Option<&PropertyValue> {
        match key {
            ResponsiveKey::Padding => self.padding.as_ref(),
            ResponsiveKey::FontSize => self.font_size.as_ref(),
            ResponsiveKey::MarginBottom => self.margin_bottom.as_ref(),
            ResponsiveKey::Gap => self.gap.as_ref(),
        }
    }

    pub fn set_responsive(&mut self, key: ResponsiveKey, value: PropertyValue) {
        let slot = match key {
            ResponsiveKey::Padding => &mut self.padding,
            ResponsiveKey::FontSize => &mut self.font_size,
            ResponsiveKey::MarginBottom => &mut self.margin_bottom,
            ResponsiveKey::Gap => &mut self.gap,
        };
        *slot = Some(value);
    }
}
