//! Advanced styling facets.
//!
//! Each facet is independent; the stylesheet compiler resolves them into
//! declarations one by one. Several facets accept either a raw CSS string or a
//! structured record.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Border {
    Shorthand(String),
    Sides(BorderSides),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderSides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BorderStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
    Double,
    None,
}

impl BorderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Double => "double",
            BorderStyle::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BorderRadius {
    Shorthand(String),
    Corners(BorderRadiusCorners),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderRadiusCorners {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_right: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_right: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_left: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoxShadow {
    Shorthand(String),
    Spec(BoxShadowSpec),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxShadowSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<ShadowPreset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowPreset {
    None,
    Subtle,
    Medium,
    Strong,
}

impl ShadowPreset {
    /// CSS for the preset, `None` for the `none` preset
    pub fn css(&self) -> Option<&'static str> {
        match self {
            ShadowPreset::None => None,
            ShadowPreset::Subtle => Some("0 1px 3px rgba(0, 0, 0, 0.1)"),
            ShadowPreset::Medium => Some("0 4px 6px rgba(0, 0, 0, 0.15)"),
            ShadowPreset::Strong => Some("0 10px 25px rgba(0, 0, 0, 0.2)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: String,
    pub position: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    #[serde(default)]
    pub enabled: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<GradientKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<GradientStop>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextShadow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// CSS filter functions. `blur` is in px, `hue_rotate` in degrees, the rest
/// in percent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue_rotate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invert: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sepia: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grayscale: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skew_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skew_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    Linear,
}

impl Easing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Easing::Ease => "ease",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Linear => "linear",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_accepts_string_or_record() {
        let shorthand: Border = serde_json::from_str("\"1px solid red\"").unwrap();
        assert_eq!(shorthand, Border::Shorthand("1px solid red".to_string()));

        let sides: Border =
            serde_json::from_str(r##"{"width":"2px","style":"dashed","color":"#666"}"##).unwrap();
        match sides {
            Border::Sides(sides) => {
                assert_eq!(sides.width.as_deref(), Some("2px"));
                assert_eq!(sides.style, Some(BorderStyle::Dashed));
            }
            other => panic!("expected sides, got {:?}", other),
        }
    }

    #[test]
    fn test_easing_uses_css_names() {
        let easing: Easing = serde_json::from_str("\"ease-in-out\"").unwrap();
        assert_eq!(easing, Easing::EaseInOut);
        assert_eq!(easing.as_str(), "ease-in-out");
    }

    #[test]
    fn test_shadow_presets() {
        assert_eq!(ShadowPreset::None.css(), None);
        assert_eq!(
            ShadowPreset::Subtle.css(),
            Some("0 1px 3px rgba(0, 0, 0, 0.1)")
        );
    }
}
