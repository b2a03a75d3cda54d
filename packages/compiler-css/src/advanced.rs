//! Advanced style resolution shared by every block kind.
//!
//! Facets resolve independently and in a fixed order: border, border radius,
//! box shadow, gradient, opacity, text shadow, filter, transform, transition.
//! A missing facet contributes nothing.

use crate::rules::Declarations;
use blockcraft_model::style::{
    Border, BorderRadius, BoxShadow, Filters, Gradient, GradientKind, TextShadow, Transform,
    Transition,
};
use blockcraft_model::Properties;

pub fn advanced_declarations(props: &Properties) -> Declarations {
    let mut decls = Declarations::new();

    if let Some(border) = &props.border {
        border_declarations(border, &mut decls);
    }
    if let Some(radius) = &props.border_radius {
        border_radius_declarations(radius, &mut decls);
    }
    if let Some(shadow) = props.box_shadow.as_ref().and_then(box_shadow_value) {
        decls.push("box-shadow", shadow);
    }
    if let Some(gradient) = props.gradient.as_ref().and_then(gradient_value) {
        decls.push("background", gradient);
    }
    if let Some(opacity) = props.opacity {
        decls.push("opacity", format_number(opacity));
    }
    if let Some(shadow) = &props.text_shadow {
        decls.push("text-shadow", text_shadow_value(shadow));
    }
    if let Some(filter) = props.filters.as_ref().and_then(filter_value) {
        decls.push("filter", filter);
    }
    if let Some(transform) = props.transform.as_ref().and_then(transform_value) {
        decls.push("transform", transform);
    }
    if let Some(transition) = props.transition.as_ref().and_then(transition_value) {
        decls.push("transition", transition);
    }

    decls
}

/// Render a number the way CSS authors write it: `1`, `0.5`, `-45`.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

fn border_declarations(border: &Border, decls: &mut Declarations) {
    match border {
        Border::Shorthand(value) => decls.push_present("border", Some(value.as_str())),
        Border::Sides(sides) => {
            if sides.style == Some(blockcraft_model::style::BorderStyle::None) {
                decls.push("border", "none");
                return;
            }
            decls.push_present("border-width", sides.width.as_deref());
            decls.push_present("border-style", sides.style.as_ref().map(|s| s.as_str()));
            decls.push_present("border-color", sides.color.as_deref());
            decls.push_present("border-top", sides.top.as_deref());
            decls.push_present("border-right", sides.right.as_deref());
            decls.push_present("border-bottom", sides.bottom.as_deref());
            decls.push_present("border-left", sides.left.as_deref());
        }
    }
}

fn border_radius_declarations(radius: &BorderRadius, decls: &mut Declarations) {
    match radius {
        BorderRadius::Shorthand(value) => decls.push_present("border-radius", Some(value.as_str())),
        BorderRadius::Corners(corners) => {
            decls.push_present("border-radius", corners.all.as_deref());
            decls.push_present("border-top-left-radius", corners.top_left.as_deref());
            decls.push_present("border-top-right-radius", corners.top_right.as_deref());
            decls.push_present("border-bottom-right-radius", corners.bottom_right.as_deref());
            decls.push_present("border-bottom-left-radius", corners.bottom_left.as_deref());
        }
    }
}

fn box_shadow_value(shadow: &BoxShadow) -> Option<String> {
    match shadow {
        BoxShadow::Shorthand(value) if !value.is_empty() => Some(value.clone()),
        BoxShadow::Shorthand(_) => None,
        BoxShadow::Spec(spec) => spec
            .preset
            .and_then(|preset| preset.css())
            .map(str::to_string)
            .or_else(|| spec.custom.clone().filter(|c| !c.is_empty())),
    }
}

fn gradient_value(gradient: &Gradient) -> Option<String> {
    if !gradient.enabled {
        return None;
    }

    let colors = match gradient.stops.as_deref() {
        Some(stops) if !stops.is_empty() => stops
            .iter()
            .map(|stop| format!("{} {}%", stop.color, format_number(stop.position)))
            .collect::<Vec<_>>()
            .join(", "),
        _ => {
            let mut colors = vec![
                gradient.color1.as_deref().unwrap_or("#ffffff"),
                gradient.color2.as_deref().unwrap_or("#000000"),
            ];
            if let Some(color3) = gradient.color3.as_deref().filter(|c| !c.is_empty()) {
                colors.push(color3);
            }
            colors.join(", ")
        }
    };

    Some(match gradient.kind.unwrap_or_default() {
        GradientKind::Linear => format!(
            "linear-gradient({}deg, {})",
            format_number(gradient.angle.unwrap_or(180.0)),
            colors
        ),
        GradientKind::Radial => format!("radial-gradient(circle, {})", colors),
    })
}

fn text_shadow_value(shadow: &TextShadow) -> String {
    format!(
        "{} {} {} {}",
        shadow.offset_x.as_deref().unwrap_or("0px"),
        shadow.offset_y.as_deref().unwrap_or("2px"),
        shadow.blur.as_deref().unwrap_or("4px"),
        shadow.color.as_deref().unwrap_or("rgba(0,0,0,0.5)")
    )
}

fn filter_value(filters: &Filters) -> Option<String> {
    let parts: Vec<String> = [
        ("blur", filters.blur, "px"),
        ("brightness", filters.brightness, "%"),
        ("contrast", filters.contrast, "%"),
        ("saturate", filters.saturate, "%"),
        ("hue-rotate", filters.hue_rotate, "deg"),
        ("invert", filters.invert, "%"),
        ("sepia", filters.sepia, "%"),
        ("grayscale", filters.grayscale, "%"),
    ]
    .into_iter()
    .filter_map(|(name, value, unit)| {
        value.map(|v| format!("{}({}{})", name, format_number(v), unit))
    })
    .collect();

    (!parts.is_empty()).then(|| parts.join(" "))
}

fn transform_value(transform: &Transform) -> Option<String> {
    let mut parts = Vec::new();

    if let Some(rotate) = transform.rotate {
        parts.push(format!("rotate({}deg)", format_number(rotate)));
    }
    if transform.scale_x.is_some() || transform.scale_y.is_some() {
        parts.push(format!(
            "scale({}, {})",
            format_number(transform.scale_x.unwrap_or(1.0)),
            format_number(transform.scale_y.unwrap_or(1.0))
        ));
    }
    if transform.skew_x.is_some() || transform.skew_y.is_some() {
        parts.push(format!(
            "skew({}deg, {}deg)",
            format_number(transform.skew_x.unwrap_or(0.0)),
            format_number(transform.skew_y.unwrap_or(0.0))
        ));
    }
    if transform.translate_x.is_some() || transform.translate_y.is_some() {
        parts.push(format!(
            "translate({}, {})",
            transform.translate_x.as_deref().unwrap_or("0px"),
            transform.translate_y.as_deref().unwrap_or("0px")
        ));
    }

    (!parts.is_empty()).then(|| parts.join(" "))
}

fn transition_value(transition: &Transition) -> Option<String> {
    if !transition.enabled {
        return None;
    }

    let duration = transition.duration.as_deref().unwrap_or("300ms");
    let easing = transition.easing.unwrap_or_default().as_str();
    let all = ["all".to_string()];
    let properties = match transition.properties.as_deref() {
        Some(props) if !props.is_empty() => props,
        _ => &all[..],
    };

    Some(
        properties
            .iter()
            .map(|property| format!("{} {} {}", property, duration, easing))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockcraft_model::style::{
        BorderSides, BorderStyle, BoxShadowSpec, Easing, GradientStop, ShadowPreset,
    };

    fn rendered(props: &Properties) -> Vec<(String, String)> {
        advanced_declarations(props)
            .iter()
            .map(|d| (d.property.clone(), d.value.clone()))
            .collect()
    }

    fn pair(property: &str, value: &str) -> (String, String) {
        (property.to_string(), value.to_string())
    }

    #[test]
    fn test_no_facets_emit_nothing() {
        assert!(advanced_declarations(&Properties::default()).is_empty());
    }

    #[test]
    fn test_border_sides() {
        let props = Properties {
            border: Some(Border::Sides(BorderSides {
                width: Some("2px".to_string()),
                style: Some(BorderStyle::Dashed),
                color: Some("#666".to_string()),
                ..Default::default()
            })),
            ..Default::default()
        };
        assert_eq!(
            rendered(&props),
            vec![
                pair("border-width", "2px"),
                pair("border-style", "dashed"),
                pair("border-color", "#666"),
            ]
        );
    }

    #[test]
    fn test_border_style_none_short_circuits() {
        let props = Properties {
            border: Some(Border::Sides(BorderSides {
                width: Some("2px".to_string()),
                style: Some(BorderStyle::None),
                ..Default::default()
            })),
            ..Default::default()
        };
        assert_eq!(rendered(&props), vec![pair("border", "none")]);
    }

    #[test]
    fn test_shadow_preset_beats_custom() {
        let props = Properties {
            box_shadow: Some(BoxShadow::Spec(BoxShadowSpec {
                preset: Some(ShadowPreset::Medium),
                custom: Some("1px 1px red".to_string()),
            })),
            ..Default::default()
        };
        assert_eq!(
            rendered(&props),
            vec![pair("box-shadow", "0 4px 6px rgba(0, 0, 0, 0.15)")]
        );

        let custom = Properties {
            box_shadow: Some(BoxShadow::Spec(BoxShadowSpec {
                preset: Some(ShadowPreset::None),
                custom: Some("1px 1px red".to_string()),
            })),
            ..Default::default()
        };
        assert_eq!(rendered(&custom), vec![pair("box-shadow", "1px 1px red")]);
    }

    #[test]
    fn test_gradient_requires_enabled() {
        let mut gradient = Gradient {
            color1: Some("#ff6b6b".to_string()),
            color2: Some("#ffd93d".to_string()),
            ..Default::default()
        };
        let mut props = Properties {
            gradient: Some(gradient.clone()),
            ..Default::default()
        };
        assert!(rendered(&props).is_empty());

        gradient.enabled = true;
        props.gradient = Some(gradient.clone());
        assert_eq!(
            rendered(&props),
            vec![pair("background", "linear-gradient(180deg, #ff6b6b, #ffd93d)")]
        );

        gradient.kind = Some(GradientKind::Radial);
        gradient.stops = Some(vec![
            GradientStop { color: "red".to_string(), position: 0.0 },
            GradientStop { color: "blue".to_string(), position: 100.0 },
        ]);
        props.gradient = Some(gradient);
        assert_eq!(
            rendered(&props),
            vec![pair("background", "radial-gradient(circle, red 0%, blue 100%)")]
        );
    }

    #[test]
    fn test_filter_and_transform_composites() {
        let props = Properties {
            filters: Some(Filters {
                blur: Some(2.0),
                hue_rotate: Some(90.0),
                grayscale: Some(100.0),
                ..Default::default()
            }),
            transform: Some(Transform {
                rotate: Some(45.0),
                scale_x: Some(1.5),
                translate_y: Some("10px".to_string()),
                ..Default::default()
            }),
            opacity: Some(0.5),
            ..Default::default()
        };

        assert_eq!(
            rendered(&props),
            vec![
                pair("opacity", "0.5"),
                pair("filter", "blur(2px) hue-rotate(90deg) grayscale(100%)"),
                pair("transform", "rotate(45deg) scale(1.5, 1) translate(0px, 10px)"),
            ]
        );
    }

    #[test]
    fn test_transition_defaults() {
        let props = Properties {
            transition: Some(Transition {
                enabled: true,
                ..Default::default()
            }),
            text_shadow: Some(TextShadow::default()),
            ..Default::default()
        };
        assert_eq!(
            rendered(&props),
            vec![
                pair("text-shadow", "0px 2px 4px rgba(0,0,0,0.5)"),
                pair("transition", "all 300ms ease"),
            ]
        );

        let multi = Properties {
            transition: Some(Transition {
                enabled: true,
                duration: Some("150ms".to_string()),
                easing: Some(Easing::Linear),
                properties: Some(vec!["color".to_string(), "opacity".to_string()]),
            }),
            ..Default::default()
        };
        assert_eq!(
            rendered(&multi),
            vec![pair("transition", "color 150ms linear, opacity 150ms linear")]
        );
    }
}
