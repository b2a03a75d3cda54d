//! # Responsive Values
//!
//! A handful of properties may hold either a single value or a per-device
//! override set. Resolution for a device picks, in order:
//!
//! 1. the device's own slot, if non-empty
//! 2. the `default` slot, if non-empty
//! 3. the empty string
//!
//! A plain value resolves to itself for every device. Resolution is total.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Preview target used for resolution and media queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Mobile,
    Tablet,
    Desktop,
}

impl Device {
    pub const ALL: [Device; 3] = [Device::Mobile, Device::Tablet, Device::Desktop];

    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Mobile => "mobile",
            Device::Tablet => "tablet",
            Device::Desktop => "desktop",
        }
    }

    /// Viewport width in pixels
    pub fn breakpoint(&self) -> u32 {
        match self {
            Device::Mobile => 375,
            Device::Tablet => 768,
            Device::Desktop => 1920,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "mobile" => Some(Device::Mobile),
            "tablet" => Some(Device::Tablet),
            "desktop" => Some(Device::Desktop),
            _ => None,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-device override set. Empty or absent slots fall through to `default`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsiveValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<String>,
}

impl ResponsiveValue {
    /// Seed `default` with an existing plain value, device slots left empty.
    pub fn promote(plain: impl Into<String>) -> Self {
        Self {
            default: Some(plain.into()),
            ..Default::default()
        }
    }

    fn slot_mut(&mut self, device: Device) -> &mut Option<String> {
        match device {
            Device::Mobile => &mut self.mobile,
            Device::Tablet => &mut self.tablet,
            Device::Desktop => &mut self.desktop,
        }
    }

    /// The device's own slot, `None` when empty or absent
    pub fn slot(&self, device: Device) -> Option<&str> {
        let slot = match device {
            Device::Mobile => &self.mobile,
            Device::Tablet => &self.tablet,
            Device::Desktop => &self.desktop,
        };
        non_empty(slot.as_deref())
    }

    pub fn resolve(&self, device: Device) -> &str {
        self.slot(device)
            .or_else(|| non_empty(self.default.as_deref()))
            .unwrap_or("")
    }

    pub fn set(&mut self, device: Device, value: impl Into<String>) {
        *self.slot_mut(device) = Some(value.into());
    }

    /// Devices with a non-empty override, in `Device::ALL` order
    pub fn overridden_devices(&self) -> Vec<Device> {
        Device::ALL
            .into_iter()
            .filter(|device| self.slot(*device).is_some())
            .collect()
    }

    pub fn has_overrides(&self) -> bool {
        !self.overridden_devices().is_empty()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Stored shape of a responsive-capable property. A bare JSON number is
/// read as a plain value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Plain(String),
    Responsive(ResponsiveValue),
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(value) => Ok(PropertyValue::Plain(value)),
            Value::Number(value) => Ok(PropertyValue::Plain(value.to_string())),
            other => ResponsiveValue::deserialize(other)
                .map(PropertyValue::Responsive)
                .map_err(D::Error::custom),
        }
    }
}

impl PropertyValue {
    pub fn resolve(&self, device: Device) -> &str {
        match self {
            PropertyValue::Plain(value) => value,
            PropertyValue::Responsive(value) => value.resolve(device),
        }
    }

    pub fn as_responsive(&self) -> Option<&ResponsiveValue> {
        match self {
            PropertyValue::Responsive(value) => Some(value),
            PropertyValue::Plain(_) => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Plain(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Plain(value)
    }
}

impl From<ResponsiveValue> for PropertyValue {
    fn from(value: ResponsiveValue) -> Self {
        PropertyValue::Responsive(value)
    }
}

/// Resolve a stored value (or its absence) for one device.
pub fn resolve(value: Option<&PropertyValue>, device: Device) -> &str {
    value.map_or("", |value| value.resolve(device))
}

/// Write one device slot, promoting a plain value to responsive form first.
pub fn set_device_value(
    value: Option<&PropertyValue>,
    device: Device,
    new_value: impl Into<String>,
) -> ResponsiveValue {
    let mut responsive = match value {
        Some(PropertyValue::Responsive(existing)) => existing.clone(),
        Some(PropertyValue::Plain(plain)) => ResponsiveValue::promote(plain.clone()),
        None => ResponsiveValue::default(),
    };
    responsive.set(device, new_value);
    responsive
}

/// Take the value currently resolved for `from` and write it to every device
/// slot, clearing `default`.
pub fn copy_to_all_devices(value: Option<&PropertyValue>, from: Device) -> ResponsiveValue {
    let source = resolve(value, from).to_string();
    ResponsiveValue {
        default: None,
        mobile: Some(source.clone()),
        tablet: Some(source.clone()),
        desktop: Some(source),
    }
}

/// The properties that accept a [`ResponsiveValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponsiveKey {
    Padding,
    FontSize,
    MarginBottom,
    Gap,
}

impl ResponsiveKey {
    pub const ALL: [ResponsiveKey; 4] = [
        ResponsiveKey::Padding,
        ResponsiveKey::FontSize,
        ResponsiveKey::MarginBottom,
        ResponsiveKey::Gap,
    ];

    /// Name in the persisted properties record
    pub fn property_name(&self) -> &'static str {
        match self {
            ResponsiveKey::Padding => "padding",
            ResponsiveKey::FontSize => "fontSize",
            ResponsiveKey::MarginBottom => "marginBottom",
            ResponsiveKey::Gap => "gap",
        }
    }

    /// Stylesheet declaration name
    pub fn css_name(&self) -> &'static str {
        match self {
            ResponsiveKey::Padding => "padding",
            ResponsiveKey::FontSize => "font-size",
            ResponsiveKey::MarginBottom => "margin-bottom",
            ResponsiveKey::Gap => "gap",
        }
    }
}
