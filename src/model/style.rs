//! Overlay colours and stroke sizes handed to the renderer.

use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::clamp;

/// RGBA colour, each component normalised to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` and whitespace optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex: String = s
            .trim()
            .trim_start_matches('#')
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }
        let byte = |i: usize| -> Option<f64> {
            let v = u8::from_str_radix(hex.get(i..i + 2)?, 16).ok()?;
            Some(v as f64 / 255.0)
        };
        let a = if hex.len() == 8 { byte(6)? } else { 1.0 };
        Some(Self::new(byte(0)?, byte(2)?, byte(4)?, a))
    }

    /// `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        let to_u8 = |v: f64| (clamp(v, 0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a));
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

/// Serialized form of [`OverlayStyle`], colours as hex strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    pub outline_color: String,
    pub progress_color: String,
    pub target_color: String,
    pub stroke_width: f64,
    pub marker_radius: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            outline_color: DEFAULT_OUTLINE_COLOR.to_string(),
            progress_color: DEFAULT_PROGRESS_COLOR.to_string(),
            target_color: DEFAULT_TARGET_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            marker_radius: DEFAULT_MARKER_RADIUS,
        }
    }
}

/// Resolved paint parameters for one overlay frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub outline: Rgba,
    pub progress: Rgba,
    pub target: Rgba,
    pub stroke_width: f64,
    pub marker_radius: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}

impl OverlayStyle {
    /// Resolves hex colours, falling back to defaults for bad values.
    pub fn from_config(config: &StyleConfig) -> Self {
        Self {
            outline: parse_or_default(
                "outline_color",
                &config.outline_color,
                DEFAULT_OUTLINE_COLOR,
            ),
            progress: parse_or_default(
                "progress_color",
                &config.progress_color,
                DEFAULT_PROGRESS_COLOR,
            ),
            target: parse_or_default(
                "target_color",
                &config.target_color,
                DEFAULT_TARGET_COLOR,
            ),
            stroke_width: clamp(config.stroke_width, 0.0, MAX_STROKE_PX),
            marker_radius: clamp(config.marker_radius, 0.0, MAX_STROKE_PX),
        }
    }
}

fn parse_or_default(field: &str, value: &str, default: &str) -> Rgba {
    Rgba::from_hex(value).unwrap_or_else(|| {
        log::warn!("Invalid {} {:?}, using {}", field, value, default);
        Rgba::from_hex(default).unwrap_or(Rgba::new(1.0, 1.0, 1.0, 1.0))
    })
}
