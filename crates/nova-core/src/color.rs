// File: crates/nova-core/src/color.rs
// Summary: Color string parsing (hex, shorthand letters, names) and the default category palette.

use skia_safe as skia;

use crate::error::{PlotError, Result};

/// Ten-color category cycle used when a series does not pick a color.
pub const TAB10: [skia::Color; 10] = [
    skia::Color::new(0xff1f77b4), // blue
    skia::Color::new(0xffff7f0e), // orange
    skia::Color::new(0xff2ca02c), // green
    skia::Color::new(0xffd62728), // red
    skia::Color::new(0xff9467bd), // purple
    skia::Color::new(0xff8c564b), // brown
    skia::Color::new(0xffe377c2), // pink
    skia::Color::new(0xff7f7f7f), // gray
    skia::Color::new(0xffbcbd22), // olive
    skia::Color::new(0xff17becf), // cyan
];

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<skia::Color>,
}

impl Palette {
    pub fn new(colors: Vec<skia::Color>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors }
    }

    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Color at `index`, wrapping around the cycle.
    pub fn get(&self, index: usize) -> skia::Color {
        self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { colors: TAB10.to_vec() }
    }
}

/// Scale the existing alpha channel by `alpha`, clamped to [0, 1].
pub fn with_alpha(color: skia::Color, alpha: f32) -> skia::Color {
    let a = (alpha.clamp(0.0, 1.0) * color.a() as f32).round() as u8;
    color.with_a(a)
}

/// Parse a color string: `#rgb`, `#rrggbb`, `#rrggbbaa`, single-letter shorthands,
/// `tab:*` names or a handful of common names. Case-insensitive.
pub fn parse_color(s: &str) -> Result<skia::Color> {
    let raw = s.trim();
    let lower = raw.to_ascii_lowercase();
    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| PlotError::InvalidColor(raw.to_string()));
    }
    named(&lower).ok_or_else(|| PlotError::InvalidColor(raw.to_string()))
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(skia::Color::from_argb(255, nib(0)?, nib(1)?, nib(2)?))
        }
        6 => Some(skia::Color::from_argb(255, byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

fn named(name: &str) -> Option<skia::Color> {
    if let Some(tab) = name.strip_prefix("tab:") {
        let idx = match tab {
            "blue" => 0,
            "orange" => 1,
            "green" => 2,
            "red" => 3,
            "purple" => 4,
            "brown" => 5,
            "pink" => 6,
            "gray" | "grey" => 7,
            "olive" => 8,
            "cyan" => 9,
            _ => return None,
        };
        return Some(TAB10[idx]);
    }
    let rgb = match name {
        "b" => (0, 0, 255),
        "g" => (0, 128, 0),
        "r" => (255, 0, 0),
        "c" => (0, 191, 191),
        "m" => (191, 0, 191),
        "y" => (191, 191, 0),
        "k" | "black" => (0, 0, 0),
        "w" | "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "darkgray" | "darkgrey" => (169, 169, 169),
        "lightgray" | "lightgrey" => (211, 211, 211),
        "silver" => (192, 192, 192),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "brown" => (165, 42, 42),
        "pink" => (255, 192, 203),
        "olive" => (128, 128, 0),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "yellow" => (255, 255, 0),
        "navy" => (0, 0, 128),
        "teal" => (0, 128, 128),
        "maroon" => (128, 0, 0),
        "lime" => (0, 255, 0),
        "gold" => (255, 215, 0),
        "none" | "transparent" => return Some(skia::Color::TRANSPARENT),
        _ => return None,
    };
    Some(skia::Color::from_argb(255, rgb.0, rgb.1, rgb.2))
}
