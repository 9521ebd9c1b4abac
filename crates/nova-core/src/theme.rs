// File: crates/nova-core/src/theme.rs
// Summary: Light/Dark (and extra) color themes applied to a figure, with override merging.

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::color::{parse_color, Palette};
use crate::error::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct ColorTheme {
    pub name: String,
    pub figure_background: skia::Color,
    pub axes_background: skia::Color,
    pub axes_edge: skia::Color,
    pub text: skia::Color,
    pub tick: skia::Color,
    pub grid: skia::Color,
    pub palette: Palette,
}

impl ColorTheme {
    pub fn light() -> Self {
        Self {
            name: "light".into(),
            figure_background: skia::Color::WHITE,
            axes_background: skia::Color::WHITE,
            axes_edge: skia::Color::BLACK,
            text: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            grid: skia::Color::from_argb(255, 176, 176, 176),
            palette: Palette::default(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".into(),
            figure_background: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axes_background: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axes_edge: skia::Color::WHITE,
            text: skia::Color::WHITE,
            tick: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 0x55, 0x55, 0x5a),
            palette: Palette::default(),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark".into(),
            figure_background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            axes_background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            axes_edge: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),        // base1
            text: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),             // base2
            tick: skia::Color::from_argb(255, 0x83, 0x94, 0x96),             // base0
            grid: skia::Color::from_argb(255, 0x07, 0x36, 0x42),             // base02
            palette: solarized_accents(),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light".into(),
            figure_background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            axes_background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3),
            axes_edge: skia::Color::from_argb(255, 0x65, 0x7b, 0x83),        // base00
            text: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),             // base03
            tick: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),             // base01
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),             // base2
            palette: solarized_accents(),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark".into(),
            figure_background: skia::Color::BLACK,
            axes_background: skia::Color::BLACK,
            axes_edge: skia::Color::WHITE,
            text: skia::Color::WHITE,
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            grid: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            palette: Palette::new(vec![
                skia::Color::from_argb(255, 0x00, 0xff, 0xff),
                skia::Color::from_argb(255, 0xff, 0xff, 0x00),
                skia::Color::from_argb(255, 0xff, 0x00, 0xff),
                skia::Color::from_argb(255, 0x00, 0xff, 0x00),
                skia::Color::from_argb(255, 0xff, 0x80, 0x00),
                skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            ]),
        }
    }

    /// Exact (case-insensitive) preset lookup.
    pub fn preset(name: &str) -> Option<Self> {
        presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Find a theme by name, falling back to light.
    pub fn find(name: &str) -> Self {
        Self::preset(name).unwrap_or_else(|| {
            log::warn!("unknown color theme '{name}', using 'light'");
            Self::light()
        })
    }

    /// Copy with every color present in `o` replaced; invalid color strings are errors.
    pub fn merged(&self, o: &ThemeOverrides) -> Result<Self> {
        let mut t = self.clone();
        let set = |slot: &mut skia::Color, v: &Option<String>| -> Result<()> {
            if let Some(s) = v {
                *slot = parse_color(s)?;
            }
            Ok(())
        };
        set(&mut t.figure_background, &o.figure_background)?;
        set(&mut t.axes_background, &o.axes_background)?;
        set(&mut t.axes_edge, &o.axes_edge)?;
        set(&mut t.text, &o.text)?;
        set(&mut t.tick, &o.tick)?;
        set(&mut t.grid, &o.grid)?;
        if let Some(colors) = &o.palette {
            let parsed = colors.iter().map(|c| parse_color(c)).collect::<Result<Vec<_>>>()?;
            t.palette = Palette::new(parsed);
        }
        Ok(t)
    }
}

impl Default for ColorTheme {
    fn default() -> Self { Self::light() }
}

fn solarized_accents() -> Palette {
    Palette::new(vec![
        skia::Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
        skia::Color::from_argb(255, 0xcb, 0x4b, 0x16), // orange
        skia::Color::from_argb(255, 0x85, 0x99, 0x00), // green
        skia::Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
        skia::Color::from_argb(255, 0x6c, 0x71, 0xc4), // violet
        skia::Color::from_argb(255, 0x2a, 0xa1, 0x98), // cyan
        skia::Color::from_argb(255, 0xd3, 0x36, 0x82), // magenta
        skia::Color::from_argb(255, 0xb5, 0x89, 0x00), // yellow
    ])
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<ColorTheme> {
    vec![
        ColorTheme::light(),
        ColorTheme::dark(),
        ColorTheme::solarized_dark(),
        ColorTheme::solarized_light(),
        ColorTheme::high_contrast_dark(),
    ]
}

/// Partial theme; colors are strings accepted by [`parse_color`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeOverrides {
    pub figure_background: Option<String>,
    pub axes_background: Option<String>,
    pub axes_edge: Option<String>,
    pub text: Option<String>,
    pub tick: Option<String>,
    pub grid: Option<String>,
    pub palette: Option<Vec<String>>,
}

impl ThemeOverrides {
    pub fn is_empty(&self) -> bool { *self == Self::default() }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ThemeChoice {
    Named(String),
    Custom(ColorTheme),
}

impl ThemeChoice {
    /// Resolve to a theme; custom themes are renamed "custom".
    pub fn resolve(&self) -> ColorTheme {
        match self {
            ThemeChoice::Named(name) => ColorTheme::find(name),
            ThemeChoice::Custom(theme) => ColorTheme { name: "custom".into(), ..theme.clone() },
        }
    }
}

impl Default for ThemeChoice {
    fn default() -> Self { ThemeChoice::Named("light".into()) }
}

impl From<&str> for ThemeChoice {
    fn from(name: &str) -> Self { ThemeChoice::Named(name.to_string()) }
}

impl From<String> for ThemeChoice {
    fn from(name: String) -> Self { ThemeChoice::Named(name) }
}

impl From<ColorTheme> for ThemeChoice {
    fn from(theme: ColorTheme) -> Self { ThemeChoice::Custom(theme) }
}
