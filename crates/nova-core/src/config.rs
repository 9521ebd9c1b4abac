// File: crates/nova-core/src/config.rs
// Summary: TOML configuration for figure presets, overrides and export settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::parse_color;
use crate::error::Result;
use crate::figure::FigureOptions;
use crate::render::{ExportOptions, Layout};
use crate::style::{Style, StyleChoice, StyleOverrides};
use crate::theme::{ColorTheme, ThemeChoice, ThemeOverrides};
use crate::types::DEFAULT_DPI;

/// Environment variable holding the path of the config file.
pub const CONFIG_ENV: &str = "NOVA_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub dpi: Option<f32>,
    pub layout: Layout,
    /// Colour string; unset uses the theme's figure background.
    pub facecolor: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self { Self { dpi: None, layout: Layout::Tight, facecolor: None } }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NovaConfig {
    pub style: String,
    pub color_theme: String,
    pub dpi: f32,
    pub title: Option<String>,
    pub style_overrides: StyleOverrides,
    pub theme_overrides: ThemeOverrides,
    pub export: ExportConfig,
}

impl Default for NovaConfig {
    fn default() -> Self {
        Self {
            style: "default".into(),
            color_theme: "light".into(),
            dpi: DEFAULT_DPI,
            title: None,
            style_overrides: StyleOverrides::default(),
            theme_overrides: ThemeOverrides::default(),
            export: ExportConfig::default(),
        }
    }
}

impl NovaConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), toml_string)?;
        Ok(())
    }

    /// Load from the file named by `NOVA_CONFIG`; defaults when the variable is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                log::debug!("loading config from {}", Path::new(&path).display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Figure options with overrides merged into the named presets.
    pub fn figure_options(&self) -> Result<FigureOptions> {
        let style = if self.style_overrides.is_empty() {
            StyleChoice::Named(self.style.clone())
        } else {
            StyleChoice::Custom(Style::find(&self.style).merged(&self.style_overrides))
        };
        let color_theme = if self.theme_overrides.is_empty() {
            ThemeChoice::Named(self.color_theme.clone())
        } else {
            ThemeChoice::Custom(ColorTheme::find(&self.color_theme).merged(&self.theme_overrides)?)
        };
        Ok(FigureOptions { title: self.title.clone(), dpi: self.dpi, style, color_theme, ..FigureOptions::default() })
    }

    pub fn export_options(&self) -> Result<ExportOptions> {
        let facecolor = self.export.facecolor.as_deref().map(parse_color).transpose()?;
        Ok(ExportOptions { dpi: self.export.dpi, layout: self.export.layout, facecolor, draw_text: true })
    }
}
