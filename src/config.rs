use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::color::ColorScheme;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub plot: PlotConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    pub color_scheme: ColorScheme,
    pub width: u32,
    pub height: u32,
    pub marker_size: u32,
    /// Dashed line along theta = pi/2, the power-of-two tower.
    pub central_axis: bool,
    pub legend: bool,
    /// Overrides the generated caption when set.
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Destination image. Extension picks the backend: .svg for vector,
    /// anything else renders a bitmap.
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plot: PlotConfig {
                color_scheme: ColorScheme::Classic,
                width: 1200,
                height: 800,
                marker_size: 2,
                central_axis: true,
                legend: true,
                title: None,
            },
            output: OutputConfig {
                path: PathBuf::from("antlion.png"),
            },
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the default XDG config path (~/.config/antlion/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("antlion").join("config.toml"))
    }

    /// Load config from the default XDG path if it exists
    /// Returns None if file doesn't exist, logs warning on parse errors
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            match Self::load(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config at {}: {}\nUsing defaults.",
                        path.display(),
                        e
                    );
                    None
                }
            }
        } else {
            None
        }
    }

    /// Initialize default config file at XDG path, returns the path
    pub fn init_default_config() -> Result<PathBuf> {
        let path = Self::default_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = Self::generate_config_template();
        std::fs::write(&path, template)?;

        Ok(path)
    }

    /// Generate a commented TOML config template
    pub fn generate_config_template() -> String {
        r#"# Antlion Configuration
# This file is auto-generated. Edit as needed.

[plot]
# Color scheme: "classic", "heat", "ocean", "mono"
color_scheme = "classic"
# Image size in pixels
width = 1200
height = 800
# Radius of the per-step point markers in pixels
marker_size = 2
# Draw the dashed power-of-two axis through the pit
central_axis = true
# Draw the ascent/descent legend
legend = true
# Custom caption (omit for the generated "start | max | steps" caption)
# title = "My trajectory"

[output]
# Destination image; use a .svg extension for vector output
path = "antlion.png"
"#
        .to_string()
    }

    /// Merge CLI arguments into config (CLI takes priority)
    pub fn merge_args(&mut self, args: &crate::Args) {
        if let Some(ref path) = args.output {
            self.output.path = path.clone();
        }
        if let Some(ref colors) = args.colors {
            match colors.parse() {
                Ok(scheme) => self.plot.color_scheme = scheme,
                Err(e) => warn!("ignoring --colors: {}", e),
            }
        }
        if let Some(width) = args.width {
            self.plot.width = width;
        }
        if let Some(height) = args.height {
            self.plot.height = height;
        }
        if args.no_legend {
            self.plot.legend = false;
        }
        if let Some(ref title) = args.title {
            self.plot.title = Some(title.clone());
        }
    }
}
