//! TOML-based application configuration.
//!
//! Stores user preferences for:
//! - Layout density (render width)
//! - Chart colors
//! - Export output directory and document title
//! - Task service endpoint and cache TTL
//!
//! Configuration is stored at `~/.config/ganttline/config.toml`
//! (`~/.config/ganttline-dev/` when `GANTTLINE_ENV=dev`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::render::{parse_hex_color, Color, Theme};

/// Layout-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSection {
    #[serde(default = "default_render_width")]
    pub render_width: f32,
}

/// Chart colors, as `#RRGGBB` strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSection {
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_header_fill")]
    pub header_fill: String,
    #[serde(default = "default_grid")]
    pub grid: String,
    #[serde(default = "default_weekend_fill")]
    pub weekend_fill: String,
    #[serde(default = "default_today_fill")]
    pub today_fill: String,
    #[serde(default = "default_today_line")]
    pub today_line: String,
    #[serde(default = "default_month_line")]
    pub month_line: String,
    #[serde(default = "default_pending")]
    pub pending: String,
    #[serde(default = "default_in_progress")]
    pub in_progress: String,
    #[serde(default = "default_completed")]
    pub completed: String,
    #[serde(default = "default_cancelled")]
    pub cancelled: String,
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSection {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_title")]
    pub title: String,
}

/// Task service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    /// Base URL of the task service, if configured.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/ganttline/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub layout: LayoutSection,
    #[serde(default)]
    pub theme: ThemeSection,
    #[serde(default)]
    pub export: ExportSection,
    #[serde(default)]
    pub source: SourceSection,
}

impl ChartConfig {
    /// Config file location.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk or return defaults, writing them on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path,
                    message: e.to_string(),
                })
            }
            Err(_) => {
                let config = Self::default();
                config.save()?;
                Ok(config)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            layout: LayoutSection::default(),
            theme: ThemeSection::default(),
            export: ExportSection::default(),
            source: SourceSection::default(),
        }
    }
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            render_width: default_render_width(),
        }
    }
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            background: default_background(),
            header_fill: default_header_fill(),
            grid: default_grid(),
            weekend_fill: default_weekend_fill(),
            today_fill: default_today_fill(),
            today_line: default_today_line(),
            month_line: default_month_line(),
            pending: default_pending(),
            in_progress: default_in_progress(),
            completed: default_completed(),
            cancelled: default_cancelled(),
        }
    }
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            title: default_title(),
        }
    }
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            base_url: None,
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl ThemeSection {
    /// Validate and convert into renderer colors.
    pub fn to_theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            background: color("theme.background", &self.background)?,
            header_fill: color("theme.header_fill", &self.header_fill)?,
            grid: color("theme.grid", &self.grid)?,
            weekend_fill: color("theme.weekend_fill", &self.weekend_fill)?,
            today_fill: color("theme.today_fill", &self.today_fill)?,
            today_line: color("theme.today_line", &self.today_line)?,
            month_line: color("theme.month_line", &self.month_line)?,
            pending: color("theme.pending", &self.pending)?,
            in_progress: color("theme.in_progress", &self.in_progress)?,
            completed: color("theme.completed", &self.completed)?,
            cancelled: color("theme.cancelled", &self.cancelled)?,
        })
    }
}

fn color(key: &str, value: &str) -> Result<Color, ConfigError> {
    parse_hex_color(value).map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("'{value}' is not a #RRGGBB or #RRGGBBAA color"),
    })
}

/// Per-user config directory, created on demand.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("GANTTLINE_ENV").unwrap_or_else(|_| "production".to_string());
    let dir = if env == "dev" {
        base_dir.join("ganttline-dev")
    } else {
        base_dir.join("ganttline")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

fn default_render_width() -> f32 {
    crate::layout::DEFAULT_RENDER_WIDTH
}
fn default_background() -> String {
    "#FFFFFF".to_string()
}
fn default_header_fill() -> String {
    "#F8FAFC".to_string()
}
fn default_grid() -> String {
    "#E2E8F0".to_string()
}
fn default_weekend_fill() -> String {
    "#F1F5F9".to_string()
}
fn default_today_fill() -> String {
    "#FEF2F2".to_string()
}
fn default_today_line() -> String {
    "#EF4444".to_string()
}
fn default_month_line() -> String {
    "#94A3B8".to_string()
}
fn default_pending() -> String {
    "#F59E0B".to_string()
}
fn default_in_progress() -> String {
    "#3B82F6".to_string()
}
fn default_completed() -> String {
    "#22C55E".to_string()
}
fn default_cancelled() -> String {
    "#94A3B8".to_string()
}
fn default_output_dir() -> String {
    ".".to_string()
}
fn default_title() -> String {
    "Gantt Chart".to_string()
}
fn default_cache_ttl_secs() -> u64 {
    300
}
