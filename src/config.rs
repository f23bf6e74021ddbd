//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Community chat invite shown on the success screen
pub const DEFAULT_INVITE_URL: &str = "https://discord.gg/UQdETSgSa";

/// Accent colours the theme can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Green,
    Cyan,
    Magenta,
    Yellow,
}

impl Accent {
    pub fn color(self) -> Color {
        match self {
            Accent::Green => Color::LightGreen,
            Accent::Cyan => Color::Cyan,
            Accent::Magenta => Color::Magenta,
            Accent::Yellow => Color::Yellow,
        }
    }
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InductionConfig {
    /// Community invite link override
    pub invite_url: Option<String>,
    /// Show decorative animations
    pub decorations: Option<bool>,
    /// Accent colour
    pub accent: Option<Accent>,
}

impl InductionConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("club", "enigma", "enigma-induction")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration, writing a default file on first run
    pub fn load_or_create() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_or_create_at(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_or_create_at(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }
        let config = Self::default();
        config.save_to(path)?;
        tracing::debug!("Wrote default config to {}", path.display());
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: InductionConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Link shown on the success screen
    pub fn invite_url(&self) -> &str {
        self.invite_url.as_deref().unwrap_or(DEFAULT_INVITE_URL)
    }

    pub fn decorations_enabled(&self) -> bool {
        self.decorations.unwrap_or(true)
    }

    pub fn accent_color(&self) -> Color {
        self.accent.unwrap_or_default().color()
    }
}
