//! Accessibility preference model shared by the control panel surfaces.
//!
//! Panel rendering is the host shell's concern; this module owns the
//! preference values, their resolution rules (system theme follows the
//! platform dark-mode setting), and TOML persistence under the user config
//! directory so choices survive restarts.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const PREFS_DIR: &str = "voicenav";
const PREFS_FILE: &str = "accessibility.toml";

/// Root font sizing steps exposed by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontScale {
    #[default]
    Normal,
    Large,
    Larger,
}

impl FontScale {
    /// Root font size in pixels applied to the document.
    pub fn root_px(self) -> u32 {
        match self {
            FontScale::Normal => 16,
            FontScale::Large => 20,
            FontScale::Larger => 24,
        }
    }

    /// Percentage label shown next to the setting.
    pub fn percent(self) -> u32 {
        match self {
            FontScale::Normal => 100,
            FontScale::Large => 125,
            FontScale::Larger => 150,
        }
    }
}

/// Theme choice; `System` defers to the platform dark-mode setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemePreference {
    /// Whether dark mode should be active given the platform's preference.
    ///
    /// `system_dark` is injected so resolution stays testable; callers pass
    /// [`detect_system_dark`] for the live value.
    pub fn resolves_dark(self, system_dark: bool) -> bool {
        match self {
            ThemePreference::Light => false,
            ThemePreference::Dark => true,
            ThemePreference::System => system_dark,
        }
    }
}

/// Query the platform dark-mode setting. Unknown defaults to light.
pub fn detect_system_dark() -> bool {
    matches!(dark_light::detect(), dark_light::Mode::Dark)
}

/// Color-vision deficiency filters the panel can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBlindMode {
    #[default]
    None,
    Protanopia,
    Deuteranopia,
    Tritanopia,
}

impl ColorBlindMode {
    pub fn description(self) -> &'static str {
        match self {
            ColorBlindMode::None => "Default colors",
            ColorBlindMode::Protanopia => "Red-blind",
            ColorBlindMode::Deuteranopia => "Green-blind",
            ColorBlindMode::Tritanopia => "Blue-blind",
        }
    }
}

impl fmt::Display for ColorBlindMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColorBlindMode::None => "Off",
            ColorBlindMode::Protanopia => "Protanopia",
            ColorBlindMode::Deuteranopia => "Deuteranopia",
            ColorBlindMode::Tritanopia => "Tritanopia",
        };
        f.write_str(label)
    }
}

/// The full preference set the accessibility panel edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityPrefs {
    pub theme: ThemePreference,
    pub font_scale: FontScale,
    pub color_blind: ColorBlindMode,
}

impl AccessibilityPrefs {
    /// Reset every setting to its default (light theme, normal font, no
    /// color filter).
    pub fn reset(&mut self) {
        *self = AccessibilityPrefs::default();
    }

    /// Load saved preferences, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        match prefs_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Persist preferences to the user config directory.
    pub fn save(&self) -> Result<()> {
        let path =
            prefs_path().context("no user config directory available for preferences")?;
        self.save_to(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read preferences at {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse preferences at {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create preference directory {}", parent.display())
            })?;
        }
        let raw = toml::to_string_pretty(self).context("failed to serialize preferences")?;
        fs::write(path, raw)
            .with_context(|| format!("failed to write preferences at {}", path.display()))
    }
}

fn prefs_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(PREFS_DIR).join(PREFS_FILE))
}
