//! Portfolio configuration
//!
//! Loaded from `~/.folio/folio.toml`. Every key is optional; a missing file
//! yields the defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::projects::{DEFAULT_GITHUB_USER, REFRESH_INTERVAL};
use crate::error::Result;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Display name shown in the header and hero
    pub owner: String,
    /// GitHub account whose public repositories are listed
    pub github_user: String,
    /// Seconds between background listing refreshes (0 disables refresh)
    pub refresh_interval_secs: u64,
    /// Locale used when nothing else selects one
    pub default_locale: Option<String>,
    /// Draw the custom cursor ring
    pub cursor: bool,
    /// Email delivery credentials
    pub emailjs: EmailJsConfig,
    /// Contact details and experience shown on the page
    pub profile: ProfileConfig,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            owner: "Folio".to_string(),
            github_user: DEFAULT_GITHUB_USER.to_string(),
            refresh_interval_secs: REFRESH_INTERVAL.as_secs(),
            default_locale: None,
            cursor: true,
            emailjs: EmailJsConfig::default(),
            profile: ProfileConfig::default(),
        }
    }
}

/// EmailJS service identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Personal details rendered in the about and contact sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub resume_url: Option<String>,
    pub experience: Vec<Experience>,
}

/// One entry of the experience timeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub url: Option<String>,
    pub period: String,
}

impl EmailJsConfig {
    /// All three identifiers are present
    pub fn is_configured(&self) -> bool {
        !self.service_id.trim().is_empty()
            && !self.template_id.trim().is_empty()
            && !self.public_key.trim().is_empty()
    }
}

impl FolioConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a file, returning defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        info!(path = %path.display(), user = %config.github_user, "Loaded config");
        Ok(config)
    }

    /// Background refresh period, `None` when disabled
    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_interval_secs > 0).then(|| Duration::from_secs(self.refresh_interval_secs))
    }
}
