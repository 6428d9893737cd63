//! Scenario configuration. The built-in defaults describe the dropdown
//! verification against a locally served app; a YAML file can override any
//! field for other environments.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

fn default_headless() -> bool {
    true
}

fn default_url() -> String {
    "http://localhost:8080/app.html".into()
}

fn default_ready_selector() -> String {
    "#app-container".into()
}

fn default_reveal_selector() -> String {
    "#app-content".into()
}

fn default_nav_selector() -> String {
    r#".sidebar-nav a[data-target="recipe-section"]"#.into()
}

fn default_section_selector() -> String {
    "#ask-the-chef-section".into()
}

fn default_dropdown_selector() -> String {
    "#prioritize-equipment-select".into()
}

fn default_screenshot() -> String {
    "jules-scratch/verification/verification.png".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Top-level scenario structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Name of this verification scenario.
    pub name: String,

    /// Browser configuration.
    #[serde(default)]
    pub browser: BrowserConfig,

    /// Target URL to navigate to.
    #[serde(default)]
    pub target: TargetUrl,

    /// Element that must exist before the run proceeds.
    #[serde(default = "default_ready_selector")]
    pub ready_selector: String,

    /// Hidden element forced to `display: block` to stand in for a login.
    #[serde(default = "default_reveal_selector")]
    pub reveal_selector: String,

    /// Navigation anchor that switches to the recipe section.
    #[serde(default = "default_nav_selector")]
    pub nav_selector: String,

    /// Section that must become visible after the navigation click.
    #[serde(default = "default_section_selector")]
    pub section_selector: String,

    /// Dropdown that must be visible inside the section.
    #[serde(default = "default_dropdown_selector")]
    pub dropdown_selector: String,

    /// Where the section screenshot is written. Parent directories are
    /// created, an existing file is overwritten.
    #[serde(default = "default_screenshot")]
    pub screenshot: String,

    /// Per-wait timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Config {
    /// Load a scenario from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse a scenario from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the scenario.
    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::Config("name is required".into()));
        }
        if self.target.url.is_empty() {
            return Err(Error::Config("target.url is required".into()));
        }
        for (field, value) in [
            ("ready_selector", &self.ready_selector),
            ("reveal_selector", &self.reveal_selector),
            ("nav_selector", &self.nav_selector),
            ("section_selector", &self.section_selector),
            ("dropdown_selector", &self.dropdown_selector),
        ] {
            if value.is_empty() {
                return Err(Error::Config(format!("{} must not be empty", field)));
            }
        }
        if self.screenshot.is_empty() {
            return Err(Error::Config("screenshot path must not be empty".into()));
        }
        if self.timeout_ms == 0 {
            return Err(Error::Config("timeout_ms must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "Equipment dropdown verification".into(),
            browser: BrowserConfig::default(),
            target: TargetUrl::default(),
            ready_selector: default_ready_selector(),
            reveal_selector: default_reveal_selector(),
            nav_selector: default_nav_selector(),
            section_selector: default_section_selector(),
            dropdown_selector: default_dropdown_selector(),
            screenshot: default_screenshot(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Browser launch configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserConfig {
    /// Run in headless mode. On by default; `--headed` turns it off.
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Viewport size.
    pub viewport: Option<Viewport>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport: None,
        }
    }
}

/// Viewport dimensions.
#[derive(Debug, Clone, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Target URL configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetUrl {
    /// URL to navigate to.
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for TargetUrl {
    fn default() -> Self {
        Self {
            url: default_url(),
        }
    }
}
