//! # chef-verify
//!
//! Headless browser verification for the Family Dinner web app. Drives the
//! running app, forces the logged-in view, clicks through to the recipe
//! section, and captures the Ask the Chef panel as evidence.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chef_verify::{Config, Verifier};
//!
//! # #[tokio::main]
//! # async fn main() -> chef_verify::Result<()> {
//! let config = Config::default();
//! let verifier = Verifier::new(&config.browser).await?;
//! let report = verifier.run(&config).await;
//! println!("Success: {}", report.success);
//! verifier.close().await?;
//! # Ok(())
//! # }
//! ```

mod capture;
mod config;
mod verify;

pub use capture::{device_rect, ElementRect, PixelRect};
pub use config::{BrowserConfig, Config, TargetUrl, Viewport};
pub use verify::{Verifier, VerifyReport};

/// Result type for chef-verify operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during scenario loading or a verification run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("browser error: {0}")]
    Browser(#[from] eoka::Error),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("assertion failed: {0}")]
    AssertionFailed(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let yaml = r#"
name: "Test"
"#;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.name, "Test");
        assert_eq!(config.target.url, "http://localhost:8080/app.html");
        assert!(config.browser.headless);
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.ready_selector, "#app-container");
        assert_eq!(config.reveal_selector, "#app-content");
        assert_eq!(
            config.nav_selector,
            r#".sidebar-nav a[data-target="recipe-section"]"#
        );
        assert_eq!(config.section_selector, "#ask-the-chef-section");
        assert_eq!(config.dropdown_selector, "#prioritize-equipment-select");
        assert_eq!(
            config.screenshot,
            "jules-scratch/verification/verification.png"
        );
    }

    #[test]
    fn test_parse_browser_config() {
        let yaml = r#"
name: "Test"
browser:
  headless: false
  viewport:
    width: 1920
    height: 1080
"#;
        let config = Config::parse(yaml).unwrap();
        assert!(!config.browser.headless);
        let viewport = config.browser.viewport.unwrap();
        assert_eq!(viewport.width, 1920);
        assert_eq!(viewport.height, 1080);
    }

    #[test]
    fn test_parse_overrides() {
        let yaml = r##"
name: "Staging"
target:
  url: "http://localhost:9090/app.html"
ready_selector: "#root"
section_selector: "#chef-panel"
dropdown_selector: "#equipment"
screenshot: "out/chef.png"
timeout_ms: 3000
"##;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.target.url, "http://localhost:9090/app.html");
        assert_eq!(config.ready_selector, "#root");
        assert_eq!(config.section_selector, "#chef-panel");
        assert_eq!(config.dropdown_selector, "#equipment");
        assert_eq!(config.screenshot, "out/chef.png");
        assert_eq!(config.timeout_ms, 3000);
        // Untouched fields keep their defaults
        assert_eq!(config.reveal_selector, "#app-content");
    }

    #[test]
    fn test_builtin_scenario_defaults() {
        let config = Config::default();
        assert_eq!(config.name, "Equipment dropdown verification");
        assert!(config.browser.headless);
        assert_eq!(config.target.url, "http://localhost:8080/app.html");
        assert_eq!(
            config.screenshot,
            "jules-scratch/verification/verification.png"
        );
        assert_eq!(config.timeout_ms, 10_000);
    }

    #[test]
    fn test_validation_missing_name() {
        let yaml = r#"
target:
  url: "http://localhost:8080/app.html"
"#;
        let result = Config::parse(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_empty_name() {
        let yaml = r#"
name: ""
"#;
        let result = Config::parse(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_empty_url() {
        let yaml = r#"
name: "Test"
target:
  url: ""
"#;
        let result = Config::parse(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_empty_selector() {
        let yaml = r#"
name: "Test"
section_selector: ""
"#;
        let result = Config::parse(yaml);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("section_selector"));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let yaml = r#"
name: "Test"
timeout_ms: 0
"#;
        let result = Config::parse(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout_ms"));
    }

    #[test]
    fn test_validation_empty_screenshot_path() {
        let yaml = r#"
name: "Test"
screenshot: ""
"#;
        let result = Config::parse(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_example_config() {
        let config = Config::load("configs/verify_dropdown.yaml").unwrap();
        assert_eq!(config.name, "Equipment dropdown verification");
        assert_eq!(config.target.url, "http://localhost:8080/app.html");
        assert!(config.browser.headless);
    }
}
