mod steps;

use crate::config::{BrowserConfig, Config};
use crate::{capture, Error, Result};
use eoka::{Browser, Page};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Result of a verification run.
#[derive(Debug)]
pub struct VerifyReport {
    /// Whether every step succeeded.
    pub success: bool,
    /// Error message if failed.
    pub error: Option<String>,
    /// Number of steps completed before stopping.
    pub steps_completed: usize,
    /// Total duration in milliseconds.
    pub duration_ms: u64,
    /// Path of the screenshot when one was produced.
    pub screenshot: Option<PathBuf>,
}

/// Drives a verification scenario against a running app.
pub struct Verifier {
    browser: Browser,
    page: Page,
}

impl Verifier {
    /// Launch a browser for the given config. Each launch is a fresh profile,
    /// so runs never share cookies or storage.
    pub async fn new(config: &BrowserConfig) -> Result<Self> {
        let stealth = eoka::StealthConfig {
            headless: config.headless,
            viewport_width: config.viewport.as_ref().map(|v| v.width).unwrap_or(1280),
            viewport_height: config.viewport.as_ref().map(|v| v.height).unwrap_or(720),
            ..Default::default()
        };

        debug!("Launching browser (headless: {})", config.headless);
        let browser = Browser::launch_with_config(stealth).await?;
        let page = browser.new_page("about:blank").await?;

        Ok(Self { browser, page })
    }

    /// Run the scenario. Step failures are captured into the report rather
    /// than propagated, so the caller can always reach `close`.
    pub async fn run(&self, config: &Config) -> VerifyReport {
        let start = Instant::now();
        let mut steps_completed = 0;

        match self.run_steps(config, &mut steps_completed).await {
            Ok(path) => VerifyReport {
                success: true,
                error: None,
                steps_completed,
                duration_ms: start.elapsed().as_millis() as u64,
                screenshot: Some(path),
            },
            Err(e) => {
                warn!("Verification failed after {} steps: {}", steps_completed, e);
                VerifyReport {
                    success: false,
                    error: Some(e.to_string()),
                    steps_completed,
                    duration_ms: start.elapsed().as_millis() as u64,
                    screenshot: None,
                }
            }
        }
    }

    async fn run_steps(&self, config: &Config, steps: &mut usize) -> Result<PathBuf> {
        info!("goto: {}", config.target.url);
        self.page.goto(&config.target.url).await?;
        *steps += 1;

        // Readiness is the container element existing, not the load event.
        debug!("wait_for: {}", config.ready_selector);
        self.page
            .wait_for(&config.ready_selector, config.timeout_ms)
            .await
            .map_err(|e| {
                Error::Timeout(format!(
                    "'{}' did not appear within {}ms: {}",
                    config.ready_selector, config.timeout_ms, e
                ))
            })?;
        *steps += 1;

        // The app content is hidden until the user is logged in. Force it
        // visible instead of authenticating.
        steps::reveal(&self.page, &config.reveal_selector).await?;
        *steps += 1;

        info!("click: {}", config.nav_selector);
        self.page.click(&config.nav_selector).await?;
        *steps += 1;

        steps::assert_visible(&self.page, &config.section_selector, config.timeout_ms).await?;
        *steps += 1;

        let nested = format!("{} {}", config.section_selector, config.dropdown_selector);
        steps::assert_visible(&self.page, &nested, config.timeout_ms).await?;
        *steps += 1;

        let path = PathBuf::from(&config.screenshot);
        capture::element_screenshot(&self.page, &config.section_selector, &path).await?;
        *steps += 1;

        Ok(path)
    }

    /// Close the browser.
    pub async fn close(self) -> Result<()> {
        self.browser.close().await?;
        Ok(())
    }
}
