//! Element screenshots. The browser captures the viewport only, so an
//! element shot is a viewport shot cropped to the element's device-pixel
//! rectangle.

use crate::{Error, Result};
use eoka::Page;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Element geometry as reported by the page, in CSS pixels.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ElementRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// `window.devicePixelRatio` at measurement time.
    pub dpr: f64,
}

/// Pixel rectangle within a decoded screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Screenshot just the element matched by `selector`, writing a PNG to
/// `path`. Parent directories are created and an existing file is replaced.
pub async fn element_screenshot(page: &Page, selector: &str, path: &Path) -> Result<()> {
    scroll_into_view(page, selector).await?;
    let rect = measure(page, selector).await?;

    let png = page.screenshot().await?;
    let img = image::load_from_memory(&png)?;
    let clip = device_rect(&rect, img.width(), img.height()).ok_or_else(|| {
        Error::AssertionFailed(format!(
            "'{}' has an empty on-screen rectangle",
            selector
        ))
    })?;
    debug!(
        "clip: {:?} from {}x{} viewport shot",
        clip,
        img.width(),
        img.height()
    );

    let cropped = img.crop_imm(clip.x, clip.y, clip.width, clip.height);
    let mut buf = Vec::new();
    cropped.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, &buf)?;
    info!("screenshot: {}", path.display());
    Ok(())
}

async fn scroll_into_view(page: &Page, selector: &str) -> Result<()> {
    let js = format!(
        "document.querySelector({})?.scrollIntoView({{block:'center'}})",
        serde_json::to_string(selector).unwrap()
    );
    page.execute(&js).await?;
    page.wait(200).await;
    Ok(())
}

async fn measure(page: &Page, selector: &str) -> Result<ElementRect> {
    let js = format!(
        r#"(() => {{
            const el = document.querySelector({});
            if (!el) return null;
            const r = el.getBoundingClientRect();
            return {{ x: r.x, y: r.y, width: r.width, height: r.height,
                      dpr: window.devicePixelRatio || 1 }};
        }})()"#,
        serde_json::to_string(selector).unwrap()
    );
    let rect: Option<ElementRect> = page.evaluate(&js).await?;
    rect.ok_or_else(|| {
        Error::AssertionFailed(format!("'{}' not found for capture", selector))
    })
}

/// Scale a CSS-pixel rect into device pixels and clamp it to the image
/// bounds. Returns `None` when nothing of the element is on screen.
pub fn device_rect(rect: &ElementRect, img_w: u32, img_h: u32) -> Option<PixelRect> {
    if rect.width <= 0.0 || rect.height <= 0.0 || img_w == 0 || img_h == 0 {
        return None;
    }
    let dpr = if rect.dpr > 0.0 { rect.dpr } else { 1.0 };
    let clamp = |v: f64, max: u32| -> u32 { v.round().clamp(0.0, max as f64) as u32 };

    let x0 = clamp(rect.x * dpr, img_w);
    let y0 = clamp(rect.y * dpr, img_h);
    let x1 = clamp((rect.x + rect.width) * dpr, img_w);
    let y1 = clamp((rect.y + rect.height) * dpr, img_h);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(PixelRect {
        x: x0,
        y: y0,
        width: x1 - x0,
        height: y1 - y0,
    })
}
