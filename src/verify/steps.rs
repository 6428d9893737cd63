use crate::{Error, Result};
use eoka::Page;
use tracing::debug;

/// Force a hidden element visible by direct style mutation.
pub async fn reveal(page: &Page, selector: &str) -> Result<()> {
    debug!("reveal: {}", selector);
    let js = format!(
        r#"(() => {{
            const el = document.querySelector({sel});
            if (!el) return false;
            el.style.display = 'block';
            return true;
        }})()"#,
        sel = serde_json::to_string(selector).unwrap()
    );
    let found: bool = page.evaluate(&js).await?;
    if !found {
        return Err(Error::AssertionFailed(format!(
            "reveal target '{}' not found",
            selector
        )));
    }
    Ok(())
}

/// Wait until the element is visible, mapping a miss to an assertion failure.
pub async fn assert_visible(page: &Page, selector: &str, timeout_ms: u64) -> Result<()> {
    debug!("assert_visible: {}", selector);
    page.wait_for_visible(selector, timeout_ms)
        .await
        .map_err(|e| Error::AssertionFailed(format!("'{}' is not visible: {}", selector, e)))?;
    Ok(())
}
