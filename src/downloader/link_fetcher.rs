use crate::config::ResolvedConfig;
use crate::errors::{AppError, AppResult};
use crate::models::CandidateLink;
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use scraper::Selector;
use tracing::{debug, info, warn};
use url::Url;

/// Where the menu page's weekday links come from.
#[async_trait]
pub trait LinkSource {
    /// Returns the candidate links in page order.
    async fn candidate_links(&self, config: &ResolvedConfig) -> AppResult<Vec<CandidateLink>>;
}

/// Reads the links from the live page in headless Chrome.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessBrowser;

#[async_trait]
impl LinkSource for HeadlessBrowser {
    async fn candidate_links(&self, config: &ResolvedConfig) -> AppResult<Vec<CandidateLink>> {
        fetch_candidate_links(config).await
    }
}

/// Renders the menu page in headless Chrome and collects its weekday links.
///
/// The page is loaded with JavaScript enabled, so links inserted client-side
/// are included. Each link's text is its rendered `innerText`, the text a
/// visitor sees; hidden descendants do not contribute to it.
///
/// The browser is shut down before returning, whether rendering succeeded or
/// not.
///
/// # Errors
///
/// Returns an error if:
/// - The page URL or link selector is invalid
/// - The browser cannot be launched
/// - Navigation or reading the rendered elements fails
///
pub async fn fetch_candidate_links(config: &ResolvedConfig) -> AppResult<Vec<CandidateLink>> {
    let page_url = Url::parse(&config.page_url)?;
    // Fail on a bad selector before paying for a browser launch
    validate_selector(&config.link_selector)?;

    let mut builder = BrowserConfig::builder().arg("--disable-gpu");
    if let Some(executable) = &config.chrome_executable {
        builder = builder.chrome_executable(executable);
    }
    let browser_config = builder
        .build()
        .map_err(|e| AppError::BrowserError(format!("Invalid browser configuration: {e}")))?;

    info!(url = %page_url, "Launching headless browser");
    let (mut browser, mut handler) = Browser::launch(browser_config)
        .await
        .map_err(|e| AppError::BrowserError(format!("Failed to launch browser: {e}")))?;

    let handler_task = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if let Err(e) = event {
                debug!(error = %e, "Browser handler event error");
            }
        }
    });

    let rendered = read_link_elements(&browser, &page_url, &config.link_selector).await;

    if let Err(e) = browser.close().await {
        warn!(error = %e, "Failed to close browser");
    }
    if let Err(e) = browser.wait().await {
        warn!(error = %e, "Failed to wait for browser exit");
    }
    if let Err(e) = handler_task.await {
        debug!(error = %e, "Browser handler task ended abnormally");
    }

    let links = build_candidate_links(rendered?, &page_url);
    info!(links_found = links.len(), "Menu page links collected");
    Ok(links)
}

/// Visible text and raw `href` of every element matching `selector`.
async fn read_link_elements(
    browser: &Browser,
    page_url: &Url,
    selector: &str,
) -> AppResult<Vec<(String, Option<String>)>> {
    let page = browser.new_page(page_url.as_str()).await?;
    page.wait_for_navigation().await?;

    let elements = page.find_elements(selector).await?;
    let mut raw = Vec::with_capacity(elements.len());
    for element in elements {
        let text = element.inner_text().await?.unwrap_or_default();
        let href = element.attribute("href").await?;
        raw.push((text, href));
    }
    debug!(elements = raw.len(), "Menu page rendered");
    Ok(raw)
}

fn validate_selector(selector: &str) -> AppResult<()> {
    Selector::parse(selector)
        .map(|_| ())
        .map_err(|e| AppError::SelectorError(format!("{selector}: {e:?}")))
}

/// Turns rendered `(text, href)` pairs into candidate links.
///
/// Order is preserved. Each `href` is resolved against `base_url`, the way a
/// browser resolves a link. Pairs without an `href`, with an empty one, or
/// with one that cannot be resolved are skipped.
pub fn build_candidate_links<I>(elements: I, base_url: &Url) -> Vec<CandidateLink>
where
    I: IntoIterator<Item = (String, Option<String>)>,
{
    elements
        .into_iter()
        .filter_map(|(text, href)| {
            let href = href.filter(|h| !h.trim().is_empty())?;
            let url = base_url.join(href.trim()).ok()?;
            Some(CandidateLink::new(text, url))
        })
        .collect()
}
