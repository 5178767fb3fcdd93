use ngram_core::{FetchError, Fetcher};
use reqwest::blocking::Client;
use reqwest::redirect;
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

const MEDIUM_HOST: &str = "medium.com";

/// Body paragraphs of a Medium story.
pub const ARTICLE_TEXT_SELECTOR: &str = "article p.pw-post-body-paragraph";

pub const MAX_REDIRECTS: usize = 5;

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: "ngram-search-bot/0.1 (+https://example.com/bot)".to_string(),
            timeout: Duration::from_secs(12),
        }
    }
}

/// Whether the scraper is willing to visit `url`: https only, and the host
/// must be `medium.com` or one of its subdomains.
pub fn is_allowed(url: &str) -> bool {
    Url::parse(url).map(|u| is_allowed_url(&u)).unwrap_or(false)
}

pub fn is_allowed_url(url: &Url) -> bool {
    if url.scheme() != "https" {
        return false;
    }
    match url.host_str() {
        Some(host) => host == MEDIUM_HOST || host.strip_suffix(MEDIUM_HOST).is_some_and(|sub| sub.ends_with('.')),
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectAction {
    Follow,
    /// Target is off the allow-list; the redirect response is returned as is.
    Stop,
    TooMany,
}

/// Decide what to do with a redirect to `next` after `hops` redirects already followed.
pub fn redirect_action(next: &Url, hops: usize) -> RedirectAction {
    if hops >= MAX_REDIRECTS {
        RedirectAction::TooMany
    } else if is_allowed_url(next) {
        RedirectAction::Follow
    } else {
        RedirectAction::Stop
    }
}

/// Concatenate the text of every matching paragraph, each preceded by a space.
pub fn extract_article_text(html: &str, paragraphs: &Selector) -> String {
    let doc = Html::parse_document(html);
    let mut text = String::new();
    for p in doc.select(paragraphs) {
        text.push(' ');
        text.extend(p.text());
    }
    text
}

/// Fetches Medium articles over HTTP and returns their body text.
pub struct MediumScraper {
    client: Client,
    paragraphs: Selector,
}

impl MediumScraper {
    pub fn new(config: &ScraperConfig) -> reqwest::Result<Self> {
        let policy = redirect::Policy::custom(|attempt| match redirect_action(attempt.url(), attempt.previous().len()) {
            RedirectAction::Follow => attempt.follow(),
            RedirectAction::Stop => attempt.stop(),
            RedirectAction::TooMany => attempt.error("too many redirects"),
        });
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(policy)
            .timeout(config.timeout)
            .build()?;
        let paragraphs = Selector::parse(ARTICLE_TEXT_SELECTOR).expect("valid selector");
        Ok(Self { client, paragraphs })
    }
}

impl Fetcher for MediumScraper {
    fn fetch(&self, id: &str) -> Result<String, FetchError> {
        let url = Url::parse(id).map_err(|e| FetchError::InvalidUrl { url: id.to_string(), reason: e.to_string() })?;
        if !is_allowed_url(&url) {
            return Err(FetchError::Filtered(id.to_string()));
        }

        let resp = self.client.get(url.clone()).send().map_err(|e| FetchError::Request(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: id.to_string(), status: status.as_u16() });
        }
        let body = resp.text().map_err(|e| FetchError::Request(e.to_string()))?;

        let text = extract_article_text(&body, &self.paragraphs);
        if text.trim().is_empty() {
            return Err(FetchError::NoContent(id.to_string()));
        }
        tracing::debug!(%url, bytes = body.len(), chars = text.len(), "scraped article");
        Ok(text)
    }
}
