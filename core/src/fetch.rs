//! Capability for turning a document id into its plain text.
//!
//! The index never retrieves content itself; whatever sits behind this trait
//! (an HTTP scraper, a fixture map in tests) decides how and what to fetch,
//! including which ids it is willing to fetch at all.

use crate::error::FetchError;
use std::collections::HashMap;
use std::sync::Arc;

pub trait Fetcher {
    fn fetch(&self, id: &str) -> Result<String, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, id: &str) -> Result<String, FetchError> { (**self).fetch(id) }
}

impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    fn fetch(&self, id: &str) -> Result<String, FetchError> { (**self).fetch(id) }
}

impl<F: Fetcher + ?Sized> Fetcher for Arc<F> {
    fn fetch(&self, id: &str) -> Result<String, FetchError> { (**self).fetch(id) }
}

/// Serves documents from memory; ids not present fail with [`FetchError::NoContent`].
#[derive(Debug, Default, Clone)]
pub struct StaticFetcher {
    docs: HashMap<String, String>,
}

impl StaticFetcher {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.docs.insert(id.into(), text.into());
        self
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, id: &str) -> Result<String, FetchError> {
        self.docs.get(id).cloned().ok_or_else(|| FetchError::NoContent(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_fetcher_serves_known_ids_only() {
        let fetcher = StaticFetcher::new().with("a", "alpha text");
        assert_eq!(fetcher.fetch("a").unwrap(), "alpha text");
        assert!(matches!(fetcher.fetch("b"), Err(FetchError::NoContent(id)) if id == "b"));
    }

    #[test]
    fn trait_objects_delegate() {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(StaticFetcher::new().with("a", "x"));
        let boxed: Box<dyn Fetcher> = Box::new(StaticFetcher::new().with("a", "y"));
        assert_eq!(fetcher.fetch("a").unwrap(), "x");
        assert_eq!((&boxed).fetch("a").unwrap(), "y");
    }
}
