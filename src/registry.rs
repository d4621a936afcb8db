//! Read-only lookup from source id to its descriptor.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::SourceDescriptor;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct SourceRegistry {
    sources: HashMap<String, SourceDescriptor>,
}

impl SourceRegistry {
    /// Build from a roster. Call [`Config::validate`] first; with duplicate
    /// ids the last descriptor would win.
    pub fn new(config: &Config) -> Self {
        Self {
            sources: config
                .sources
                .iter()
                .map(|s| (s.id.clone(), s.clone()))
                .collect(),
        }
    }

    pub fn resolve(&self, id: &str) -> Result<&SourceDescriptor> {
        self.sources
            .get(id)
            .ok_or_else(|| Error::UnknownSource(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::ExtractorKind;

    #[test]
    fn test_resolve() {
        let registry = SourceRegistry::new(&Config::default());
        let source = registry.resolve("Mahfi-Egilmez").unwrap();
        assert_eq!(source.extractor, ExtractorKind::MahfiEgilmez);
        assert_eq!(source.url, "https://www.mahfiegilmez.com/");
        assert_eq!(registry.len(), 22);
    }

    #[test]
    fn test_unknown_source() {
        let registry = SourceRegistry::new(&Config::default());
        assert!(matches!(registry.resolve("Nobody"), Err(Error::UnknownSource(id)) if id == "Nobody"));
    }
}
