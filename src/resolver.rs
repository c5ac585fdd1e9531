//! Request dispatch: tag stripping, registry lookup, strategy invocation.
//!
//! A request is either a bare source URL or the same URL behind the `news//`
//! tag. The tag only matters to [`NewsResolver::validate`]; routing ignores
//! it.

use std::time::Duration;

use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::config::NewsConfig;
use crate::error::{ResolveError, Result};
use crate::feed::{FeedReader, XmlFeedReader};
use crate::http_client::NewsClient;
use crate::source::{Collaborators, SourceRegistry, StreamMetadata};

/// Stream extractor id claimed by this resolver.
pub const NEWS_SEI: &str = "news";
/// Separator between the extractor id and the source URL.
pub const SEI_SEPARATOR: &str = "//";

/// A request split into its optional tag and the source URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamRequest<'a> {
    pub source: &'a str,
    pub tagged: bool,
}

impl<'a> StreamRequest<'a> {
    /// Strip one leading `news//`, if present.
    pub fn parse(raw: &'a str) -> Self {
        match raw
            .strip_prefix(NEWS_SEI)
            .and_then(|rest| rest.strip_prefix(SEI_SEPARATOR))
        {
            Some(source) => Self {
                source,
                tagged: true,
            },
            None => Self {
                source: raw,
                tagged: false,
            },
        }
    }
}

/// Resolves news requests against the source registry.
pub struct NewsResolver {
    registry: SourceRegistry,
    client: NewsClient,
    feeds: Box<dyn FeedReader>,
    clock: Box<dyn Clock>,
    deadline: Duration,
}

impl NewsResolver {
    /// Built-in sources, wall clock, HTTP feed reader.
    pub fn new(config: &NewsConfig) -> Result<Self> {
        let client = NewsClient::new(config)?;
        Ok(Self {
            registry: SourceRegistry::builtin(),
            feeds: Box::new(XmlFeedReader::new(client.clone())),
            client,
            clock: Box::new(SystemClock),
            deadline: config.resolve_timeout(),
        })
    }

    #[must_use]
    pub fn with_registry(mut self, registry: SourceRegistry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn with_feed_reader(mut self, feeds: impl FeedReader + 'static) -> Self {
        self.feeds = Box::new(feeds);
        self
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    /// Whether `request` is ours to handle. Never touches the network.
    pub fn validate(&self, request: &str) -> bool {
        let request = StreamRequest::parse(request);
        request.tagged || self.registry.lookup(request.source).is_some()
    }

    /// Resolve `request` to the newest playable bulletin.
    ///
    /// Returns `Ok(None)` if no source matches or the source has nothing
    /// playable right now. Errors come only from the JSON chain and scrape
    /// strategies, or from the overall deadline.
    pub async fn resolve(&self, request: &str) -> Result<Option<StreamMetadata>> {
        let request = StreamRequest::parse(request);
        let Some(source) = self.registry.lookup(request.source) else {
            debug!(request = request.source, tagged = request.tagged, "No news source matched");
            return Ok(None);
        };

        info!(source = source.name, strategy = source.strategy.kind(), "Resolving news stream");

        let ctx = Collaborators {
            client: &self.client,
            feeds: self.feeds.as_ref(),
            clock: self.clock.as_ref(),
        };
        let resolved = tokio::time::timeout(self.deadline, source.strategy.resolve(ctx))
            .await
            .map_err(|_| ResolveError::Timeout(self.deadline))??;

        match &resolved {
            Some(meta) => info!(source = source.name, uri = %meta.uri, "News stream resolved"),
            None => info!(source = source.name, "No news stream available"),
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> NewsResolver {
        NewsResolver::new(&NewsConfig::default()).unwrap()
    }

    #[test]
    fn parse_strips_tag() {
        let request = StreamRequest::parse("news//https://www.ft.com");
        assert_eq!(request.source, "https://www.ft.com");
        assert!(request.tagged);
    }

    #[test]
    fn parse_keeps_bare_urls() {
        let request = StreamRequest::parse("https://www.ft.com");
        assert_eq!(request.source, "https://www.ft.com");
        assert!(!request.tagged);
    }

    #[test]
    fn parse_strips_only_one_tag() {
        let request = StreamRequest::parse("news//news//https://www.ft.com");
        assert_eq!(request.source, "news//https://www.ft.com");
    }

    #[test]
    fn parse_requires_separator() {
        let request = StreamRequest::parse("newsweek.com/latest");
        assert!(!request.tagged);
        assert_eq!(request.source, "newsweek.com/latest");
    }

    #[test]
    fn validate_accepts_every_registered_prefix() {
        let resolver = resolver();
        for source in resolver.registry().iter() {
            for prefix in source.prefixes {
                assert!(resolver.validate(prefix), "{prefix}");
                assert!(resolver.validate(&format!("{NEWS_SEI}{SEI_SEPARATOR}{prefix}")));
            }
        }
    }

    #[test]
    fn validate_accepts_tag_alone() {
        assert!(resolver().validate("news//https://unknown.example/feed"));
    }

    #[test]
    fn validate_rejects_unrelated_urls() {
        let resolver = resolver();
        assert!(!resolver.validate("https://example.com/podcast.xml"));
        assert!(!resolver.validate("newsweek.com"));
        assert!(!resolver.validate(""));
    }

    #[tokio::test]
    async fn unmatched_request_is_empty_not_error() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("https://example.com/").await.unwrap(), None);
        assert_eq!(
            resolver.resolve("news//https://example.com/").await.unwrap(),
            None
        );
    }
}
