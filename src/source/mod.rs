//! News sources and the strategies that resolve them.
//!
//! # Architecture
//!
//! - [`Strategy`]: one variant per upstream family (hourly file, podcast feed,
//!   JSON chain, HTML scrape)
//! - [`SourceDescriptor`]: a named set of URL prefixes bound to a strategy
//! - [`SourceRegistry`]: ordered descriptor list, first match wins
//! - [`StreamMetadata`]: what a successful resolution returns
//!
//! Strategies never look at the request beyond the prefix match. Each one
//! derives its upstream URL from its own data and the current time.

pub mod chain;
pub mod hourly;
pub mod podcast;
pub mod scrape;
mod stations;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::Result;
use crate::feed::FeedReader;
use crate::http_client::NewsClient;

pub use chain::JsonChain;
pub use hourly::HourlyBulletin;
pub use podcast::PodcastFeed;
pub use scrape::ScrapeChain;

/// A playable bulletin plus display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamMetadata {
    pub uri: String,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Static display metadata attached to every stream of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branding {
    pub title: &'static str,
    pub author: &'static str,
    pub image: Option<&'static str>,
}

impl Branding {
    pub const fn new(title: &'static str, author: &'static str) -> Self {
        Self {
            title,
            author,
            image: None,
        }
    }

    #[must_use]
    pub const fn with_image(mut self, image: &'static str) -> Self {
        self.image = Some(image);
        self
    }

    pub fn metadata(&self, uri: impl Into<String>) -> StreamMetadata {
        StreamMetadata {
            uri: uri.into(),
            title: self.title.to_string(),
            author: self.author.to_string(),
            image: self.image.map(str::to_string),
        }
    }
}

/// Collaborators a strategy may call during one resolution.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub client: &'a NewsClient,
    pub feeds: &'a dyn FeedReader,
    pub clock: &'a dyn Clock,
}

/// How a source turns into a stream.
#[derive(Debug, Clone)]
pub enum Strategy {
    Hourly(HourlyBulletin),
    Podcast(PodcastFeed),
    JsonChain(JsonChain),
    Scrape(ScrapeChain),
}

impl Strategy {
    /// Short lowercase strategy name (e.g. `"hourly"`, `"podcast"`).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Hourly(_) => "hourly",
            Self::Podcast(_) => "podcast",
            Self::JsonChain(_) => "json-chain",
            Self::Scrape(_) => "scrape",
        }
    }

    /// Resolve the latest bulletin.
    ///
    /// Hourly and podcast strategies fail soft (`Ok(None)`); the chain and
    /// scrape strategies return the first error they hit.
    pub async fn resolve(&self, ctx: Collaborators<'_>) -> Result<Option<StreamMetadata>> {
        match self {
            Self::Hourly(s) => Ok(s.resolve(ctx.client, ctx.clock).await),
            Self::Podcast(s) => Ok(s.resolve(ctx.feeds).await),
            Self::JsonChain(s) => s.resolve(ctx.client).await.map(Some),
            Self::Scrape(s) => s.resolve(ctx.client).await.map(Some),
        }
    }
}

/// A named upstream and the prefixes that select it.
#[derive(Debug, Clone)]
pub struct SourceDescriptor {
    pub name: &'static str,
    pub prefixes: &'static [&'static str],
    pub strategy: Strategy,
}

impl SourceDescriptor {
    pub fn new(name: &'static str, prefixes: &'static [&'static str], strategy: Strategy) -> Self {
        Self {
            name,
            prefixes,
            strategy,
        }
    }

    /// Check if this source handles the given URL.
    pub fn matches(&self, url: &str) -> bool {
        self.prefixes.iter().any(|prefix| url.starts_with(prefix))
    }
}

/// Ordered source table.
///
/// Sources are checked in registration order. First match wins, so a source
/// whose prefix extends another source's prefix must be registered first.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    sources: Vec<SourceDescriptor>,
}

impl SourceRegistry {
    pub fn new(sources: Vec<SourceDescriptor>) -> Self {
        Self { sources }
    }

    /// The compiled-in station table.
    pub fn builtin() -> Self {
        Self::new(stations::builtin())
    }

    /// First source whose prefix starts `url`.
    pub fn lookup(&self, url: &str) -> Option<&SourceDescriptor> {
        self.sources.iter().find(|source| source.matches(url))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceDescriptor> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
