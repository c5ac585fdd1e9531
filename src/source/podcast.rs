//! Sources whose newest bulletin is the first enclosure of a podcast feed.
//!
//! Display metadata is fixed per source unless the source opts into the
//! feed's own title and author. Tracking parameters are cut from the
//! enclosure URL.

use tracing::{debug, info, warn};
use url::Url;

use super::{Branding, StreamMetadata};
use crate::feed::{FeedEnclosure, FeedReader};

#[derive(Debug, Clone)]
pub struct PodcastFeed {
    pub feed_url: String,
    pub branding: Branding,
    /// Prefer the feed's title and author; `branding` fills the gaps.
    pub feed_metadata: bool,
}

impl PodcastFeed {
    pub fn new(feed_url: impl Into<String>, branding: Branding) -> Self {
        Self {
            feed_url: feed_url.into(),
            branding,
            feed_metadata: false,
        }
    }

    #[must_use]
    pub fn with_feed_metadata(mut self) -> Self {
        self.feed_metadata = true;
        self
    }

    /// `None` when the feed is empty, unreachable or malformed, or when its
    /// enclosure is not an absolute URL.
    pub async fn resolve(&self, feeds: &dyn FeedReader) -> Option<StreamMetadata> {
        match feeds.first_stream(&self.feed_url).await {
            Ok(Some(enclosure)) => {
                let uri = strip_query(&enclosure.uri).to_string();
                if !is_absolute(&uri) {
                    warn!(feed = %self.feed_url, uri = %enclosure.uri, "Enclosure is not an absolute URL");
                    return None;
                }
                info!(feed = %self.feed_url, uri = %uri, "Podcast episode found");
                Some(self.metadata(uri, enclosure))
            }
            Ok(None) => {
                debug!(feed = %self.feed_url, "Feed has no enclosure");
                None
            }
            Err(e) => {
                warn!(feed = %self.feed_url, error = %e, "Feed lookup failed");
                None
            }
        }
    }

    fn metadata(&self, uri: String, enclosure: FeedEnclosure) -> StreamMetadata {
        let mut meta = self.branding.metadata(uri);
        if self.feed_metadata {
            if let Some(title) = enclosure.title {
                meta.title = title;
            }
            if let Some(author) = enclosure.author {
                meta.author = author;
            }
        }
        meta
    }
}

fn is_absolute(uri: &str) -> bool {
    Url::parse(uri).is_ok_and(|url| url.has_host())
}

/// Cut the query string and fragment from a URL.
pub fn strip_query(uri: &str) -> &str {
    uri.split(['?', '#']).next().unwrap_or(uri)
}
