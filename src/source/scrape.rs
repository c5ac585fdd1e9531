//! Briefing pages with no feed or API.
//!
//! The landing page lists briefings by date. The first `<time>` marks the
//! newest one; the link to its episode page sits in the next `<div>` after the
//! time's parent. The episode page embeds the audio in a `<source>` element.
//! Markup drift breaks this, and it is reported rather than retried.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};
use url::Url;

use super::{Branding, StreamMetadata};
use crate::error::{ResolveError, Result};
use crate::http_client::NewsClient;

static TIME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("time").expect("static selector should parse"));
static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("static selector should parse"));
static SOURCE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("source").expect("static selector should parse"));

#[derive(Debug, Clone)]
pub struct ScrapeChain {
    pub landing_url: String,
    /// Base that episode links are resolved against.
    pub link_base: String,
    pub branding: Branding,
}

impl ScrapeChain {
    pub fn new(landing_url: impl Into<String>, link_base: impl Into<String>, branding: Branding) -> Self {
        Self {
            landing_url: landing_url.into(),
            link_base: link_base.into(),
            branding,
        }
    }

    pub async fn resolve(&self, client: &NewsClient) -> Result<StreamMetadata> {
        debug!(url = %self.landing_url, "Fetching briefing page");
        let landing = client.fetch_text(&self.landing_url, None).await?;
        let episode_url = episode_link(&landing, &self.link_base)?;

        debug!(url = %episode_url, "Fetching episode page");
        let episode = client.fetch_text(&episode_url, None).await?;
        let uri = audio_source(&episode, &episode_url)?;

        info!(uri = %uri, "Briefing audio found");
        Ok(self.branding.metadata(uri))
    }
}

/// Episode page URL of the newest briefing on a landing page.
pub fn episode_link(html: &str, link_base: &str) -> Result<String> {
    let document = Html::parse_document(html);

    let time = document
        .select(&TIME)
        .next()
        .ok_or(ResolveError::MissingElement("time"))?;
    let parent = time
        .parent()
        .ok_or(ResolveError::MissingElement("time parent"))?;

    // First <div> after the parent's opening tag, in document order.
    let target = document
        .tree
        .root()
        .descendants()
        .skip_while(|node| node.id() != parent.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "div")
        .ok_or(ResolveError::MissingElement("div after time"))?;

    let href = target
        .select(&ANCHOR)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .ok_or(ResolveError::MissingElement("a[href]"))?;

    Ok(Url::parse(link_base)?.join(href)?.to_string())
}

/// `src` of the first `<source>` element, resolved against the page URL.
pub fn audio_source(html: &str, page_url: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let src = document
        .select(&SOURCE)
        .next()
        .and_then(|source| source.value().attr("src"))
        .ok_or(ResolveError::MissingElement("source[src]"))?;

    Ok(Url::parse(page_url)?.join(src)?.to_string())
}
