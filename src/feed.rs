//! First-enclosure lookup for podcast feeds.
//!
//! This is not a feed parser. It streams the RSS document up to the end of
//! the first `<item>` and keeps its `<enclosure url="...">` together with
//! whatever title and author the item (or, failing that, the channel)
//! declares.

use async_trait::async_trait;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use quick_xml::{Error as XmlError, Reader};
use tracing::debug;

use crate::error::{ResolveError, Result};
use crate::http_client::NewsClient;

/// The newest media attachment of a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEnclosure {
    pub uri: String,
    pub title: Option<String>,
    pub author: Option<String>,
}

#[async_trait]
pub trait FeedReader: Send + Sync {
    /// Returns `Ok(None)` when the feed carries no enclosure.
    async fn first_stream(&self, feed_url: &str) -> Result<Option<FeedEnclosure>>;
}

/// [`FeedReader`] over HTTP + `quick-xml`.
#[derive(Debug, Clone)]
pub struct XmlFeedReader {
    client: NewsClient,
}

impl XmlFeedReader {
    pub fn new(client: NewsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedReader for XmlFeedReader {
    async fn first_stream(&self, feed_url: &str) -> Result<Option<FeedEnclosure>> {
        let body = self.client.fetch_text(feed_url, None).await?;
        debug!(feed = feed_url, bytes = body.len(), "Feed fetched");
        first_enclosure(&body).map_err(|e| ResolveError::Feed(format!("{feed_url}: {e}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Author,
}

fn field_for(name: &[u8]) -> Option<Field> {
    match name {
        b"title" => Some(Field::Title),
        b"author" | b"itunes:author" | b"dc:creator" => Some(Field::Author),
        _ => None,
    }
}

fn enclosure_url(
    reader: &Reader<&[u8]>,
    e: &quick_xml::events::BytesStart<'_>,
) -> std::result::Result<Option<String>, XmlError> {
    match e.try_get_attribute("url")? {
        Some(attr) => {
            let url = attr.decode_and_unescape_value(reader.decoder())?;
            let url = url.trim();
            Ok((!url.is_empty()).then(|| url.to_string()))
        }
        None => Ok(None),
    }
}

/// Enclosure of the first `<item>` in an RSS document.
///
/// Only the first item counts: if it carries no usable enclosure the feed has
/// nothing to play, even when older items do.
pub fn first_enclosure(xml: &str) -> std::result::Result<Option<FeedEnclosure>, XmlError> {
    let mut reader = Reader::from_str(xml);

    let mut in_item = false;
    let mut current: Option<Field> = None;
    let mut text = String::new();

    let mut channel_title: Option<String> = None;
    let mut channel_author: Option<String> = None;
    let mut item_title: Option<String> = None;
    let mut item_author: Option<String> = None;
    let mut uri: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name();
                if name.as_ref() == b"item" {
                    in_item = true;
                    item_title = None;
                    item_author = None;
                } else if name.as_ref() == b"enclosure" && in_item && uri.is_none() {
                    uri = enclosure_url(&reader, &e)?;
                } else {
                    current = field_for(name.as_ref());
                    text.clear();
                }
            }
            Event::Empty(e) => {
                if e.name().as_ref() == b"enclosure" && in_item && uri.is_none() {
                    uri = enclosure_url(&reader, &e)?;
                }
            }
            Event::Text(e) if current.is_some() => {
                text.push_str(&e.decode().map_err(XmlError::Encoding)?);
            }
            Event::CData(e) if current.is_some() => {
                text.push_str(&String::from_utf8_lossy(&e.into_inner()));
            }
            Event::GeneralRef(e) if current.is_some() => {
                if let Some(ch) = e.resolve_char_ref()? {
                    text.push(ch);
                } else {
                    let entity = e.decode().map_err(XmlError::Encoding)?;
                    text.push_str(resolve_predefined_entity(&entity).unwrap_or_default());
                }
            }
            Event::End(e) => {
                let name = e.name();
                if name.as_ref() == b"item" {
                    return Ok(uri.take().map(|uri| FeedEnclosure {
                        uri,
                        title: item_title.or(channel_title),
                        author: item_author.or(channel_author),
                    }));
                } else if let Some(field) = current.take() {
                    let value = text.trim().to_string();
                    if !value.is_empty() {
                        let slot = match (field, in_item) {
                            (Field::Title, true) => &mut item_title,
                            (Field::Author, true) => &mut item_author,
                            (Field::Title, false) => &mut channel_title,
                            (Field::Author, false) => &mut channel_author,
                        };
                        slot.get_or_insert(value);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(None)
}
