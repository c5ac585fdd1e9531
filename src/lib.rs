//! `newscast` - latest news bulletin resolver
//!
//! Turns a news station request (`https://www.npr.org/podcasts/500005/...`,
//! optionally tagged as `news//<url>`) into the URL of the newest playable
//! bulletin plus display metadata.
//!
//! # Sources
//!
//! - **Hourly**: files at a time-stamped path, probed back hour by hour
//! - **Podcast**: first enclosure of an RSS feed
//! - **JSON chain**: programme index, then episode document
//! - **Scrape**: briefing landing page, then episode page
//!
//! # Example
//!
//! ```rust,no_run
//! use newscast::{NewsConfig, NewsResolver};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let resolver = NewsResolver::new(&NewsConfig::default())?;
//!     if let Some(stream) = resolver.resolve("news//https://www.tsf.pt/stream").await? {
//!         println!("{} by {}: {}", stream.title, stream.author, stream.uri);
//!     }
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod feed;
pub mod fingerprint;
pub mod http_client;
pub mod resolver;
pub mod source;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::NewsConfig;
pub use error::{ResolveError, Result};
pub use feed::{FeedEnclosure, FeedReader, XmlFeedReader};
pub use http_client::NewsClient;
pub use resolver::{NewsResolver, StreamRequest, NEWS_SEI, SEI_SEPARATOR};
pub use source::{
    Branding, SourceDescriptor, SourceRegistry, Strategy, StreamMetadata,
};

/// Version of newscast
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
