//! Two-step JSON lookup (programme index, then episode document).
//!
//! The index names the newest episode by a site-relative path. The episode
//! document holds the downloadable audio URL. Both requests go out with a
//! browser profile; any failure along the way is returned as is.

use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use super::{Branding, StreamMetadata};
use crate::error::{ResolveError, Result};
use crate::fingerprint::firefox_profile;
use crate::http_client::NewsClient;

#[derive(Debug, Clone)]
pub struct JsonChain {
    /// Site root, without trailing slash.
    pub base_url: String,
    /// Path of the programme index, appended to `base_url`.
    pub index_path: String,
    pub branding: Branding,
}

impl JsonChain {
    pub fn new(base_url: impl Into<String>, index_path: impl Into<String>, branding: Branding) -> Self {
        Self {
            base_url: base_url.into(),
            index_path: index_path.into(),
            branding,
        }
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub async fn resolve(&self, client: &NewsClient) -> Result<StreamMetadata> {
        let profile = firefox_profile();

        let index_url = self.join(&self.index_path);
        debug!(url = %index_url, "Fetching programme index");
        let index: ProgrammeIndex = client.fetch_json(&index_url, Some(&profile)).await?;

        let path = index
            .block
            .and_then(|block| block.cards.into_iter().next())
            .and_then(|card| card.path_id)
            .ok_or(ResolveError::MissingField("block.cards[0].path_id"))?;

        let episode_url = self.join(&path);
        debug!(url = %episode_url, "Fetching episode document");
        let episode: Episode = client.fetch_json(&episode_url, Some(&profile)).await?;

        let uri = episode
            .downloadable_audio
            .and_then(|audio| audio.url)
            .ok_or(ResolveError::MissingField("downloadable_audio.url"))?;
        if !Url::parse(&uri)?.has_host() {
            return Err(ResolveError::MissingField("downloadable_audio.url"));
        }

        info!(uri = %uri, "Episode audio found");
        Ok(self.branding.metadata(uri))
    }
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct ProgrammeIndex {
    block: Option<Block>,
}

#[derive(Debug, Deserialize)]
struct Block {
    #[serde(default)]
    cards: Vec<Card>,
}

#[derive(Debug, Deserialize)]
struct Card {
    path_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Episode {
    downloadable_audio: Option<DownloadableAudio>,
}

#[derive(Debug, Deserialize)]
struct DownloadableAudio {
    url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::NewsConfig;

    fn client() -> NewsClient {
        NewsClient::new(&NewsConfig::default()).unwrap()
    }

    fn gr1(server: &MockServer) -> JsonChain {
        JsonChain::new(
            server.uri(),
            "/programmi/gr1.json",
            Branding::new("Radio Giornale 1", "Rai GR1"),
        )
    }

    async fn mount_json(server: &MockServer, at: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(at))
            .and(header_exists("upgrade-insecure-requests"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn follows_index_to_episode_audio() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/programmi/gr1.json",
            json!({"block": {"cards": [{"path_id": "/a/b"}, {"path_id": "/c/d"}]}}),
        )
        .await;
        mount_json(
            &server,
            "/a/b",
            json!({"downloadable_audio": {"url": "https://x/audio.mp3"}}),
        )
        .await;

        let meta = gr1(&server).resolve(&client()).await.unwrap();
        assert_eq!(meta.uri, "https://x/audio.mp3");
        assert_eq!(meta.title, "Radio Giornale 1");
        assert_eq!(meta.author, "Rai GR1");
        assert_eq!(meta.image, None);
    }

    #[tokio::test]
    async fn empty_card_list_is_missing_field() {
        let server = MockServer::start().await;
        mount_json(&server, "/programmi/gr1.json", json!({"block": {"cards": []}})).await;

        let err = gr1(&server).resolve(&client()).await.unwrap_err();
        assert!(matches!(err, ResolveError::MissingField("block.cards[0].path_id")));
    }

    #[tokio::test]
    async fn episode_without_audio_is_missing_field() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/programmi/gr1.json",
            json!({"block": {"cards": [{"path_id": "/a/b"}]}}),
        )
        .await;
        mount_json(&server, "/a/b", json!({"title": "GR1 ore 8"})).await;

        let err = gr1(&server).resolve(&client()).await.unwrap_err();
        assert!(matches!(err, ResolveError::MissingField("downloadable_audio.url")));
    }

    #[tokio::test]
    async fn relative_audio_url_is_invalid() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/programmi/gr1.json",
            json!({"block": {"cards": [{"path_id": "/a/b"}]}}),
        )
        .await;
        mount_json(
            &server,
            "/a/b",
            json!({"downloadable_audio": {"url": "/audio/gr1.mp3"}}),
        )
        .await;

        let err = gr1(&server).resolve(&client()).await.unwrap_err();
        assert!(matches!(err, ResolveError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn hostless_audio_url_is_missing_field() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/programmi/gr1.json",
            json!({"block": {"cards": [{"path_id": "/a/b"}]}}),
        )
        .await;
        mount_json(
            &server,
            "/a/b",
            json!({"downloadable_audio": {"url": "data:audio/mpeg;base64,AAAA"}}),
        )
        .await;

        let err = gr1(&server).resolve(&client()).await.unwrap_err();
        assert!(matches!(err, ResolveError::MissingField("downloadable_audio.url")));
    }

    #[tokio::test]
    async fn index_error_status_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&server)
            .await;

        let err = gr1(&server).resolve(&client()).await.unwrap_err();
        assert!(matches!(err, ResolveError::Status { .. }));
    }
}
