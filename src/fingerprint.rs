//! Browser header profile
//!
//! Some broadcaster APIs refuse requests that identify as an HTTP library.
//! Those requests carry a fixed desktop Firefox header set instead.

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION, USER_AGENT,
};

/// Static browser profile sent with browser-gated requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserProfile {
    pub user_agent: &'static str,
    pub accept: &'static str,
    pub accept_language: &'static str,
    pub accept_encoding: &'static str,
    pub connection: &'static str,
    pub upgrade_insecure_requests: &'static str,
}

/// Desktop Firefox on Linux.
#[must_use]
pub const fn firefox_profile() -> BrowserProfile {
    BrowserProfile {
        user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:68.0) Gecko/20100101 Firefox/68.0",
        accept: "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        accept_language: "en-US,en;q=0.5",
        accept_encoding: "gzip, deflate, br",
        connection: "keep-alive",
        upgrade_insecure_requests: "1",
    }
}

impl BrowserProfile {
    /// Convert profile to reqwest `HeaderMap`
    pub fn to_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(self.user_agent));
        headers.insert(ACCEPT, HeaderValue::from_static(self.accept));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(self.accept_language));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static(self.accept_encoding));
        headers.insert(CONNECTION, HeaderValue::from_static(self.connection));
        headers.insert(
            "Upgrade-Insecure-Requests",
            HeaderValue::from_static(self.upgrade_insecure_requests),
        );
        headers
    }
}

impl Default for BrowserProfile {
    fn default() -> Self {
        firefox_profile()
    }
}
