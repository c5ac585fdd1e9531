//! Live resolution of every built-in source.
//!
//! These hit the real broadcasters and are skipped unless
//! `NEWSCAST_NET_TESTS=1`. Hourly sources can legitimately come back empty
//! right after the hour, so they are only checked for not erroring.

use newscast::{NewsConfig, NewsResolver};

/// Returns `true` when network integration tests are enabled.
fn net_tests_enabled() -> bool {
    std::env::var("NEWSCAST_NET_TESTS")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[tokio::test]
async fn every_source_resolves_tagged_and_bare() {
    if !net_tests_enabled() {
        return;
    }

    let resolver = NewsResolver::new(&NewsConfig::default()).unwrap();
    for source in resolver.registry().iter() {
        for prefix in source.prefixes {
            for request in [prefix.to_string(), format!("news//{prefix}")] {
                let resolved = resolver.resolve(&request).await;
                match source.strategy.kind() {
                    "hourly" => assert!(resolved.is_ok(), "{request}: {resolved:?}"),
                    _ => {
                        let meta = resolved.unwrap();
                        assert!(meta.is_some_and(|m| !m.uri.is_empty()), "{request}");
                    }
                }
            }
        }
    }
}
