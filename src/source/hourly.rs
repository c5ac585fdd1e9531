//! Hourly bulletins published at a predictable, time-stamped path.
//!
//! The newest file may not be uploaded yet when the hour turns, so the
//! strategy walks back one hour at a time until a probe succeeds or the
//! attempt budget runs out. Hours are subtracted on the zoned timestamp, so
//! stepping back past midnight also rolls the day, month and year.

use std::fmt::Write;

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use tracing::{debug, info, warn};

use super::{Branding, StreamMetadata};
use crate::clock::Clock;
use crate::http_client::NewsClient;

/// A bulletin file whose URL is a strftime template in the station's zone.
#[derive(Debug, Clone)]
pub struct HourlyBulletin {
    /// strftime pattern, e.g. `.../%Y/%m/noticias/%d/not%H.mp3`
    pub template: String,
    pub timezone: Tz,
    /// Total probes, the current hour included.
    pub attempts: u32,
    pub branding: Branding,
}

impl HourlyBulletin {
    pub fn new(template: impl Into<String>, timezone: Tz, attempts: u32, branding: Branding) -> Self {
        Self {
            template: template.into(),
            timezone,
            attempts,
            branding,
        }
    }

    /// Bulletin URL for the station-local hour containing `at`. `None` if
    /// the template holds a `%` sequence strftime does not know.
    pub fn url_at(&self, at: DateTime<Utc>) -> Option<String> {
        let local = at.with_timezone(&self.timezone);
        let mut url = String::new();
        write!(url, "{}", local.format(&self.template)).ok()?;
        Some(url)
    }

    /// Probe the current hour, then earlier ones. `None` once the budget is
    /// spent; probe errors only consume an attempt.
    pub async fn resolve(&self, client: &NewsClient, clock: &dyn Clock) -> Option<StreamMetadata> {
        let mut at = clock.now();

        for attempt in 1..=self.attempts {
            let Some(url) = self.url_at(at) else {
                warn!(template = %self.template, "Invalid bulletin template");
                return None;
            };
            match client.probe(&url).await {
                Ok(status) if status.is_success() => {
                    info!(attempt, url = %url, "Bulletin found");
                    return Some(self.branding.metadata(url));
                }
                Ok(status) => debug!(attempt, %status, url = %url, "Bulletin not published"),
                Err(e) => debug!(attempt, error = %e, url = %url, "Bulletin probe failed"),
            }
            at -= Duration::hours(1);
        }

        debug!(attempts = self.attempts, "No bulletin within probe window");
        None
    }
}
