//! Compiled-in station table, in check order.

use chrono_tz::{Australia, Europe};

use super::{
    Branding, HourlyBulletin, JsonChain, PodcastFeed, ScrapeChain, SourceDescriptor, Strategy,
};

const TSF_URL: &str = "https://www.tsf.pt/stream";
const GR1_URL: &str = "https://www.raiplaysound.it";
const FT_URL: &str = "https://www.ft.com";
const NPR_RSS: &str = "https://www.npr.org/rss/podcast.php";

fn podcast(
    name: &'static str,
    prefixes: &'static [&'static str],
    feed_url: &str,
    branding: Branding,
) -> SourceDescriptor {
    SourceDescriptor::new(
        name,
        prefixes,
        Strategy::Podcast(PodcastFeed::new(feed_url, branding)),
    )
}

pub(super) fn builtin() -> Vec<SourceDescriptor> {
    vec![
        SourceDescriptor::new(
            "tsf",
            &[TSF_URL],
            Strategy::Hourly(HourlyBulletin::new(
                format!("{TSF_URL}/audio/%Y/%m/noticias/%d/not%H.mp3"),
                Europe::Lisbon,
                6,
                Branding::new("TSF Radio Noticias", "TSF"),
            )),
        ),
        // The GPB newscast feed is gone; Georgia Today replaced it. Titles
        // come from the feed, the branding only fills gaps.
        SourceDescriptor::new(
            "gpb",
            &["http://feeds.feedburner.com/gpbnews"],
            Strategy::Podcast(
                PodcastFeed::new(
                    "https://gpb-rss.streamguys1.com/gpb/georgia-today-npr-one.xml",
                    Branding::new("Georgia Today", "Georgia Public Broadcasting"),
                )
                .with_feed_metadata(),
            ),
        ),
        SourceDescriptor::new(
            "gr1",
            &[GR1_URL],
            Strategy::JsonChain(JsonChain::new(
                GR1_URL,
                "/programmi/gr1.json",
                Branding::new("Radio Giornale 1", "Rai GR1"),
            )),
        ),
        SourceDescriptor::new(
            "ft",
            &[FT_URL],
            Strategy::Scrape(ScrapeChain::new(
                format!("{FT_URL}/newsbriefing"),
                "http://www.ft.com",
                Branding::new("FT news briefing", "Financial Times"),
            )),
        ),
        SourceDescriptor::new(
            "abc",
            &["https://www.abc.net.au/news"],
            Strategy::Hourly(HourlyBulletin::new(
                "https://abcmedia.akamaized.net/news/audio/news-briefings/\
                 top-stories/%Y%m/NAUs_%H00flash_%d%m_nola.mp3",
                Australia::Sydney,
                2,
                Branding::new("ABC News Australia", "Australian Broadcasting Corporation"),
            )),
        ),
        podcast(
            "alaska_nightly",
            &["https://www.npr.org/podcasts/828054805/alaska-news-nightly"],
            "https://alaskapublic-rss.streamguys1.com/content/alaska-news-nightly-archives-alaska-public-media-npr.xml",
            Branding::new("Alaska News Nightly", "Alaska Public Media").with_image(
                "https://media.npr.org/images/podcasts/primary/icon_828054805-1ce50401d43f15660a36275a8bf2ff454de62b2f.png",
            ),
        ),
        podcast(
            "kbbi",
            &["https://www.npr.org/podcasts/1052142404/k-b-b-i-newscast"],
            "https://www.kbbi.org/podcast/kbbi-newscast/rss.xml",
            Branding::new("KBBI Newscast", "KBBI").with_image(
                "https://media.npr.org/images/podcasts/primary/icon_1052142404-2839f62f7db7bf2ec753fca56913bd7a1b52c428.png",
            ),
        ),
        podcast(
            "khns",
            &["https://www.npr.org/podcasts/381444103/k-h-n-s-f-m-local-news"],
            "https://www.khns.org/feed",
            Branding::new("KHNS-FM Local News", "KHNS").with_image(
                "https://media.npr.org/images/podcasts/primary/icon_1111549375-c22ef178b4a5db87547aeb4c3c14dc8a8b1bc462.png",
            ),
        ),
        podcast(
            "kgou_am",
            &["https://www.npr.org/podcasts/1111549080/k-g-o-u-a-m-news-brief"],
            "https://www.kgou.org/podcast/kgou-am-newsbrief/rss.xml",
            Branding::new("KGOU AM NewsBrief", "KGOU").with_image(
                "https://media.npr.org/images/podcasts/primary/icon_1111549080-ebbfb83b98c966f38237d3e6ed729d659d098cb9.png?s=300&c=85&f=webp",
            ),
        ),
        podcast(
            "kgou_pm",
            &["https://www.npr.org/podcasts/1111549375/k-g-o-u-p-m-news-brief"],
            "https://www.kgou.org/podcast/kgou-pm-newsbrief/rss.xml",
            Branding::new("KGOU PM NewsBrief", "KGOU").with_image(
                "https://media.npr.org/images/podcasts/primary/icon_1111549375-c22ef178b4a5db87547aeb4c3c14dc8a8b1bc462.png",
            ),
        ),
        podcast(
            "aspen",
            &["https://www.npr.org/podcasts/1100476310/aspen-public-radio-newscast"],
            "https://www.aspenpublicradio.org/podcast/aspen-public-radio-n/rss.xml",
            Branding::new("Aspen Public Radio Newscast", "Aspen Public Radio").with_image(
                "https://media.npr.org/images/podcasts/primary/icon_1100476310-9b43c8bf959de6d90a5f59c58dc82ebc7b9b9258.png",
            ),
        ),
        podcast(
            "sonoma",
            &["https://www.npr.org/podcasts/1090302835/first-news"],
            "https://feeds.feedblitz.com/krcbfirstnews%26x%3D1",
            Branding::new("First News", "KRCB-FM").with_image(
                "https://media.npr.org/images/podcasts/primary/icon_1090302835-6b593e71a8d60b373ec735479dfbdd9e7f2e8cfe.png",
            ),
        ),
        podcast(
            "sdpb",
            &["https://www.npr.org/podcasts/1031233995/s-d-p-b-news"],
            "https://listen.sdpb.org/podcast/sdpb-news/rss.xml",
            Branding::new("SDPB News", "SDPB Radio").with_image(
                "https://media.npr.org/images/podcasts/primary/icon_1031233995-ae5c8fd4e932033b3b8e079cdc133703c2ef427c.jpg",
            ),
        ),
        podcast(
            "nhnr",
            &["https://www.npr.org/podcasts/1071428476/n-h-news-recap"],
            "https://nhpr-rss.streamguys1.com/news_recap/nh-news-recap-nprone.xml",
            Branding::new("N.H. News Recap", "New Hampshire Public Radio").with_image(
                "https://media.npr.org/images/podcasts/primary/icon_1071428476-7bd7627d52d6c3fc7082a1524b1b10a49dde7444.png",
            ),
        ),
        podcast(
            "nspr",
            &["https://www.npr.org/podcasts/1074915520/n-s-p-r-headlines"],
            "https://www.mynspr.org/podcast/nspr-headlines/rss.xml",
            Branding::new("NSPR Headlines", "North State Public Radio").with_image(
                "https://media.npr.org/images/podcasts/primary/icon_1074915520-8d70ce2af1d6db7fab8a42a9b4eb55dddb6eb69a.png",
            ),
        ),
        podcast(
            "wsiu",
            &["https://www.npr.org/podcasts/1038076755/w-s-i-u-news-updates"],
            "https://www.wsiu.org/podcast/wsiu-news-updates/rss.xml",
            Branding::new("WSIU News Updates", "WSIU Public Radio").with_image(
                "https://media.npr.org/images/podcasts/primary/icon_1038076755-aa4101ea9d54395c83b03d7dc7ac823047682192.jpg",
            ),
        ),
        podcast(
            "kvcr",
            &["https://www.npr.org/podcasts/1033362253/the-midday-news-report"],
            "https://www.kvcrnews.org/podcast/kvcr-midday-news-report/rss.xml",
            Branding::new("The Midday News Report", "KVCR").with_image(
                "https://media.npr.org/images/podcasts/primary/icon_1033362253-566d4a69caee465ebe1adf7d2949ae0c745e97b8.png",
            ),
        ),
        podcast(
            "npr",
            &[NPR_RSS, "https://www.npr.org/podcasts/500005/npr-news-now"],
            &format!("{NPR_RSS}?id=500005"),
            Branding::new("NPR News Now", "NPR").with_image(
                "https://media.npr.org/assets/img/2018/08/06/nprnewsnow_podcasttile_sq.webp",
            ),
        ),
    ]
}
