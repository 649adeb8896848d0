//! News sitemap reader.
//!
//! Parses the [Google News sitemap](https://www.google.com/schemas/sitemap-news/0.9)
//! flavour of `<urlset>`:
//!
//! ```xml
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
//!         xmlns:news="http://www.google.com/schemas/sitemap-news/0.9">
//!   <url>
//!     <loc>https://example.com/2025/05/06/story</loc>
//!     <news:news>
//!       <news:publication_date>2025-05-06T08:00:00+00:00</news:publication_date>
//!       <news:title>Story</news:title>
//!       <news:keywords>politics, economy</news:keywords>
//!     </news:news>
//!   </url>
//! </urlset>
//! ```
//!
//! Plain sitemaps without the `news:` block are accepted too; their items
//! carry empty metadata.

use quick_xml::DeError;
use quick_xml::Reader;
use quick_xml::de::from_str;
use quick_xml::events::Event;
use serde::de::Error as _;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::error::SourceError;
use crate::models::ItemRecord;

#[derive(Debug, Deserialize)]
struct UrlSet {
    #[serde(rename = "url", default)]
    urls: Vec<SitemapUrl>,
}

#[derive(Debug, Deserialize)]
struct SitemapUrl {
    #[serde(default)]
    loc: Option<String>,
    #[serde(default, alias = "news:news")]
    news: Option<NewsBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct NewsBlock {
    #[serde(default, alias = "news:publication_date")]
    publication_date: String,
    #[serde(default, alias = "news:title")]
    title: String,
    #[serde(default, alias = "news:keywords")]
    keywords: String,
}

/// Read a sitemap file and extract its items.
///
/// # Errors
///
/// - [`SourceError::MissingSourceFile`] if the file does not exist or cannot be read
/// - [`SourceError::MalformedDocument`] if the content is not a `<urlset>` document
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub async fn load_items(path: impl AsRef<Path>) -> Result<Vec<ItemRecord>, SourceError> {
    let path = path.as_ref();
    let xml = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourceError::MissingSourceFile {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(bytes = xml.len(), "Read sitemap");
    parse_sitemap(&xml)
}

/// Extract items from sitemap XML, in document order.
///
/// Entries without a usable `<loc>` are skipped with a warning. Entries whose
/// `<loc>` is not a valid absolute URL are kept: verifying them records a
/// failure outcome, which is more useful than dropping them silently.
pub fn parse_sitemap(xml: &str) -> Result<Vec<ItemRecord>, SourceError> {
    if xml.trim().is_empty() {
        warn!("Sitemap document is empty; nothing to verify");
        return Ok(Vec::new());
    }

    if let Some(root) = root_element(xml) {
        if root != "urlset" {
            let e = DeError::custom(format!("expected <urlset> root element, found <{root}>"));
            return Err(e.into());
        }
    }

    let urlset: UrlSet = from_str(xml)?;
    let total = urlset.urls.len();

    let mut items = Vec::with_capacity(total);
    for (position, entry) in urlset.urls.into_iter().enumerate() {
        let loc = entry.loc.as_deref().map(str::trim).unwrap_or_default();
        if loc.is_empty() {
            warn!(position, "Sitemap entry has no <loc>; skipping");
            continue;
        }
        if let Err(e) = Url::parse(loc) {
            warn!(position, url = %loc, error = %e, "Sitemap entry is not an absolute URL");
        }

        let news = entry.news.unwrap_or_default();
        items.push(ItemRecord {
            url: loc.to_string(),
            title: news.title.trim().to_string(),
            publication_date: news.publication_date.trim().to_string(),
            keywords: news.keywords.trim().to_string(),
        });
    }

    info!(count = items.len(), skipped = total - items.len(), "Extracted sitemap items");
    Ok(items)
}

/// Local name of the first element, skipping the declaration, doctype and comments.
///
/// `None` when the prolog cannot be read; the deserializer then reports the error.
fn root_element(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Some(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}
