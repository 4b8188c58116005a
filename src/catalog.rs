//! Catalog parsing, fetching and caching
//!
//! The catalog is a flat text file, one book per line in the form
//! `"<name> <id>"`. Lines are appended over time, so the parsed list is
//! reversed to put the most recent books first.

use crate::constants::{ARTICLE_BASE_URL, STORAGE_KEY};
use crate::db::{CachedValue, Database};
use crate::error::CatalogError;
use tracing::{debug, warn};

/// One parsed catalog line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub name: String,
}

impl Entry {
    pub fn url(&self) -> String {
        article_url(&self.id)
    }
}

/// A line that did not end in a whitespace-separated run of digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number within the trimmed catalog text
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub entries: Vec<Entry>,
    pub skipped: Vec<SkippedLine>,
}

/// Public detail page for a book id
pub fn article_url(id: &str) -> String {
    format!("{}/{}", ARTICLE_BASE_URL, id)
}

fn parse_line(line: &str) -> Option<Entry> {
    let line = line.trim();
    let split = line.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let (head, id) = line.split_at(split);
    if id.is_empty() || !head.ends_with(char::is_whitespace) {
        return None;
    }
    Some(Entry {
        id: id.to_string(),
        name: head.trim().to_string(),
    })
}

/// Parse raw catalog text. Blank lines are ignored, malformed lines are
/// skipped and reported in [`Catalog::skipped`].
pub fn parse_catalog(text: &str) -> Catalog {
    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for (idx, line) in text.trim().split('\n').collect::<Vec<_>>().into_iter().enumerate().rev() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(entry) => entries.push(entry),
            None => skipped.push(SkippedLine {
                line: idx + 1,
                text: line.trim().to_string(),
            }),
        }
    }
    skipped.reverse();

    if let Some(first) = skipped.first() {
        warn!(
            count = skipped.len(),
            first_line = first.line,
            first_text = %first.text,
            "Skipped malformed catalog lines"
        );
    }
    debug!(entries = entries.len(), "Catalog parsed");

    Catalog { entries, skipped }
}

/// Download the raw catalog text
pub async fn fetch_catalog_text(
    client: &reqwest::Client,
    url: &str,
) -> Result<String, CatalogError> {
    debug!(url = url, "Fetching catalog");
    let response = client.get(url).send().await?;
    let status = response.status();
    debug!(status = %status, "Catalog response received");
    if !status.is_success() {
        return Err(CatalogError::Status(status.as_u16()));
    }
    let text = response.text().await?;
    debug!(bytes = text.len(), "Catalog downloaded");
    Ok(text)
}

pub fn read_cache(db: &Database) -> Result<Option<CachedValue>, CatalogError> {
    Ok(db.get_cached(STORAGE_KEY)?)
}

/// Persist raw catalog text, refusing anything over `quota` bytes
pub fn write_cache(db: &Database, text: &str, quota: usize) -> Result<(), CatalogError> {
    if text.len() > quota {
        return Err(CatalogError::CacheQuota {
            size: text.len(),
            quota,
        });
    }
    db.set_cached(STORAGE_KEY, text)?;
    Ok(())
}

/// Cached catalog text, if any. The cache is best effort, so a failing
/// read is logged and reported as a miss.
pub fn load_cached(db: &Database) -> Option<CachedValue> {
    match read_cache(db) {
        Ok(Some(cached)) => {
            debug!(bytes = cached.value.len(), "Catalog found in cache");
            Some(cached)
        }
        Ok(None) => {
            debug!("Catalog not cached");
            None
        }
        Err(e) => {
            warn!(error = %e, "Failed to read catalog cache, treating as a miss");
            None
        }
    }
}

/// Cache the result of a finished fetch, then parse it. The stored copy is
/// only replaced once the new text has been written successfully.
pub fn store_fetched(
    db: &Database,
    fetched: Result<String, CatalogError>,
    quota: usize,
) -> Result<Catalog, CatalogError> {
    let text = fetched?;
    write_cache(db, &text, quota)?;
    Ok(parse_catalog(&text))
}
