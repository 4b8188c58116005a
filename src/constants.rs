//! Application constants and configuration

pub const APP_NAME: &str = "Gutenberg Search";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CATALOG_URL: &str = "https://cdn.mxpnl.com/static/misc/gutenberg-catalog.txt";
pub const ARTICLE_BASE_URL: &str = "https://www.gutenberg.org/ebooks";

/// Cache key the raw catalog text is stored under
pub const STORAGE_KEY: &str = "gutenberg-catalog";

/// Entries materialized per page while browsing without a search term
pub const PAGE_SIZE: usize = 50;

/// Terms up to this many characters do not filter
pub const SEARCH_TERM_THRESHOLD: usize = 3;

/// Default cache quota, roughly what browsers allow for local storage
pub const DEFAULT_CACHE_QUOTA: usize = 5 * 1024 * 1024;

/// Scroll-bottom tolerance in points
pub const SCROLL_BOTTOM_TOLERANCE: f32 = 1.0;
