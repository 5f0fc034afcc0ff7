mod content_fetcher;

pub use content_fetcher::HttpContentFetcher;
