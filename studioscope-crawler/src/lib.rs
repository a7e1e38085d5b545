pub mod discover;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod limiter;
pub mod outcome;

pub use discover::discover_about_links;
pub use error::CrawlError;
pub use extract::clean_text;
pub use fetcher::Fetcher;
pub use limiter::RateLimiter;
pub use outcome::FetchOutcome;
