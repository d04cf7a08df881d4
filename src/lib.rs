//! Client and parsers for howlongtobeat.com play-time data.
//!
//! The extraction core is pure: it takes an already-parsed [`scraper::Html`]
//! tree and returns owned [`GameEntry`] values. Fetching the pages is the job
//! of [`HltbClient`], which can be skipped entirely when testing against
//! synthetic documents.

pub mod client;
pub mod config;
pub mod entry;
pub mod error;
pub mod extract;

pub use client::HltbClient;
pub use config::CatalogConfig;
pub use entry::GameEntry;
pub use error::{HltbError, Result};
