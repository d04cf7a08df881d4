use thiserror::Error;

#[derive(Error, Debug)]
pub enum HltbError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// A required element was missing from the page. The message names the
    /// page and the field so a source-format change can be diagnosed.
    #[error("Unexpected page structure: {0}")]
    Structure(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, HltbError>;
