use golem_citation::config::{get_config_or, with_config_key};
use golem_citation::{CitationError, SearchResult, SearchTarget, LOGGING_STATE};

pub mod client;
pub mod conversions;

pub use client::{OpenLawsApi, OpenLawsDivision};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenLawsConfig {
    pub api_url: String,
    pub api_key: String,
    /// Character cutoff for the UI excerpt.
    pub slim_len: usize,
}

impl OpenLawsConfig {
    pub const API_URL_VAR: &'static str = "OPENLAWS_API_URL";
    pub const API_KEY_VAR: &'static str = "OPENLAWS_API_KEY";
    pub const SLIM_LEN_VAR: &'static str = "OPENLAWS_SLIM_LEN";
    pub const DEFAULT_SLIM_LEN: usize = 360;

    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            slim_len: Self::DEFAULT_SLIM_LEN,
        }
    }

    pub fn with_slim_len(mut self, slim_len: usize) -> Self {
        self.slim_len = slim_len;
        self
    }

    pub fn from_env() -> Result<Self, CitationError> {
        with_config_key(Self::API_URL_VAR, Err, |api_url| {
            with_config_key(Self::API_KEY_VAR, Err, |api_key| {
                let slim_len = get_config_or(Self::SLIM_LEN_VAR, Self::DEFAULT_SLIM_LEN)?;
                Ok(Self::new(api_url, api_key).with_slim_len(slim_len))
            })
        })
    }
}

/// OpenLaws citation lookup, configured from the environment on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenLaws;

impl SearchTarget for OpenLaws {
    fn search(&self, search_statement: &str) -> Result<Vec<SearchResult>, CitationError> {
        LOGGING_STATE.with_borrow_mut(|state| state.init());

        let config = OpenLawsConfig::from_env()?;
        OpenLawsApi::new(config)?.search(search_statement)
    }
}

/// Runs `search_statement` (`"<jurisdiction>|<citation>"`) against OpenLaws.
pub fn search(search_statement: &str) -> Result<Vec<SearchResult>, CitationError> {
    OpenLaws.search(search_statement)
}
