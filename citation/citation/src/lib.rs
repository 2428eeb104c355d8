use std::cell::RefCell;
use std::str::FromStr;

pub mod config;
pub mod error;
pub mod result;

pub use crate::error::CitationError;
pub use crate::result::{SearchResult, SearchResultBuilder};

/// A backend that turns a search statement into normalized results.
pub trait SearchTarget {
    fn search(&self, search_statement: &str) -> Result<Vec<SearchResult>, CitationError>;
}

pub struct LoggingState {
    logging_initialized: bool,
}

impl LoggingState {
    /// Initializes logging based on the `GOLEM_CITATION_LOG` environment variable.
    pub fn init(&mut self) {
        if !self.logging_initialized {
            let max_level: log::LevelFilter =
                log::LevelFilter::from_str(&std::env::var("GOLEM_CITATION_LOG").unwrap_or_default())
                    .unwrap_or(log::LevelFilter::Warn);
            // A successful init sets the max level; a host logger keeps its own.
            let _ = env_logger::Builder::new().filter_level(max_level).try_init();
            self.logging_initialized = true;
        }
    }
}

thread_local! {
    pub static LOGGING_STATE: RefCell<LoggingState> = const { RefCell::new(LoggingState {
        logging_initialized: false,
    }) };
}
