use crate::conversions::{division_to_search_result, parse_search_statement};
use crate::OpenLawsConfig;
use golem_citation::error::{from_reqwest_error, malformed_response};
use golem_citation::{CitationError, SearchResult};
use log::{debug, trace};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderValue, ACCEPT};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The OpenLaws API client for looking up divisions by citation.
#[derive(Debug, Clone)]
pub struct OpenLawsApi {
    client: Client,
    base_url: Url,
    api_key: String,
    slim_len: usize,
}

/// The subset of an OpenLaws division response that gets normalized.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenLawsDivision {
    pub name: String,
    pub url: String,
    pub path: String,
    pub source_url: String,
    pub plaintext_content: String,
}

impl OpenLawsApi {
    pub fn new(config: OpenLawsConfig) -> Result<Self, CitationError> {
        let base_url = Url::parse(&config.api_url).map_err(|err| {
            CitationError::Configuration(format!(
                "Invalid OpenLaws API URL {}: {}",
                config.api_url, err
            ))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CitationError::Configuration(format!(
                "OpenLaws API URL cannot be a base: {}",
                config.api_url
            )));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| from_reqwest_error("Failed to initialize HTTP client", err))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
            slim_len: config.slim_len,
        })
    }

    /// Looks up `search_statement` (`"<jurisdiction>|<citation>"`) and returns
    /// at most one result. Any HTTP status >= 400 yields no results.
    pub fn search(&self, search_statement: &str) -> Result<Vec<SearchResult>, CitationError> {
        let (jurisdiction, citation) = parse_search_statement(search_statement)?;

        match self.get_division(&jurisdiction, &citation)? {
            Some(division) => Ok(vec![division_to_search_result(
                &citation,
                division,
                self.slim_len,
            )]),
            None => Ok(Vec::new()),
        }
    }

    pub fn get_division(
        &self,
        jurisdiction: &str,
        citation: &str,
    ) -> Result<Option<OpenLawsDivision>, CitationError> {
        let url = self.citations_url(jurisdiction, citation);
        trace!("Sending citation lookup to OpenLaws: {url}");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .bearer_auth(&self.api_key)
            .send()
            .map_err(|err| from_reqwest_error("Request failed", err))?;

        parse_response(response)
    }

    fn citations_url(&self, jurisdiction: &str, citation: &str) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["jurisdictions", jurisdiction, "citations"]);
        }
        url.query_pairs_mut().append_pair("query", citation);
        url
    }
}

fn parse_response(response: Response) -> Result<Option<OpenLawsDivision>, CitationError> {
    let status = response.status();
    if status.as_u16() >= 400 {
        debug!("OpenLaws returned {status}, treating as no results");
        return Ok(None);
    }

    let body = response
        .text()
        .map_err(|err| from_reqwest_error("Failed to read response body", err))?;

    serde_json::from_str::<OpenLawsDivision>(&body)
        .map(Some)
        .map_err(|err| malformed_response(format!("Failed to parse OpenLaws division: {err}")))
}
