use crate::client::OpenLawsDivision;
use golem_citation::{CitationError, SearchResult};

/// Splits `"<jurisdiction>|<citation>"` into its normalized parts.
pub fn parse_search_statement(search_statement: &str) -> Result<(String, String), CitationError> {
    let parts: Vec<&str> = search_statement.split('|').collect();
    match parts.as_slice() {
        [jurisdiction, citation] => Ok((
            normalize_jurisdiction(jurisdiction),
            normalize_citation(citation),
        )),
        _ => Err(CitationError::InputFormat(format!(
            "expected `<jurisdiction>|<citation>` with exactly one `|`, got {:?}",
            search_statement
        ))),
    }
}

// TODO: check against the set of jurisdictions OpenLaws actually serves
pub fn normalize_jurisdiction(jurisdiction: &str) -> String {
    let jurisdiction = jurisdiction.trim().to_uppercase();
    if jurisdiction.starts_with("US") || jurisdiction.starts_with("FED") {
        "FED".to_string()
    } else {
        jurisdiction
    }
}

pub fn normalize_citation(citation: &str) -> String {
    citation.trim().to_string()
}

pub fn division_to_search_result(
    citation: &str,
    division: OpenLawsDivision,
    slim_len: usize,
) -> SearchResult {
    let prompt_text = prompt_text(citation, &division.plaintext_content, &division.source_url);
    let ui_text = ui_text(citation, &division.plaintext_content, slim_len);

    // openlaws_url links currently require auth, so the UI links to the source instead.
    SearchResult::builder()
        .ui_url(division.source_url.clone())
        .name(division.name)
        .openlaws_url(division.url)
        .path(division.path)
        .source_url(division.source_url)
        .text(division.plaintext_content)
        .prompt_text(prompt_text)
        .ui_text(ui_text)
        .build()
}

/// ```text
/// [1] 12 CFR § 1002.1 is as follows:
/// {text}
/// Source: {source_url}
/// ```
pub fn prompt_text(citation: &str, text: &str, source_url: &str) -> String {
    format!("[1] {citation} is as follows:\n{text}\nSource: {source_url}\n\n")
}

/// `[1] 12 CFR § 1002.1 - {first slim_len characters of text}`
pub fn ui_text(citation: &str, text: &str, slim_len: usize) -> String {
    let excerpt = match text.char_indices().nth(slim_len) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    };
    format!("[1] {citation} - {excerpt}")
}
