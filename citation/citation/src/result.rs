use serde::{Deserialize, Serialize};

/// A single normalized lookup result.
///
/// Every field is always present; anything a provider could not populate is
/// the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    openlaws_url: String,
    source_url: String,
    name: String,
    path: String,
    text: String,
    prompt_text: String,
    ui_text: String,
    ui_url: String,
}

impl SearchResult {
    pub fn builder() -> SearchResultBuilder {
        SearchResultBuilder::default()
    }

    /// Service-hosted URL of the law text. May require auth to open.
    pub fn openlaws_url(&self) -> &str {
        &self.openlaws_url
    }

    /// Canonical URL of the law text at its source.
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hierarchical path of the division within the law.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Block introducing this source inside a RAG prompt.
    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    /// Single line introducing this source in the UI.
    pub fn ui_text(&self) -> &str {
        &self.ui_text
    }

    /// URL the UI links to.
    pub fn ui_url(&self) -> &str {
        &self.ui_url
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchResultBuilder {
    openlaws_url: Option<String>,
    source_url: Option<String>,
    name: Option<String>,
    path: Option<String>,
    text: Option<String>,
    prompt_text: Option<String>,
    ui_text: Option<String>,
    ui_url: Option<String>,
}

impl SearchResultBuilder {
    pub fn openlaws_url(mut self, value: impl Into<String>) -> Self {
        self.openlaws_url = Some(value.into());
        self
    }

    pub fn source_url(mut self, value: impl Into<String>) -> Self {
        self.source_url = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn path(mut self, value: impl Into<String>) -> Self {
        self.path = Some(value.into());
        self
    }

    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.text = Some(value.into());
        self
    }

    pub fn prompt_text(mut self, value: impl Into<String>) -> Self {
        self.prompt_text = Some(value.into());
        self
    }

    pub fn ui_text(mut self, value: impl Into<String>) -> Self {
        self.ui_text = Some(value.into());
        self
    }

    pub fn ui_url(mut self, value: impl Into<String>) -> Self {
        self.ui_url = Some(value.into());
        self
    }

    /// Unset fields become empty strings.
    pub fn build(self) -> SearchResult {
        SearchResult {
            openlaws_url: self.openlaws_url.unwrap_or_default(),
            source_url: self.source_url.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            path: self.path.unwrap_or_default(),
            text: self.text.unwrap_or_default(),
            prompt_text: self.prompt_text.unwrap_or_default(),
            ui_text: self.ui_text.unwrap_or_default(),
            ui_url: self.ui_url.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_default_to_empty() {
        let result = SearchResult::builder().name("Reg B").build();

        assert_eq!(result.name(), "Reg B");
        assert_eq!(result.openlaws_url(), "");
        assert_eq!(result.source_url(), "");
        assert_eq!(result.path(), "");
        assert_eq!(result.text(), "");
        assert_eq!(result.prompt_text(), "");
        assert_eq!(result.ui_text(), "");
        assert_eq!(result.ui_url(), "");
    }

    #[test]
    fn test_serializes_all_fields() {
        let result = SearchResult::builder()
            .source_url("http://ecfr/x")
            .ui_url("http://ecfr/x")
            .build();

        let json = serde_json::to_value(&result).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 8);
        for key in [
            "openlaws_url",
            "source_url",
            "name",
            "path",
            "text",
            "prompt_text",
            "ui_text",
            "ui_url",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(object["ui_url"], "http://ecfr/x");
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let result: SearchResult =
            serde_json::from_str(r#"{"name":"Reg B","source_url":"http://ecfr/x"}"#).unwrap();

        assert_eq!(
            result,
            SearchResult::builder()
                .name("Reg B")
                .source_url("http://ecfr/x")
                .build()
        );
    }
}
