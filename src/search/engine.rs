use serde::{Deserialize, Serialize};
use url::{Url, form_urlencoded};

use super::SearchError;

/// Placeholder replaced by the encoded query in engine URL templates
pub const SEARCH_TERMS: &str = "{searchTerms}";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchEngine {
    pub identifier: String,
    pub name: String,
    pub search_template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions_template: Option<String>,
}

impl SearchEngine {
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        search_template: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            search_template: search_template.into(),
            suggestions_template: None,
        }
    }

    pub fn with_suggestions(mut self, template: impl Into<String>) -> Self {
        self.suggestions_template = Some(template.into());
        self
    }

    pub fn search_url(&self, query: &str) -> String {
        fill_template(&self.search_template, query)
    }

    pub fn suggestions_url(&self, query: &str) -> Option<String> {
        self.suggestions_template
            .as_deref()
            .map(|template| fill_template(template, query))
    }

    /// `scheme://host` of the engine's search page
    pub fn resource_url(&self) -> Result<String, SearchError> {
        let search_url = self.search_url("");
        let url = Url::parse(&search_url).map_err(|err| SearchError::InvalidUrl {
            url: search_url.clone(),
            reason: err.to_string(),
        })?;
        let host = url.host_str().ok_or_else(|| SearchError::InvalidUrl {
            url: search_url.clone(),
            reason: "missing host".to_string(),
        })?;
        Ok(format!("{}://{}", url.scheme(), host))
    }
}

/// Form-encode `query` (spaces become `+`)
pub fn encode_query(query: &str) -> String {
    form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

fn fill_template(template: &str, query: &str) -> String {
    template.replace(SEARCH_TERMS, &encode_query(query))
}
