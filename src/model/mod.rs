//! Summary and source records as they arrive from the crawler and summarizer

use crate::detection::Verdict;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One crawled article contributing to a summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub body: String,
    pub source_name: String,
    #[serde(default)]
    pub url: String,
    pub published_at: DateTime<Utc>,
}

impl SourceDocument {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: String::new(),
            body: String::new(),
            source_name: String::new(),
            url: url.into(),
            published_at: Utc::now(),
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    /// Title, snippet and body as one comparison string
    pub fn comparison_text(&self) -> String {
        format!("{} {} {}", self.title, self.snippet, self.body)
    }

    /// Non-empty http(s) link
    pub fn has_web_link(&self) -> bool {
        let url = self.url.trim();
        !url.is_empty() && url.starts_with("http")
    }
}

/// An AI-generated summary awaiting validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummary {
    pub id: String,
    pub title: String,
    pub body: String,
    pub category: String,
    #[serde(default)]
    pub sources: Vec<SourceDocument>,
    pub generated_at: DateTime<Utc>,
    /// Produced without an LLM call; validation is skipped for these
    #[serde(default)]
    pub is_fallback: bool,
    #[serde(default)]
    pub validation_passed: Option<bool>,
    #[serde(default)]
    pub validation_details: Option<Verdict>,
}

impl CandidateSummary {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            category: category.into(),
            sources: Vec::new(),
            generated_at: Utc::now(),
            is_fallback: false,
            validation_passed: None,
            validation_details: None,
        }
    }

    pub fn with_sources(mut self, sources: Vec<SourceDocument>) -> Self {
        self.sources = sources;
        self
    }

    pub fn as_fallback(mut self) -> Self {
        self.is_fallback = true;
        self
    }

    /// Title and body as one comparison string
    pub fn comparison_text(&self) -> String {
        format!("{} {}", self.title, self.body)
    }

    /// Record the validation outcome on the summary
    pub fn attach_verdict(&mut self, verdict: Verdict) {
        self.validation_passed = Some(verdict.is_safe);
        self.validation_details = Some(verdict);
    }

    pub fn is_validated(&self) -> bool {
        self.validation_passed.is_some()
    }
}
