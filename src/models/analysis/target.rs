use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Timing facts reported by whoever fetched the page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageTiming {
    pub load_time_secs: Option<f64>,
    pub dom_content_loaded_secs: Option<f64>,
    pub first_contentful_paint_ms: Option<f64>,
    pub largest_contentful_paint_ms: Option<f64>,
}

impl PageTiming {
    pub fn is_empty(&self) -> bool {
        self.load_time_secs.is_none()
            && self.dom_content_loaded_secs.is_none()
            && self.first_contentful_paint_ms.is_none()
            && self.largest_contentful_paint_ms.is_none()
    }
}

/// One fetched page. Built once per request and only read afterwards.
#[derive(Debug, Clone)]
pub struct AnalysisTarget {
    pub url: String,
    pub html: String,
    /// Response headers, names lower-cased.
    pub headers: HashMap<String, String>,
    pub timing: PageTiming,
}

impl AnalysisTarget {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        AnalysisTarget {
            url: url.into(),
            html: html.into(),
            headers: HashMap::new(),
            timing: PageTiming::default(),
        }
    }

    pub fn with_headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        self.headers = headers
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v.into()))
            .collect();
        self
    }

    pub fn with_timing(mut self, timing: PageTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}
