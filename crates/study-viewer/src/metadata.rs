//! Part metadata lookup over HTTP
//!
//! Fetches `{base_url}/parts/{id}` as JSON `{ "title", "description" }`, with
//! the id percent-encoded as a single path segment.
//! Successful answers are cached for the lifetime of the describer. Any
//! failure falls through to the secondary describer; nothing is retried.

use std::collections::HashMap;

use parking_lot::Mutex;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use study_core::{PartDescriber, PartDescription};

use crate::config::MetadataConfig;

/// Everything but ASCII alphanumerics, `-`, `_` and `~` is escaped
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'~');

#[derive(Debug, Clone, thiserror::Error)]
pub enum MetadataError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Invalid response body: {0}")]
    Body(String),
}

/// Response body of the metadata service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartInfo {
    pub title: String,
    pub description: String,
}

impl From<PartInfo> for PartDescription {
    fn from(info: PartInfo) -> Self {
        PartDescription::Available {
            title: info.title,
            description: info.description,
        }
    }
}

/// Remote describer with a local fallback
pub struct HttpPartDescriber<F> {
    agent: ureq::Agent,
    base_url: String,
    cache: Mutex<HashMap<String, PartInfo>>,
    fallback: F,
}

impl<F: PartDescriber> HttpPartDescriber<F> {
    pub fn new(config: &MetadataConfig, fallback: F) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout()))
            .build()
            .into();

        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cache: Mutex::new(HashMap::new()),
            fallback,
        }
    }

    fn url_for(&self, part_id: &str) -> String {
        format!(
            "{}/parts/{}",
            self.base_url,
            utf8_percent_encode(part_id, PATH_SEGMENT)
        )
    }

    /// Fetch part metadata from the service, bypassing the cache
    pub fn fetch(&self, part_id: &str) -> Result<PartInfo, MetadataError> {
        let url = self.url_for(part_id);
        tracing::debug!("Fetching part metadata from {}", url);

        let mut response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| MetadataError::Request(e.to_string()))?;

        response
            .body_mut()
            .read_json::<PartInfo>()
            .map_err(|e| MetadataError::Body(e.to_string()))
    }

    pub fn cached(&self, part_id: &str) -> Option<PartInfo> {
        self.cache.lock().get(part_id).cloned()
    }
}

impl<F: PartDescriber> PartDescriber for HttpPartDescriber<F> {
    fn describe(&self, part_id: &str) -> PartDescription {
        if let Some(info) = self.cached(part_id) {
            return info.into();
        }

        match self.fetch(part_id) {
            Ok(info) => {
                self.cache.lock().insert(part_id.to_string(), info.clone());
                info.into()
            }
            Err(e) => {
                tracing::warn!("Part metadata unavailable for '{}': {}", part_id, e);
                self.fallback.describe(part_id)
            }
        }
    }
}
