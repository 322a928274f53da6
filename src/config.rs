use serde::{Deserialize, Serialize};

use crate::Result;

/// Request-level defaults applied by [`crate::request::SearchRequest::with_settings`]
///
/// Unset fields (`None`, `false`) leave the request untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestSettings {
    pub size: Option<u64>,
    pub from: Option<u64>,
    /// Engine-side time budget, e.g. `"500ms"`
    pub timeout: Option<String>,
    pub explain: bool,
    pub version: bool,
    pub track_scores: bool,
    /// Render request documents with indentation
    pub pretty: bool,
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            size: Some(10), // Engine default page size
            from: None,
            timeout: None,
            explain: false,
            version: false,
            track_scores: false,
            pretty: false,
        }
    }
}

impl RequestSettings {
    /// Load settings from a JSON document; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply a request profile to these settings
    pub fn with_profile(mut self, profile: RequestProfile) -> Self {
        profile.apply_to(&mut self);
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_timeout(mut self, timeout: impl Into<String>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }
}

/// Settings presets for common request shapes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestProfile {
    /// Small pages with a tight time budget
    Interactive,
    /// Large pages, no time budget
    Export,
    /// Explanations, versions and readable output
    Debug,
}

impl RequestProfile {
    /// Page size for this profile
    pub fn size(&self) -> u64 {
        match self {
            RequestProfile::Interactive => 10,
            RequestProfile::Export => 1000,
            RequestProfile::Debug => 10,
        }
    }

    /// Time budget for this profile
    pub fn timeout(&self) -> Option<&'static str> {
        match self {
            RequestProfile::Interactive => Some("500ms"),
            RequestProfile::Export | RequestProfile::Debug => None,
        }
    }

    /// Apply this profile to a RequestSettings
    pub fn apply_to(&self, settings: &mut RequestSettings) {
        settings.size = Some(self.size());
        settings.timeout = self.timeout().map(str::to_string);
        if *self == RequestProfile::Debug {
            settings.explain = true;
            settings.version = true;
            settings.pretty = true;
        }
    }
}
