//! Backend connection configuration.
//!
//! Two parameters are read at startup: the data-store endpoint and its
//! access key. A missing value is a warning logged at init, not a hard
//! failure, so the public pages still render (remote calls will then fail
//! per-interaction and surface inline).

/// Connection parameters for the hosted backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    /// Build from whatever the environment supplied. Missing values become
    /// empty strings; [`warnings`](Self::warnings) reports them.
    pub fn new(url: Option<String>, anon_key: Option<String>) -> Self {
        Self {
            url: url.unwrap_or_default(),
            anon_key: anon_key.unwrap_or_default(),
        }
    }

    /// Startup warnings for missing parameters.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.url.is_empty() {
            warnings.push("Backend URL is not configured; remote calls will fail".to_string());
        }
        if self.anon_key.is_empty() {
            warnings.push("Backend access key is not configured; remote calls will fail".to_string());
        }
        warnings
    }

    /// Whether both parameters are present.
    pub fn is_complete(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }
}
