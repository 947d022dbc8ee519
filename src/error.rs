// Error types for classification and configuration ingestion.

use thiserror::Error;

/// Failures surfaced by `Classifier::classify` / `classify_all`. Both are
/// synchronous and final; there is no retry path anywhere in this crate.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// The rule list has no `others` entry while a fallback was required.
    /// This indicates a broken configuration; the ingestion boundary
    /// (`Config::validate`) rejects such rule lists eagerly, this variant
    /// covers callers that assemble rule slices directly.
    #[error("no fallback rule with type \"others\" in the rule list")]
    MissingFallbackRule,

    /// The external rule matcher failed. A matcher defect must not be
    /// masked as "no match", so the error aborts the whole call.
    #[error("rule matcher failed on rule {index}")]
    Matcher {
        index: usize,
        #[source]
        source: anyhow::Error,
    },
}

/// Failures at the configuration ingestion boundary.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("rule list has no fallback entry with type \"others\"")]
    MissingFallbackRule,
}
