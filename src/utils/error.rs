use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to get {url}: {source}")]
    RequestError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unknown status code for {url}: {status}")]
    StatusError { url: String, status: u16 },

    #[error("Failed to decode from {url}: {source}")]
    DecodeError {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No arcades found from {url}")]
    EmptyResultError { url: String },

    #[error("Failed to output: {0}")]
    KmlError(#[from] kml::Error),

    #[error("Failed to output: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Filesystem,
    Network,
    Decode,
    Data,
    Serialization,
    Configuration,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) => ErrorCategory::Filesystem,
            EtlError::RequestError { .. } | EtlError::StatusError { .. } => ErrorCategory::Network,
            EtlError::DecodeError { .. } => ErrorCategory::Decode,
            EtlError::EmptyResultError { .. } => ErrorCategory::Data,
            EtlError::KmlError(_) | EtlError::XmlError(_) => ErrorCategory::Serialization,
            EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Filesystem => "Check that the output directory is writable",
            ErrorCategory::Network => "Check network access and the API endpoint, then rerun",
            ErrorCategory::Decode => "The API response format may have changed",
            ErrorCategory::Data => "The API may be temporarily empty; rerun later",
            ErrorCategory::Serialization => "Check the arcade data for invalid characters",
            ErrorCategory::Configuration => "Run with --help to see valid options",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
