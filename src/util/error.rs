// EssaySort - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Classification, rendering, filtering and search are total and never
// produce errors; everything here comes from I/O or wiring seams.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all EssaySort operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum EssaySortError {
    /// Loading the input page failed.
    Source(SourceError),

    /// Export operation failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Preference store read or write failed.
    Preference(PreferenceError),

    /// Event handler registration failed.
    Event(EventError),
}

impl fmt::Display for EssaySortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "Source error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Preference(e) => write!(f, "Preference error: {e}"),
            Self::Event(e) => write!(f, "Event error: {e}"),
        }
    }
}

impl std::error::Error for EssaySortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Preference(e) => Some(e),
            Self::Event(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Source errors
// ---------------------------------------------------------------------------

/// Errors related to loading the page that holds the source anchors.
#[derive(Debug)]
pub enum SourceError {
    /// I/O error reading the page file.
    Io { path: PathBuf, source: io::Error },

    /// Page file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// The page has no element with the source container id.
    MissingContainer { id: &'static str },

    /// The base URL used to resolve link targets is not a valid URL.
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read page '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Page '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::MissingContainer { id } => {
                write!(f, "Page has no element with id '{id}' holding the topic links")
            }
            Self::InvalidBaseUrl { url, source } => {
                write!(f, "Invalid base URL '{url}': {source}")
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidBaseUrl { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<SourceError> for EssaySortError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for EssaySortError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for EssaySortError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Preference errors
// ---------------------------------------------------------------------------

/// Errors related to the durable preference store.
#[derive(Debug)]
pub enum PreferenceError {
    /// I/O error writing the preference file.
    Io { path: PathBuf, source: io::Error },

    /// Preference map could not be serialised.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Preference I/O error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "Preference encoding error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PreferenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<PreferenceError> for EssaySortError {
    fn from(e: PreferenceError) -> Self {
        Self::Preference(e)
    }
}

// ---------------------------------------------------------------------------
// Event errors
// ---------------------------------------------------------------------------

/// Errors related to event handler registration.
#[derive(Debug)]
pub enum EventError {
    /// A handler is already registered for this element; handlers are
    /// registered exactly once at initialisation.
    AlreadyBound { element_id: String },
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyBound { element_id } => {
                write!(f, "Element '{element_id}' already has a handler bound")
            }
        }
    }
}

impl std::error::Error for EventError {}

impl From<EventError> for EssaySortError {
    fn from(e: EventError) -> Self {
        Self::Event(e)
    }
}

/// Convenience type alias for EssaySort results.
pub type Result<T> = std::result::Result<T, EssaySortError>;
