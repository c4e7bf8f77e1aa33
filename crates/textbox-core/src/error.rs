//! Error types for textbox

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TextBoxError>;

/// Main error type for textbox
#[derive(Debug, Error)]
pub enum TextBoxError {
    #[error("Measurement failed: {0}")]
    Metrics(#[from] MetricsError),

    #[error("Surface operation failed: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Invalid value for {name}: {value:?}")]
    InvalidAttribute { name: &'static str, value: String },

    #[error("Other error: {0}")]
    Other(String),
}

impl TextBoxError {
    pub(crate) fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            name,
            value: value.into(),
        }
    }
}

/// Metrics provider errors
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Invalid font descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Provider returned unusable measurement: {width}x{height}")]
    InvalidMeasurement { width: f32, height: f32 },

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Drawing surface errors
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid font descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("No font registered for family: {0}")]
    MissingFont(String),

    #[error("No font set on the surface")]
    NoFont,

    #[error("Path building failed")]
    PathBuildingFailed,

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Outline extraction failed for glyph {0}")]
    OutlineExtractionFailed(u32),

    #[error("Backend error: {0}")]
    Backend(String),
}
