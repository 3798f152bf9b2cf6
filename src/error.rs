//! # Conversion Error Handling
//!
//! Error types for the conversion library. Every failure that can happen while
//! converting one file is a [`ConvertError`]; the batch runner reports it with
//! the file name and moves on to the next file.
//!
//! ## Usage
//!
//! ```rust
//! use igframe::error::{ConvertError, HasRecoverySuggestion};
//!
//! let error = ConvertError::config("quality", "0", "must be between 1 and 100")
//!     .with_context("parsing alt options");
//!
//! assert_eq!(error.category(), "config");
//! assert!(error.recovery_suggestion().is_some());
//! ```

use std::{error::Error as StdError, fmt, path::Path};

/// Extra information attached to an error as it propagates.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Additional context about what was being attempted
    pub context: Option<String>,
    /// Suggested recovery action, overrides the per-category default
    pub recovery_suggestion: Option<String>,
}

/// Base error type for the conversion library
#[derive(Debug)]
pub enum ConvertError {
    /// Configuration validation errors
    Config {
        field: String,
        value: String,
        reason: String,
        context: ErrorContext,
    },
    /// I/O errors (opening, reading or creating files)
    Io {
        operation: String,
        path: Option<String>,
        source: std::io::Error,
        context: ErrorContext,
    },
    /// The file could be read but not decoded as an image
    Decode {
        path: String,
        source: image::ImageError,
        context: ErrorContext,
    },
    /// JPEG encoding failed
    Encode {
        path: String,
        source: image::ImageError,
        context: ErrorContext,
    },
    /// Geometry or pixel pipeline errors
    Processing {
        operation: String,
        reason: String,
        context: ErrorContext,
    },
}

/// Result alias used throughout the library
pub type ConvertResult<T> = Result<T, ConvertError>;

impl ConvertError {
    /// Create a configuration error
    pub fn config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Config {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            path: None,
            source,
            context: ErrorContext::default(),
        }
    }

    /// Create an I/O error tied to a path
    pub fn io_at(operation: impl Into<String>, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            path: Some(path.display().to_string()),
            source,
            context: ErrorContext::default(),
        }
    }

    pub fn decode(path: &Path, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.display().to_string(),
            source,
            context: ErrorContext::default(),
        }
    }

    pub fn encode(path: &Path, source: image::ImageError) -> Self {
        Self::Encode {
            path: path.display().to_string(),
            source,
            context: ErrorContext::default(),
        }
    }

    /// Create a processing error
    pub fn processing(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Processing {
            operation: operation.into(),
            reason: reason.into(),
            context: ErrorContext::default(),
        }
    }

    fn context_mut(&mut self) -> &mut ErrorContext {
        match self {
            Self::Config { context, .. }
            | Self::Io { context, .. }
            | Self::Decode { context, .. }
            | Self::Encode { context, .. }
            | Self::Processing { context, .. } => context,
        }
    }

    /// The attached context
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::Config { context, .. }
            | Self::Io { context, .. }
            | Self::Decode { context, .. }
            | Self::Encode { context, .. }
            | Self::Processing { context, .. } => context,
        }
    }

    /// Add additional context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context_mut().context = Some(context.into());
        self
    }

    /// Override the recovery suggestion
    pub fn with_recovery_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.context_mut().recovery_suggestion = Some(suggestion.into());
        self
    }

    /// Short, stable category name
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Io { .. } => "io",
            Self::Decode { .. } => "decode",
            Self::Encode { .. } => "encode",
            Self::Processing { .. } => "processing",
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config {
                field,
                value,
                reason,
                ..
            } => write!(f, "Invalid {} '{}': {}", field, value, reason)?,
            Self::Io {
                operation,
                path: Some(path),
                source,
                ..
            } => write!(f, "Failed to {} '{}': {}", operation, path, source)?,
            Self::Io {
                operation, source, ..
            } => write!(f, "Failed to {}: {}", operation, source)?,
            Self::Decode { path, source, .. } => {
                write!(f, "Failed to decode image '{}': {}", path, source)?
            }
            Self::Encode { path, source, .. } => {
                write!(f, "Failed to encode JPEG '{}': {}", path, source)?
            }
            Self::Processing {
                operation, reason, ..
            } => write!(f, "Processing failed during {}: {}", operation, reason)?,
        }
        if let Some(context) = &self.context().context {
            write!(f, " (while {})", context)?;
        }
        Ok(())
    }
}

impl StdError for ConvertError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ig_layout::cpu::ScaleError> for ConvertError {
    fn from(source: ig_layout::cpu::ScaleError) -> Self {
        Self::processing("resize", source.to_string())
    }
}

/// Errors that can tell the user what to do about them.
pub trait HasRecoverySuggestion {
    fn recovery_suggestion(&self) -> Option<&str>;
}

impl HasRecoverySuggestion for ConvertError {
    fn recovery_suggestion(&self) -> Option<&str> {
        if let Some(s) = &self.context().recovery_suggestion {
            return Some(s);
        }
        match self {
            Self::Config { .. } => Some("Check the command-line options"),
            Self::Io { .. } => Some("Check that the path exists and is accessible"),
            Self::Decode { .. } => Some("Make sure the file is a supported image (JPEG, PNG, ...)"),
            Self::Encode { .. } => Some("Check free disk space and write permissions"),
            Self::Processing { .. } => Some("Reduce padding or border relative to the canvas size"),
        }
    }
}
