//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and XML errors, and provides semantic variants
//! for the precondition checks and template lookups performed by the pipeline.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    #[error("Template file does not exist: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("Encoder binary does not exist: {}", path.display())]
    EncoderNotFound { path: PathBuf },

    #[error("No <text> element with id=\"{id}\" in template {}", path.display())]
    FrameNumberNotFound { id: String, path: PathBuf },

    #[error("Template {} ends with {open} unclosed element(s)", path.display())]
    UnclosedElements { path: PathBuf, open: usize },

    #[error("Frame count {count} exceeds the maximum of {max} frames")]
    TooManyFrames { count: u64, max: u64 },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },
}

impl Error {
    /// True for failures detected while checking inputs, before any frame is produced.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::TemplateNotFound { .. }
                | Error::EncoderNotFound { .. }
                | Error::TooManyFrames { .. }
                | Error::InvalidArgument { .. }
        )
    }
}
