//! Error types for flatpak-bump.
//!
//! All operations return `Result<T>` which aliases `Result<T, BumpError>`.
//! Every variant ends the process with exit status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from manifest and appstream updates.
#[derive(Debug, Error)]
pub enum BumpError {
    /// Wrong positional arguments. Carries the rendered usage text.
    #[error("{0}")]
    Usage(String),

    /// The manifest does not have the expected shape.
    #[error("Malformed manifest: {0}")]
    MalformedManifest(String),

    /// No source with the target url under the target module.
    #[error("No source '{url}' found in module '{module}'")]
    SourceNotFound { module: String, url: String },

    /// The appstream document has no top-level `releases` element.
    #[error("No <releases> element found in {0}")]
    ReleasesNotFound(PathBuf),

    /// The `releases` element has no release entry to update.
    #[error("<releases> element in {0} has no release entry")]
    ReleaseEntryMissing(PathBuf),

    /// A change set was committed twice.
    #[error("Changes already committed")]
    AlreadyCommitted,

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML parse or serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// XML parse or serialization error.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed XML attribute.
    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BumpError {
    /// Process exit status for this error.
    ///
    /// All failure kinds share status 1 so CI scripts only need to check
    /// for success.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Structural problems with the input, as opposed to a well-formed
    /// document that simply lacks the target.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            BumpError::MalformedManifest(_)
                | BumpError::Yaml(_)
                | BumpError::Xml(_)
                | BumpError::XmlAttribute(_)
        )
    }
}

/// Result type alias for flatpak-bump operations.
pub type Result<T> = std::result::Result<T, BumpError>;
