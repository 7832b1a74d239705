use crate::error::{BumpError, Result};
use crate::ops::changeset::FileEdit;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Module updated when `--module` is not given.
pub const DEFAULT_MODULE_NAME: &str = "xivlauncher";

/// Source url matched when `--source-url` is not given.
pub const DEFAULT_SOURCE_URL: &str = "https://github.com/goatcorp/XIVLauncher.Core.git";

/// Identifies the source record to update: a module by name, then a source
/// inside it by url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTarget {
    pub module: String,
    pub url: String,
}

impl Default for SourceTarget {
    fn default() -> Self {
        Self {
            module: DEFAULT_MODULE_NAME.to_string(),
            url: DEFAULT_SOURCE_URL.to_string(),
        }
    }
}

impl SourceTarget {
    pub fn new(module: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            url: url.into(),
        }
    }

    /// Human-readable name of the source, taken from the last url segment.
    ///
    /// `https://github.com/goatcorp/XIVLauncher.Core.git` → `XIVLauncher.Core`
    pub fn label(&self) -> &str {
        let trimmed = self.url.trim_end_matches('/');
        let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
        let label = last.strip_suffix(".git").unwrap_or(last);
        if label.is_empty() { &self.url } else { label }
    }
}

/// Reads the manifest at `path` and returns it with the target source's
/// `tag` and `commit` replaced.
///
/// Nothing is written; the returned edit is staged by the caller.
pub fn update_manifest(
    path: &Path,
    target: &SourceTarget,
    tag: &str,
    commit: &str,
) -> Result<FileEdit> {
    log::debug!("Reading manifest: {}", path.display());
    let original = fs::read_to_string(path)?;

    let mut doc: Value = serde_yaml::from_str(&original)?;
    set_source_revision(&mut doc, target, tag, commit)?;
    let updated = serde_yaml::to_string(&doc)?;

    Ok(FileEdit::new(path.to_path_buf(), original, updated))
}

/// Overwrites `tag` and `commit` on the first source matching `target`.
///
/// Module entries that are plain strings (includes of other manifest
/// files) are skipped. Sources without a `url` never match and are skipped
/// too: Flatpak `patch`, `file` and `script` sources carry a `path` or
/// inline content instead, so a missing `url` is not a malformed manifest.
///
/// # Errors
///
/// - [`BumpError::MalformedManifest`] if `modules` is missing, a module has
///   no `name`, or the matching module has no `sources`
/// - [`BumpError::SourceNotFound`] if nothing matches
pub fn set_source_revision(
    doc: &mut Value,
    target: &SourceTarget,
    tag: &str,
    commit: &str,
) -> Result<()> {
    let modules = doc
        .get_mut("modules")
        .and_then(Value::as_sequence_mut)
        .ok_or_else(|| BumpError::MalformedManifest("missing 'modules' list".to_string()))?;

    for (index, module) in modules.iter_mut().enumerate() {
        let Some(module) = module.as_mapping_mut() else {
            log::debug!("Skipping module #{} (not a mapping)", index);
            continue;
        };

        let name = module
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                BumpError::MalformedManifest(format!("module #{} has no 'name'", index))
            })?;
        if name != target.module {
            continue;
        }

        let sources = module
            .get_mut("sources")
            .and_then(Value::as_sequence_mut)
            .ok_or_else(|| {
                BumpError::MalformedManifest(format!(
                    "module '{}' has no 'sources' list",
                    target.module
                ))
            })?;

        for source in sources.iter_mut() {
            let Some(source) = source.as_mapping_mut() else {
                continue;
            };
            if source.get("url").and_then(Value::as_str) != Some(target.url.as_str()) {
                continue;
            }

            log::debug!(
                "Matched source {} in module '{}'",
                target.url,
                target.module
            );
            source.insert(Value::from("tag"), Value::from(tag));
            source.insert(Value::from("commit"), Value::from(commit));
            return Ok(());
        }
    }

    Err(BumpError::SourceNotFound {
        module: target.module.clone(),
        url: target.url.clone(),
    })
}
