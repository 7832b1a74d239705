use crate::ops::{DEFAULT_MODULE_NAME, DEFAULT_SOURCE_URL, SourceTarget};
use chrono::NaiveDate;
use clap::{Args, Parser};
use std::path::PathBuf;

/// Update the tag and commit of the launcher source in a Flatpak manifest.
#[derive(Parser, Debug)]
#[command(name = "update-flatpak-manifest", version)]
pub struct ManifestCli {
    /// Flatpak manifest (YAML) to update in place
    #[arg(value_name = "CONFIG_FILE")]
    pub manifest_file: PathBuf,

    /// New tag, e.g. 1.1.0
    #[arg(value_name = "NEW_TAG")]
    pub new_tag: String,

    /// New commit hash
    #[arg(value_name = "NEW_COMMIT")]
    pub new_commit: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Update the Flatpak manifest and stamp the new release into the AppStream
/// metadata.
#[derive(Parser, Debug)]
#[command(name = "update-flatpak-release", version)]
pub struct ReleaseCli {
    /// Flatpak manifest (YAML) to update in place
    #[arg(value_name = "CONFIG_FILE")]
    pub manifest_file: PathBuf,

    /// AppStream metadata (XML) whose latest release is rewritten
    #[arg(value_name = "APPSTREAM_FILE")]
    pub appstream_file: PathBuf,

    /// New tag, also used as the release version
    #[arg(value_name = "NEW_TAG")]
    pub new_tag: String,

    /// New commit hash
    #[arg(value_name = "NEW_COMMIT")]
    pub new_commit: String,

    /// Release date to record (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Name of the manifest module that owns the source
    #[arg(long = "module", value_name = "NAME", default_value = DEFAULT_MODULE_NAME)]
    pub module: String,

    /// Url of the source entry to update
    #[arg(long, value_name = "URL", default_value = DEFAULT_SOURCE_URL)]
    pub source_url: String,

    /// Show what would change without writing any file
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

impl CommonArgs {
    pub fn target(&self) -> SourceTarget {
        SourceTarget::new(self.module.clone(), self.source_url.clone())
    }
}
