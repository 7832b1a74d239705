mod appstream;
mod changeset;
mod manifest;

pub use appstream::{RELEASE_DATE_FORMAT, XML_DECLARATION, update_appstream};
pub use changeset::{ChangeSet, FileEdit};
pub use manifest::{
    DEFAULT_MODULE_NAME, DEFAULT_SOURCE_URL, SourceTarget, set_source_revision, update_manifest,
};
