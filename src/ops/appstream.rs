//! AppStream release stamping.
//!
//! The document is streamed event by event and copied to the output
//! untouched, except for the first release entry inside the top-level
//! `<releases>` element, whose `version` and `date` attributes are replaced.
//! The XML declaration is always written first.

use crate::error::{BumpError, Result};
use crate::ops::changeset::FileEdit;
use chrono::NaiveDate;
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::errors::IllFormedError;
use quick_xml::events::{BytesDecl, BytesStart, BytesText, Event};
use std::fs;
use std::path::Path;

/// Declaration line every rewritten appstream file starts with.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Format of the `date` attribute.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Reads the appstream file at `path` and returns it with its latest
/// release set to `version` on `date`.
pub fn update_appstream(path: &Path, version: &str, date: NaiveDate) -> Result<FileEdit> {
    log::debug!("Reading appstream metadata: {}", path.display());
    let original = fs::read_to_string(path)?;

    let updated = stamp_release(&original, version, date).map_err(|e| match e {
        StampError::NoReleases => BumpError::ReleasesNotFound(path.to_path_buf()),
        StampError::NoEntry => BumpError::ReleaseEntryMissing(path.to_path_buf()),
        StampError::Bump(inner) => inner,
    })?;

    Ok(FileEdit::new(path.to_path_buf(), original, updated))
}

#[derive(Debug)]
enum StampError {
    NoReleases,
    NoEntry,
    Bump(BumpError),
}

impl From<BumpError> for StampError {
    fn from(err: BumpError) -> Self {
        StampError::Bump(err)
    }
}

impl From<quick_xml::Error> for StampError {
    fn from(err: quick_xml::Error) -> Self {
        StampError::Bump(err.into())
    }
}

impl From<std::io::Error> for StampError {
    fn from(err: std::io::Error) -> Self {
        StampError::Bump(err.into())
    }
}

impl From<anyhow::Error> for StampError {
    fn from(err: anyhow::Error) -> Self {
        StampError::Bump(err.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Releases {
    Searching,
    Inside,
    Stamped,
    Closed,
}

fn stamp_release(
    xml: &str,
    version: &str,
    date: NaiveDate,
) -> std::result::Result<String, StampError> {
    let date = date.format(RELEASE_DATE_FORMAT).to_string();
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::new());

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut leading = true;
    // Names of the elements currently open; the root element is `open[0]`.
    let mut open: Vec<String> = Vec::new();
    let mut releases = Releases::Searching;
    let mut found_entry = false;

    loop {
        let event = reader.read_event()?;

        if leading {
            leading = false;
            if matches!(event, Event::Decl(_)) {
                continue;
            }
            writer.write_event(Event::Text(BytesText::new("\n")))?;
        }

        match event {
            Event::Start(e) => {
                let depth = open.len();
                open.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                if depth == 1 && releases == Releases::Searching && is_releases(&e) {
                    log::debug!("Found <releases>");
                    releases = Releases::Inside;
                    writer.write_event(Event::Start(e))?;
                } else if depth == 2 && releases == Releases::Inside {
                    releases = Releases::Stamped;
                    found_entry = true;
                    writer.write_event(Event::Start(stamp(&e, version, &date)?))?;
                } else {
                    writer.write_event(Event::Start(e))?;
                }
            }
            Event::Empty(e) => {
                let depth = open.len();
                if depth == 1 && releases == Releases::Searching && is_releases(&e) {
                    log::debug!("Found empty <releases/>");
                    releases = Releases::Closed;
                    writer.write_event(Event::Empty(e))?;
                } else if depth == 2 && releases == Releases::Inside {
                    releases = Releases::Stamped;
                    found_entry = true;
                    writer.write_event(Event::Empty(stamp(&e, version, &date)?))?;
                } else {
                    writer.write_event(Event::Empty(e))?;
                }
            }
            Event::End(e) => {
                open.pop();
                if open.len() == 1 && matches!(releases, Releases::Inside | Releases::Stamped) {
                    releases = Releases::Closed;
                }
                writer.write_event(Event::End(e))?;
            }
            Event::Eof => {
                if let Some(unclosed) = open.pop() {
                    return Err(quick_xml::Error::IllFormed(IllFormedError::MissingEndTag(
                        unclosed,
                    ))
                    .into());
                }
                break;
            }
            other => writer.write_event(other)?,
        }
    }

    if releases == Releases::Searching {
        return Err(StampError::NoReleases);
    }
    if !found_entry {
        return Err(StampError::NoEntry);
    }

    let bytes = writer.into_inner();
    Ok(String::from_utf8(bytes).map_err(anyhow::Error::from)?)
}

fn is_releases(e: &BytesStart<'_>) -> bool {
    e.name().as_ref() == b"releases"
}

/// Copies `e` with `version` and `date` replaced in place, appending
/// whichever attribute was absent.
fn stamp(e: &BytesStart<'_>, version: &str, date: &str) -> Result<BytesStart<'static>> {
    let mut stamped = e.clone().into_owned();
    stamped.clear_attributes();

    let mut has_version = false;
    let mut has_date = false;

    for attr in e.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"version" => {
                has_version = true;
                stamped.push_attribute(("version", version));
            }
            b"date" => {
                has_date = true;
                stamped.push_attribute(("date", date));
            }
            key => {
                // Re-escaped for double quotes; the source may have used single ones.
                let key = std::str::from_utf8(key).map_err(anyhow::Error::from)?;
                let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
                stamped.push_attribute((key, &*value));
            }
        }
    }

    if !has_version {
        stamped.push_attribute(("version", version));
    }
    if !has_date {
        stamped.push_attribute(("date", date));
    }

    Ok(stamped)
}
