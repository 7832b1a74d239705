pub mod manifest;
pub mod release;

use std::path::PathBuf;

/// Base for the paths shown in summaries.
fn working_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
