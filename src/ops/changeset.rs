use crate::error::{BumpError, Result};
use crate::fs::write_atomic;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// The in-memory result of rewriting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEdit {
    pub(crate) path: PathBuf,
    pub(crate) original: String,
    pub(crate) updated: String,
}

impl FileEdit {
    pub fn new(path: PathBuf, original: String, updated: String) -> Self {
        Self {
            path,
            original,
            updated,
        }
    }

    /// True when writing the edit would alter the file.
    pub fn is_change(&self) -> bool {
        self.original != self.updated
    }
}

/// Edits staged in memory and written together once every document has
/// been located and rewritten.
///
/// Writes are atomic per file. There is no rollback: if the second write
/// fails the first one stays.
#[must_use = "ChangeSet must be committed"]
pub struct ChangeSet {
    edits: Vec<FileEdit>,
    unchanged: Vec<PathBuf>,
    dry_run: bool,
    committed: bool,
}

impl ChangeSet {
    pub fn new(dry_run: bool) -> Self {
        Self {
            edits: Vec::new(),
            unchanged: Vec::new(),
            dry_run,
            committed: false,
        }
    }

    pub fn stage(&mut self, edit: FileEdit) {
        if !edit.is_change() {
            log::debug!("File content unchanged, skipping: {}", edit.path.display());
            self.unchanged.push(edit.path);
            return;
        }

        if self.dry_run {
            log::info!("Would update: {}", edit.path.display());
        } else {
            log::debug!("Staging update for: {}", edit.path.display());
        }

        self.edits.push(edit);
    }

    /// Writes every staged edit, in staging order.
    ///
    /// Takes `&mut self` so the summary can still be printed afterwards.
    pub fn commit(&mut self) -> Result<()> {
        if self.committed {
            return Err(BumpError::AlreadyCommitted);
        }

        if !self.dry_run {
            for edit in &self.edits {
                write_atomic(&edit.path, &edit.updated)?;
            }
        }

        self.committed = true;
        Ok(())
    }

    /// Prints the files that were (or would be) written, relative to `base`.
    pub fn print_summary(&self, base: &Path) {
        let display_path = |path: &Path| -> String {
            let relative = pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf());
            relative.to_string_lossy().replace('\\', "/")
        };

        if self.dry_run {
            println!("{}", "DRY RUN - No changes will be made".yellow().bold());
        }

        for edit in &self.edits {
            if self.dry_run {
                println!("   • {}", display_path(&edit.path).dimmed());
            } else {
                println!("   {} {}", "✓".green(), display_path(&edit.path).dimmed());
            }
        }

        for path in &self.unchanged {
            println!("   - {} {}", display_path(path).dimmed(), "(unchanged)".dimmed());
        }

        if self.dry_run && !self.edits.is_empty() {
            let count = self.edits.len();
            println!(
                "{} {} will be modified. Run without {} to apply.",
                count.to_string().cyan().bold(),
                if count > 1 { "files" } else { "file" },
                "--dry-run".cyan()
            );
        }
    }
}

impl Drop for ChangeSet {
    fn drop(&mut self) {
        if !self.committed && !self.edits.is_empty() && !self.dry_run {
            log::warn!("ChangeSet dropped without commit - changes were not applied");
        }
    }
}
