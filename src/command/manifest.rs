use crate::cli::ManifestCli;
use crate::error::Result;
use crate::ops::{ChangeSet, update_manifest};
use colored::Colorize;

pub fn execute(args: ManifestCli) -> Result<()> {
    let target = args.common.target();
    log::debug!(
        "Target source: {} in module '{}'",
        target.url,
        target.module
    );

    let edit = update_manifest(
        &args.manifest_file,
        &target,
        &args.new_tag,
        &args.new_commit,
    )?;

    let mut changes = ChangeSet::new(args.common.dry_run);
    changes.stage(edit);
    changes.commit()?;

    changes.print_summary(&super::working_dir());

    if !args.common.dry_run {
        println!(
            "{} {} tag to {} and commit to {} in {}",
            "Updated".green().bold(),
            target.label(),
            args.new_tag.green().bold(),
            args.new_commit.green().bold(),
            args.manifest_file.display()
        );
    }

    Ok(())
}
