use crate::cli::ReleaseCli;
use crate::error::Result;
use crate::ops::{ChangeSet, RELEASE_DATE_FORMAT, update_appstream, update_manifest};
use chrono::Local;
use colored::Colorize;

pub fn execute(args: ReleaseCli) -> Result<()> {
    let target = args.common.target();
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    log::debug!("Release date: {}", date.format(RELEASE_DATE_FORMAT));

    // Both documents are located and rewritten before either is written.
    let manifest = update_manifest(
        &args.manifest_file,
        &target,
        &args.new_tag,
        &args.new_commit,
    )?;
    let appstream = update_appstream(&args.appstream_file, &args.new_tag, date)?;

    let mut changes = ChangeSet::new(args.common.dry_run);
    changes.stage(manifest);
    changes.stage(appstream);
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
        println!(
            "{} release {} dated {} in {}",
            "Recorded".green().bold(),
            args.new_tag.green().bold(),
            date.format(RELEASE_DATE_FORMAT),
            args.appstream_file.display()
        );
    }

    Ok(())
}
