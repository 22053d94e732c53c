use crate::archive::Archiver;
use crate::context::Context;
use crate::manifest::Manifest;
use crate::result::Result;
use crate::{tpl, utils, version};
use std::path::PathBuf;
use time::Date;

/// Build the release archive and return its path
pub fn make_dist(ctx: &Context, manifest: &Manifest) -> Result<PathBuf> {
    make_dist_on(ctx, manifest, utils::today())
}

/// Same as [`make_dist`], stamping the archive with `date`
pub fn make_dist_on(ctx: &Context, manifest: &Manifest, date: Date) -> Result<PathBuf> {
    let output_dir = ctx.resolve(&manifest.output_folder);
    utils::ensure_dir(&output_dir)?;

    let version = version::read(&ctx.resolve(&manifest.version_file))?;
    let filename = tpl::archive_filename(&manifest.filename, &manifest.product, &version, date)?;
    let output = output_dir.join(filename);

    if ctx.verbose {
        cliclack::log::info(format!(
            "{} {} from {}",
            manifest.product,
            version,
            ctx.root_dir.display()
        ))?;
    }

    utils::remove_stale(&output)?;

    let written = Archiver::scoped(&output, &ctx.root_dir, &manifest.build_output, |archiver| {
        manifest
            .entries
            .iter()
            .try_for_each(|entry| archiver.add(entry))
    })?;

    if ctx.verbose {
        cliclack::log::info(format!("{} files packaged", written))?;
    }

    Ok(output)
}
