use crate::context::Context;
use crate::error::Error;
use crate::manifest::{Manifest, MANIFEST_FILE};
use crate::result::Result;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tar::Builder;
use walkdir::WalkDir;

/// Filesystem side effects of a packaging run. Keeping them behind this
/// trait leaves [`plan`] and [`run`] as deterministic functions of the
/// version and product name, testable without touching the disk.
pub trait Packager {
    /// Replicate the tree at `src` into a freshly created `dst`,
    /// preserving relative paths. Entries whose file name is in
    /// `excludes` are skipped at any depth, subtrees included. Fails if
    /// `dst` already exists.
    fn copy_tree(&self, src: &Path, dst: &Path, excludes: &HashSet<OsString>) -> Result<()>;

    /// Archive `dir` into `archive`, with `dir`'s name as the top-level
    /// entry inside the archive.
    fn create_archive(&self, dir: &Path, archive: &Path) -> Result<()>;

    /// Remove `dir` and everything under it.
    fn remove_tree(&self, dir: &Path) -> Result<()>;
}

/// Output paths of a packaging run, fully determined before any side
/// effect happens.
pub struct ReleasePlan {
    /// `<hyphenated-product>-v<version>`; names both the staging
    /// directory and the archive
    pub identifier: String,
    pub staging_dir: PathBuf,
    pub archive_path: PathBuf,
}

pub fn plan(ctx: &Context, manifest: &Manifest, version: &str, gzip: bool) -> ReleasePlan {
    let identifier = manifest.release_identifier(version);
    let staging_dir = ctx.base_dir.join(&identifier);
    let suffix = if gzip { ".tar.gz" } else { ".tar" };
    let archive_path = ctx.base_dir.join(format!("{identifier}{suffix}"));

    ReleasePlan {
        identifier,
        staging_dir,
        archive_path,
    }
}

/// Stage, archive, clean up. On archival failure the staging tree is
/// preserved for inspection and the error names the leftover path.
pub fn run<P: Packager>(
    ctx: &Context,
    manifest: &Manifest,
    packager: &P,
    plan: &ReleasePlan,
    keep_staging: bool,
) -> Result<()> {
    let mut excludes: HashSet<OsString> =
        manifest.exclude.iter().map(OsString::from).collect();
    excludes.insert(OsString::from(MANIFEST_FILE));
    excludes.insert(OsString::from(plan.identifier.as_str()));
    if let Some(archive_name) = plan.archive_path.file_name() {
        excludes.insert(archive_name.to_os_string());
    }

    packager.copy_tree(&ctx.base_dir, &plan.staging_dir, &excludes)?;

    if let Err(source) = packager.create_archive(&plan.staging_dir, &plan.archive_path) {
        return Err(Error::ArchiveFailed {
            archive: plan.archive_path.clone(),
            staging: plan.staging_dir.clone(),
            source: Box::new(source),
        });
    }

    if !keep_staging {
        packager.remove_tree(&plan.staging_dir)?;
    }

    Ok(())
}

/// Production [`Packager`] working on the real filesystem
pub struct FsPackager {
    pub verbose: bool,
}

impl Packager for FsPackager {
    fn copy_tree(&self, src: &Path, dst: &Path, excludes: &HashSet<OsString>) -> Result<()> {
        match fs::create_dir(dst) {
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(Error::StagingExists(dst.to_path_buf()));
            }
            other => other?,
        }

        let walker = WalkDir::new(src)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| !excludes.contains(e.file_name()));

        for entry in walker {
            let entry = entry?;
            let rel = entry.path().strip_prefix(src).unwrap();
            let target = dst.join(rel);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)?;
            } else {
                if self.verbose {
                    println!("Copying {}", rel.display());
                }
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(entry.path(), &target)?;
            }
        }

        Ok(())
    }

    fn create_archive(&self, dir: &Path, archive: &Path) -> Result<()> {
        let file = File::create(archive)?;

        if archive.extension().is_some_and(|ext| ext == "gz") {
            let enc = GzEncoder::new(file, Compression::default());
            let mut tar = Builder::new(enc);
            append_tree(&mut tar, dir)?;
            tar.into_inner()?.finish()?;
        } else {
            let mut tar = Builder::new(file);
            append_tree(&mut tar, dir)?;
            tar.finish()?;
        }

        Ok(())
    }

    fn remove_tree(&self, dir: &Path) -> Result<()> {
        fs::remove_dir_all(dir)?;
        Ok(())
    }
}

fn append_tree<W: Write>(tar: &mut Builder<W>, dir: &Path) -> Result<()> {
    // The staging directory name becomes the archive's internal root.
    tar.append_dir_all(dir.file_name().unwrap(), dir)?;
    Ok(())
}
