mod args;
mod context;
mod error;
mod manifest;
mod packager;
mod result;
mod tpl;
mod utils;
mod version;

use args::Args;
use context::Context;
use manifest::Manifest;
use packager::FsPackager;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args {
        verbose,
        gzip,
        keep_staging,
        path,
    } = Args::parse();

    // Resolve the working directory
    let base_dir = utils::resolve_base_dir(path.as_deref())?;

    // Create context
    let ctx = Context::new(base_dir, verbose);

    // Use cliclack for nice UI
    cliclack::intro("relpack")?;

    // Load manifest
    let manifest = {
        let spinner = cliclack::spinner();
        spinner.start("Loading manifest...");
        match Manifest::load(&ctx) {
            Ok(m) => {
                spinner.stop(format!("Packaging {}", m.product_name));
                m
            }
            Err(e) => {
                spinner.error("Failed to load manifest");
                return Err(e);
            }
        }
    };

    // Extract the version before anything touches the filesystem
    let version = {
        let spinner = cliclack::spinner();
        spinner.start(format!(
            "Reading version from {}...",
            manifest.version_file.display()
        ));
        match version::extract(&manifest.version_file, &manifest.version_key, &manifest.product_name)
        {
            Ok(v) => {
                spinner.stop(format!("Version {}", v));
                v
            }
            Err(e) => {
                spinner.error("Version not found");
                return Err(e);
            }
        }
    };

    // Stage, archive, clean up
    let plan = packager::plan(&ctx, &manifest, &version, gzip);
    let fs_packager = FsPackager { verbose };

    let spinner = cliclack::spinner();
    spinner.start(format!("Packaging {}...", plan.identifier));
    match packager::run(&ctx, &manifest, &fs_packager, &plan, keep_staging) {
        Ok(()) => {
            spinner.stop(format!("Created {}", plan.archive_path.display()));
        }
        Err(e) => {
            spinner.error("Packaging failed");
            return Err(e);
        }
    }

    cliclack::outro("Release packaged successfully!")?;
    Ok(())
}
