use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the relpack tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Compress the archive (.tar.gz instead of .tar)
    pub gzip: bool,

    /// Leave the staging directory behind after archiving
    pub keep_staging: bool,

    /// Working directory, or path to pack.toml inside it
    pub path: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("relpack")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Packages the working directory into a versioned tar archive")
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("PATH")
                    .help("Working directory, or path to pack.toml inside it")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
            .arg(
                Arg::new("gzip")
                    .short('z')
                    .long("gzip")
                    .action(ArgAction::SetTrue)
                    .help("Compress the archive (.tar.gz instead of .tar)")
            )
            .arg(
                Arg::new("keep-staging")
                    .long("keep-staging")
                    .action(ArgAction::SetTrue)
                    .help("Leave the staging directory behind after archiving")
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
            gzip: matches.get_flag("gzip"),
            keep_staging: matches.get_flag("keep-staging"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
        }
    }
}
