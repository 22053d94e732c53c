use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for makedist
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Where to start looking for the solution root (defaults to the executable)
    pub path: Option<PathBuf>,

    /// Alternative packaging manifest (TOML)
    pub manifest: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("makedist")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Packages the ZILF binaries and other content for release")
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("PATH")
                    .help("Start the solution root search here instead of at the executable")
            )
            .arg(
                Arg::new("manifest")
                    .short('m')
                    .long("manifest")
                    .value_name("FILE")
                    .help("Path to a TOML packaging manifest replacing the built-in one")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
            manifest: matches.get_one::<String>("manifest").map(PathBuf::from),
        }
    }
}
