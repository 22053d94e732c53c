mod archive;
mod args;
mod context;
mod dist;
mod error;
mod manifest;
mod result;
#[cfg(test)]
mod testing;
mod tpl;
mod utils;
mod version;

use args::Args;
use context::Context;
use manifest::Manifest;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    let Args {
        verbose,
        path,
        manifest: manifest_path,
    } = Args::parse();

    cliclack::intro("makedist")?;

    let manifest = match manifest_path {
        Some(path) => Manifest::load(&path)?,
        None => Manifest::builtin(),
    };

    // The solution root is found relative to this program unless told otherwise
    let start = match path {
        Some(path) => path,
        None => std::env::current_exe()?,
    };
    let ctx = Context::discover(&start, &manifest, verbose)?;

    let output = dist::make_dist(&ctx, &manifest)?;
    println!("{}", output.display());

    cliclack::outro("Release archive created")?;
    Ok(())
}
