use std::env;
use std::path::PathBuf;

use tracing::{info, warn};

use medialib::Catalog;

mod logging;
mod settings;

/// Load every configured library and print its tree.
///
/// Roots given on the command line replace the configured ones; with neither,
/// the current directory is loaded.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (mut settings, problem) = settings::load_settings();
    logging::init(&settings.log);
    if let Some(msg) = problem {
        warn!("{msg}");
    }

    let args: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();
    if !args.is_empty() {
        settings.library.roots = args;
    } else if settings.library.roots.is_empty() {
        settings.library.roots.push(env::current_dir()?);
    }

    let catalog = Catalog::open(&settings.library)?;
    info!(libraries = catalog.len(), "catalog ready");

    for lib in catalog.libraries() {
        println!("== {} ({})", lib.title(), lib.root().display());
        print!("{lib}");
    }

    Ok(())
}
