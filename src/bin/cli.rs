// src/bin/cli.rs
use color_eyre::eyre;

use cifreq::cli;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = cli::run() {
        return Err(eyre::eyre!("{e}"));
    }
    Ok(())
}
