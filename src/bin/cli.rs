// src/bin/cli.rs
use cert_view::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
