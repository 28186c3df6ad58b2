#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::disallowed_methods,
    clippy::disallowed_types
)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{keygen, license, report, version};
use crate::models::args::{AppCommands, Cli};

use anyhow::{Result, bail};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        AppCommands::VersionSync { package, manifest } => {
            version::sync_versions(&package, &manifest)?;
        },
        AppCommands::TrustReport { input, output } => {
            let summary = report::generate_report(&input, &output)?;
            if summary.failing() > 0 {
                bail!("{} of {} tests failing", summary.failing(), summary.total);
            }
        },
        AppCommands::Keygen {} => keygen::generate_keyset()?,
        AppCommands::Lic { customer, email, tier, days } => {
            license::generate_license(&customer, &email, tier, days)?;
        },
    }

    Ok(())
}
