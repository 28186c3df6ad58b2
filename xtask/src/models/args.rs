//! # CLI Argument Definitions
//!
//! Subcommands of `cargo xtask`. Every command has working defaults so CI can call it bare.

use clap::{Parser, Subcommand};
use raft_licensing::Tier;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Build and release glue for the Raft extension")]
pub struct Cli {
    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Copy the package version into the extension manifest
    VersionSync {
        /// Source of truth for the version
        #[arg(long, default_value = "package.json")]
        package: PathBuf,

        /// Manifest rewritten when its version differs
        #[arg(long, default_value = "manifest.json")]
        manifest: PathBuf,
    },
    /// Summarize a JSON test run into a markdown trust report
    TrustReport {
        /// Test results (`testResults[].assertionResults[]`)
        #[arg(short, long, default_value = "test-results.json")]
        input: PathBuf,

        /// Markdown file to write
        #[arg(short, long, default_value = "TRUST_REPORT.md")]
        output: PathBuf,
    },
    /// Create the license signing keyset in 'private/' if missing and print its public key
    Keygen {},
    /// Issue a signed license key into 'private/licenses/'
    Lic {
        /// The name of the customer (e.g., 'Acme Inc.')
        #[arg(short, long)]
        customer: String,

        /// Contact address; also names the key file
        #[arg(short, long)]
        email: String,

        /// Tier unlocked by the key ('free' or 'pro')
        #[arg(short, long, default_value = "pro")]
        tier: Tier,

        #[arg(short, long, default_value_t = 365)]
        days: u64,
    },
}
