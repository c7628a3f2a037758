//! release-verify CLI - download a release archive and check its checksum
//!
//! Usage:
//!   release-verify                      Verify the default go1.22.3 source archive
//!   release-verify --release go1.21.0 --filename go1.21.0.src.tar.gz \
//!       --archive-url https://go.dev/dl/go1.21.0.src.tar.gz
//!
//! Prints `true` or `false` on stdout. On failure, prints one error line on
//! stdout and exits with status 1.

use anyhow::{Context, Result};
use clap::Parser;
use release_verify::core::config::{self, ConfigOverrides};
use release_verify::{VerifyError, output, verify};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "release-verify")]
#[command(about = "Download a release archive and compare it with the published SHA-256")]
#[command(version)]
struct Cli {
    /// URL of the archive to download
    #[arg(long, env = "RELEASE_VERIFY_ARCHIVE_URL")]
    archive_url: Option<String>,

    /// URL of the JSON release manifest
    #[arg(long, env = "RELEASE_VERIFY_MANIFEST_URL")]
    manifest_url: Option<String>,

    /// Release version to look up in the manifest (e.g. go1.22.3)
    #[arg(id = "release", long = "release", value_name = "VERSION", env = "RELEASE_VERIFY_VERSION")]
    version: Option<String>,

    /// File name to look up within the release
    #[arg(long, env = "RELEASE_VERIFY_FILENAME")]
    filename: Option<String>,

    /// Where to write the archive (defaults to the file name in the current directory)
    #[arg(short, long, env = "RELEASE_VERIFY_OUTPUT")]
    output: Option<PathBuf>,

    /// HTTP timeout in seconds (clamped to 5..=300)
    #[arg(long, env = "RELEASE_VERIFY_HTTP_TIMEOUT")]
    http_timeout: Option<u64>,

    /// Extra config file, applied after the XDG config files
    #[arg(short, long, env = "RELEASE_VERIFY_CONFIG")]
    config: Option<PathBuf>,

    /// Only print the verdict
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            archive_url: self.archive_url.clone(),
            manifest_url: self.manifest_url.clone(),
            version: self.version.clone(),
            filename: self.filename.clone(),
            dest: self.output.clone(),
            http_timeout_secs: self.http_timeout,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    output::set_quiet(cli.quiet);

    match run(&cli) {
        Ok(matches) => {
            output::verdict(matches);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // VerifyError messages already embed their cause.
            let message = match e.downcast_ref::<VerifyError>() {
                Some(err) => err.to_string(),
                None => format!("{:#}", e),
            };
            output::failure(&message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let config = config::load(cli.config.as_deref(), cli.overrides())
        .context("Failed to load configuration")?;
    let outcome = verify::run(&config)?;
    Ok(outcome.matches())
}
