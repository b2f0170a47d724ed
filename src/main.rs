mod config;
mod count;
mod csv_log;
mod error;
mod sample;
mod sampler;
mod signals;
#[cfg(test)]
mod test_util;

use clap::Parser;
use config::MonitorConfig;
use sampler::Sampler;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sample the number of files in a directory once per second and append
/// timestamped counts to a CSV log until interrupted.
#[derive(Parser, Debug)]
#[command(name = "file-counter", version, about)]
pub struct Cli {
    /// Directory to monitor for file count
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Path to output CSV file
    #[arg(long, default_value = "file_count.csv")]
    output: PathBuf,

    /// Extra logging (directory scans, header decisions)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress per-sample status lines, only banner and errors
    #[arg(short, long)]
    quiet: bool,
}

impl From<Cli> for MonitorConfig {
    fn from(cli: Cli) -> Self {
        Self {
            dir: cli.dir,
            output: cli.output,
            quiet: cli.quiet,
        }
    }
}

/// Single-dash long flags accepted in addition to the `--` forms.
const SINGLE_DASH_FLAGS: &[&str] = &["dir", "output"];

/// Rewrite `-dir`/`-output` (and their `=value` forms) to `--dir`/`--output`.
///
/// Only exact flag names are rewritten, so `-v`, `-q` and positional values
/// pass through untouched. Everything after a bare `--` is left alone.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        if passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = arg.to_str().and_then(|s| {
            if s == "--" {
                return None;
            }
            let body = s.strip_prefix('-').filter(|b| !b.starts_with('-'))?;
            let name = body.split_once('=').map_or(body, |(n, _)| n);
            SINGLE_DASH_FLAGS
                .contains(&name)
                .then(|| OsString::from(format!("-{s}")))
        });
        if arg == "--" {
            passthrough = true;
        }
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "file_counter=debug"
    } else {
        "file_counter=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_tracing(cli.verbose);
    tracing::debug!(?cli, "parsed CLI arguments");

    let config = MonitorConfig::from(cli);
    let mut sampler = match Sampler::start(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("Monitoring directory: {}", sampler.dir().display());
    println!("Recording to: {}", sampler.output().display());
    println!("Press Ctrl+C to stop...");

    sampler.run(signals::shutdown_signal()).await;
}
