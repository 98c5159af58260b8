use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use spectator_hook::{hook, logging, names, read_request, Config, RewriterConfig};

/// Spectator hook - rewrites sandbox-run commands so pipelines stay sandboxed
///
/// Reads a permission request as JSON on stdin. Prints an allow decision with
/// the rewritten command for sandbox-run invocations and nothing otherwise.
#[derive(Parser, Debug)]
#[command(name = "spectator-hook")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Trusted plugin root containing bin/sandbox-run
    #[arg(long, env = names::PLUGIN_ROOT_ENV)]
    plugin_root: Option<String>,

    /// Append debug logs to this file (logging is off without it)
    #[arg(long, env = names::LOG_FILE_ENV)]
    log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "spectator_hook=trace"
    #[arg(long, env = names::LOG_LEVEL_ENV)]
    log_level: Option<String>,
}

fn run(args: Args) -> Result<()> {
    // A broken config file must not keep the hook from answering
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let log_file = args.log_file.filter(|path| !path.as_os_str().is_empty());
    let log = config.log.merge(log_file, args.log_level);
    // Nowhere to report a logging failure; carry on without logs
    let _ = logging::init(&log);
    if let Some(e) = config_error {
        tracing::warn!("Ignoring config file: {}", e);
    }

    let input = match read_request(io::stdin().lock()) {
        Ok(input) => input,
        Err(e) => {
            tracing::debug!("Deferring: {}", e);
            return Ok(());
        }
    };

    let rewriter_config = RewriterConfig::new(args.plugin_root.as_deref());
    if let Some(line) = hook::respond(&input, &rewriter_config)? {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line).context("Failed to write hook output")?;
        stdout.flush().context("Failed to flush hook output")?;
    }
    Ok(())
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        // Bad arguments mean no opinion, never a blocked tool call
        Err(_) => return,
    };

    if let Err(e) = run(args) {
        tracing::warn!("Hook failed, deferring: {:#}", e);
    }
}
