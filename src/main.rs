use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use trackzip::cli::{Args, Settings};

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.debug);

    let settings = Settings::from_args(&args);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let code = match trackzip::run(&settings, &mut input, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "run aborted");
            println!("❌ {}", e);
            ExitCode::FAILURE
        }
    };

    wait_for_exit(&mut input, &mut out)?;
    Ok(code)
}

/// Keep the console open until the user has read the last message.
fn wait_for_exit<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    writeln!(out, "Press Enter to exit...")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "trackzip=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
