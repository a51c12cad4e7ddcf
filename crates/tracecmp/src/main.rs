//! tracecmp CLI - compare an emulator trace against a reference log

mod cli;
mod commands;
mod terminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use cli::Cli;

fn main() {
    // Wrong argument counts exit here with status 2, before any file is opened.
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "tracecmp=debug"
    } else if cli.silent {
        "tracecmp=error"
    } else {
        "tracecmp=info"
    };
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = default_level.parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let exit_code = commands::run_command(&cli);
    std::process::exit(exit_code);
}
