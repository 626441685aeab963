//! nuclei-boards CLI
//!
//! Entry point for the nuclei-boards command-line application.

use clap::Parser;

use nuclei_boards::cli::output::display_error;
use nuclei_boards::cli::Cli;

fn main() {
    let cli = Cli::parse();
    let output = cli.output_config();

    // RUST_LOG takes precedence over -v/-q
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(output.log_level().into())
                .from_env_lossy(),
        )
        .init();

    tracing::debug!(
        "nuclei-boards {} ({})",
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    );

    if let Err(e) = cli.run() {
        display_error(&e);
        std::process::exit(1);
    }
}
