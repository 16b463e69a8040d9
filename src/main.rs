#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! giphy-search — print original-image URLs for a Giphy search.

mod cli;
mod commands;
mod giphy;
mod logging;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("Warning: logging disabled: {err:#}");
    }

    let ctx = OutputCtx::new(cli.output, cli.json);
    let mut stdout = std::io::stdout();

    if let Err(err) = commands::search::run(&cli, &ctx, &mut stdout).await {
        tracing::debug!(error = ?err, "search failed");
        write_error(&ErrorOutput::from_search_error(&err), ctx.format);
        std::process::exit(err.exit_code());
    }
}
