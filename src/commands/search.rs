/// `search` command: one Giphy request, results to stdout.
use std::io::Write;

use crate::cli::Cli;
use crate::cli::OutputCtx;
use crate::cli::output::write_gifs;
use crate::commands::SearchError;
use crate::giphy::GiphyClient;
use crate::logging::Timer;
use crate::types::GifOutput;

/// Run the search described by `args`, writing results to `out`.
///
/// A missing query fails before any client is built.
///
/// # Errors
///
/// Returns `SearchError::MissingQuery` without a query, `SearchError::Giphy`
/// for any service or transport failure, and `SearchError::Output` if `out`
/// cannot be written.
pub async fn run<W: Write>(args: &Cli, ctx: &OutputCtx, out: &mut W) -> Result<(), SearchError> {
    let query = args.query().ok_or(SearchError::MissingQuery)?;
    let limit = args.limit();

    let client = GiphyClient::new(args.endpoint.as_str(), args.api_key.clone())?;

    let t_search = Timer::start("search");
    let gifs = client.search(query, limit).await?;
    drop(t_search);

    let output: Vec<GifOutput> = gifs.iter().map(GifOutput::from).collect();
    write_gifs(out, &output, ctx)?;
    out.flush()?;
    Ok(())
}
