/// Output formatting: URL lines, JSON variants, table.
use std::io::{self, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{ErrorOutput, GifOutput};

/// Printed on stdout when a search succeeds with no items.
pub const NO_RESULTS: &str = "No results found";

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all formatters.
#[derive(Debug, Clone, Copy)]
pub struct OutputCtx {
    pub format: OutputFormat,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
        }
    }
}

// --- Search results ---

/// Write search results to `out` in the context's format.
///
/// # Errors
///
/// Returns any I/O error from the underlying writer (e.g. a closed pipe).
pub fn write_gifs<W: Write>(out: &mut W, gifs: &[GifOutput], ctx: &OutputCtx) -> io::Result<()> {
    match ctx.format {
        OutputFormat::Url => write_urls(out, gifs),
        OutputFormat::Json => write_json(out, gifs),
        OutputFormat::Compact => write_compact_json(out, gifs),
        OutputFormat::Ndjson => write_ndjson(out, gifs),
        OutputFormat::Table => write_table(out, gifs),
    }
}

fn write_urls<W: Write>(out: &mut W, gifs: &[GifOutput]) -> io::Result<()> {
    if gifs.is_empty() {
        return writeln!(out, "{NO_RESULTS}");
    }
    for gif in gifs {
        match &gif.url {
            Some(url) => writeln!(out, "{url}")?,
            None => tracing::warn!(id = %gif.id, "result has no original-image URL; skipped"),
        }
    }
    Ok(())
}

fn write_table<W: Write>(out: &mut W, gifs: &[GifOutput]) -> io::Result<()> {
    if gifs.is_empty() {
        return writeln!(out, "{NO_RESULTS}");
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["ID", "TITLE", "URL"]);
    for gif in gifs {
        table.add_row([
            gif.id.as_str(),
            gif.title.as_str(),
            gif.url.as_deref().unwrap_or(""),
        ]);
    }
    writeln!(out, "{table}")
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = render_error(&mut out, err, format);
}

/// Render an error envelope to `out`: JSON for the JSON formats, otherwise
/// the usage line or an `Error:` line.
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn render_error<W: Write>(out: &mut W, err: &ErrorOutput, format: OutputFormat) -> io::Result<()> {
    if format.is_json() {
        let s = serde_json::to_string_pretty(err).map_err(io::Error::other)?;
        return writeln!(out, "{s}");
    }
    if err.is_usage() {
        // Usage errors print the usage line itself, not an "Error:" prefix.
        writeln!(out, "{}", err.error.message)
    } else {
        writeln!(out, "Error: {}", err.error.message)
    }
}

// --- Generic JSON helpers ---

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    let s = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(out, "{s}")
}

fn write_compact_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    let s = serde_json::to_string(value).map_err(io::Error::other)?;
    writeln!(out, "{s}")
}

fn write_ndjson<W: Write, T: Serialize>(out: &mut W, values: &[T]) -> io::Result<()> {
    for v in values {
        let s = serde_json::to_string(v).map_err(io::Error::other)?;
        writeln!(out, "{s}")?;
    }
    Ok(())
}
