use crate::aggregate::{Summary, analyze_file};
use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

/// Summarize `path` and print the JSON document on stdout.
pub fn run_analyze(path: &Path, limit: Option<u64>, pretty: bool) -> Result<()> {
    let summary = analyze_file(path, limit)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, &summary, pretty)?;
    out.flush()?;

    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, summary: &Summary, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, summary)?;
    } else {
        serde_json::to_writer(&mut *out, summary)?;
    }
    writeln!(out)?;
    Ok(())
}
