use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tabclean_ingest::read_table;
use tabclean_output::{render_table, write_table};
use tabclean_transform::clean_table;

use crate::config::RunSettings;
use crate::types::CleanRun;

/// Loads, cleans and stores one table.
///
/// Errors carry the failing stage as context, so `{:#}` renders
/// `load table: input file not found: ...`.
pub fn run_clean(settings: &RunSettings) -> Result<CleanRun> {
    let run_span = info_span!("clean", input = %settings.input.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let table = {
        let _span = info_span!("load").entered();
        let table = read_table(&settings.input, &settings.ingest).context("load table")?;
        info!(
            rows = table.height(),
            columns = table.width(),
            "loaded table"
        );
        table
    };

    let outcome = clean_table(table, &settings.clean);

    let preview = if settings.dry_run {
        info!(output = %settings.output.display(), "dry run, not writing output");
        let preview =
            render_table(&outcome.table, &settings.output_options).context("store table")?;
        Some(preview)
    } else {
        let _span = info_span!("store").entered();
        write_table(&outcome.table, &settings.output, &settings.output_options)
            .context("store table")?;
        None
    };

    info!(
        input_rows = outcome.report.input_rows,
        output_rows = outcome.report.output_rows,
        elapsed_ms = start.elapsed().as_millis(),
        "cleaning complete"
    );

    Ok(CleanRun {
        input: settings.input.clone(),
        output: settings.output.clone(),
        written: preview.is_none(),
        report: outcome.report,
        preview,
    })
}
