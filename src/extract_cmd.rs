//! Extract command: keep one column of multi-column classifier output.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use chronos_series::{extract_column, read_records, write_records};

use crate::cli::ExtractArgs;

/// Run the column extraction.
pub fn run(args: ExtractArgs) -> Result<()> {
    let _cmd = info_span!("extract").entered();

    info!(path = %args.input.display(), "reading classifier output");
    let records = read_records(&args.input)
        .with_context(|| format!("failed to read input: {}", args.input.display()))?;
    info!(n = records.len(), "loaded records");

    let column = extract_column(&records, args.column).with_context(|| {
        format!(
            "failed to extract column {} from {}",
            args.column,
            args.input.display()
        )
    })?;

    write_records(&args.output, &column)
        .with_context(|| format!("failed to write output: {}", args.output.display()))?;
    info!(path = %args.output.display(), column = args.column, "column written");

    Ok(())
}
