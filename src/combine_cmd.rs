//! Combine command: paste a date vector and member series side by side.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use chronos_series::{paste, read_records, write_records};

use crate::cli::CombineArgs;

/// Run the column-wise combine.
pub fn run(args: CombineArgs) -> Result<()> {
    let _cmd = info_span!("combine").entered();

    let mut inputs = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        let records = read_records(path)
            .with_context(|| format!("failed to read input: {}", path.display()))?;
        info!(path = %path.display(), n = records.len(), "loaded input");
        inputs.push(records);
    }

    let wide = paste(&inputs, &args.delimiter).context("failed to paste inputs")?;
    info!(n = wide.len(), n_inputs = inputs.len(), "pasted inputs");

    write_records(&args.output, &wide)
        .with_context(|| format!("failed to write output: {}", args.output.display()))?;
    info!(path = %args.output.display(), "combined file written");

    Ok(())
}
