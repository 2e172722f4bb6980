//! Insert command: extend a 365-day series with leap-day placeholders.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use chronos_insert::{InsertConfig, insert_leap_days};
use chronos_series::{read_records, write_records};

use crate::cli::InsertArgs;
use crate::config::ChronosConfig;

/// Run the leap-day insertion pipeline.
pub fn run(args: InsertArgs) -> Result<()> {
    let _cmd = info_span!("insert").entered();

    // 1. Load optional TOML config; CLI flags override it.
    let toml_cfg = load_config(&args)?;
    let seed = args.seed.or(toml_cfg.insert.seed);
    let placeholder = args
        .placeholder
        .clone()
        .unwrap_or(toml_cfg.insert.placeholder);

    // 2. Read the input series.
    info!(path = %args.input.display(), "reading classification series");
    let records = read_records(&args.input)
        .with_context(|| format!("failed to read series: {}", args.input.display()))?;
    info!(n = records.len(), "loaded records");

    // 3. Seeded RNG for reproducible placeholder positions.
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    // 4. Insert placeholders.
    let insert_cfg = InsertConfig::new().with_placeholder(&placeholder);
    let extended = insert_leap_days(&records, &insert_cfg, &mut rng)
        .with_context(|| format!("leap-day insertion failed: {}", args.input.display()))?;
    info!(
        n = extended.len(),
        inserted = extended.len() - records.len(),
        "placeholders inserted"
    );

    // 5. Write atomically; a failure here leaves no partial file.
    write_records(&args.output, &extended)
        .with_context(|| format!("failed to write output: {}", args.output.display()))?;
    info!(path = %args.output.display(), "extended series written");

    Ok(())
}

fn load_config(args: &InsertArgs) -> Result<ChronosConfig> {
    match &args.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&toml_str).context("failed to parse configuration TOML")
        }
        None => Ok(ChronosConfig::default()),
    }
}
