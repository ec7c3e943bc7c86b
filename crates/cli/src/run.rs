//! `salesboard run` and `salesboard validate`: config-driven seller reports.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::info;
use salesboard_stats::{Dataset, SalesConfig, SalesReport, StatsError};

use crate::exit_codes::{stats_exit_code, EXIT_ERROR, EXIT_IO};
use crate::render::{render_table, write_csv};
use crate::CliError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table for terminals
    Table,
    /// Pretty-printed JSON report
    Json,
    /// One CSV line per seller
    Csv,
}

impl From<StatsError> for CliError {
    fn from(err: StatsError) -> Self {
        CliError {
            code: stats_exit_code(&err),
            message: err.to_string(),
            hint: None,
        }
    }
}

fn io_err(msg: impl Into<String>) -> CliError {
    CliError { code: EXIT_IO, message: msg.into(), hint: None }
}

/// Read and validate a run config.
pub fn load_config(config_path: &Path) -> Result<SalesConfig, CliError> {
    let config_str = std::fs::read_to_string(config_path)
        .map_err(|e| io_err(format!("cannot read config {}: {e}", config_path.display())))?;
    let config = SalesConfig::from_toml(&config_str).map_err(|e| {
        let hint = match e {
            StatsError::MissingConfiguration(_) => Some(
                "add calculate_revenue = \"simple\" and calculate_bonus = \"by_profit\" under [options]",
            ),
            _ => None,
        };
        let mut err = CliError::from(e);
        if let Some(hint) = hint {
            err = err.with_hint(hint);
        }
        err
    })?;
    Ok(config)
}

/// Load the dataset named by the config, resolved against the config's directory.
pub fn load_dataset(config_path: &Path, config: &SalesConfig) -> Result<Dataset, CliError> {
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let dataset_path = base_dir.join(&config.dataset);

    let json = std::fs::read_to_string(&dataset_path)
        .map_err(|e| io_err(format!("cannot read {}: {e}", dataset_path.display())))?;
    let data = Dataset::from_json_str(&json)?;

    info!(
        "loaded {} seller(s), {} product(s), {} purchase record(s) from {}",
        data.sellers.len(),
        data.products.len(),
        data.purchase_records.len(),
        dataset_path.display()
    );
    Ok(data)
}

fn to_json(report: &SalesReport) -> Result<String, CliError> {
    serde_json::to_string_pretty(report).map_err(|e| CliError {
        code: EXIT_ERROR,
        message: format!("JSON serialization error: {e}"),
        hint: None,
    })
}

pub fn cmd_run(
    config_path: PathBuf,
    format: OutputFormat,
    output_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = load_config(&config_path)?;
    let data = load_dataset(&config_path, &config)?;

    let report = salesboard_stats::run(&config, &data)?;

    // The file always gets JSON; --output wins over [output] json.
    let output_path = output_file.or_else(|| {
        let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
        config.output.json.as_ref().map(|p| base_dir.join(p))
    });
    if let Some(ref path) = output_path {
        std::fs::write(path, to_json(&report)?)
            .map_err(|e| io_err(format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match format {
        OutputFormat::Table => write!(handle, "{}", render_table(&report))
            .map_err(|e| io_err(e.to_string()))?,
        OutputFormat::Json => writeln!(handle, "{}", to_json(&report)?)
            .map_err(|e| io_err(e.to_string()))?,
        OutputFormat::Csv => write_csv(&report, &mut handle)
            .map_err(|e| io_err(format!("CSV write error: {e}")))?,
    }

    Ok(())
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config = load_config(&config_path)?;
    let data = load_dataset(&config_path, &config)?;
    if data.sellers.is_empty() {
        return Err(StatsError::InvalidInput("sellers must be a non-empty list".into()).into());
    }

    // Options are present if validate() passed; print what will run.
    let revenue = config
        .options
        .calculate_revenue
        .map(|s| s.to_string())
        .unwrap_or_default();
    let bonus = config
        .options
        .calculate_bonus
        .map(|s| s.to_string())
        .unwrap_or_default();

    eprintln!(
        "'{}': ok, {} seller(s), {} purchase record(s), revenue={revenue}, bonus={bonus}",
        config.name,
        data.sellers.len(),
        data.purchase_records.len(),
    );
    Ok(())
}
