use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{debug, info};

use clt_pj_cli::{
    config::{self, CliConfig},
    csv_loader::{self, Scenario},
    report::render_comparison,
    utils::{parse_amount, parse_rate},
};
use clt_pj_core::{CltInputs, PjInputs, RegimeComparison};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Compares net monthly income as a CLT employee against the same work billed
/// through a PJ company under Simples Nacional Anexo III.
///
/// Rates are fractions (`0.28` for 28%). Amounts accept `,` as a thousands
/// separator (`12,500.00`).
#[derive(Debug, Parser)]
#[command(name = "clt-pj", version)]
struct Cli {
    /// CLT gross monthly salary.
    #[arg(long, default_value = "8500", value_parser = parse_amount)]
    gross_salary: Decimal,

    /// Dependents declared for IRRF.
    #[arg(long, default_value_t = 0)]
    dependents: u32,

    /// Employer charges on top of the CLT salary.
    #[arg(long, default_value = "0.338", value_parser = parse_rate)]
    employer_charges_rate: Decimal,

    /// PJ monthly billing.
    #[arg(long, default_value = "12500", value_parser = parse_amount)]
    billing: Decimal,

    /// Share of billing paid out as pró-labore.
    #[arg(long, default_value = "0.28", value_parser = parse_rate)]
    pro_labore_rate: Decimal,

    /// Fixed costs as a share of billing.
    #[arg(long, default_value = "0.05", value_parser = parse_rate)]
    costs_rate: Decimal,

    /// Compare every row of a CSV file instead of the flags above.
    #[arg(long, value_name = "CSV")]
    scenarios: Option<PathBuf>,

    /// TOML file with rate overrides and a default log level.
    #[arg(long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// Log filter directive (e.g. `debug` or `info,clt_pj_core=debug`).
    /// Overrides the config file and RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn flag_scenario(&self) -> anyhow::Result<Scenario> {
        if self.pro_labore_rate > Decimal::ONE {
            bail!("--pro-labore-rate must not exceed 1, got {}", self.pro_labore_rate);
        }
        Ok(Scenario {
            label: "Simulação".to_string(),
            clt: CltInputs {
                gross_salary: self.gross_salary,
                dependents: self.dependents,
                employer_charges_rate: self.employer_charges_rate,
            },
            pj: PjInputs {
                billing_monthly: self.billing,
                pro_labore_rate: self.pro_labore_rate,
                costs_rate: self.costs_rate,
            },
        })
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CliConfig::default(),
    };

    let directive = cli.log_level.as_deref().or(config.log_level.as_deref());
    clt_pj_cli::logging::init_logging(directive, cli.log_file.as_deref())?;
    debug!(?cli, "parsed arguments");

    let comparison = RegimeComparison::new(config.rates).context("invalid rate configuration")?;

    let scenarios = match &cli.scenarios {
        Some(path) => csv_loader::load_from_file(path)
            .with_context(|| format!("failed to load scenarios from {}", path.display()))?,
        None => vec![cli.flag_scenario()?],
    };
    info!(count = scenarios.len(), "comparing scenarios");

    for scenario in &scenarios {
        let result = comparison.compare(&scenario.clt, &scenario.pj);
        println!("{}", render_comparison(&scenario.label, &result));
    }

    Ok(())
}
