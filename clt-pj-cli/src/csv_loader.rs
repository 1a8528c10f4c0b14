//! CSV loader for comparison scenarios.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Header
//! names are case-sensitive.
//!
//! | Column | Required | Type | Notes |
//! |-------------------------|----------|---------|--------------------------------------------|
//! | `label` | no | string | Defaults to `Cenário <row>` |
//! | `gross_salary` | yes | decimal | CLT gross monthly salary |
//! | `dependents` | yes | integer | Dependents declared for IRRF |
//! | `employer_charges_rate` | yes | decimal | Fraction, e.g. `0.338` |
//! | `billing_monthly` | yes | decimal | PJ monthly billing |
//! | `pro_labore_rate` | yes | decimal | Fraction in (0, 1], e.g. `0.28` |
//! | `costs_rate` | yes | decimal | Fraction of billing, e.g. `0.05` |
//!
//! ### Example
//!
//! ```csv
//! label,gross_salary,dependents,employer_charges_rate,billing_monthly,pro_labore_rate,costs_rate
//! Sênior,8500.00,0,0.338,12500.00,0.28,0.05
//! ,3000.00,2,0.338,4500.00,0.28,0.05
//! ```
//!
//! Negative amounts and rates are clamped to zero with a warning. A
//! pró-labore rate above 1 is rejected, as are amounts above
//! [`MAX_AMOUNT`] and rates above [`MAX_RATE`].

use std::path::{Path, PathBuf};

use clt_pj_core::calculations::common::non_negative;
use clt_pj_core::calculations::tables::{MAX_AMOUNT, MAX_RATE};
use clt_pj_core::{CltInputs, PjInputs};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One row of the CSV: a CLT offer and a PJ offer to compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub label: String,
    pub clt: CltInputs,
    pub pj: PjInputs,
}

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    label: Option<String>,
    gross_salary: Decimal,
    dependents: u32,
    employer_charges_rate: Decimal,
    billing_monthly: Decimal,
    pro_labore_rate: Decimal,
    costs_rate: Decimal,
}

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A pró-labore rate above 100% of billing. `row` is 1-based
    /// (header = row 0).
    #[error("pro-labore rate {rate} on row {row} exceeds 1")]
    InvalidProLaboreRate { rate: Decimal, row: usize },

    /// An amount or rate above the largest value the comparison accepts.
    #[error("{field} {value} on row {row} exceeds the maximum of {max}")]
    OutOfRange {
        field: &'static str,
        value: Decimal,
        max: Decimal,
        row: usize,
    },
}

/// Clamps negatives to zero and rejects values above `max`.
fn checked_field(
    field: &'static str,
    value: Decimal,
    max: Decimal,
    row: usize,
) -> Result<Decimal, CsvLoadError> {
    if value > max {
        return Err(CsvLoadError::OutOfRange {
            field,
            value,
            max,
            row,
        });
    }
    Ok(non_negative(field, value))
}

/// Convert a single CSV row into a [`Scenario`].
///
/// `row_number` is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<Scenario, CsvLoadError> {
    if row.pro_labore_rate > Decimal::ONE {
        return Err(CsvLoadError::InvalidProLaboreRate {
            rate: row.pro_labore_rate,
            row: row_number,
        });
    }

    let label = row
        .label
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| format!("Cenário {row_number}"));

    Ok(Scenario {
        label,
        clt: CltInputs {
            gross_salary: checked_field("gross_salary", row.gross_salary, MAX_AMOUNT, row_number)?,
            dependents: row.dependents,
            employer_charges_rate: checked_field(
                "employer_charges_rate",
                row.employer_charges_rate,
                MAX_RATE,
                row_number,
            )?,
        },
        pj: PjInputs {
            billing_monthly: checked_field(
                "billing_monthly",
                row.billing_monthly,
                MAX_AMOUNT,
                row_number,
            )?,
            pro_labore_rate: non_negative("pro_labore_rate", row.pro_labore_rate),
            costs_rate: checked_field("costs_rate", row.costs_rate, MAX_RATE, row_number)?,
        },
    })
}

/// Parse CSV text and return the scenarios in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid or a
///   required field cannot be deserialised.
/// * [`CsvLoadError::InvalidProLaboreRate`] if any row pays out more than
///   its billing as pró-labore.
/// * [`CsvLoadError::OutOfRange`] if an amount or rate is above its maximum.
pub fn load_from_str(input: &str) -> Result<Vec<Scenario>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<Scenario>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const SINGLE_ROW_CSV: &str = "\
label,gross_salary,dependents,employer_charges_rate,billing_monthly,pro_labore_rate,costs_rate
Sênior,8500.00,0,0.338,12500.00,0.28,0.05
";

    const REORDERED_CSV: &str = "\
costs_rate,pro_labore_rate,billing_monthly,employer_charges_rate,dependents,gross_salary
0.10,0.30,6000,0.338,1,4000
";

    #[test]
    fn single_row_parses_every_field() {
        let scenarios = load_from_str(SINGLE_ROW_CSV).expect("should parse");

        assert_eq!(scenarios.len(), 1);
        assert_eq!(
            scenarios[0],
            Scenario {
                label: "Sênior".to_string(),
                clt: CltInputs {
                    gross_salary: dec!(8500.00),
                    dependents: 0,
                    employer_charges_rate: dec!(0.338),
                },
                pj: PjInputs {
                    billing_monthly: dec!(12500.00),
                    pro_labore_rate: dec!(0.28),
                    costs_rate: dec!(0.05),
                },
            }
        );
    }

    #[test]
    fn columns_are_matched_by_name_and_label_is_optional() {
        let scenarios = load_from_str(REORDERED_CSV).expect("should parse");

        let s = &scenarios[0];
        assert_eq!(s.label, "Cenário 1");
        assert_eq!(s.clt.gross_salary, dec!(4000));
        assert_eq!(s.clt.dependents, 1);
        assert_eq!(s.pj.billing_monthly, dec!(6000));
        assert_eq!(s.pj.pro_labore_rate, dec!(0.30));
        assert_eq!(s.pj.costs_rate, dec!(0.10));
    }

    #[test]
    fn empty_label_falls_back_to_row_number() {
        let csv = "\
label,gross_salary,dependents,employer_charges_rate,billing_monthly,pro_labore_rate,costs_rate
A,1000,0,0,1000,0.28,0
 ,2000,0,0,2000,0.28,0
";
        let scenarios = load_from_str(csv).expect("should parse");

        assert_eq!(scenarios[0].label, "A");
        assert_eq!(scenarios[1].label, "Cenário 2");
    }

    #[test]
    fn negative_amounts_are_clamped() {
        let csv = "\
gross_salary,dependents,employer_charges_rate,billing_monthly,pro_labore_rate,costs_rate
-8500,0,-0.338,12500,0.28,-0.05
";
        let scenarios = load_from_str(csv).expect("should parse");

        assert_eq!(scenarios[0].clt.gross_salary, Decimal::ZERO);
        assert_eq!(scenarios[0].clt.employer_charges_rate, Decimal::ZERO);
        assert_eq!(scenarios[0].pj.costs_rate, Decimal::ZERO);
    }

    #[test]
    fn pro_labore_rate_above_one_is_rejected_with_row_number() {
        let csv = "\
gross_salary,dependents,employer_charges_rate,billing_monthly,pro_labore_rate,costs_rate
8500,0,0.338,12500,0.28,0.05
8500,0,0.338,12500,28,0.05
";
        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(
            err,
            CsvLoadError::InvalidProLaboreRate { row: 2, .. }
        ));
    }

    #[test]
    fn billing_above_maximum_is_rejected_with_row_number() {
        let csv = "\
gross_salary,dependents,employer_charges_rate,billing_monthly,pro_labore_rate,costs_rate
8500,0,0.338,1000000000,0.28,0.05
8500,0,0.338,7000000000000000000000000000,0.28,0.05
";
        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(
            err,
            CsvLoadError::OutOfRange {
                field: "billing_monthly",
                row: 2,
                ..
            }
        ));
    }

    #[test]
    fn costs_rate_above_maximum_is_rejected() {
        let csv = "\
gross_salary,dependents,employer_charges_rate,billing_monthly,pro_labore_rate,costs_rate
8500,0,0.338,12500,0.28,10.5
";
        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(
            err,
            CsvLoadError::OutOfRange {
                field: "costs_rate",
                row: 1,
                ..
            }
        ));
        assert!(err.to_string().contains("costs_rate 10.5 on row 1"));
    }

    #[test]
    fn missing_required_column_is_a_parse_error() {
        let csv = "\
gross_salary,dependents,employer_charges_rate,billing_monthly,pro_labore_rate
8500,0,0.338,12500,0.28
";
        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(err, CsvLoadError::Parse(_)));
    }

    #[test]
    fn negative_dependents_is_a_parse_error() {
        let csv = "\
gross_salary,dependents,employer_charges_rate,billing_monthly,pro_labore_rate,costs_rate
8500,-1,0.338,12500,0.28,0.05
";
        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(err, CsvLoadError::Parse(_)));
    }

    #[test]
    fn header_only_yields_no_scenarios() {
        let csv = "gross_salary,dependents,employer_charges_rate,billing_monthly,pro_labore_rate,costs_rate\n";

        let scenarios = load_from_str(csv).expect("should parse");

        assert!(scenarios.is_empty());
    }
}
