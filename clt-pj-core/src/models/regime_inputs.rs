use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters of a salaried (CLT) employment offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CltInputs {
    /// Gross monthly salary.
    pub gross_salary: Decimal,
    /// Number of dependents declared for income tax.
    pub dependents: u32,
    /// Employer charges on top of salary as a fraction (e.g. 0.338 for FGTS,
    /// patronal INSS and provisions).
    pub employer_charges_rate: Decimal,
}

/// Parameters of a contractor (PJ) engagement billed through a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PjInputs {
    /// Monthly amount billed to the client.
    pub billing_monthly: Decimal,
    /// Share of billing paid to the owner as pró-labore, in (0, 1].
    pub pro_labore_rate: Decimal,
    /// Monthly operating costs as a fraction of billing.
    pub costs_rate: Decimal,
}
