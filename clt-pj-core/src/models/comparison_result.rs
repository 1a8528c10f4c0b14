use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two hiring regimes being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    Clt,
    Pj,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clt => "CLT",
            Self::Pj => "PJ",
        }
    }
}

/// Monthly breakdown of a CLT salary.
///
/// Deductions (`inss`, `irrf`, `total_taxes`) are carried as negative values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CltBreakdown {
    pub gross_monthly: Decimal,
    pub inss: Decimal,
    pub irrf: Decimal,
    pub total_taxes: Decimal,
    pub net_monthly: Decimal,
    /// Total monthly cost to the employer (salary plus charges).
    pub employer_cost: Decimal,
    pub annual_net: Decimal,
}

/// Monthly breakdown of PJ billing.
///
/// Every tax and cost field is carried as a negative value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PjBreakdown {
    pub billing_monthly: Decimal,
    pub pro_labore: Decimal,
    /// Employer-side INSS paid by the company on the pró-labore.
    pub inss_patronal: Decimal,
    /// Owner-side INSS withheld from the pró-labore.
    pub inss_socio: Decimal,
    pub irrf: Decimal,
    pub simples_nacional: Decimal,
    pub costs: Decimal,
    pub total_taxes_and_costs: Decimal,
    pub net_monthly: Decimal,
    pub annual_net: Decimal,
}

impl PjBreakdown {
    /// Employer-side plus owner-side INSS.
    pub fn social_security_total(&self) -> Decimal {
        self.inss_socio + self.inss_patronal
    }

    /// Simples Nacional (DAS) plus fixed operating costs.
    pub fn fees_and_costs(&self) -> Decimal {
        self.simples_nacional + self.costs
    }
}

/// How PJ compares with CLT. Positive values favour PJ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difference {
    pub monthly: Decimal,
    pub annual: Decimal,
    /// Percentage by which the PJ net exceeds the CLT net.
    ///
    /// `None` when the CLT net is zero and the ratio is undefined.
    pub percent: Option<Decimal>,
}

impl Difference {
    /// The regime with the higher (or equal, for PJ) annual net.
    pub fn advantage(&self) -> Regime {
        if self.annual >= Decimal::ZERO {
            Regime::Pj
        } else {
            Regime::Clt
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub clt: CltBreakdown,
    pub pj: PjBreakdown,
    pub difference: Difference,
}
