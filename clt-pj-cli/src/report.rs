//! Rendering of a [`ComparisonResult`] for the terminal.

use clt_pj_core::ComparisonResult;
use rust_decimal::Decimal;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use crate::format::{format_brl, format_percent};

#[derive(Debug, Clone, Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Discriminação")]
    label: &'static str,
    #[tabled(rename = "Padrão CLT")]
    clt: String,
    #[tabled(rename = "PJ (Anexo III)")]
    pj: String,
}

impl BreakdownRow {
    fn new(
        label: &'static str,
        clt: Decimal,
        pj: Decimal,
    ) -> Self {
        Self {
            label,
            clt: format_brl(clt),
            pj: format_brl(pj),
        }
    }
}

fn breakdown_rows(result: &ComparisonResult) -> Vec<BreakdownRow> {
    let clt = &result.clt;
    let pj = &result.pj;

    vec![
        BreakdownRow::new(
            "Rendimento Bruto (Faturamento)",
            clt.gross_monthly,
            pj.billing_monthly,
        ),
        BreakdownRow {
            label: "Pró-labore",
            clt: "—".to_string(),
            pj: format_brl(pj.pro_labore),
        },
        BreakdownRow::new(
            "Previdência Social (INSS)",
            clt.inss,
            pj.social_security_total(),
        ),
        BreakdownRow::new("Imposto de Renda (IRRF)", clt.irrf, pj.irrf),
        BreakdownRow::new(
            "Taxas, DAS e Custos Fixos",
            Decimal::ZERO,
            pj.fees_and_costs(),
        ),
        BreakdownRow::new("Disponível Líquido", clt.net_monthly, pj.net_monthly),
        BreakdownRow::new("Líquido Anual", clt.annual_net, pj.annual_net),
        BreakdownRow::new("Custo Total", clt.employer_cost, pj.billing_monthly),
    ]
}

/// Renders the detailed breakdown table followed by the difference summary.
pub fn render_comparison(
    title: &str,
    result: &ComparisonResult,
) -> String {
    let table = Table::new(breakdown_rows(result))
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();

    let difference = &result.difference;
    let advantage = difference.advantage().as_str();

    let mut out = String::new();
    out.push_str(&format!("{title}\n\n"));
    out.push_str(&table);
    out.push('\n');
    out.push_str(&format!(
        "\nDiferença de ganho anual: {}\n",
        format_brl(difference.annual.abs())
    ));
    out.push_str(&format!(
        "{} extras / mês\n",
        format_brl(difference.monthly.abs())
    ));
    out.push_str(&format!(
        "{} de vantagem {advantage}\n",
        format_percent(difference.percent.map(|p| p.abs()))
    ));
    out
}
