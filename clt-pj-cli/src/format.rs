//! pt-BR presentation of amounts and percentages.

use clt_pj_core::calculations::common::round_half_up;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as Brazilian reais, rounded half-up to centavos.
///
/// Thousands are grouped with `.` and centavos separated with `,`; negative
/// amounts carry a leading `-` (`-R$ 908,85`).
pub fn format_brl(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, centavos) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}R$ {},{centavos}", group_thousands(whole))
}

/// Formats a percentage rounded half-up to one decimal place, or `—` when
/// undefined.
pub fn format_percent(percent: Option<Decimal>) -> String {
    percent
        .map(|p| {
            let rounded = p.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.1}%").replace('.', ",")
        })
        .unwrap_or_else(|| "—".to_string())
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
