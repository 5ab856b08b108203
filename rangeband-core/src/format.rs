//! Compact currency rendering for slider readouts and marker labels.
//!
//! Amounts collapse to `K`/`M` only when the suffix loses nothing: whole
//! thousands become `50K`, millions keep one decimal (`2.5M`), everything
//! else renders as a digit-grouped integer (`12,345`).

/// Render `amount` with `symbol` in the compact money style.
pub fn compact_currency(symbol: &str, amount: f64) -> String {
    if amount >= 1_000_000.0 {
        format!("{symbol}{:.1}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 && amount % 1_000.0 == 0.0 {
        format!("{symbol}{}K", (amount / 1_000.0) as i64)
    } else {
        format!("{symbol}{}", group_thousands(amount.round() as i64))
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_thousands_compact_to_k() {
        assert_eq!(compact_currency("€", 1_000.0), "€1K");
        assert_eq!(compact_currency("€", 50_000.0), "€50K");
        assert_eq!(compact_currency("€", 250_000.0), "€250K");
        assert_eq!(compact_currency("€", 999_000.0), "€999K");
    }

    #[test]
    fn millions_keep_one_decimal() {
        assert_eq!(compact_currency("€", 1_000_000.0), "€1.0M");
        assert_eq!(compact_currency("€", 2_500_000.0), "€2.5M");
        assert_eq!(compact_currency("€", 50_000_000.0), "€50.0M");
    }

    #[test]
    fn non_round_amounts_keep_their_digits() {
        assert_eq!(compact_currency("€", 12_345.0), "€12,345");
        assert_eq!(compact_currency("€", 999_999.0), "€999,999");
        assert_eq!(compact_currency("€", 1_500.5), "€1,501");
    }

    #[test]
    fn small_amounts_render_plain() {
        assert_eq!(compact_currency("€", 0.0), "€0");
        assert_eq!(compact_currency("€", 500.0), "€500");
        assert_eq!(compact_currency("€", 999.0), "€999");
    }

    #[test]
    fn symbol_is_caller_supplied() {
        assert_eq!(compact_currency("$", 50_000.0), "$50K");
        assert_eq!(compact_currency("£", 2_500_000.0), "£2.5M");
    }

    #[test]
    fn negative_amounts_keep_the_sign() {
        assert_eq!(compact_currency("€", -12_345.0), "€-12,345");
    }
}
