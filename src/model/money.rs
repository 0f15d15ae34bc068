//! Currency rounding and display.
//!
//! Prices are `Decimal`, so sums are exact; rounding happens once, at the cent
//! boundary, using half-away-from-zero (round-half-up for the non-negative
//! amounts the cart produces).

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to cents.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as en-US dollars, e.g. `$1,234.56` or `-$5.00`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}", sign, group_thousands(&fixed_cents(rounded.abs())))
}

/// Fallback form used when no symbol is known for `code`, e.g. `EUR 12.50`.
pub fn format_currency_code(amount: Decimal, code: &str) -> String {
    format!("{} {}", code, fixed_cents(round_money(amount)))
}

fn fixed_cents(amount: Decimal) -> String {
    let mut scaled = amount;
    scaled.rescale(2);
    scaled.to_string()
}

fn group_thousands(fixed: &str) -> String {
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed, "00"));
    let digits: Vec<char> = whole.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }
    format!("{}.{}", grouped, cents)
}
