use rust_decimal::Decimal;

pub const CURRENCY: &str = "KRW";

/// Whole currency units with thousands separators, e.g. `77,890,000`
pub fn display_amount(amount: Decimal) -> String {
    let whole = amount.trunc();
    let digits = whole.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole.is_sign_negative() && !whole.is_zero() {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Amounts subtracted from income are shown in parentheses
pub fn display_deduction(amount: Decimal) -> String {
    format!("({})", display_amount(amount))
}
