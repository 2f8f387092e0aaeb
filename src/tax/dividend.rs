//! Dividend gross-up and the dividend tax credit limit

use crate::tax::income::separate_taxation;
use crate::tax::kr::{
    personal_income_tax, FINANCIAL_INCOME_RATE, FINANCIAL_INCOME_THRESHOLD, GROSS_UP_RATE,
};
use rust_decimal::Decimal;

/// Gross-up on the portion of dividend income above the separate taxation
/// threshold. Not truncated.
pub fn gross_up(dividend_income: Decimal) -> Decimal {
    (dividend_income - FINANCIAL_INCOME_THRESHOLD).max(Decimal::ZERO) * GROSS_UP_RATE
}

/// Ceiling on the dividend tax credit.
///
/// The credit may not bring the combined tax below what taxing the dividend
/// at the flat rate and the salary progressively would produce.
pub fn dividend_credit_limit(
    dividend_income: Decimal,
    annual_salary: Decimal,
    total_income: Decimal,
) -> Decimal {
    let separate = separate_taxation(total_income);
    let flat = dividend_income * FINANCIAL_INCOME_RATE + personal_income_tax(annual_salary);
    separate.max(flat) - flat
}
