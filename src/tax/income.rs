//! Personal income tax on combined salary and dividend income
//!
//! Dividends above the financial income threshold are grossed up and taxed
//! together with salary. The tax authority takes whichever of two methods
//! yields more: separate taxation of the first 20M of financial income, or
//! progressive tax on salary plus the flat rate on dividends. The gross-up is
//! then credited back, up to the dividend credit limit.

use crate::tax::dividend::{dividend_credit_limit, gross_up};
use crate::tax::kr::{personal_income_tax, FINANCIAL_INCOME_RATE, FINANCIAL_INCOME_THRESHOLD};
use rust_decimal::Decimal;

/// Tax under separate taxation: the first 20M of financial income at the flat
/// rate, everything else progressively.
pub fn separate_taxation(income: Decimal) -> Decimal {
    personal_income_tax(income - FINANCIAL_INCOME_THRESHOLD)
        + FINANCIAL_INCOME_THRESHOLD * FINANCIAL_INCOME_RATE
}

/// Every intermediate figure of the combined income tax calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinedIncomeBreakdown {
    pub gross_up: Decimal,
    pub financial_income: Decimal,
    pub total_income: Decimal,
    /// Separate taxation of financial income
    pub separate_method: Decimal,
    /// Progressive tax on salary plus the flat rate on dividends
    pub global_method: Decimal,
    pub tax_before_credit: Decimal,
    pub credit_limit: Decimal,
    pub credit: Decimal,
    pub tax: Decimal,
}

pub fn combined_income_breakdown(
    dividend_income: Decimal,
    annual_salary: Decimal,
) -> CombinedIncomeBreakdown {
    let gross_up = gross_up(dividend_income);
    let financial_income = dividend_income + gross_up;
    let total_income = financial_income + annual_salary;

    let separate_method = separate_taxation(total_income);
    let global_method = personal_income_tax(total_income - financial_income)
        + dividend_income * FINANCIAL_INCOME_RATE;
    let tax_before_credit = separate_method.max(global_method);

    let credit_limit = dividend_credit_limit(dividend_income, annual_salary, total_income);
    let credit = gross_up.min(credit_limit);
    let tax = (tax_before_credit - credit).trunc();

    let breakdown = CombinedIncomeBreakdown {
        gross_up,
        financial_income,
        total_income,
        separate_method,
        global_method,
        tax_before_credit,
        credit_limit,
        credit,
        tax,
    };
    log::debug!("Combined income tax: {:?}", breakdown);
    breakdown
}

/// Global income tax owed on dividend income received alongside a salary.
pub fn combined_income_tax(dividend_income: Decimal, annual_salary: Decimal) -> Decimal {
    combined_income_breakdown(dividend_income, annual_salary).tax
}
