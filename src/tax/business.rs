//! After-tax income under each business structure

use crate::tax::income::combined_income_tax;
use crate::tax::kr::{corporation_tax, local_income_tax, personal_income_tax};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::Serialize;

/// Won per year
pub const DEFAULT_ANNUAL_SALARY: i64 = 50_000_000;

/// Model parameters that are not tax law
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assumptions {
    /// Salary the corporation pays its owner, independent of gross profit
    pub annual_salary: Decimal,
}

impl Default for Assumptions {
    fn default() -> Self {
        Assumptions {
            annual_salary: Decimal::from(DEFAULT_ANNUAL_SALARY),
        }
    }
}

/// Sole proprietorship: gross profit is taxed directly as personal income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SoleProprietorship {
    /// Net income, assumed equal to gross profit
    #[schemars(with = "String")]
    pub net_income: Decimal,
    #[schemars(with = "String")]
    pub global_income_tax: Decimal,
    #[schemars(with = "String")]
    pub local_income_tax: Decimal,
    #[schemars(with = "String")]
    pub income_after_tax: Decimal,
}

/// Corporation: the owner draws a salary and receives all post-tax profit
/// as a dividend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Corporation {
    #[schemars(with = "String")]
    pub dividend_income: Decimal,
    /// Gross profit less salary
    #[schemars(with = "String")]
    pub net_income: Decimal,
    #[schemars(with = "String")]
    pub gross_profit: Decimal,
    #[schemars(with = "String")]
    pub annual_salary: Decimal,
    #[schemars(with = "String")]
    pub corporation_tax: Decimal,
    #[schemars(with = "String")]
    pub local_income_tax_corp: Decimal,
    /// Global income tax on salary and dividend combined
    #[schemars(with = "String")]
    pub global_income_tax: Decimal,
    #[schemars(with = "String")]
    pub local_income_tax_global: Decimal,
    #[schemars(with = "String")]
    pub income_after_tax: Decimal,
}

pub fn compute_sole_proprietorship(gross_profit: Decimal) -> SoleProprietorship {
    let global_income_tax = personal_income_tax(gross_profit);
    let local_income_tax = local_income_tax(global_income_tax);
    let income_after_tax = gross_profit - global_income_tax - local_income_tax;

    let result = SoleProprietorship {
        net_income: gross_profit,
        global_income_tax,
        local_income_tax,
        income_after_tax,
    };
    log::debug!("Sole proprietorship: {:?}", result);
    result
}

pub fn compute_corporation(gross_profit: Decimal, assumptions: &Assumptions) -> Corporation {
    let annual_salary = assumptions.annual_salary;
    let net_income = gross_profit - annual_salary;

    let corporation_tax = corporation_tax(net_income);
    let local_income_tax_corp = local_income_tax(corporation_tax);
    let dividend_income = net_income - corporation_tax - local_income_tax_corp;

    let global_income_tax = combined_income_tax(dividend_income, annual_salary);
    let local_income_tax_global = local_income_tax(global_income_tax);
    let income_after_tax =
        dividend_income + annual_salary - global_income_tax - local_income_tax_global;

    let result = Corporation {
        dividend_income,
        net_income,
        gross_profit,
        annual_salary,
        corporation_tax,
        local_income_tax_corp,
        global_income_tax,
        local_income_tax_global,
        income_after_tax,
    };
    log::debug!("Corporation: {:?}", result);
    result
}
