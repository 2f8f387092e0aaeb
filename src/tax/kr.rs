//! Korean income and corporation tax rules (2023 tax year)

use crate::tax::bracket::{Bracket, BracketTable};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const PERSONAL_BRACKETS: [Bracket; 8] = [
    Bracket::new(dec!(12_000_000), dec!(0.06), dec!(0)),
    Bracket::new(dec!(46_000_000), dec!(0.15), dec!(1_080_000)),
    Bracket::new(dec!(88_000_000), dec!(0.24), dec!(5_220_000)),
    Bracket::new(dec!(150_000_000), dec!(0.35), dec!(14_900_000)),
    Bracket::new(dec!(300_000_000), dec!(0.38), dec!(19_400_000)),
    Bracket::new(dec!(500_000_000), dec!(0.40), dec!(25_400_000)),
    Bracket::new(dec!(1_000_000_000), dec!(0.42), dec!(35_400_000)),
    Bracket::top(dec!(0.45), dec!(65_400_000)),
];

/// Global income tax (종합소득세) base rates
pub const PERSONAL: BracketTable = BracketTable::new("personal income tax", &PERSONAL_BRACKETS);

const CORPORATE_BRACKETS: [Bracket; 3] = [
    Bracket::new(dec!(500_000_000), dec!(0.10), dec!(0)),
    Bracket::new(dec!(20_000_000_000), dec!(0.20), dec!(50_000_000)),
    Bracket::top(dec!(0.22), dec!(440_000_000)),
];

/// Corporation tax rates, without the start-up reduction
pub const CORPORATE: BracketTable = BracketTable::new("corporation tax", &CORPORATE_BRACKETS);

/// Local income tax is levied on top of both income and corporation tax
pub const LOCAL_INCOME_TAX_RATE: Decimal = dec!(0.1);

/// Financial income up to this amount is taxed separately at the flat rate
pub const FINANCIAL_INCOME_THRESHOLD: Decimal = dec!(20_000_000);

/// Flat withholding rate on financial (dividend) income
pub const FINANCIAL_INCOME_RATE: Decimal = dec!(0.14);

/// Gross-up rate applied to dividends above the threshold
pub const GROSS_UP_RATE: Decimal = dec!(0.11);

pub fn personal_income_tax(amount: Decimal) -> Decimal {
    PERSONAL.tax(amount)
}

pub fn corporation_tax(amount: Decimal) -> Decimal {
    CORPORATE.tax(amount)
}

/// Local income tax on either income tax or corporation tax
pub fn local_income_tax(tax: Decimal) -> Decimal {
    (tax * LOCAL_INCOME_TAX_RATE).trunc()
}
