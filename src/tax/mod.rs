pub mod bracket;
pub mod business;
pub mod compare;
pub mod dividend;
pub mod income;
pub mod kr;

// Flat public surface for the calculation engine.
pub use bracket::{Bracket, BracketError, BracketTable};
pub use business::{
    compute_corporation, compute_sole_proprietorship, Assumptions, Corporation,
    SoleProprietorship, DEFAULT_ANNUAL_SALARY,
};
pub use compare::{compare, income_difference, Comparison, Structure};
pub use dividend::{dividend_credit_limit, gross_up};
pub use income::{combined_income_breakdown, combined_income_tax, separate_taxation};
