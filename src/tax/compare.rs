use crate::tax::business::{Corporation, SoleProprietorship};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Structure {
    SoleProprietorship,
    Corporation,
}

/// Both paths side by side, with the corporate advantage (negative when the
/// sole proprietorship keeps more)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Comparison {
    pub sole_proprietorship: SoleProprietorship,
    pub corporation: Corporation,
    #[schemars(with = "String")]
    pub difference: Decimal,
    pub favourable: Structure,
}

impl Comparison {
    /// Absolute amount by which the favourable structure comes out ahead
    pub fn advantage(&self) -> Decimal {
        self.difference.abs()
    }
}

pub fn income_difference(a: Decimal, b: Decimal) -> Decimal {
    a - b
}

/// Ties go to the corporation.
pub fn compare(sole_proprietorship: SoleProprietorship, corporation: Corporation) -> Comparison {
    let difference = income_difference(
        corporation.income_after_tax,
        sole_proprietorship.income_after_tax,
    );
    let favourable = if difference >= Decimal::ZERO {
        Structure::Corporation
    } else {
        Structure::SoleProprietorship
    };
    Comparison {
        sole_proprietorship,
        corporation,
        difference,
        favourable,
    }
}
