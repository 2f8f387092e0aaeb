//! Progressive bracket tables and the marginal-rate evaluator

use rust_decimal::Decimal;

/// A single band of a progressive table.
///
/// Tax for an amount falling in the band is `amount * rate - deduction`, where
/// `deduction` is the progressive deduction for the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    /// Inclusive upper bound, `None` for the top band
    pub upper: Option<Decimal>,
    pub rate: Decimal,
    pub deduction: Decimal,
}

impl Bracket {
    pub const fn new(upper: Decimal, rate: Decimal, deduction: Decimal) -> Self {
        Bracket {
            upper: Some(upper),
            rate,
            deduction,
        }
    }

    /// The unbounded top band
    pub const fn top(rate: Decimal, deduction: Decimal) -> Self {
        Bracket {
            upper: None,
            rate,
            deduction,
        }
    }

    fn contains(&self, amount: Decimal) -> bool {
        self.upper.is_none_or(|upper| amount <= upper)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket table '{0}' has no brackets")]
    Empty(&'static str),
    #[error("bracket table '{table}': upper bound at index {index} does not increase")]
    NotIncreasing { table: &'static str, index: usize },
    #[error("bracket table '{table}': unbounded bracket at index {index} is not last")]
    UnboundedBeforeEnd { table: &'static str, index: usize },
    #[error("bracket table '{0}' has no unbounded top bracket")]
    MissingTop(&'static str),
}

/// An ordered progressive table, lowest band first and terminated by an
/// unbounded band.
#[derive(Debug, Clone, Copy)]
pub struct BracketTable {
    name: &'static str,
    brackets: &'static [Bracket],
}

impl BracketTable {
    pub const fn new(name: &'static str, brackets: &'static [Bracket]) -> Self {
        BracketTable { name, brackets }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn brackets(&self) -> &'static [Bracket] {
        self.brackets
    }

    /// The band with the smallest upper bound >= `amount`, or the top band.
    pub fn bracket_for(&self, amount: Decimal) -> Option<&'static Bracket> {
        self.brackets
            .iter()
            .find(|b| b.contains(amount))
            .or_else(|| self.brackets.last())
    }

    /// Tax on `amount`, truncated to whole currency units.
    ///
    /// Amounts below zero fall in the lowest band and produce negative tax.
    pub fn tax(&self, amount: Decimal) -> Decimal {
        let Some(bracket) = self.bracket_for(amount) else {
            return Decimal::ZERO;
        };
        let tax = (amount * bracket.rate - bracket.deduction).trunc();
        log::trace!(
            "{}: {} @ {} - {} = {}",
            self.name,
            amount,
            bracket.rate,
            bracket.deduction,
            tax
        );
        tax
    }

    /// Check that upper bounds strictly increase and only the last band is
    /// unbounded.
    pub fn validate(&self) -> Result<(), BracketError> {
        let (last, rest) = self
            .brackets
            .split_last()
            .ok_or(BracketError::Empty(self.name))?;

        let mut previous: Option<Decimal> = None;
        for (index, bracket) in rest.iter().enumerate() {
            let upper = bracket.upper.ok_or(BracketError::UnboundedBeforeEnd {
                table: self.name,
                index,
            })?;
            if previous.is_some_and(|p| upper <= p) {
                return Err(BracketError::NotIncreasing {
                    table: self.name,
                    index,
                });
            }
            previous = Some(upper);
        }

        if last.upper.is_some() {
            return Err(BracketError::MissingTop(self.name));
        }
        Ok(())
    }
}
