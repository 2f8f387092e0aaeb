//! Sweep command - compare both structures over a range of gross profits

use crate::cmd::compare::run;
use crate::money::display_amount;
use crate::tax::{Assumptions, Comparison, Structure, DEFAULT_ANNUAL_SALARY};
use clap::Args;
use rust_decimal::Decimal;
use std::io;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct SweepCommand {
    /// First gross profit in the range
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    from: i64,

    /// Last gross profit in the range (inclusive)
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    to: i64,

    /// Increment between gross profits
    #[arg(long, default_value_t = 10_000_000)]
    step: i64,

    /// Annual salary the corporation pays its owner
    #[arg(short, long, default_value_t = DEFAULT_ANNUAL_SALARY, value_parser = clap::value_parser!(i64).range(0..))]
    salary: i64,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("step must be positive, got {0}")]
    Step(i64),
    #[error("range start {from} is after range end {to}")]
    Reversed { from: i64, to: i64 },
    #[error("range has more than {} gross profits, use a larger step", MAX_SWEEP_ROWS)]
    TooLarge,
}

/// Largest number of gross profits a single sweep evaluates
pub const MAX_SWEEP_ROWS: i64 = 100_000;

impl SweepCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let gross_profits = gross_profit_range(self.from, self.to, self.step)?;
        let assumptions = Assumptions {
            annual_salary: Decimal::from(self.salary),
        };
        log::info!(
            "Sweeping {} gross profits from {} to {}",
            gross_profits.len(),
            self.from,
            self.to
        );

        let comparisons: Vec<Comparison> = gross_profits
            .into_iter()
            .map(|gross_profit| run(gross_profit, &assumptions))
            .collect();

        if self.csv {
            let rows = sweep_rows(&comparisons, |amount| amount.to_string());
            write_csv(&rows, io::stdout())
        } else {
            print_table(&sweep_rows(&comparisons, display_amount));
            Ok(())
        }
    }
}

/// Inclusive range of gross profits; the last value is `to` only when it
/// lies on a step.
pub fn gross_profit_range(from: i64, to: i64, step: i64) -> Result<Vec<Decimal>, RangeError> {
    if step <= 0 {
        return Err(RangeError::Step(step));
    }
    if from > to {
        return Err(RangeError::Reversed { from, to });
    }
    let count = to
        .checked_sub(from)
        .map(|span| span / step)
        .and_then(|steps| steps.checked_add(1))
        .filter(|count| *count <= MAX_SWEEP_ROWS)
        .ok_or(RangeError::TooLarge)?;
    Ok((0..count)
        .map(|i| Decimal::from(from + i * step))
        .collect())
}

/// Row for the sweep table and CSV output
#[derive(Debug, Clone, Tabled, serde::Serialize)]
pub struct SweepRow {
    #[tabled(rename = "Gross Profit")]
    pub gross_profit: String,

    #[tabled(rename = "Sole Proprietorship")]
    pub sole_proprietorship: String,

    #[tabled(rename = "Corporation")]
    pub corporation: String,

    #[tabled(rename = "Difference")]
    pub difference: String,

    #[tabled(rename = "Favourable")]
    pub favourable: String,
}

fn sweep_rows(comparisons: &[Comparison], format: impl Fn(Decimal) -> String) -> Vec<SweepRow> {
    comparisons
        .iter()
        .map(|c| SweepRow {
            gross_profit: format(c.corporation.gross_profit),
            sole_proprietorship: format(c.sole_proprietorship.income_after_tax),
            corporation: format(c.corporation.income_after_tax),
            difference: format(c.difference),
            favourable: structure_name(c.favourable).to_string(),
        })
        .collect()
}

fn structure_name(structure: Structure) -> &'static str {
    match structure {
        Structure::SoleProprietorship => "sole_proprietorship",
        Structure::Corporation => "corporation",
    }
}

fn print_table(rows: &[SweepRow]) {
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(..4)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

fn write_csv<W: io::Write>(rows: &[SweepRow], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn range_includes_both_ends() {
        let range = gross_profit_range(0, 30_000_000, 10_000_000).unwrap();
        assert_eq!(
            range,
            vec![dec!(0), dec!(10_000_000), dec!(20_000_000), dec!(30_000_000)]
        );
    }

    #[test]
    fn range_stops_before_overshooting() {
        let range = gross_profit_range(0, 25, 10).unwrap();
        assert_eq!(range, vec![dec!(0), dec!(10), dec!(20)]);
    }

    #[test]
    fn single_value_range() {
        let range = gross_profit_range(5, 5, 1).unwrap();
        assert_eq!(range, vec![dec!(5)]);
    }

    #[test]
    fn rejects_bad_ranges() {
        assert_eq!(gross_profit_range(0, 10, 0), Err(RangeError::Step(0)));
        assert_eq!(gross_profit_range(0, 10, -5), Err(RangeError::Step(-5)));
        assert_eq!(
            gross_profit_range(10, 0, 1),
            Err(RangeError::Reversed { from: 10, to: 0 })
        );
    }

    #[test]
    fn rejects_ranges_past_row_limit() {
        assert_eq!(gross_profit_range(0, i64::MAX, 1), Err(RangeError::TooLarge));
        assert_eq!(
            gross_profit_range(0, 4_000_000_000_000_000_000, 1),
            Err(RangeError::TooLarge)
        );
        assert_eq!(gross_profit_range(i64::MIN, i64::MAX, 1), Err(RangeError::TooLarge));
        assert_eq!(gross_profit_range(0, MAX_SWEEP_ROWS, 1), Err(RangeError::TooLarge));
    }

    #[test]
    fn accepts_ranges_at_row_limit() {
        let range = gross_profit_range(0, MAX_SWEEP_ROWS - 1, 1).unwrap();
        assert_eq!(range.len() as i64, MAX_SWEEP_ROWS);

        let range = gross_profit_range(0, i64::MAX, i64::MAX).unwrap();
        assert_eq!(range, vec![dec!(0), Decimal::from(i64::MAX)]);
    }

    #[test]
    fn csv_has_header_and_rows() {
        let assumptions = Assumptions::default();
        let comparisons: Vec<Comparison> = [dec!(50_000_000), dec!(100_000_000)]
            .into_iter()
            .map(|g| run(g, &assumptions))
            .collect();
        let rows = sweep_rows(&comparisons, |amount| amount.to_string());

        let mut out = Vec::new();
        write_csv(&rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "gross_profit,sole_proprietorship,corporation,difference,favourable"
        );
        assert_eq!(lines[1], "50000000,42542000,42542000,0,corporation");
        assert_eq!(lines[2], "100000000,77890000,79747020,1857020,corporation");
    }

    #[test]
    fn table_rows_group_thousands() {
        let comparisons = vec![run(dec!(1_000_000_000), &Assumptions::default())];
        let rows = sweep_rows(&comparisons, display_amount);
        assert_eq!(rows[0].gross_profit, "1,000,000,000");
        assert_eq!(rows[0].difference, "-22,232,320");
        assert_eq!(rows[0].favourable, "sole_proprietorship");
    }
}
