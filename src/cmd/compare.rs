//! Compare command - after-tax income as sole proprietor vs. corporation

use crate::money::{display_amount, display_deduction, CURRENCY};
use crate::tax::{
    compare, compute_corporation, compute_sole_proprietorship, Assumptions, Comparison,
    Corporation, SoleProprietorship, Structure, DEFAULT_ANNUAL_SALARY,
};
use clap::Args;
use rust_decimal::Decimal;
use std::io::{self, Write};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct CompareCommand {
    /// Annual gross profit in won. Prompts on stdin if not given.
    gross_profit: Option<String>,

    /// Annual salary the corporation pays its owner
    #[arg(short, long, default_value_t = DEFAULT_ANNUAL_SALARY, value_parser = clap::value_parser!(i64).range(0..))]
    salary: i64,

    /// Output as JSON instead of formatted tables
    #[arg(long)]
    json: bool,
}

impl CompareCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let gross_profit = super::gross_profit_or_prompt(self.gross_profit.as_deref())?;
        let assumptions = Assumptions {
            annual_salary: Decimal::from(self.salary),
        };
        log::info!(
            "Comparing gross profit {} with annual salary {}",
            gross_profit,
            assumptions.annual_salary
        );

        let comparison = run(gross_profit, &assumptions);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        } else {
            write_report(&comparison, io::stdout().lock())?;
        }
        Ok(())
    }
}

/// Compute both structures for one gross profit
pub fn run(gross_profit: Decimal, assumptions: &Assumptions) -> Comparison {
    compare(
        compute_sole_proprietorship(gross_profit),
        compute_corporation(gross_profit, assumptions),
    )
}

#[derive(Debug, Clone, Tabled)]
struct LineItem {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Amount (KRW)")]
    amount: String,
}

impl LineItem {
    fn income(item: &str, amount: Decimal) -> Self {
        LineItem {
            item: item.to_string(),
            amount: display_amount(amount),
        }
    }

    fn deduction(item: &str, amount: Decimal) -> Self {
        LineItem {
            item: item.to_string(),
            amount: display_deduction(amount),
        }
    }
}

fn sole_proprietorship_items(result: &SoleProprietorship) -> Vec<LineItem> {
    vec![
        LineItem::income("Net income", result.net_income),
        LineItem::deduction("Global income tax", result.global_income_tax),
        LineItem::deduction("Local income tax", result.local_income_tax),
        LineItem::income("Income after tax", result.income_after_tax),
    ]
}

fn corporation_items(result: &Corporation) -> Vec<LineItem> {
    vec![
        LineItem::income("Dividend", result.dividend_income),
        LineItem::income("  Net income", result.net_income),
        LineItem::income("    Gross profit", result.gross_profit),
        LineItem::deduction("    Salary expense", result.annual_salary),
        LineItem::deduction("  Corporation tax", result.corporation_tax),
        LineItem::deduction(
            "  Local income tax (corporation tax)",
            result.local_income_tax_corp,
        ),
        LineItem::income("Salary", result.annual_salary),
        LineItem::deduction("Global income tax", result.global_income_tax),
        LineItem::deduction(
            "Local income tax (global income tax)",
            result.local_income_tax_global,
        ),
        LineItem::income("Income after tax", result.income_after_tax),
    ]
}

fn table(items: Vec<LineItem>) -> String {
    Table::new(items)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

/// One line naming the favourable structure and by how much
pub fn verdict(comparison: &Comparison) -> String {
    let amount = display_amount(comparison.advantage());
    match comparison.favourable {
        Structure::Corporation => format!(
            "Corporation (favourable) > Sole proprietorship: {} {}",
            amount, CURRENCY
        ),
        Structure::SoleProprietorship => format!(
            "Corporation < Sole proprietorship (favourable): {} {}",
            amount, CURRENCY
        ),
    }
}

pub fn write_report<W: Write>(comparison: &Comparison, mut writer: W) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "SOLE PROPRIETORSHIP")?;
    writeln!(
        writer,
        "{}",
        table(sole_proprietorship_items(&comparison.sole_proprietorship))
    )?;
    writeln!(writer)?;
    writeln!(writer, "CORPORATION")?;
    writeln!(writer, "{}", table(corporation_items(&comparison.corporation)))?;
    writeln!(writer)?;
    writeln!(writer, "{}", verdict(comparison))?;
    writer.flush()
}
