pub mod compare;
pub mod schema;
pub mod sweep;

use anyhow::Context;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("no amount given")]
    Empty,
    #[error("not a whole number of won: '{0}'")]
    NotANumber(String),
    #[error("amount must not be negative: '{0}'")]
    Negative(String),
    #[error("amount exceeds {max} won: '{0}'", max = i64::MAX)]
    TooLarge(String),
}

/// Parse a gross profit, accepting `,` and `_` as thousands separators.
pub fn parse_gross_profit(input: &str) -> Result<Decimal, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let digits: String = trimmed.chars().filter(|c| !matches!(c, ',' | '_')).collect();
    let amount: i64 = digits.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => InputError::TooLarge(trimmed.to_string()),
        IntErrorKind::NegOverflow => InputError::Negative(trimmed.to_string()),
        _ => InputError::NotANumber(trimmed.to_string()),
    })?;
    if amount < 0 {
        return Err(InputError::Negative(trimmed.to_string()));
    }
    Ok(Decimal::from(amount))
}

/// Use the amount from the command line, or prompt for it on stdin
pub fn gross_profit_or_prompt(arg: Option<&str>) -> anyhow::Result<Decimal> {
    let line = match arg {
        Some(arg) => arg.to_string(),
        None => prompt("Gross profit (KRW): ")?,
    };
    let amount = parse_gross_profit(&line)
        .with_context(|| format!("Invalid gross profit '{}'", line.trim()))?;
    Ok(amount)
}

fn prompt(message: &str) -> anyhow::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", message)?;
    stdout.flush()?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read gross profit from stdin")?;
    if read == 0 {
        anyhow::bail!("No input received. Provide a gross profit or type one at the prompt.");
    }
    Ok(line)
}
