//! Schema command - print the JSON output format of `compare --json`

use crate::tax::Comparison;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema or csv-header
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for `compare --json`
    JsonSchema,
    /// CSV header row of `sweep --csv`
    CsvHeader,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => {
                println!("{}", comparison_schema()?);
            }
            SchemaFormat::CsvHeader => {
                println!("{}", SWEEP_CSV_COLUMNS.join(","));
            }
        }
        Ok(())
    }
}

pub fn comparison_schema() -> serde_json::Result<String> {
    let schema = schema_for!(Comparison);
    serde_json::to_string_pretty(&schema)
}

const SWEEP_CSV_COLUMNS: &[&str] = &[
    "gross_profit",
    "sole_proprietorship",
    "corporation",
    "difference",
    "favourable",
];
