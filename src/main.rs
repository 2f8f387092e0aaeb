use bizform::cmd::{compare::CompareCommand, schema::SchemaCommand, sweep::SweepCommand};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bizform")]
#[command(version, about = "Sole proprietorship vs. corporation after-tax income", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare after-tax income for one gross profit
    Compare(CompareCommand),
    /// Compare over a range of gross profits
    Sweep(SweepCommand),
    /// Print output formats
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Compare(cmd) => cmd.exec(),
        Command::Sweep(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
