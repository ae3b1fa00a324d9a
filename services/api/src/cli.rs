use crate::commands::{run_evaluate, run_truth_table, EvaluateArgs, TruthTableArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Bank Loan Decision Gate",
    about = "Evaluate loan applications and inspect the decision truth table",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a single application from its four answers
    Evaluate(EvaluateArgs),
    /// Print the full truth table across all sixteen applicant profiles
    TruthTable(TruthTableArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::TruthTable(args) => run_truth_table(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::TableFormat;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["loan-ai-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_evaluate_flags() {
        let cli = Cli::try_parse_from(["loan-ai-api", "evaluate", "--good-credit", "--high-loan-amount"])
            .expect("parses");
        match cli.command {
            Some(Command::Evaluate(args)) => {
                let profile = args.profile();
                assert!(profile.good_credit);
                assert!(!profile.stable_income);
                assert!(!profile.criminal_record);
                assert!(profile.high_loan_amount);
            }
            other => panic!("expected evaluate command, got {other:?}"),
        }
    }

    #[test]
    fn parses_truth_table_format() {
        let cli = Cli::try_parse_from(["loan-ai-api", "truth-table", "--format", "csv"])
            .expect("parses");
        match cli.command {
            Some(Command::TruthTable(args)) => assert_eq!(args.format, TableFormat::Csv),
            other => panic!("expected truth-table command, got {other:?}"),
        }
    }
}
