use clap::{Args, ValueEnum};
use loan_ai::error::AppError;
use loan_ai::workflows::lending::applications::{
    ApplicantAttribute, ApplicantProfile, DecisionEngine, EvaluationOutcome, TruthTable,
};
use loan_ai::workflows::lending::generate_table;
use std::io::Write;

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// Applicant has a good credit score (>700)
    #[arg(long)]
    pub(crate) good_credit: bool,
    /// Applicant has a stable income source
    #[arg(long)]
    pub(crate) stable_income: bool,
    /// Applicant has a criminal record
    #[arg(long)]
    pub(crate) criminal_record: bool,
    /// Requested loan amount is high (>$50k)
    #[arg(long)]
    pub(crate) high_loan_amount: bool,
}

impl EvaluateArgs {
    pub(crate) fn profile(&self) -> ApplicantProfile {
        ApplicantProfile::new(
            self.good_credit,
            self.stable_income,
            self.criminal_record,
            self.high_loan_amount,
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum TableFormat {
    #[default]
    Text,
    Csv,
    Json,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TruthTableArgs {
    /// Output format for the table
    #[arg(long, value_enum, default_value_t = TableFormat::Text)]
    pub(crate) format: TableFormat,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let outcome = DecisionEngine::new().evaluate_profile(&args.profile());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_evaluation(&mut out, &outcome)?;
    Ok(())
}

pub(crate) fn run_truth_table(args: TruthTableArgs) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_truth_table(&mut out, generate_table(), args.format)
}

fn write_evaluation<W: Write>(out: &mut W, outcome: &EvaluationOutcome) -> std::io::Result<()> {
    writeln!(out, "Applicant answers")?;
    for attribute in ApplicantAttribute::ALL {
        let answer = if outcome.profile.value(attribute) {
            "Yes"
        } else {
            "No"
        };
        writeln!(out, "- {} {}", attribute.prompt(), answer)?;
    }
    writeln!(out, "\nDecision: {}", outcome.decision.headline())?;
    writeln!(out, "Rationale: {}", outcome.rationale())?;
    Ok(())
}

fn write_truth_table<W: Write>(
    out: &mut W,
    table: &TruthTable,
    format: TableFormat,
) -> Result<(), AppError> {
    match format {
        TableFormat::Text => {
            writeln!(out, "System logic proof: all {} applicant scenarios", table.len())?;
            write!(out, "{}", table.render_text())?;
            let tally = table
                .tally()
                .into_iter()
                .map(|(decision, count)| format!("{}: {count}", decision.as_str()))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(out, "\nTotals: {tally}")?;
        }
        TableFormat::Csv => table.write_csv(&mut *out)?,
        TableFormat::Json => {
            let body = serde_json::to_string_pretty(table.rows())
                .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
            writeln!(out, "{body}")?;
        }
    }
    Ok(())
}
