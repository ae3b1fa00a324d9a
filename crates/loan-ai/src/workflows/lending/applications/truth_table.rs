use std::collections::BTreeMap;
use std::io::Write;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::domain::{ApplicantAttribute, ApplicantProfile, Decision};
use super::evaluation::DecisionEngine;

/// One enumerated profile and the decision it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTableRow {
    pub profile: ApplicantProfile,
    pub decision: Decision,
}

impl TruthTableRow {
    /// Inputs rendered as `"0"`/`"1"` in P, Q, R, S order.
    pub fn input_bits(&self) -> [&'static str; 4] {
        self.profile
            .values()
            .map(|value| if value { "1" } else { "0" })
    }

    /// One `YES`/empty marker per outcome, in [`Decision::ALL`] order.
    pub fn outcome_markers(&self) -> [&'static str; 3] {
        Decision::ALL.map(|decision| if decision == self.decision { "YES" } else { "" })
    }
}

/// Exhaustive enumeration of every applicant profile, ordered by [`ApplicantProfile::index`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTable {
    rows: Vec<TruthTableRow>,
}

/// Failure while exporting the table to a writer.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write csv record: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush export: {0}")]
    Io(#[from] std::io::Error),
    #[error("export produced invalid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

static TRUTH_TABLE: OnceLock<TruthTable> = OnceLock::new();

/// The memoized truth table. Computed once per process.
pub fn generate_table() -> &'static TruthTable {
    TRUTH_TABLE.get_or_init(|| TruthTable::build(&DecisionEngine::new()))
}

impl TruthTable {
    /// Evaluate `engine` over all sixteen profiles, P slowest and S fastest.
    pub fn build(engine: &DecisionEngine) -> Self {
        let domain = [false, true];
        let mut rows = Vec::with_capacity(ApplicantProfile::COMBINATIONS as usize);

        for good_credit in domain {
            for stable_income in domain {
                for criminal_record in domain {
                    for high_loan_amount in domain {
                        let profile = ApplicantProfile::new(
                            good_credit,
                            stable_income,
                            criminal_record,
                            high_loan_amount,
                        );
                        rows.push(TruthTableRow {
                            profile,
                            decision: engine.decide(&profile),
                        });
                    }
                }
            }
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TruthTableRow> {
        self.rows.iter()
    }

    pub fn row(&self, profile: &ApplicantProfile) -> Option<&TruthTableRow> {
        self.rows.get(profile.index() as usize)
    }

    /// Row count per decision. Every decision is present, even with a zero count.
    pub fn tally(&self) -> BTreeMap<Decision, usize> {
        let mut tally: BTreeMap<Decision, usize> =
            Decision::ALL.iter().map(|decision| (*decision, 0)).collect();
        for row in &self.rows {
            *tally.entry(row.decision).or_default() += 1;
        }
        tally
    }

    fn headers() -> Vec<&'static str> {
        ApplicantAttribute::ALL
            .iter()
            .map(|attribute| attribute.column_header())
            .chain(Decision::ALL.iter().map(|decision| decision.column_header()))
            .collect()
    }

    /// Write the flattened table as CSV: four `0`/`1` input columns then one `YES` column per outcome.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(Self::headers())?;

        for row in &self.rows {
            let record = row
                .input_bits()
                .into_iter()
                .chain(row.outcome_markers());
            csv_writer.write_record(record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    pub fn to_csv(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Fixed-width text rendering for terminals.
    pub fn render_text(&self) -> String {
        let headers = Self::headers();
        let widths: Vec<usize> = headers.iter().map(|header| header.len()).collect();

        let format_line = |cells: &[&str]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:^w$}", cell, w = *width))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format_line(&headers));
        lines.push(
            widths
                .iter()
                .map(|width| "-".repeat(*width))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for row in &self.rows {
            let cells: Vec<&str> = row
                .input_bits()
                .into_iter()
                .chain(row.outcome_markers())
                .collect();
            lines.push(format_line(&cells));
        }

        let mut rendered = lines.join("\n");
        rendered.push('\n');
        rendered
    }
}

impl<'a> IntoIterator for &'a TruthTable {
    type Item = &'a TruthTableRow;
    type IntoIter = std::slice::Iter<'a, TruthTableRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
