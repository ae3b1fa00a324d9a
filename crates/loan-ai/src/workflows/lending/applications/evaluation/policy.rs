use super::super::domain::Decision;
use serde::{Deserialize, Serialize};

/// The rule in the ordered chain that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    /// A criminal record rejects regardless of every other answer.
    CriminalRecordVeto,
    /// A high loan amount without stable income, checked before credit.
    HighLoanWithoutIncome,
    /// Good credit and stable income, but the amount needs a manager.
    HighLoanEscalation,
    QualifiedApplicant,
    /// Catch-all for any profile the earlier rules did not settle.
    InsufficientQualification,
}

impl DecisionRule {
    /// Rules in evaluation priority order.
    pub const CHAIN: [DecisionRule; 5] = [
        DecisionRule::CriminalRecordVeto,
        DecisionRule::HighLoanWithoutIncome,
        DecisionRule::HighLoanEscalation,
        DecisionRule::QualifiedApplicant,
        DecisionRule::InsufficientQualification,
    ];

    pub fn decision(self) -> Decision {
        match self {
            DecisionRule::CriminalRecordVeto
            | DecisionRule::HighLoanWithoutIncome
            | DecisionRule::InsufficientQualification => Decision::Rejected,
            DecisionRule::HighLoanEscalation => Decision::Review,
            DecisionRule::QualifiedApplicant => Decision::Approved,
        }
    }

    pub fn summary(self) -> String {
        match self {
            DecisionRule::CriminalRecordVeto => {
                "rejected: criminal record overrides all other factors".to_string()
            }
            DecisionRule::HighLoanWithoutIncome => {
                "rejected: high loan amount requested without stable income".to_string()
            }
            DecisionRule::HighLoanEscalation => {
                "manual review: good credit and stable income, but high loan amount".to_string()
            }
            DecisionRule::QualifiedApplicant => {
                "approved: good credit and stable income".to_string()
            }
            DecisionRule::InsufficientQualification => {
                "rejected: requires both good credit and stable income".to_string()
            }
        }
    }
}
