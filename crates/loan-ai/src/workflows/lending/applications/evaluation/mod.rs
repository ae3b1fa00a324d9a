mod policy;
mod rules;

pub use policy::DecisionRule;

use super::domain::{ApplicantProfile, Decision};
use serde::{Deserialize, Serialize};

/// Stateless evaluator applying the fixed loan rule chain to a profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionEngine;

impl DecisionEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn decide(&self, profile: &ApplicantProfile) -> Decision {
        rules::decide(profile).0
    }

    pub fn evaluate_profile(&self, profile: &ApplicantProfile) -> EvaluationOutcome {
        let (decision, rule) = rules::decide(profile);

        EvaluationOutcome {
            profile: *profile,
            decision,
            rule,
        }
    }
}

/// Classify an application from its four answers.
///
/// Total over all inputs: every combination yields exactly one [`Decision`].
pub fn evaluate(
    good_credit: bool,
    stable_income: bool,
    criminal_record: bool,
    high_loan_amount: bool,
) -> Decision {
    DecisionEngine.decide(&ApplicantProfile::new(
        good_credit,
        stable_income,
        criminal_record,
        high_loan_amount,
    ))
}

/// Evaluation output pairing the decision with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub profile: ApplicantProfile,
    pub decision: Decision,
    pub rule: DecisionRule,
}

impl EvaluationOutcome {
    pub fn rationale(&self) -> String {
        self.rule.summary()
    }
}
