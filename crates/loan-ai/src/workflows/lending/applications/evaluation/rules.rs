use super::super::domain::{ApplicantProfile, Decision};
use super::policy::DecisionRule;

/// Walk the rule chain in priority order; the first rule that matches decides.
pub(crate) fn first_matching_rule(profile: &ApplicantProfile) -> DecisionRule {
    let ApplicantProfile {
        good_credit,
        stable_income,
        criminal_record,
        high_loan_amount,
    } = *profile;

    if criminal_record {
        DecisionRule::CriminalRecordVeto
    } else if high_loan_amount && !stable_income {
        DecisionRule::HighLoanWithoutIncome
    } else if good_credit && stable_income {
        if high_loan_amount {
            DecisionRule::HighLoanEscalation
        } else {
            DecisionRule::QualifiedApplicant
        }
    } else {
        DecisionRule::InsufficientQualification
    }
}

pub(crate) fn decide(profile: &ApplicantProfile) -> (Decision, DecisionRule) {
    let rule = first_matching_rule(profile);
    (rule.decision(), rule)
}
