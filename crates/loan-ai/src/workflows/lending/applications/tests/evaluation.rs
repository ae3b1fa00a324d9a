use super::common::*;
use crate::workflows::lending::applications::{
    evaluate, ApplicantProfile, Decision, DecisionEngine, DecisionRule,
};

#[test]
fn every_profile_yields_exactly_one_decision() {
    let engine = DecisionEngine::new();
    for profile in all_profiles() {
        let outcome = engine.evaluate_profile(&profile);
        assert!(Decision::ALL.contains(&outcome.decision));
        assert_eq!(outcome.rule.decision(), outcome.decision);
        assert_eq!(
            evaluate(
                profile.good_credit,
                profile.stable_income,
                profile.criminal_record,
                profile.high_loan_amount
            ),
            outcome.decision
        );
    }
}

#[test]
fn criminal_record_vetoes_everything() {
    let engine = DecisionEngine::new();
    for profile in all_profiles().filter(|profile| profile.criminal_record) {
        let outcome = engine.evaluate_profile(&profile);
        assert_eq!(outcome.decision, Decision::Rejected, "{profile:?}");
        assert_eq!(outcome.rule, DecisionRule::CriminalRecordVeto);
    }
}

#[test]
fn high_loan_without_income_is_rejected_for_any_credit() {
    for good_credit in [false, true] {
        let profile = ApplicantProfile::new(good_credit, false, false, true);
        let outcome = DecisionEngine::new().evaluate_profile(&profile);
        assert_eq!(outcome.decision, Decision::Rejected);
        assert_eq!(outcome.rule, DecisionRule::HighLoanWithoutIncome);
    }
}

#[test]
fn high_loan_with_good_credit_and_income_goes_to_review() {
    assert_eq!(evaluate(true, true, false, true), Decision::Review);
}

#[test]
fn good_credit_and_income_is_approved() {
    assert_eq!(evaluate(true, true, false, false), Decision::Approved);
}

#[test]
fn partial_qualification_falls_through_to_reject() {
    let engine = DecisionEngine::new();
    for profile in [
        ApplicantProfile::new(true, false, false, false),
        ApplicantProfile::new(false, true, false, false),
        ApplicantProfile::new(false, false, false, false),
    ] {
        let outcome = engine.evaluate_profile(&profile);
        assert_eq!(outcome.decision, Decision::Rejected, "{profile:?}");
        assert_eq!(outcome.rule, DecisionRule::InsufficientQualification);
    }
}

#[test]
fn stable_income_with_high_loan_but_no_credit_is_a_catch_all_reject() {
    let outcome = DecisionEngine::new().evaluate_profile(&ApplicantProfile::new(false, true, false, true));
    assert_eq!(outcome.decision, Decision::Rejected);
    assert_eq!(outcome.rule, DecisionRule::InsufficientQualification);
}

#[test]
fn every_rule_in_the_chain_is_reachable() {
    let engine = DecisionEngine::new();
    let fired: Vec<DecisionRule> = all_profiles()
        .map(|profile| engine.evaluate_profile(&profile).rule)
        .collect();
    for rule in DecisionRule::CHAIN {
        assert!(fired.contains(&rule), "{rule:?} never fires");
    }
}

#[test]
fn rationale_names_the_reason() {
    let outcome = DecisionEngine::new().evaluate_profile(&ApplicantProfile::new(true, true, false, true));
    assert!(outcome.rationale().contains("high loan amount"));
    assert_eq!(outcome.decision.headline(), "SENT FOR MANAGER REVIEW");
}
