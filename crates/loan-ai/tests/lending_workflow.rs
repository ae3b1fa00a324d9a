//! End-to-end checks of the loan decision workflow through the public crate surface.

use std::sync::Arc;

use loan_ai::config::OperatorConfig;
use loan_ai::workflows::lending::applications::{
    ApplicantAttribute, ConfiguredOperatorAuthenticator, Credentials, DecisionRule,
    LoanDecisionService,
};
use loan_ai::workflows::lending::{evaluate, generate_table, ApplicantProfile, Decision};

#[test]
fn documented_decisions_hold() {
    assert_eq!(evaluate(true, true, false, true), Decision::Review);
    assert_eq!(evaluate(true, true, false, false), Decision::Approved);
    assert_eq!(evaluate(true, false, false, false), Decision::Rejected);
    assert_eq!(evaluate(false, true, false, false), Decision::Rejected);
    assert_eq!(evaluate(false, false, false, false), Decision::Rejected);

    for good_credit in [false, true] {
        for stable_income in [false, true] {
            for high_loan_amount in [false, true] {
                assert_eq!(
                    evaluate(good_credit, stable_income, true, high_loan_amount),
                    Decision::Rejected
                );
            }
        }
        assert_eq!(
            evaluate(good_credit, false, false, true),
            Decision::Rejected
        );
    }
}

#[test]
fn truth_table_matches_expected_decision_column() {
    use Decision::{Approved as A, Rejected as X, Review as V};
    let expected = [X, X, X, X, X, X, X, X, X, X, X, X, A, V, X, X];

    let decisions: Vec<Decision> = generate_table().iter().map(|row| row.decision).collect();
    assert_eq!(decisions, expected);
    assert_eq!(generate_table().rows(), generate_table().rows());
}

#[test]
fn attribute_labels_follow_table_columns() {
    let headers: Vec<&str> = ApplicantAttribute::ALL
        .iter()
        .map(|attribute| attribute.column_header())
        .collect();
    assert_eq!(headers, ["Credit(P)", "Income(Q)", "Crim(R)", "High(S)"]);

    let mnemonics: String = ApplicantAttribute::ALL
        .iter()
        .map(|attribute| attribute.mnemonic())
        .collect();
    assert_eq!(mnemonics, "PQRS");
    assert_eq!(
        ApplicantAttribute::HighLoanAmount.prompt(),
        "High Loan Amount (>$50k)?"
    );
}

#[test]
fn operator_session_drives_evaluation() {
    let service = LoanDecisionService::new(Arc::new(ConfiguredOperatorAuthenticator::new(
        OperatorConfig {
            username: "loans-desk".to_string(),
            password: Some("tr0ub4dor".to_string()),
        },
    )));

    let session = service
        .login(&Credentials {
            username: "loans-desk".to_string(),
            password: "tr0ub4dor".to_string(),
        })
        .expect("operator logs in");

    let outcome = service
        .evaluate(&session.token, &ApplicantProfile::new(false, false, true, false))
        .expect("evaluation succeeds");
    assert_eq!(outcome.decision, Decision::Rejected);
    assert_eq!(outcome.rule, DecisionRule::CriminalRecordVeto);

    service.logout(&session.token).expect("logout succeeds");
    assert!(service.logout(&session.token).is_err());
}
