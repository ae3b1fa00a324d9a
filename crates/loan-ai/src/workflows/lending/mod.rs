pub mod applications;

pub use applications::{
    evaluate, generate_table, ApplicantProfile, Decision, DecisionEngine, EvaluationOutcome,
    TruthTable, TruthTableRow,
};
