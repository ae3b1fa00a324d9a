//! Loan application decisions: the rule engine, its truth-table proof, and the
//! operator login gate that fronts both over HTTP.

pub mod auth;
pub mod domain;
pub(crate) mod evaluation;
pub mod router;
pub mod service;
pub mod truth_table;

#[cfg(test)]
mod tests;

pub use auth::{
    AuthError, Authenticator, ConfiguredOperatorAuthenticator, Credentials, OperatorPrincipal,
    OperatorSession, SessionStore, SessionToken,
};
pub use domain::{ApplicantAttribute, ApplicantProfile, Decision};
pub use evaluation::{evaluate, DecisionEngine, DecisionRule, EvaluationOutcome};
pub use router::lending_router;
pub use service::LoanDecisionService;
pub use truth_table::{generate_table, ExportError, TruthTable, TruthTableRow};
