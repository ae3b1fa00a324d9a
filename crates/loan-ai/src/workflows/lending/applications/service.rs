use std::sync::Arc;

use tracing::{info, warn};

use super::auth::{AuthError, Authenticator, Credentials, OperatorSession, SessionStore, SessionToken};
use super::domain::ApplicantProfile;
use super::evaluation::{DecisionEngine, EvaluationOutcome};
use super::truth_table::{generate_table, TruthTable};

/// Service composing the login gate with the decision engine and truth table.
pub struct LoanDecisionService<A> {
    sessions: SessionStore<A>,
    engine: DecisionEngine,
}

impl<A> LoanDecisionService<A>
where
    A: Authenticator + 'static,
{
    pub fn new(authenticator: Arc<A>) -> Self {
        Self {
            sessions: SessionStore::new(authenticator),
            engine: DecisionEngine::new(),
        }
    }

    pub fn login(&self, credentials: &Credentials) -> Result<OperatorSession, AuthError> {
        match self.sessions.login(credentials) {
            Ok(session) => {
                info!(operator = %session.operator.0, "operator logged in");
                Ok(session)
            }
            Err(err) => {
                warn!(username = %credentials.username, "operator login refused");
                Err(err)
            }
        }
    }

    pub fn logout(&self, token: &SessionToken) -> Result<(), AuthError> {
        let session = self.sessions.logout(token)?;
        info!(operator = %session.operator.0, "operator logged out");
        Ok(())
    }

    /// Resolve a bearer token to its live session.
    pub fn authorize(&self, token: &SessionToken) -> Result<OperatorSession, AuthError> {
        self.sessions.resolve(token)
    }

    /// Evaluate an application on behalf of a logged-in operator.
    pub fn evaluate(
        &self,
        token: &SessionToken,
        profile: &ApplicantProfile,
    ) -> Result<EvaluationOutcome, AuthError> {
        let session = self.sessions.resolve(token)?;
        let outcome = self.engine.evaluate_profile(profile);

        info!(
            operator = %session.operator.0,
            decision = outcome.decision.as_str(),
            rule = ?outcome.rule,
            "loan application evaluated"
        );

        Ok(outcome)
    }

    /// The memoized truth table, for a logged-in operator.
    pub fn truth_table(&self, token: &SessionToken) -> Result<&'static TruthTable, AuthError> {
        let session = self.sessions.resolve(token)?;
        info!(operator = %session.operator.0, "truth table requested");
        Ok(generate_table())
    }
}
