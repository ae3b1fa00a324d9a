use loan_ai::config::OperatorConfig;
use loan_ai::workflows::lending::applications::{
    ConfiguredOperatorAuthenticator, LoanDecisionService,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type ConsoleService = LoanDecisionService<ConfiguredOperatorAuthenticator>;

pub(crate) fn build_decision_service(operator: OperatorConfig) -> Arc<ConsoleService> {
    let authenticator = Arc::new(ConfiguredOperatorAuthenticator::new(operator));
    Arc::new(LoanDecisionService::new(authenticator))
}
