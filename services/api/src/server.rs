use crate::cli::ServeArgs;
use crate::infra::{build_decision_service, AppState};
use crate::routes::with_lending_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use loan_ai::config::AppConfig;
use loan_ai::error::AppError;
use loan_ai::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    if config.operator.password.is_none() {
        warn!(
            operator = %config.operator.username,
            "LOAN_OPERATOR_PASSWORD is not set; all logins will be refused"
        );
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let decision_service = build_decision_service(config.operator.clone());

    let app = with_lending_routes(decision_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "loan decision gate ready");

    axum::serve(listener, app).await?;
    Ok(())
}
