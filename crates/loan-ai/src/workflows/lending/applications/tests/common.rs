use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;

use crate::config::OperatorConfig;
use crate::workflows::lending::applications::{
    lending_router, ApplicantProfile, ConfiguredOperatorAuthenticator, Credentials,
    LoanDecisionService,
};

pub(super) const OPERATOR: &str = "loans-desk";
pub(super) const PASSWORD: &str = "correct-horse";

pub(super) fn operator_config() -> OperatorConfig {
    OperatorConfig {
        username: OPERATOR.to_string(),
        password: Some(PASSWORD.to_string()),
    }
}

pub(super) fn valid_credentials() -> Credentials {
    Credentials {
        username: OPERATOR.to_string(),
        password: PASSWORD.to_string(),
    }
}

pub(super) fn build_service() -> Arc<LoanDecisionService<ConfiguredOperatorAuthenticator>> {
    Arc::new(LoanDecisionService::new(Arc::new(
        ConfiguredOperatorAuthenticator::new(operator_config()),
    )))
}

pub(super) fn router_with_service(
    service: Arc<LoanDecisionService<ConfiguredOperatorAuthenticator>>,
) -> axum::Router {
    lending_router(service)
}

/// Every profile in truth-table order.
pub(super) fn all_profiles() -> impl Iterator<Item = ApplicantProfile> {
    (0..ApplicantProfile::COMBINATIONS).map(ApplicantProfile::from_index)
}

pub(super) fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub(super) fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub(super) async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub(super) async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub(super) fn assert_unauthorized(response: &Response) {
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
