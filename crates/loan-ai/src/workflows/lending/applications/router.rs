use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::auth::{AuthError, Authenticator, Credentials, SessionToken};
use super::domain::ApplicantProfile;
use super::service::LoanDecisionService;
use crate::error::AppError;

/// Router builder exposing the login gate, evaluation, and truth-table endpoints.
pub fn lending_router<A>(service: Arc<LoanDecisionService<A>>) -> Router
where
    A: Authenticator + 'static,
{
    Router::new()
        .route(
            "/api/v1/session",
            post(login_handler::<A>).delete(logout_handler::<A>),
        )
        .route("/api/v1/loan/evaluate", post(evaluate_handler::<A>))
        .route("/api/v1/loan/truth-table", get(truth_table_handler::<A>))
        .route("/api/v1/loan/truth-table.csv", get(truth_table_csv_handler::<A>))
        .with_state(service)
}

fn bearer_token(headers: &HeaderMap) -> Result<SessionToken, AuthError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| SessionToken(token.to_string()))
        .ok_or(AuthError::MissingToken)
}

fn auth_error_response(error: AuthError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::UNAUTHORIZED, Json(payload)).into_response()
}

pub(crate) async fn login_handler<A>(
    State(service): State<Arc<LoanDecisionService<A>>>,
    Json(credentials): Json<Credentials>,
) -> Response
where
    A: Authenticator + 'static,
{
    match service.login(&credentials) {
        Ok(session) => {
            let payload = json!({
                "token": session.token.0,
                "operator": session.operator.0,
                "greeting": session.greeting(),
                "issued_at": session.issued_at,
            });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(error) => auth_error_response(error),
    }
}

pub(crate) async fn logout_handler<A>(
    State(service): State<Arc<LoanDecisionService<A>>>,
    headers: HeaderMap,
) -> Response
where
    A: Authenticator + 'static,
{
    match bearer_token(&headers).and_then(|token| service.logout(&token)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => auth_error_response(error),
    }
}

pub(crate) async fn evaluate_handler<A>(
    State(service): State<Arc<LoanDecisionService<A>>>,
    headers: HeaderMap,
    payload: Result<Json<ApplicantProfile>, JsonRejection>,
) -> Response
where
    A: Authenticator + 'static,
{
    // Session before body: without a live session the payload is never inspected.
    let token = match bearer_token(&headers)
        .and_then(|token| service.authorize(&token).map(|_| token))
    {
        Ok(token) => token,
        Err(error) => return auth_error_response(error),
    };

    let Json(profile) = match payload {
        Ok(profile) => profile,
        Err(rejection) => {
            let payload = json!({ "error": rejection.body_text() });
            return (rejection.status(), Json(payload)).into_response();
        }
    };

    match service.evaluate(&token, &profile) {
        Ok(outcome) => {
            let payload = json!({
                "decision": outcome.decision,
                "headline": outcome.decision.headline(),
                "rule": outcome.rule,
                "rationale": outcome.rationale(),
                "profile": outcome.profile,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => auth_error_response(error),
    }
}

pub(crate) async fn truth_table_handler<A>(
    State(service): State<Arc<LoanDecisionService<A>>>,
    headers: HeaderMap,
) -> Response
where
    A: Authenticator + 'static,
{
    match bearer_token(&headers).and_then(|token| service.truth_table(&token)) {
        Ok(table) => {
            let payload = json!({
                "rows": table.rows(),
                "tally": table.tally(),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => auth_error_response(error),
    }
}

pub(crate) async fn truth_table_csv_handler<A>(
    State(service): State<Arc<LoanDecisionService<A>>>,
    headers: HeaderMap,
) -> Response
where
    A: Authenticator + 'static,
{
    let table = match bearer_token(&headers).and_then(|token| service.truth_table(&token)) {
        Ok(table) => table,
        Err(error) => return auth_error_response(error),
    };

    match table.to_csv() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}
