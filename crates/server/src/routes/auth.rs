use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
    Json,
};
use serde_json::{Map, Value};

use service::auth::{domain::IssuedToken, AuthClaims, AuthError, TokenService};

use crate::errors::ApiError;
use crate::extract::ApiJson;
use crate::state::ServerState;

/// Sign whatever claims the caller posts. No credential check happens here.
#[utoipa::path(
    post, path = "/jwt", tag = "auth",
    request_body = crate::openapi::ClaimsRequest,
    responses((status = 200, description = "`{token}`"), (status = 400, description = "Body is not a JSON object"))
)]
pub async fn issue_token(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<Map<String, Value>>,
) -> Result<Json<IssuedToken>, ApiError> {
    let token = state.tokens.issue(payload)?;
    Ok(Json(IssuedToken { token }))
}

/// Pull the token out of `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let raw = headers.get(AUTHORIZATION).ok_or(AuthError::MissingToken)?;
    let raw = raw
        .to_str()
        .map_err(|_| AuthError::InvalidToken("authorization header is not visible ASCII".into()))?;
    let (scheme, token) = raw
        .split_once(' ')
        .ok_or_else(|| AuthError::InvalidToken("missing token segment".into()))?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidToken(format!("unsupported scheme {scheme:?}")));
    }
    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::InvalidToken("missing token segment".into()));
    }
    Ok(token)
}

pub fn authorize(headers: &HeaderMap, tokens: &TokenService) -> Result<AuthClaims, AuthError> {
    let token = bearer_token(headers)?;
    tokens.verify(token)
}

/// Request stage in front of protected routes: verified claims go into the
/// request extensions, anything else ends the request with 401.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    match authorize(req.headers(), &state.tokens) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(path = %req.uri().path(), code = e.code(), err = %e, "bearer token rejected");
            Err(e.into())
        }
    }
}
