use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::{json, Map, Value};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{authorize_role, AuthGuard, Permission},
    model::account::Role,
    service::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod authorize_role;
mod require;

const SECRET: &str = "middleware-test-secret";

fn tokens() -> TokenService {
    TokenService::new(SECRET)
}

fn claims_for(email: &str) -> Map<String, Value> {
    let Value::Object(map) = json!({ "email": email }) else {
        unreachable!()
    };
    map
}

/// Builds request headers carrying a freshly issued bearer token for `email`.
fn bearer_headers(tokens: &TokenService, email: &str) -> HeaderMap {
    let token = tokens.issue(claims_for(email)).unwrap();
    headers_with(&format!("Bearer {}", token))
}

fn headers_with(authorization: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(authorization).unwrap());
    headers
}
