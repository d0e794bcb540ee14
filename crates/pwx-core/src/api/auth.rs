//! Login and registration endpoints.

use reqwest::Method;
use serde::Serialize;

use super::{ApiClient, ApiResult, decode};
use crate::session::Session;

#[derive(Serialize)]
struct RegisterRequest<'a> {
    login: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Logs in with an OAuth2-password style form body.
    ///
    /// A success body is exactly a [`Session`]: the bearer token plus the
    /// user it belongs to.
    pub async fn login(&self, login: &str, password: &str) -> ApiResult<Session> {
        let response = self
            .request(Method::POST, "/auth/login")
            .form(&[("login", login), ("password", password)])
            .send()
            .await?;
        decode(response).await
    }

    /// Registers a new account. Unlike login, the body is JSON.
    pub async fn register(&self, login: &str, password: &str) -> ApiResult<Session> {
        let response = self
            .request(Method::POST, "/auth/register")
            .json(&RegisterRequest { login, password })
            .send()
            .await?;
        decode(response).await
    }
}
