//! HTTP client for the blog and auth endpoints.
//!
//! One method per remote action. Every request carries the current session
//! token from [`AuthContext`] as a bearer header when one is present. There
//! are no retries and no request timeout; callers decide what to do with a
//! failure.

mod error;
mod types;

pub use error::ApiError;
pub use types::{Post, PostId, PostUpdate, TokenResponse, User, UserId};

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::session::{AuthContext, SessionToken};
use error::extract_detail;
use types::{LoginRequest, PostListBody};

const LOGIN_PATH: &str = "/api/auth/login/";
const CURRENT_USER_PATH: &str = "/api/auth/me/";
const POSTS_PATH: &str = "/api/blog/posts/";

fn post_path(id: PostId) -> String {
    format!("{POSTS_PATH}{id}/")
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth: AuthContext,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, auth: AuthContext) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/auth/login/`
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let body = LoginRequest { username, password };
        let builder = self.request(Method::POST, LOGIN_PATH).json(&body);
        let response = self.send(builder, LOGIN_PATH).await?;
        decode(response, LOGIN_PATH).await
    }

    /// `GET /api/auth/me/` with the token held by the auth context.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let builder = self.request(Method::GET, CURRENT_USER_PATH);
        let response = self.send(builder, CURRENT_USER_PATH).await?;
        decode(response, CURRENT_USER_PATH).await
    }

    /// `GET /api/auth/me/` with an explicit token.
    ///
    /// Used right after login, before the new token is stored.
    pub async fn fetch_user(&self, token: &SessionToken) -> Result<User, ApiError> {
        let builder = self
            .client
            .get(self.url(CURRENT_USER_PATH))
            .bearer_auth(token.expose());
        let response = self.send(builder, CURRENT_USER_PATH).await?;
        decode(response, CURRENT_USER_PATH).await
    }

    /// `GET /api/blog/posts/`
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let builder = self.request(Method::GET, POSTS_PATH);
        let response = self.send(builder, POSTS_PATH).await?;
        let body: PostListBody = decode(response, POSTS_PATH).await?;
        Ok(body.into_posts())
    }

    /// `GET /api/blog/posts/{id}/`
    pub async fn get_post(&self, id: PostId) -> Result<Post, ApiError> {
        let path = post_path(id);
        let builder = self.request(Method::GET, &path);
        let response = self.send(builder, &path).await?;
        decode(response, &path).await
    }

    /// `PUT /api/blog/posts/{id}/`
    pub async fn update_post(&self, id: PostId, update: &PostUpdate) -> Result<Post, ApiError> {
        let path = post_path(id);
        let builder = self.request(Method::PUT, &path).json(update);
        let response = self.send(builder, &path).await?;
        decode(response, &path).await
    }

    /// `DELETE /api/blog/posts/{id}/`
    pub async fn delete_post(&self, id: PostId) -> Result<(), ApiError> {
        let path = post_path(id);
        let builder = self.request(Method::DELETE, &path);
        self.send(builder, &path).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.auth.token() {
            Some(token) => builder.bearer_auth(token.expose()),
            None => builder,
        }
    }

    /// Send the request and turn non-success statuses into `ApiError::Http`.
    async fn send(&self, builder: RequestBuilder, path: &str) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(path, error = %e, "request failed");
            ApiError::Network {
                path: path.to_string(),
                source: e,
            }
        })?;

        let status = response.status();
        tracing::debug!(path, status = status.as_u16(), "response");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let err = ApiError::Http {
            status: status.as_u16(),
            detail: extract_detail(&body),
        };
        tracing::warn!(path, error_type = err.error_type(), error = %err, "request rejected");
        Err(err)
    }
}

async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T, ApiError> {
    let body = response.bytes().await.map_err(|e| ApiError::Network {
        path: path.to_string(),
        source: e,
    })?;
    serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
        path: path.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_path_has_trailing_slash() {
        assert_eq!(post_path(42), "/api/blog/posts/42/");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/".to_string(),
            connect_timeout_seconds: 1,
        };
        let client = ApiClient::new(&config, AuthContext::detached()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url(POSTS_PATH), "http://localhost:8000/api/blog/posts/");
    }
}
