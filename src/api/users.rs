use std::time::Duration;

use log::{info, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tokio::runtime::{Builder, Runtime};

use super::error::ApiError;
use crate::config::Config;
use crate::models::User;

/// Anything that can produce the users list for the table screen.
pub trait UserSource {
    fn fetch_users(&self) -> Result<Vec<User>, ApiError>;
}

/// Blocking client for the users endpoint.
///
/// The HTTP stack is async, so the client owns a current-thread runtime and
/// blocks on it. That keeps the synchronous draw loop free of async plumbing.
pub struct UsersClient {
    runtime: Runtime,
    http_client: Client,
    endpoint: String,
    timeout: Duration,
}

impl UsersClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ApiError::Runtime)?;

        Ok(Self {
            runtime,
            http_client: Client::new(),
            endpoint: config.endpoint.clone(),
            timeout: config.timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self
            .http_client
            .get(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        parse_users(&body)
    }
}

impl UserSource for UsersClient {
    /// Fetch and validate the full users list.
    fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        info!("fetching users from {}", self.endpoint);
        let result = self.runtime.block_on(self.request_users());
        match &result {
            Ok(users) => info!("fetched {} users", users.len()),
            Err(err) => warn!("fetching users failed: {err}"),
        }
        result
    }
}

/// Decode a JSON array of users. Extra keys are ignored; a missing or
/// mistyped field in any element rejects the whole payload.
pub fn parse_users(body: &str) -> Result<Vec<User>, ApiError> {
    Ok(serde_json::from_str(body)?)
}
