//! HTTP Profile Service - `ProfileService` over the platform's REST API.
//!
//! ```ignore
//! let config = HttpProfileServiceConfig::new("https://api.example.com/v1")
//!     .with_api_token(token)
//!     .with_timeout(Duration::from_secs(15));
//! let service = HttpProfileService::new(config)?;
//! ```
//!
//! `POST {base_url}/profiles` with the JSON payload. 2xx responses carry
//! `{"profileId": "..."}` (or `{"id": "..."}`); 400/409/422 are rejections
//! whose `message` is shown to the user; 401/403 mean the session expired.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::foundation::ProfileId;
use crate::ports::{CreateProfileRequest, CreatedProfile, ProfileService, ProfileServiceError};

/// Configuration for the HTTP profile service.
#[derive(Debug, Clone)]
pub struct HttpProfileServiceConfig {
    /// Base URL of the API, without trailing slash.
    pub base_url: String,
    /// Bearer token, if the API requires one.
    api_token: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpProfileServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_api_token(self, token: impl Into<String>) -> Self {
        self.with_api_token_secret(Secret::new(token.into()))
    }

    pub fn with_api_token_secret(mut self, token: Secret<String>) -> Self {
        self.api_token = Some(token);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// REST implementation of [`ProfileService`].
pub struct HttpProfileService {
    config: HttpProfileServiceConfig,
    client: Client,
}

impl HttpProfileService {
    /// Creates the service and its HTTP client.
    ///
    /// # Errors
    /// Returns `ProfileServiceError::Network` if the client cannot be built.
    pub fn new(config: HttpProfileServiceConfig) -> Result<Self, ProfileServiceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProfileServiceError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn profiles_url(&self) -> String {
        format!("{}/profiles", self.config.base_url)
    }
}

#[derive(Debug, Deserialize)]
struct CreateProfileResponse {
    #[serde(rename = "profileId", alias = "id")]
    profile_id: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Pulls a human-readable message out of an error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .unwrap_or_else(|| body.trim().to_string())
}

fn map_error_status(status: StatusCode, body: &str) -> ProfileServiceError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProfileServiceError::Unauthorized,
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            ProfileServiceError::Rejected(error_message(body))
        }
        _ => ProfileServiceError::Server {
            status: status.as_u16(),
            message: error_message(body),
        },
    }
}

#[async_trait]
impl ProfileService for HttpProfileService {
    async fn create_profile(
        &self,
        request: &CreateProfileRequest,
    ) -> Result<CreatedProfile, ProfileServiceError> {
        let mut builder = self
            .client
            .post(self.profiles_url())
            .header("Content-Type", "application/json")
            .json(request);
        if let Some(token) = &self.config.api_token {
            builder = builder.bearer_auth(token.expose_secret());
        }

        tracing::debug!(user_id = %request.user_id, "Posting profile");
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProfileServiceError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else if e.is_connect() {
                ProfileServiceError::Network(format!("Connection failed: {}", e))
            } else {
                ProfileServiceError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProfileServiceError::InvalidResponse(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Profile service returned an error");
            return Err(map_error_status(status, &body));
        }

        let parsed: CreateProfileResponse = serde_json::from_str(&body)
            .map_err(|e| ProfileServiceError::InvalidResponse(e.to_string()))?;

        Ok(CreatedProfile {
            profile_id: ProfileId::new(parsed.profile_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::profile::{ActivityLevel, DietaryPreference, FitnessGoal, HealthGoal};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn request() -> CreateProfileRequest {
        CreateProfileRequest {
            user_id: UserId::new("user-7").unwrap(),
            height: 170.0,
            weight: 70.0,
            bmi: Some(24.2),
            body_fat_percentage: 18.0,
            activity_level: ActivityLevel::Sedentary,
            dietary_preference: DietaryPreference::NoPreference,
            fitness_goal: FitnessGoal::Maintain,
            goals: vec![HealthGoal::StayActive],
            calorie_goal: 2040,
        }
    }

    /// Serves one canned HTTP response and returns the raw request it received.
    async fn one_shot_server(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw).to_string();
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|l| {
                            let lower = l.to_ascii_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                        })
                        .unwrap_or(0);
                    if raw.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).to_string()
        });

        (format!("http://{}", addr), handle)
    }

    #[test]
    fn config_trims_trailing_slash() {
        let config = HttpProfileServiceConfig::new("https://api.example.com/v1/");
        assert_eq!(config.base_url, "https://api.example.com/v1");
    }

    #[test]
    fn rejection_statuses_surface_server_message() {
        let err = map_error_status(StatusCode::UNPROCESSABLE_ENTITY, r#"{"message":"Height is required"}"#);
        assert!(matches!(err, ProfileServiceError::Rejected(ref m) if m == "Height is required"));
    }

    #[test]
    fn auth_statuses_map_to_unauthorized() {
        assert!(matches!(
            map_error_status(StatusCode::FORBIDDEN, ""),
            ProfileServiceError::Unauthorized
        ));
    }

    #[test]
    fn other_statuses_keep_code_and_plain_body() {
        match map_error_status(StatusCode::BAD_GATEWAY, "upstream down") {
            ProfileServiceError::Server { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn posts_payload_and_parses_profile_id() {
        let (base_url, server) = one_shot_server("201 Created", r#"{"profileId":"p-123"}"#).await;
        let service = HttpProfileService::new(
            HttpProfileServiceConfig::new(base_url).with_api_token("secret-token"),
        )
        .unwrap();

        let created = service.create_profile(&request()).await.unwrap();
        assert_eq!(created.profile_id.as_str(), "p-123");

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /profiles "));
        assert!(raw.to_ascii_lowercase().contains("authorization: bearer secret-token"));
        assert!(raw.contains("\"userId\":\"user-7\""));
        assert!(raw.contains("\"calorieGoal\":2040"));
    }

    #[tokio::test]
    async fn accepts_id_alias_in_response() {
        let (base_url, server) = one_shot_server("200 OK", r#"{"id":"p-9"}"#).await;
        let service = HttpProfileService::new(HttpProfileServiceConfig::new(base_url)).unwrap();

        let created = service.create_profile(&request()).await.unwrap();
        assert_eq!(created.profile_id.as_str(), "p-9");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn server_error_is_reported() {
        let (base_url, server) =
            one_shot_server("500 Internal Server Error", r#"{"error":"boom"}"#).await;
        let service = HttpProfileService::new(HttpProfileServiceConfig::new(base_url)).unwrap();

        let err = service.create_profile(&request()).await.unwrap_err();
        assert!(matches!(err, ProfileServiceError::Server { status: 500, ref message } if message == "boom"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn connection_refused_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let service =
            HttpProfileService::new(HttpProfileServiceConfig::new(format!("http://{}", addr)))
                .unwrap();
        let err = service.create_profile(&request()).await.unwrap_err();
        assert!(matches!(err, ProfileServiceError::Network(_)));
    }
}
