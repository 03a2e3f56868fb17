//! HTTP client for the backend REST API

use crate::{AdminConfig, ClientError, ClientResult};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::{ApiResponse, AppError, ErrorCode};
use std::time::Duration;

/// HTTP client for the combo backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &AdminConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = self.authorize(request).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.get(self.url(path))).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.patch(self.url(path)).json(body)).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.delete(self.url(path))).await
    }

    /// Handle the HTTP response
    ///
    /// Error statuses become [`ClientError::Api`], using the error envelope
    /// when the body carries one.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let from_envelope = serde_json::from_str::<ApiResponse<Value>>(&text)
                .ok()
                .and_then(|envelope| envelope.to_error());
            let err = from_envelope.unwrap_or_else(|| {
                let code = ErrorCode::from_http_status(status);
                let message = if text.trim().is_empty() {
                    code.message().to_string()
                } else {
                    text.trim().to_string()
                };
                AppError::with_message(code, message).with_detail("status", status.as_u16())
            });
            tracing::debug!(status = %status, code = %err.code, "Request failed");
            return Err(ClientError::Api(err));
        }

        decode_body(&text)
    }
}

/// Decode a success body, unwrapping the `ApiResponse` envelope if present
///
/// An object is an envelope only when it carries `code` or `message`. Bare
/// JSON payloads are accepted too; an empty body decodes as `null`.
pub fn decode_body<T: DeserializeOwned>(text: &str) -> ClientResult<T> {
    if text.trim().is_empty() {
        return serde_json::from_value(Value::Null).map_err(|_| {
            ClientError::InvalidResponse("empty response body".to_string())
        });
    }

    let value: Value = serde_json::from_str(text)?;
    let is_envelope = value
        .as_object()
        .is_some_and(|obj| obj.contains_key("code") || obj.contains_key("message"));
    if !is_envelope {
        return Ok(serde_json::from_value(value)?);
    }

    let envelope: ApiResponse<Value> = serde_json::from_value(value)?;
    if let Some(err) = envelope.to_error() {
        return Err(ClientError::Api(err));
    }
    let data = envelope.data.unwrap_or(Value::Null);
    serde_json::from_value(data)
        .map_err(|e| ClientError::InvalidResponse(format!("unexpected data: {}", e)))
}
