//! Authenticated HTTP client shared by every resource wrapper.
//!
//! One `reqwest::Client` per `ApiClient`, constructed once with the
//! resolved base URL and a session store. Requests carry the bearer token
//! when one is present; a 401 response tears the session down and invokes
//! the injected unauthorized callback before the error is returned.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_utils::ApiUrls;
use crate::shared::config::Config;
use crate::shared::error::{preview, ApiError};
use crate::system::auth::storage::{RedirectGuard, SessionStore};

/// File payload for multipart uploads
#[derive(Debug, Clone)]
pub struct FileField {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileField {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    urls: ApiUrls,
    session: SessionStore,
    on_unauthorized: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl ApiClient {
    pub fn new(config: &Config, session: SessionStore) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            urls: ApiUrls::from_config(config),
            session,
            on_unauthorized: None,
        }
    }

    /// Inject the callback to run after a 401 tears the session down.
    /// The API layer never navigates by itself.
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    /// Convenience wiring for the standard sign-in redirect behavior
    pub fn with_redirect_guard(self, guard: Arc<RedirectGuard>) -> Self {
        self.with_unauthorized_hook(move || guard.on_unauthorized())
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn urls(&self) -> &ApiUrls {
        &self.urls
    }

    /// GET a path and return the raw body for the envelope layer
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::GET, path, RequestBody::None).await
    }

    /// Body-less POST for action endpoints (toggle-status, cancel, ...)
    pub async fn post(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::POST, path, RequestBody::None).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::DELETE, path, RequestBody::None).await
    }

    /// Send a JSON body (POST/PUT)
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let json = serde_json::to_value(body)
            .map_err(|e| ApiError::decode(format!("Failed to serialize request: {}", e)))?;
        self.send(method, path, RequestBody::Json(json)).await
    }

    /// Send a `multipart/form-data` body (POST/PUT). Required whenever the
    /// payload carries file uploads; plain fields ride along as text parts.
    pub async fn send_multipart(
        &self,
        method: Method,
        path: &str,
        fields: Vec<(String, String)>,
        files: Vec<(String, FileField)>,
    ) -> Result<Value, ApiError> {
        self.send(method, path, RequestBody::Multipart { fields, files })
            .await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<Value, ApiError> {
        let url = self.urls.build_url(path);
        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), url.as_str());

        // Missing token is not an error: some endpoints are public
        if let Some(token) = self.session.token() {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        request = match body {
            RequestBody::None => request,
            RequestBody::Json(json) => request.json(&json),
            RequestBody::Multipart { fields, files } => {
                let mut form = reqwest::multipart::Form::new();
                for (name, value) in fields {
                    form = form.text(name, value);
                }
                for (name, file) in files {
                    let part = reqwest::multipart::Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.content_type)
                        .map_err(|e| {
                            ApiError::validation(format!("Invalid content type: {}", e))
                        })?;
                    form = form.part(name, part);
                }
                request.multipart(form)
            }
        };

        let response = request.send().await.map_err(|e| {
            tracing::error!("{} {} failed: {}", method, url, e);
            ApiError::network(&e)
        })?;

        self.handle_response(&method, &url, response).await
    }

    async fn handle_response(
        &self,
        method: &Method,
        url: &str,
        response: reqwest::Response,
    ) -> Result<Value, ApiError> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            // Session is gone: drop the persisted keys, let the injected
            // hook decide where the user lands, then surface the error.
            tracing::warn!("{} {} returned 401, clearing session", method, url);
            self.session.clear();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        if !status.is_success() {
            tracing::error!(
                "{} {} failed with status {}: {}",
                method,
                url,
                status,
                preview(&body)
            );
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        tracing::debug!("{} {} response: {}", method, url, preview(&body));

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse response from {}: {}", url, e);
            ApiError::decode(format!("{}. Body: {}", e, preview(&body)))
        })
    }
}

enum RequestBody {
    None,
    Json(Value),
    Multipart {
        fields: Vec<(String, String)>,
        files: Vec<(String, FileField)>,
    },
}

/// Flatten a DTO into multipart text fields.
///
/// Strings go through verbatim; everything else is JSON-encoded the way the
/// backend's upload endpoints expect. `null` fields are omitted.
pub fn form_fields<B: Serialize>(dto: &B) -> Result<Vec<(String, String)>, ApiError> {
    let value = serde_json::to_value(dto)
        .map_err(|e| ApiError::decode(format!("Failed to serialize request: {}", e)))?;

    let map = match value {
        Value::Object(map) => map,
        _ => return Err(ApiError::validation("Multipart payload must be an object")),
    };

    let mut fields = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::String(s) => fields.push((key, s)),
            other => fields.push((key, other.to_string())),
        }
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_flattens_dto() {
        #[derive(Serialize)]
        struct Dto {
            name: String,
            price: f64,
            #[serde(rename = "isActive")]
            is_active: Option<bool>,
            comment: Option<String>,
        }
        let fields = form_fields(&Dto {
            name: "Чайник".into(),
            price: 990.0,
            is_active: Some(true),
            comment: None,
        })
        .unwrap();

        assert!(fields.contains(&("name".to_string(), "Чайник".to_string())));
        assert!(fields.contains(&("price".to_string(), "990.0".to_string())));
        assert!(fields.contains(&("isActive".to_string(), "true".to_string())));
        // null comment is omitted entirely
        assert!(!fields.iter().any(|(k, _)| k == "comment"));
    }

    #[test]
    fn test_form_fields_rejects_non_object() {
        assert!(form_fields(&vec![1, 2, 3]).is_err());
    }
}
