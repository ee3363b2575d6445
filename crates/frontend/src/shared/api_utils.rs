//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Порт, на котором `trunk serve` отдаёт фронтенд при разработке
const DEV_SERVER_PORT: &str = "8080";
const BACKEND_PORT: u16 = 3000;

/// Ошибка загрузки данных с сервера
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Get the base URL for API requests
///
/// In production the backend serves the frontend itself, so requests stay
/// same-origin (empty base). Under the trunk dev server the backend is
/// reached on port 3000 of the same host.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let port = location.port().unwrap_or_default();
    if port != DEV_SERVER_PORT {
        return String::new();
    }
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/certificates");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET-запрос с разбором JSON-ответа. Любой не-2xx ответ - ошибка.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, LoadError> {
    let url = api_url(path);
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| LoadError::Decode(e.to_string()))
}
