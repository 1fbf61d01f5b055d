//! API utilities for frontend-backend communication
//!
//! Every request goes through the helpers below so the bearer token and the
//! 401 handling live in one place.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;
use crate::system::pages::login::LOGIN_PATH;

/// Backend port used when no build-time override is given
const DEFAULT_API_PORT: u16 = 8080;

/// Get the base URL for API requests
///
/// `SIGEVE_API_BASE` set at build time wins; otherwise the URL is built from
/// the current window location with port 8080, e.g. `http://localhost:8080/api`.
pub fn api_base() -> String {
    if let Some(base) = option_env!("SIGEVE_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_for_location(&protocol, &hostname)
}

fn base_for_location(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}/api", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a resource path like `customers/ALFKI`
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// What a response status means for the caller
#[derive(Debug, Clone, PartialEq, Eq)]
enum StatusOutcome {
    Success,
    Unauthorized,
    Failed(String),
}

fn classify_status(status: u16) -> StatusOutcome {
    match status {
        200..=299 => StatusOutcome::Success,
        401 => StatusOutcome::Unauthorized,
        other => StatusOutcome::Failed(format!("HTTP {}", other)),
    }
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Drop the token and send the browser to the login screen
fn handle_unauthorized(url: &str) {
    log::warn!("401 from {}, clearing session", url);
    storage::clear_access_token();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_PATH);
    }
}

fn check_status(url: &str, response: &Response) -> Result<(), String> {
    match classify_status(response.status()) {
        StatusOutcome::Success => Ok(()),
        StatusOutcome::Unauthorized => {
            handle_unauthorized(url);
            Err("Sesión expirada".to_string())
        }
        StatusOutcome::Failed(message) => {
            log::error!("{} failed: {}", url, message);
            Err(message)
        }
    }
}

async fn send(url: &str, request: Result<Request, gloo_net::Error>) -> Result<Response, String> {
    let request = request.map_err(|e| format!("Failed to build request: {}", e))?;
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check_status(url, &response)?;
    Ok(response)
}

/// GET a JSON document
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = api_url(path);
    let response = send(&url, authorized(Request::get(&url)).build()).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body; the response body is not needed
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let url = api_url(path);
    send(&url, authorized(Request::post(&url)).json(body)).await?;
    Ok(())
}

/// PUT a JSON body; the response body is not needed
pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let url = api_url(path);
    send(&url, authorized(Request::put(&url)).json(body)).await?;
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), String> {
    let url = api_url(path);
    send(&url, authorized(Request::delete(&url)).build()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_for_location() {
        assert_eq!(
            base_for_location("http:", "localhost"),
            "http://localhost:8080/api"
        );
        assert_eq!(
            base_for_location("https:", "sigeve.example.com"),
            "https://sigeve.example.com:8080/api"
        );
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://h:8080/api", "customers"),
            "http://h:8080/api/customers"
        );
        assert_eq!(
            join_url("http://h:8080/api/", "/orderDetails/order/3"),
            "http://h:8080/api/orderDetails/order/3"
        );
    }

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(200), StatusOutcome::Success);
        assert_eq!(classify_status(204), StatusOutcome::Success);
        assert_eq!(classify_status(401), StatusOutcome::Unauthorized);
        assert_eq!(
            classify_status(500),
            StatusOutcome::Failed("HTTP 500".to_string())
        );
        assert_eq!(
            classify_status(403),
            StatusOutcome::Failed("HTTP 403".to_string())
        );
    }
}
