use gloo_net::http::Request;
use serde::Serialize;
use shared_types::Note;
use std::sync::OnceLock;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8080
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    // Get the current hostname from the browser
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    // If running on localhost, point to the API server on port 8080
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080".to_string()
    } else {
        // In production, use same origin
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

async fn describe_http_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        return format!("HTTP error: {status}");
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(error) = json.get("error").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({error})");
        }
        if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({message})");
        }
    }

    format!("HTTP error: {status} ({body})")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    pub organization_id: String,
}

/// List every note belonging to one organization.
pub async fn fetch_notes(org_id: &str) -> Result<Vec<Note>, String> {
    let encoded_org = js_sys::encode_uri_component(org_id)
        .as_string()
        .unwrap_or_else(|| org_id.to_string());
    let url = format!("{}/api/notes?orgId={}", api_base(), encoded_org);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json::<Vec<Note>>()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

/// Create a note; the server assigns `id` and `createdAt`.
pub async fn create_note(title: &str, content: &str, org_id: &str) -> Result<Note, String> {
    let url = format!("{}/api/notes", api_base());

    let request = CreateNoteRequest {
        title: title.to_string(),
        content: content.to_string(),
        organization_id: org_id.to_string(),
    };

    let response = Request::post(&url)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json::<Note>()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

/// Update a note in place; the full record is sent and the server is trusted
/// to apply it.
pub async fn update_note(note: &Note) -> Result<Note, String> {
    let url = format!("{}/api/notes/{}", api_base(), note.id);

    let response = Request::put(&url)
        .json(note)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json::<Note>()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

/// Delete a note by id. Status-only response.
pub async fn delete_note(id: i64) -> Result<(), String> {
    let url = format!("{}/api/notes/{}", api_base(), id);

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    Ok(())
}
