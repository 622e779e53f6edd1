//! HTTP access to the order endpoint.

use contracts::order::OrderRequest;
use gloo_net::http::Request;

/// Fixed relative path of the order endpoint.
pub const ORDER_ENDPOINT: &str = "/api/order";

/// POST the order once. Acceptance is an HTTP success status with a JSON
/// body; any other status, or a body that is not JSON, is a failure carrying
/// the most descriptive message available.
pub async fn submit_order(order: &OrderRequest) -> Result<(), String> {
    let response = Request::post(ORDER_ENDPOINT)
        .json(order)
        .map_err(|e| format!("Failed to serialize order: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send order: {}", e))?;

    let ok = response.ok();
    let status = response.status();
    let body = response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| e.to_string());
    interpret_response(ok, status, body)
}

/// Outcome of an order POST, from its status and decoded body. A success
/// status with a non-JSON body still counts as a failure: the endpoint
/// always answers JSON when it accepted the order. A failure status yields
/// the most descriptive message available.
fn interpret_response(
    ok: bool,
    status: u16,
    body: Result<serde_json::Value, String>,
) -> Result<(), String> {
    if ok {
        body.map(|_| ())
            .map_err(|e| format!("Unexpected response from the order service: {}", e))
    } else {
        Err(body
            .ok()
            .and_then(|body| extract_error_message(&body))
            .unwrap_or_else(|| format!("HTTP {}", status)))
    }
}

/// Human-readable message from a failure body: `error` first, then
/// `details`.
fn extract_error_message(body: &serde_json::Value) -> Option<String> {
    body.get("error")
        .and_then(|v| v.as_str())
        .or_else(|| body.get("details").and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_status_with_json_body_is_accepted() {
        let result = interpret_response(true, 200, Ok(json!({"ok": true})));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn success_status_without_json_body_is_a_failure() {
        let result = interpret_response(true, 200, Err("expected value".to_string()));
        assert!(result
            .unwrap_err()
            .contains("Unexpected response from the order service"));
    }

    #[test]
    fn failure_status_reports_the_body_message() {
        let result = interpret_response(false, 500, Ok(json!({"error": "db down"})));
        assert_eq!(result.unwrap_err(), "db down");
    }

    #[test]
    fn failure_status_without_a_message_reports_the_code() {
        let result = interpret_response(false, 502, Err("bad gateway".to_string()));
        assert_eq!(result.unwrap_err(), "HTTP 502");
    }

    #[test]
    fn prefers_error_field() {
        let body = json!({"error": "db down", "details": "ignored"});
        assert_eq!(extract_error_message(&body), Some("db down".to_string()));
    }

    #[test]
    fn falls_back_to_details() {
        let body = json!({"details": "row limit reached"});
        assert_eq!(
            extract_error_message(&body),
            Some("row limit reached".to_string())
        );
    }

    #[test]
    fn no_message_fields_gives_none() {
        assert_eq!(extract_error_message(&json!({"ok": false})), None);
        assert_eq!(extract_error_message(&json!({"error": 42})), None);
    }
}
