//! API utilities for talking to the reporting service
//!
//! The API host comes from `localStorage["analytics_api_base"]` when set,
//! otherwise from [`DEFAULT_API_HOST`]. Reports live under `/api/v2`.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Host used when nothing is configured in local storage
pub const DEFAULT_API_HOST: &str = "http://localhost:8000";

/// Local storage key overriding the API host
pub const API_BASE_STORAGE_KEY: &str = "analytics_api_base";

/// Versioned prefix of the curated report endpoints
pub const REPORTS_PREFIX: &str = "/api/v2";

/// Get the API host, e.g. "http://localhost:8000"
pub fn api_base() -> String {
    let configured = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_STORAGE_KEY).ok().flatten());
    normalize_base(configured.as_deref().unwrap_or(DEFAULT_API_HOST))
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_HOST.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Build a full API URL from a host-relative path such as "/api/v1/query"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Build a report URL: host + `/api/v2` + path + encoded query string
///
/// # Example
/// ```ignore
/// let url = reports_url("/reports/sales_by_day_stacked", &[("mes_ano".into(), "2024-05".into())]);
/// ```
pub fn reports_url(path: &str, params: &[(String, String)]) -> String {
    with_query(&format!("{}{}{}", api_base(), REPORTS_PREFIX, path), params)
}

/// Appends `?k=v&...` with both sides percent-encoded; nothing for no params
pub fn with_query(url: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", url, query)
}

/// GET a JSON document. `what` names the failing request in the error message.
pub async fn get_json<T: DeserializeOwned>(url: &str, what: &str) -> Result<T, String> {
    log::debug!("GET {}", url);
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("{}: {}", what, e))?;

    if !response.ok() {
        log::error!("GET {} -> HTTP {}", url, response.status());
        return Err(format!("{} (HTTP {})", what, response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("{}: resposta inválida ({})", what, e))
}

/// POST a JSON body and decode the JSON answer
pub async fn post_json<B, T>(url: &str, body: &B, what: &str) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    log::debug!("POST {}", url);
    let response = Request::post(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("{}: {}", what, e))?;

    if !response.ok() {
        log::error!("POST {} -> HTTP {}", url, response.status());
        return Err(format!(
            "{}: {} (HTTP {})",
            what,
            response.status_text(),
            response.status()
        ));
    }

    response
        .json()
        .await
        .map_err(|e| format!("{}: resposta inválida ({})", what, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_encodes_both_sides() {
        let url = with_query(
            "http://h/api/v2/reports/top_products_by_store",
            &[
                ("store_name".to_string(), "Loja São Paulo & Cia".to_string()),
                ("mes_ano".to_string(), "2024-05".to_string()),
            ],
        );
        assert_eq!(
            url,
            "http://h/api/v2/reports/top_products_by_store?store_name=Loja%20S%C3%A3o%20Paulo%20%26%20Cia&mes_ano=2024-05"
        );
    }

    #[test]
    fn test_with_query_without_params() {
        assert_eq!(with_query("http://h/x", &[]), "http://h/x");
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://api:9000/"), "http://api:9000");
        assert_eq!(normalize_base("  "), DEFAULT_API_HOST);
    }
}
