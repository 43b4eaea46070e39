use gloo_console::warn;
use gloo_net::http::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::RequestCache;

use crate::config::AppConfig;
use crate::models::{
    CampaignReport, ClientDashboardResponse, CreateCampaignReportInput, CreateOrgClientInput,
    CreateTopupInput, OrgClient, OrgClientList, PaginatedResponse, TopupRecord,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub path: Option<String>,
    pub message: String,
}

impl FieldError {
    pub fn label(&self) -> String {
        match &self.path {
            Some(path) => format!("{}: {}", path, self.message),
            None => self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Config(String),
    #[error("{0}")]
    Network(String),
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        errors: Vec<FieldError>,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ApiError::Http { errors, .. } => errors,
            _ => &[],
        }
    }
}

const UNREACHABLE_MESSAGE: &str = "Unable to reach the backend service. Please try again.";

// Query values are dropped when absent or empty; everything else is
// percent-encoded. Pages are 1-based so a page number is never empty.
fn build_query(params: &[(&str, Option<String>)]) -> String {
    let mut parts = Vec::new();
    for (key, value) in params {
        if let Some(value) = value {
            if !value.is_empty() {
                parts.push(format!("{}={}", key, encode_component(value)));
            }
        }
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

fn encode_component(value: &str) -> String {
    let mut out = String::new();
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn error_from_payload(status: u16, payload: Option<serde_json::Value>) -> ApiError {
    let mut message = format!("Request failed with status {}", status);
    let mut errors = Vec::new();
    if let Some(payload) = payload {
        if let Some(msg) = payload.get("message").and_then(|v| v.as_str()) {
            message = msg.to_string();
        }
        if let Some(list) = payload.get("errors") {
            if let Ok(parsed) = serde_json::from_value::<Vec<FieldError>>(list.clone()) {
                errors = parsed;
            }
        }
    }
    ApiError::Http {
        status,
        message,
        errors,
    }
}

// Single request primitive: bearer header for admin calls, JSON in and
// out, caching disabled so every call hits the live backend. One attempt
// per call; retry policy belongs to callers and none of them retry.
async fn request_json<B, T>(
    config: &AppConfig,
    method: Method,
    path: &str,
    body: Option<&B>,
    admin: bool,
) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let base_url = config.base_url()?;
    let url = format!("{}{}", base_url, path);

    let mut builder = RequestBuilder::new(&url)
        .method(method)
        .cache(RequestCache::NoStore)
        .header("Accept", "application/json");
    if admin {
        let token = config.admin_token()?;
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let sent = match body {
        Some(body) => {
            let request = builder
                .json(body)
                .map_err(|err| ApiError::Network(err.to_string()))?;
            request.send().await
        }
        None => builder.send().await,
    };

    let response = match sent {
        Ok(response) => response,
        Err(_) => {
            warn!(format!("request to {} failed to reach the backend", path));
            return Err(ApiError::Network(UNREACHABLE_MESSAGE.to_string()));
        }
    };

    if !response.ok() {
        let status = response.status();
        warn!(format!("request to {} failed with status {}", path, status));
        let payload = response.json::<serde_json::Value>().await.ok();
        return Err(error_from_payload(status, payload));
    }

    if response.status() == 204 {
        return serde_json::from_value(serde_json::Value::Null)
            .map_err(|err| ApiError::Network(err.to_string()));
    }

    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))
}

async fn get_json<T: DeserializeOwned>(
    config: &AppConfig,
    path: &str,
    admin: bool,
) -> Result<T, ApiError> {
    request_json::<(), T>(config, Method::GET, path, None, admin).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    config: &AppConfig,
    path: &str,
    body: &B,
    admin: bool,
) -> Result<T, ApiError> {
    request_json(config, Method::POST, path, Some(body), admin).await
}

/// Paging and optional date window shared by every ledger endpoint.
#[derive(Clone, PartialEq, Debug)]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

impl PageQuery {
    fn params(&self) -> [(&'static str, Option<String>); 4] {
        [
            ("page", Some(self.page.to_string())),
            ("pageSize", Some(self.page_size.to_string())),
            ("fromDate", self.from_date.clone()),
            ("toDate", self.to_date.clone()),
        ]
    }
}

pub async fn get_admin_org_clients(
    config: &AppConfig,
    search: Option<&str>,
    is_active: Option<bool>,
) -> Result<Vec<OrgClient>, ApiError> {
    let query = build_query(&[
        ("search", search.map(str::to_string)),
        ("isActive", is_active.map(|v| v.to_string())),
    ]);
    let list: OrgClientList =
        get_json(config, &format!("/admin/org-clients{}", query), true).await?;
    Ok(list.items)
}

pub async fn create_admin_org_client(
    config: &AppConfig,
    input: &CreateOrgClientInput,
) -> Result<OrgClient, ApiError> {
    post_json(config, "/admin/org-clients", input, true).await
}

pub async fn get_admin_campaign_reports(
    config: &AppConfig,
    org_client_id: &str,
    query: &PageQuery,
) -> Result<PaginatedResponse<CampaignReport>, ApiError> {
    let mut params = vec![("orgClientId", Some(org_client_id.to_string()))];
    params.extend(query.params());
    get_json(
        config,
        &format!("/admin/campaign-reports{}", build_query(&params)),
        true,
    )
    .await
}

pub async fn create_admin_campaign_report(
    config: &AppConfig,
    input: &CreateCampaignReportInput,
) -> Result<CampaignReport, ApiError> {
    post_json(config, "/admin/campaign-reports", input, true).await
}

pub async fn get_admin_topups(
    config: &AppConfig,
    org_client_id: &str,
    query: &PageQuery,
) -> Result<PaginatedResponse<TopupRecord>, ApiError> {
    let mut params = vec![("orgClientId", Some(org_client_id.to_string()))];
    params.extend(query.params());
    get_json(config, &format!("/admin/topups{}", build_query(&params)), true).await
}

pub async fn create_admin_topup(
    config: &AppConfig,
    input: &CreateTopupInput,
) -> Result<TopupRecord, ApiError> {
    post_json(config, "/admin/topups", input, true).await
}

pub async fn get_client_dashboard(
    config: &AppConfig,
    org_client_code: &str,
    from_date: Option<&str>,
    to_date: Option<&str>,
) -> Result<ClientDashboardResponse, ApiError> {
    let query = build_query(&[
        ("orgClientCode", Some(org_client_code.to_string())),
        ("fromDate", from_date.map(str::to_string)),
        ("toDate", to_date.map(str::to_string)),
    ]);
    get_json(config, &format!("/client/dashboard{}", query), false).await
}

pub async fn get_client_campaign_reports(
    config: &AppConfig,
    org_client_code: &str,
    query: &PageQuery,
) -> Result<PaginatedResponse<CampaignReport>, ApiError> {
    let mut params = vec![("orgClientCode", Some(org_client_code.to_string()))];
    params.extend(query.params());
    get_json(
        config,
        &format!("/client/campaign-reports{}", build_query(&params)),
        false,
    )
    .await
}

pub async fn get_client_topups(
    config: &AppConfig,
    org_client_code: &str,
    query: &PageQuery,
) -> Result<PaginatedResponse<TopupRecord>, ApiError> {
    let mut params = vec![("orgClientCode", Some(org_client_code.to_string()))];
    params.extend(query.params());
    get_json(
        config,
        &format!("/client/topups{}", build_query(&params)),
        false,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_builder_drops_absent_and_empty_values() {
        let query = build_query(&[
            ("orgClientCode", Some("ACME".to_string())),
            ("page", Some("2".to_string())),
            ("fromDate", None),
            ("toDate", Some(String::new())),
        ]);
        assert_eq!(query, "?orgClientCode=ACME&page=2");
    }

    #[test]
    fn query_builder_returns_empty_when_nothing_applies() {
        assert_eq!(build_query(&[("search", None)]), "");
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let query = build_query(&[("search", Some("acme corp & co".to_string()))]);
        assert_eq!(query, "?search=acme%20corp%20%26%20co");
    }

    #[test]
    fn page_query_always_carries_one_based_pages() {
        let query = PageQuery {
            page: 1,
            page_size: 10,
            from_date: None,
            to_date: None,
        };
        let built = build_query(&query.params());
        assert_eq!(built, "?page=1&pageSize=10");
    }

    #[test]
    fn error_payload_message_and_field_errors_are_attached() {
        let payload = json!({
            "message": "Validation failed",
            "errors": [
                { "path": "code", "message": "must be unique" },
                { "message": "something else" }
            ]
        });
        let error = error_from_payload(422, Some(payload));
        match error {
            ApiError::Http {
                status,
                message,
                errors,
            } => {
                assert_eq!(status, 422);
                assert_eq!(message, "Validation failed");
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].label(), "code: must be unique");
                assert_eq!(errors[1].label(), "something else");
            }
            other => panic!("expected http error, got {:?}", other),
        }
    }

    #[test]
    fn unparsable_error_bodies_fall_back_to_a_status_message() {
        let error = error_from_payload(502, None);
        assert_eq!(error.to_string(), "Request failed with status 502");
        assert_eq!(error.status(), Some(502));
        assert!(error.field_errors().is_empty());
    }

    #[test]
    fn not_found_is_recognized_from_the_status() {
        let error = error_from_payload(404, Some(json!({ "message": "Org client not found" })));
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Org client not found");
    }
}
