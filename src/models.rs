use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgClient {
    pub id: String,
    pub code: String,
    pub name: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignReport {
    pub id: String,
    pub org_client_id: String,
    pub report_date: String,
    pub account_id: String,
    pub client_spend: f64,
    pub currency: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopupRecord {
    pub id: String,
    pub org_client_id: String,
    pub topup_date: String,
    pub jenis: String,
    pub client_topup: f64,
    pub currency: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u32,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct OrgClientList {
    pub items: Vec<OrgClient>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrgClientInput {
    pub code: String,
    pub name: String,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignReportInput {
    pub org_client_id: String,
    pub report_date: String,
    pub account_id: String,
    pub client_spend: f64,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopupInput {
    pub org_client_id: String,
    pub topup_date: String,
    pub jenis: String,
    pub client_topup: f64,
}

// Dashboard aggregate. `sisa_saldo` is computed server side; the frontend
// renders it as-is and never recomputes the balance locally.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDashboardResponse {
    pub org_client: DashboardOrgClient,
    pub summary: ClientDashboardSummary,
    pub latest_campaign_reports: Vec<DashboardReportRow>,
    pub latest_topups: Vec<DashboardTopupRow>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOrgClient {
    pub id: String,
    pub code: String,
    pub name: String,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDashboardSummary {
    pub total_topup: f64,
    pub total_spend: f64,
    pub sisa_saldo: f64,
    pub currency: String,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReportRow {
    pub report_date: String,
    pub account_id: String,
    pub client_spend: f64,
    pub currency: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTopupRow {
    pub topup_date: String,
    pub jenis: String,
    pub client_topup: f64,
    pub currency: Option<String>,
}
