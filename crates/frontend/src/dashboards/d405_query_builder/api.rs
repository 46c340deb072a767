use crate::shared::api_utils::{api_url, post_json};
use contracts::dashboards::d405_query_builder::{QueryRequest, QueryResponse, QUERY_PATH};

/// Runs an ad-hoc query; the answer carries the generated SQL
pub async fn run_query(request: &QueryRequest) -> Result<QueryResponse, String> {
    post_json(&api_url(QUERY_PATH), request, "Erro na API").await
}
