use crate::shared::api_utils::{get_json, reports_url};
use contracts::dashboards::d403_store_detail::{StoreDetailData, STORE_DETAIL_PATH};

pub async fn fetch_store_detail(store_name: &str) -> Result<StoreDetailData, String> {
    let params = [("store_name".to_string(), store_name.to_string())];
    get_json(
        &reports_url(STORE_DETAIL_PATH, &params),
        "Falha ao buscar detalhes da loja",
    )
    .await
}
