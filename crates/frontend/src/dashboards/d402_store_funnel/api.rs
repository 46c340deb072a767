use crate::shared::api_utils::{get_json, reports_url};
use contracts::dashboards::d402_store_funnel::{
    store_names, SALES_BY_CHANNEL_DETAIL_PATH, SALES_BY_MONTH_FOR_STORE_PATH, STORES_LIST_PATH,
    TOP_PRODUCTS_BY_STORE_PATH,
};
use contracts::shared::DataRow;

const DETAIL_ERROR: &str = "Falha ao buscar relatórios detalhados";

pub async fn fetch_store_list() -> Result<Vec<String>, String> {
    let rows: Vec<DataRow> =
        get_json(&reports_url(STORES_LIST_PATH, &[]), "Falha ao buscar lista de lojas").await?;
    Ok(store_names(&rows))
}

pub async fn fetch_monthly_for_store(store_name: &str) -> Result<Vec<DataRow>, String> {
    let params = [("store_name".to_string(), store_name.to_string())];
    get_json(
        &reports_url(SALES_BY_MONTH_FOR_STORE_PATH, &params),
        "Falha ao buscar relatório mensal",
    )
    .await
}

fn month_params(store_name: &str, mes_ano: &str) -> [(String, String); 2] {
    [
        ("store_name".to_string(), store_name.to_string()),
        ("mes_ano".to_string(), mes_ano.to_string()),
    ]
}

/// Top products and channel split of one month, requested concurrently.
/// Fails as a whole when either request fails.
pub async fn fetch_month_details(
    store_name: &str,
    mes_ano: &str,
) -> Result<(Vec<DataRow>, Vec<DataRow>), String> {
    let params = month_params(store_name, mes_ano);
    let products_url = reports_url(TOP_PRODUCTS_BY_STORE_PATH, &params);
    let channels_url = reports_url(SALES_BY_CHANNEL_DETAIL_PATH, &params);

    let (products, channels) = futures::join!(
        get_json::<Vec<DataRow>>(&products_url, DETAIL_ERROR),
        get_json::<Vec<DataRow>>(&channels_url, DETAIL_ERROR),
    );
    Ok((products?, channels?))
}
